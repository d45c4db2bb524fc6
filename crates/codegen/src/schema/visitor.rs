/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Depth-first schema traversal.
 *
 * The traversal emits `VisitEvent`s instead of calling back into a handler
 * object, so consumers match on the event enum and get exhaustiveness checks.
 */

use crate::error::SchemaError;
use crate::schema::{SchemaKind, SchemaNode};

/// Field position a leaf or nested object is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo<'a> {
    pub name: &'a str,
    pub required: bool,
    pub is_array: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind<'a> {
    Number,
    String { enum_values: Option<&'a [String]> },
    Boolean,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitEvent<'a> {
    RootEnter,
    RootLeave,
    Scalar {
        field: FieldInfo<'a>,
        scalar: ScalarKind<'a>,
    },
    Reference {
        field: FieldInfo<'a>,
        type_name: &'a str,
    },
    ObjectEnter {
        field: FieldInfo<'a>,
    },
    ObjectLeave {
        field: FieldInfo<'a>,
    },
}

/// Walk `root` and feed every event to `sink`, stopping at the first error.
///
/// Properties are visited in declaration order. Arrays are unwrapped exactly
/// once: the items node is reported under the array's name and required flag
/// with `is_array` set.
///
/// # Errors
///
/// Returns a `SchemaError::Shape` (converted into `E`) if the root is not an
/// object or an array directly contains another array. Errors from `sink`
/// are passed through unchanged.
pub fn walk<'a, E, F>(root: &'a SchemaNode, mut sink: F) -> Result<(), E>
where
    E: From<SchemaError>,
    F: FnMut(VisitEvent<'a>) -> Result<(), E>,
{
    let SchemaKind::Object { properties, .. } = &root.kind else {
        return Err(SchemaError::shape(
            "#",
            format!("root schema must be an object, found {}", root.kind_name()),
        )
        .into());
    };

    sink(VisitEvent::RootEnter)?;
    for (name, node) in properties {
        walk_property(name, node, "#", &mut sink)?;
    }
    sink(VisitEvent::RootLeave)
}

/// Collect the full event stream of `root`.
///
/// # Errors
///
/// See [`walk`].
pub fn visit(root: &SchemaNode) -> Result<Vec<VisitEvent<'_>>, SchemaError> {
    let mut events = Vec::new();
    walk(root, |event| {
        events.push(event);
        Ok::<(), SchemaError>(())
    })?;
    Ok(events)
}

fn walk_property<'a, E, F>(
    name: &'a str,
    node: &'a SchemaNode,
    parent_path: &str,
    sink: &mut F,
) -> Result<(), E>
where
    E: From<SchemaError>,
    F: FnMut(VisitEvent<'a>) -> Result<(), E>,
{
    let mut field = FieldInfo {
        name,
        required: node.required,
        is_array: false,
    };

    let target = match &node.kind {
        SchemaKind::Array { items } => {
            if matches!(items.kind, SchemaKind::Array { .. }) {
                return Err(SchemaError::shape(
                    format!("{parent_path}/properties/{name}"),
                    "arrays of arrays are not supported",
                )
                .into());
            }
            field.is_array = true;
            items.as_ref()
        }
        _ => node,
    };

    match &target.kind {
        SchemaKind::Number => sink(VisitEvent::Scalar {
            field,
            scalar: ScalarKind::Number,
        }),
        SchemaKind::String { enum_values } => sink(VisitEvent::Scalar {
            field,
            scalar: ScalarKind::String {
                enum_values: enum_values.as_deref(),
            },
        }),
        SchemaKind::Boolean => sink(VisitEvent::Scalar {
            field,
            scalar: ScalarKind::Boolean,
        }),
        SchemaKind::Any => sink(VisitEvent::Scalar {
            field,
            scalar: ScalarKind::Any,
        }),
        SchemaKind::CustomType {
            referenced_type_name,
        } => sink(VisitEvent::Reference {
            field,
            type_name: referenced_type_name,
        }),
        SchemaKind::Object { properties, .. } => {
            sink(VisitEvent::ObjectEnter { field })?;
            let path = format!("{parent_path}/properties/{name}");
            for (child_name, child) in properties {
                walk_property(child_name, child, &path, sink)?;
            }
            sink(VisitEvent::ObjectLeave { field })
        }
        SchemaKind::Array { .. } => unreachable!("nested arrays rejected above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, required: bool, is_array: bool) -> FieldInfo<'_> {
        FieldInfo {
            name,
            required,
            is_array,
        }
    }

    #[test]
    fn test_visit_flat_object() {
        let schema = SchemaNode::object([
            ("id", SchemaNode::string().required()),
            ("score", SchemaNode::number()),
        ]);

        let events = visit(&schema).unwrap();
        assert_eq!(
            events,
            vec![
                VisitEvent::RootEnter,
                VisitEvent::Scalar {
                    field: field("id", true, false),
                    scalar: ScalarKind::String { enum_values: None },
                },
                VisitEvent::Scalar {
                    field: field("score", false, false),
                    scalar: ScalarKind::Number,
                },
                VisitEvent::RootLeave,
            ]
        );
    }

    #[test]
    fn test_visit_unwraps_array_once() {
        let schema = SchemaNode::object([(
            "tags",
            SchemaNode::array(SchemaNode::string()).required(),
        )]);

        let events = visit(&schema).unwrap();
        assert_eq!(
            events[1],
            VisitEvent::Scalar {
                field: field("tags", true, true),
                scalar: ScalarKind::String { enum_values: None },
            }
        );
    }

    #[test]
    fn test_visit_nested_object_enter_leave() {
        let schema = SchemaNode::object([(
            "address",
            SchemaNode::object([("city", SchemaNode::string())]),
        )]);

        let events = visit(&schema).unwrap();
        assert_eq!(
            events,
            vec![
                VisitEvent::RootEnter,
                VisitEvent::ObjectEnter {
                    field: field("address", false, false)
                },
                VisitEvent::Scalar {
                    field: field("city", false, false),
                    scalar: ScalarKind::String { enum_values: None },
                },
                VisitEvent::ObjectLeave {
                    field: field("address", false, false)
                },
                VisitEvent::RootLeave,
            ]
        );
    }

    #[test]
    fn test_visit_array_of_objects() {
        let schema = SchemaNode::object([(
            "items",
            SchemaNode::array(SchemaNode::object([("sku", SchemaNode::string())])),
        )]);

        let events = visit(&schema).unwrap();
        assert_eq!(
            events[1],
            VisitEvent::ObjectEnter {
                field: field("items", false, true)
            }
        );
        assert_eq!(
            events[3],
            VisitEvent::ObjectLeave {
                field: field("items", false, true)
            }
        );
    }

    #[test]
    fn test_visit_reference_and_enum() {
        let schema = SchemaNode::object([
            ("owner", SchemaNode::reference("User")),
            ("status", SchemaNode::string_enum(["A", "B"])),
        ]);

        let events = visit(&schema).unwrap();
        assert_eq!(
            events[1],
            VisitEvent::Reference {
                field: field("owner", false, false),
                type_name: "User",
            }
        );
        match events[2] {
            VisitEvent::Scalar {
                scalar: ScalarKind::String { enum_values },
                ..
            } => assert_eq!(enum_values.unwrap(), ["A".to_string(), "B".to_string()]),
            other => panic!("Expected string scalar, got {other:?}"),
        }
    }

    #[test]
    fn test_visit_rejects_non_object_root() {
        let err = visit(&SchemaNode::string()).unwrap_err();
        assert!(err.to_string().contains("root schema must be an object"));
    }

    #[test]
    fn test_visit_rejects_nested_arrays() {
        let schema = SchemaNode::object([(
            "matrix",
            SchemaNode::array(SchemaNode::array(SchemaNode::number())),
        )]);
        let err = visit(&schema).unwrap_err();
        assert_eq!(
            err,
            SchemaError::shape("#/properties/matrix", "arrays of arrays are not supported")
        );
    }

    #[test]
    fn test_visit_is_deterministic() {
        let schema = SchemaNode::object([
            ("b", SchemaNode::boolean()),
            ("a", SchemaNode::object([("z", SchemaNode::any())])),
        ]);
        assert_eq!(visit(&schema).unwrap(), visit(&schema).unwrap());
    }

    #[test]
    fn test_walk_stops_on_sink_error() {
        let schema = SchemaNode::object([("a", SchemaNode::number()), ("b", SchemaNode::number())]);
        let mut seen = 0;
        let result: Result<(), SchemaError> = walk(&schema, |event| {
            seen += 1;
            match event {
                VisitEvent::Scalar { .. } => Err(SchemaError::shape("#", "stop")),
                _ => Ok(()),
            }
        });
        assert!(result.is_err());
        assert_eq!(seen, 2);
    }
}
