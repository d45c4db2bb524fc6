/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Lowering from JSON Schema documents to `SchemaNode` trees.
 */

use crate::error::SchemaError;
use crate::schema::{Properties, SchemaKind, SchemaNode};
use serde_json::{Map, Value};

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Lower a root schema. The root must describe an object; an object without
/// `properties` becomes an object with no fields.
///
/// # Errors
///
/// Returns `SchemaError::Shape` if the root is not an object schema or any
/// nested schema cannot be lowered.
pub fn lower_root(value: &Value) -> Result<SchemaNode, SchemaError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SchemaError::shape("#", "root schema must be a JSON object"))?;

    let is_object = match primary_type(obj, "#")? {
        Some(ty) => ty == "object",
        None => obj.contains_key("properties"),
    };
    if !is_object {
        return Err(SchemaError::shape("#", "root schema must have type \"object\""));
    }

    let properties = lower_properties(obj, "#")?;

    let mut definitions = Properties::new();
    if let Some(defs) = obj.get("definitions").and_then(Value::as_object) {
        for (def_name, def) in defs {
            // `true`/`false` definitions carry no shape
            if !def.is_object() {
                continue;
            }
            let path = format!("#/definitions/{def_name}");
            let mut node = lower_node(def, def_name, &path)?;
            node.set_required(true);
            definitions.insert(def_name.clone(), node);
        }
    }

    Ok(SchemaNode::new(SchemaKind::Object {
        properties,
        definitions,
    }))
}

/// Lower any schema value. Nested objects without `properties` lower to `Any`.
///
/// # Errors
///
/// Returns `SchemaError::Shape` if the schema cannot be lowered.
pub fn lower(value: &Value) -> Result<SchemaNode, SchemaError> {
    lower_node(value, "", "#")
}

fn lower_node(value: &Value, name: &str, path: &str) -> Result<SchemaNode, SchemaError> {
    let obj = match value {
        Value::Object(obj) => obj,
        Value::Bool(_) => return Ok(SchemaNode::any().named(name)),
        _ => {
            return Err(SchemaError::shape(
                path,
                "schema must be a JSON object or boolean",
            ))
        }
    };

    if let Some(reference) = obj.get("$ref") {
        let reference = reference
            .as_str()
            .ok_or_else(|| SchemaError::shape(path, "$ref must be a string"))?;
        let type_name = reference.strip_prefix(DEFINITIONS_PREFIX).ok_or_else(|| {
            SchemaError::shape(
                path,
                format!("unsupported $ref \"{reference}\", expected {DEFINITIONS_PREFIX}<name>"),
            )
        })?;
        return Ok(SchemaNode::reference(type_name).named(name));
    }

    let ty = match primary_type(obj, path)? {
        Some(ty) => ty,
        None if obj.contains_key("properties") => "object",
        None if obj.contains_key("items") => "array",
        None => return Ok(SchemaNode::any().named(name)),
    };

    let node = match ty {
        "number" | "integer" => SchemaNode::number(),
        "boolean" => SchemaNode::boolean(),
        "null" | "any" => SchemaNode::any(),
        "string" => match obj.get("enum").and_then(Value::as_array) {
            Some(values) => SchemaNode::string_enum(values.iter().map(enum_label)),
            None => SchemaNode::string(),
        },
        "array" => {
            let items_path = format!("{path}/items");
            let items = match obj.get("items") {
                Some(items @ (Value::Object(_) | Value::Bool(_))) => {
                    lower_node(items, name, &items_path)?
                }
                Some(_) => {
                    return Err(SchemaError::shape(path, "tuple-style items are not supported"))
                }
                None => return Err(SchemaError::shape(path, "array schema without items")),
            };
            SchemaNode::array(items)
        }
        "object" => {
            if !obj.contains_key("properties") {
                // free-form JSON object
                return Ok(SchemaNode::any().named(name));
            }
            SchemaNode::new(SchemaKind::Object {
                properties: lower_properties(obj, path)?,
                definitions: Properties::new(),
            })
        }
        other => {
            return Err(SchemaError::shape(
                path,
                format!("unknown schema type \"{other}\""),
            ))
        }
    };

    Ok(node.named(name))
}

fn lower_properties(obj: &Map<String, Value>, path: &str) -> Result<Properties, SchemaError> {
    let required: Vec<&str> = obj
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut properties = Properties::new();
    let Some(props) = obj.get("properties") else {
        return Ok(properties);
    };
    let props = props
        .as_object()
        .ok_or_else(|| SchemaError::shape(path, "properties must be a JSON object"))?;

    for (prop_name, prop) in props {
        let prop_path = format!("{path}/properties/{prop_name}");
        let mut node = lower_node(prop, prop_name, &prop_path)?;
        node.set_required(required.contains(&prop_name.as_str()));
        properties.insert(prop_name.clone(), node);
    }
    Ok(properties)
}

/// Resolve `type`, ignoring `"null"` in type unions. Several non-null types
/// collapse to `any`.
fn primary_type<'a>(obj: &'a Map<String, Value>, path: &str) -> Result<Option<&'a str>, SchemaError> {
    match obj.get("type") {
        None => Ok(None),
        Some(Value::String(ty)) => Ok(Some(ty.as_str())),
        Some(Value::Array(types)) => {
            let non_null: Vec<&str> = types
                .iter()
                .filter_map(Value::as_str)
                .filter(|ty| *ty != "null")
                .collect();
            match non_null.as_slice() {
                [] => Ok(Some("null")),
                [single] => Ok(Some(*single)),
                _ => Ok(Some("any")),
            }
        }
        Some(_) => Err(SchemaError::shape(path, "type must be a string or an array of strings")),
    }
}

fn enum_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
