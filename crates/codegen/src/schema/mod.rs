/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Schema tree model used by every generator.
 *
 * Schemas arrive as JSON Schema documents and are lowered once into `SchemaNode`
 * trees (see `lower`). After that they are read-only values.
 */

pub mod lower;
pub mod visitor;

pub use lower::{lower, lower_root};
pub use visitor::{visit, walk, FieldInfo, ScalarKind, VisitEvent};

use indexmap::IndexMap;

/// Ordered property table. Declaration order drives output field order.
pub type Properties = IndexMap<String, SchemaNode>;

/// One node of a schema tree.
///
/// `name` is the property name the node is stored under (empty for the root).
/// Array items inherit the array's `name` and `required` flag and carry
/// `is_array = true`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub name: String,
    pub required: bool,
    pub is_array: bool,
    pub kind: SchemaKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Number,
    String { enum_values: Option<Vec<String>> },
    Boolean,
    Any,
    Array { items: Box<SchemaNode> },
    Object {
        properties: Properties,
        /// Named reusable schemas. Only populated on roots.
        definitions: Properties,
    },
    CustomType { referenced_type_name: String },
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            name: String::new(),
            required: false,
            is_array: false,
            kind,
        }
    }

    pub fn number() -> Self {
        Self::new(SchemaKind::Number)
    }

    pub fn string() -> Self {
        Self::new(SchemaKind::String { enum_values: None })
    }

    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SchemaKind::String {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
        })
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn any() -> Self {
        Self::new(SchemaKind::Any)
    }

    pub fn reference(type_name: impl Into<String>) -> Self {
        Self::new(SchemaKind::CustomType {
            referenced_type_name: type_name.into(),
        })
    }

    /// Array of `items`. The items node takes over the array's name and flags
    /// whenever the array is renamed or marked required.
    pub fn array(items: SchemaNode) -> Self {
        let mut items = items;
        items.is_array = true;
        Self::new(SchemaKind::Array {
            items: Box::new(items),
        })
    }

    /// Object with properties in the given order. Each child is renamed to its key.
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        let properties = properties
            .into_iter()
            .map(|(name, node)| {
                let name = name.into();
                (name.clone(), node.named(name))
            })
            .collect();
        Self::new(SchemaKind::Object {
            properties,
            definitions: Properties::new(),
        })
    }

    /// Mark this node (and array items beneath it) as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.set_required(true);
        self
    }

    /// Attach a root-level definitions table. No-op on non-object nodes.
    #[must_use]
    pub fn with_definitions<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        if let SchemaKind::Object { definitions, .. } = &mut self.kind {
            for (name, node) in entries {
                let name = name.into();
                definitions.insert(name.clone(), node.named(name));
            }
        }
        self
    }

    #[must_use]
    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let SchemaKind::Array { items } = &mut self.kind {
            items.name = name.clone();
        }
        self.name = name;
        self
    }

    pub(crate) fn set_required(&mut self, required: bool) {
        self.required = required;
        if let SchemaKind::Array { items } = &mut self.kind {
            items.required = required;
        }
    }

    pub fn properties(&self) -> Option<&Properties> {
        match &self.kind {
            SchemaKind::Object { properties, .. } => Some(properties),
            _ => None,
        }
    }

    pub fn properties_mut(&mut self) -> Option<&mut Properties> {
        match &mut self.kind {
            SchemaKind::Object { properties, .. } => Some(properties),
            _ => None,
        }
    }

    pub fn definitions(&self) -> Option<&Properties> {
        match &self.kind {
            SchemaKind::Object { definitions, .. } => Some(definitions),
            _ => None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties().and_then(|p| p.get(name))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, SchemaKind::Object { .. })
    }

    /// Short label for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            SchemaKind::Number => "number",
            SchemaKind::String { .. } => "string",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Any => "any",
            SchemaKind::Array { .. } => "array",
            SchemaKind::Object { .. } => "object",
            SchemaKind::CustomType { .. } => "reference",
        }
    }
}

/// Empty root object, used for operations without variables.
impl Default for SchemaNode {
    fn default() -> Self {
        Self::object(Vec::<(String, SchemaNode)>::new())
    }
}
