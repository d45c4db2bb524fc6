//! Go struct emitter
//!
//! Folds schema visit events into Go type declarations.

mod naming;

#[cfg(test)]
mod tests;

pub use naming::{capitalize, go_identifier, TypeNameSet};

use crate::error::{GenerateResult, NamingError, SchemaError};
use crate::schema::{walk, FieldInfo, ScalarKind, SchemaKind, SchemaNode, VisitEvent};
use naming::FieldScope;

/// Name of the shared error struct appended to response types.
pub const GRAPHQL_ERROR_TYPE: &str = "GraphQLError";

/// Declaration of the shared error struct. Emitted once per package.
pub const GRAPHQL_ERROR_STRUCT: &str = "type GraphQLError struct {
\tMessage string
\tPath    []interface{}
}
";

/// Emit a Go struct named `type_name` for an object schema.
///
/// With `with_errors` set, an `Errors []GraphQLError` field is appended.
///
/// # Errors
///
/// - `SchemaError::Shape` if `schema` is not an object or nests arrays.
/// - `NamingError::FieldCollision` if two fields of one struct capitalise to
///   the same identifier.
pub fn emit_struct(schema: &SchemaNode, type_name: &str, with_errors: bool) -> GenerateResult<String> {
    let mut builder = StructBuilder::new(type_name, with_errors);
    walk(schema, |event| builder.apply(event))?;
    Ok(builder.finish())
}

/// Emit a named Go type for any schema: structs for objects, type
/// definitions for everything else (`type Id string`, `type Ids []string`).
///
/// # Errors
///
/// Same as [`emit_struct`].
pub fn emit_named_type(schema: &SchemaNode, type_name: &str) -> GenerateResult<String> {
    let (element, is_array) = match &schema.kind {
        SchemaKind::Object { .. } => return emit_struct(schema, type_name, false),
        SchemaKind::Array { items } => (items.as_ref(), true),
        _ => (schema, false),
    };

    let base = match &element.kind {
        SchemaKind::Number => "float64".to_string(),
        SchemaKind::String { .. } => "string".to_string(),
        SchemaKind::Boolean => "bool".to_string(),
        SchemaKind::Any => "interface{}".to_string(),
        SchemaKind::CustomType {
            referenced_type_name,
        } => capitalize(referenced_type_name),
        SchemaKind::Object { .. } => {
            // arrays of inline objects: `type Items []struct { ... }`
            let declaration = emit_struct(element, type_name, false)?;
            let head = format!("type {} ", capitalize(type_name));
            return Ok(declaration.replacen(&head, &format!("{head}[]"), 1));
        }
        SchemaKind::Array { .. } => {
            return Err(SchemaError::shape(
                format!("#/definitions/{type_name}"),
                "arrays of arrays are not supported",
            )
            .into())
        }
    };

    let prefix = if is_array { "[]" } else { "" };
    Ok(format!("type {} {prefix}{base}\n", capitalize(type_name)))
}

/// Accumulates the text of one struct declaration.
///
/// Owns the output buffer and the per-scope field name tables; events are
/// applied in order and `finish` hands back the text.
#[derive(Debug)]
pub struct StructBuilder {
    type_name: String,
    with_errors: bool,
    out: String,
    scopes: Vec<FieldScope>,
}

impl StructBuilder {
    pub fn new(type_name: &str, with_errors: bool) -> Self {
        Self {
            type_name: capitalize(type_name),
            with_errors,
            out: String::new(),
            scopes: Vec::new(),
        }
    }

    /// Apply a single visit event.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::FieldCollision` when a field name clashes with an
    /// earlier sibling.
    pub fn apply(&mut self, event: VisitEvent<'_>) -> GenerateResult<()> {
        match event {
            VisitEvent::RootEnter => {
                self.out.push_str(&format!("type {} struct {{\n", self.type_name));
                self.scopes.push(FieldScope::default());
            }
            VisitEvent::RootLeave => {
                if self.with_errors {
                    self.claim("errors")?;
                    self.out.push_str(&format!(
                        "\tErrors []{GRAPHQL_ERROR_TYPE} `json:\"errors\"`\n"
                    ));
                }
                self.scopes.pop();
                self.out.push_str("}\n");
            }
            VisitEvent::Scalar { field, scalar } => {
                let ident = self.claim(field.name)?;
                let base = match scalar {
                    ScalarKind::Number => "float64",
                    ScalarKind::String { .. } => "string",
                    ScalarKind::Boolean => "bool",
                    ScalarKind::Any => "interface{}",
                };
                self.push_field(&ident, &field_type(field, base), field);
                if let ScalarKind::String {
                    enum_values: Some(values),
                } = scalar
                {
                    if !values.is_empty() {
                        // replace the trailing newline with the enum note
                        self.out.pop();
                        self.out
                            .push_str(&format!(" // one of: {}\n", values.join(", ")));
                    }
                }
            }
            VisitEvent::Reference { field, type_name } => {
                let ident = self.claim(field.name)?;
                let base = capitalize(type_name);
                self.push_field(&ident, &field_type(field, &base), field);
            }
            VisitEvent::ObjectEnter { field } => {
                let ident = self.claim(field.name)?;
                let indent = self.indent();
                self.out.push_str(&format!(
                    "{indent}{ident} {}struct {{\n",
                    type_prefix(field)
                ));
                self.scopes.push(FieldScope::default());
            }
            VisitEvent::ObjectLeave { field } => {
                self.scopes.pop();
                let indent = self.indent();
                self.out
                    .push_str(&format!("{indent}}}{}\n", json_tag(field)));
            }
        }
        Ok(())
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn push_field(&mut self, ident: &str, ty: &str, field: FieldInfo<'_>) {
        let indent = self.indent();
        self.out
            .push_str(&format!("{indent}{ident} {ty}{}\n", json_tag(field)));
    }

    fn claim(&mut self, field_name: &str) -> Result<String, NamingError> {
        let type_name = &self.type_name;
        match self.scopes.last_mut() {
            Some(scope) => scope.claim(type_name, field_name),
            None => Ok(capitalize(field_name)),
        }
    }

    fn indent(&self) -> String {
        "\t".repeat(self.scopes.len())
    }
}

/// `[]` for arrays, `*` for optional values. Arrays are never pointers
/// themselves; their elements follow the field's required flag.
fn type_prefix(field: FieldInfo<'_>) -> String {
    let array = if field.is_array { "[]" } else { "" };
    let pointer = if field.required { "" } else { "*" };
    format!("{array}{pointer}")
}

fn field_type(field: FieldInfo<'_>, base: &str) -> String {
    format!("{}{base}", type_prefix(field))
}

/// Array fields carry no tag.
fn json_tag(field: FieldInfo<'_>) -> String {
    if field.is_array {
        String::new()
    } else {
        format!(" `json:\"{},omitempty\"`", field.name)
    }
}
