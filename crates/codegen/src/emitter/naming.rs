//! Go identifier helpers and collision tracking.

use crate::error::NamingError;
use std::collections::HashMap;

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Build an exported Go identifier from arbitrary text: split on anything
/// that is not alphanumeric and capitalize each part (`"super-admin"` -> `SuperAdmin`).
pub fn go_identifier(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Field names claimed inside one struct body.
#[derive(Debug, Default)]
pub(crate) struct FieldScope {
    claimed: HashMap<String, String>,
}

impl FieldScope {
    pub(crate) fn claim(&mut self, type_name: &str, field_name: &str) -> Result<String, NamingError> {
        let identifier = capitalize(field_name);
        if let Some(first) = self.claimed.get(&identifier) {
            return Err(NamingError::FieldCollision {
                type_name: type_name.to_string(),
                identifier,
                first: first.clone(),
                second: field_name.to_string(),
            });
        }
        self.claimed.insert(identifier.clone(), field_name.to_string());
        Ok(identifier)
    }
}

/// Type names declared by one generator into a shared file.
#[derive(Debug, Default)]
pub struct TypeNameSet {
    claimed: HashMap<String, String>,
}

impl TypeNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` and return its Go identifier.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::TypeCollision` if a different name already maps
    /// to the same identifier. Registering the exact same name twice is also
    /// a collision.
    pub fn claim(&mut self, name: &str) -> Result<String, NamingError> {
        self.claim_as(capitalize(name), name)
    }

    /// Register `name` under an identifier derived by the caller.
    ///
    /// # Errors
    ///
    /// See [`TypeNameSet::claim`].
    pub fn claim_as(&mut self, identifier: String, name: &str) -> Result<String, NamingError> {
        if let Some(first) = self.claimed.get(&identifier) {
            return Err(NamingError::TypeCollision {
                identifier,
                first: first.clone(),
                second: name.to_string(),
            });
        }
        self.claimed.insert(identifier.clone(), name.to_string());
        Ok(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.claimed.contains_key(identifier)
    }
}
