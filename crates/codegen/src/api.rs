/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Resolved API description: the immutable input of every generation run.
 */

use crate::error::ApiError;
use crate::schema::{lower_root, SchemaNode};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

/// A named operation with its input and response schemas.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub name: String,
    pub operation_type: OperationType,
    /// Always object-kind at the root.
    pub variables_schema: SchemaNode,
    pub response_schema: SchemaNode,
    pub internal: bool,
    pub live_query_enabled: bool,
    pub requires_authentication: bool,
}

impl Operation {
    pub fn new(name: impl Into<String>, operation_type: OperationType) -> Self {
        Self {
            name: name.into(),
            operation_type,
            variables_schema: SchemaNode::default(),
            response_schema: SchemaNode::default(),
            internal: false,
            live_query_enabled: false,
            requires_authentication: false,
        }
    }

    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, OperationType::Query)
    }

    pub fn mutation(name: impl Into<String>) -> Self {
        Self::new(name, OperationType::Mutation)
    }

    pub fn subscription(name: impl Into<String>) -> Self {
        Self::new(name, OperationType::Subscription)
    }

    #[must_use]
    pub fn with_variables(mut self, schema: SchemaNode) -> Self {
        self.variables_schema = schema;
        self
    }

    #[must_use]
    pub fn with_response(mut self, schema: SchemaNode) -> Self {
        self.response_schema = schema;
        self
    }

    #[must_use]
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    #[must_use]
    pub fn live(mut self) -> Self {
        self.live_query_enabled = true;
        self
    }

    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.requires_authentication = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticationConfig {
    /// Role names in declaration order, without duplicates.
    pub roles: IndexSet<String>,
    /// Identifiers of cookie-based authentication providers.
    pub cookie_based_providers: Vec<String>,
}

/// Operations plus authentication metadata. Never mutated by generators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedApi {
    operations: Vec<Operation>,
    authentication: AuthenticationConfig,
}

impl ResolvedApi {
    /// Build a description, rejecting duplicate operation names.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::DuplicateOperation` if two operations share a name.
    pub fn new(
        operations: Vec<Operation>,
        authentication: AuthenticationConfig,
    ) -> Result<Self, ApiError> {
        let mut seen = HashSet::new();
        for op in &operations {
            if !seen.insert(op.name.as_str()) {
                return Err(ApiError::DuplicateOperation(op.name.clone()));
            }
        }
        Ok(Self {
            operations,
            authentication,
        })
    }

    /// Parse the JSON form produced by the API resolver.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the JSON is malformed, a schema cannot be
    /// lowered, or operation names repeat.
    pub fn from_json_str(content: &str) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ApiError::InvalidDescription(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build from an already parsed document (JSON or YAML converted to JSON).
    ///
    /// # Errors
    ///
    /// See [`ResolvedApi::from_json_str`].
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let raw: RawApi = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidDescription(e.to_string()))?;

        let operations = raw
            .operations
            .into_iter()
            .map(RawOperation::lower)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(operations, raw.authentication)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    pub fn authentication(&self) -> &AuthenticationConfig {
        &self.authentication
    }

    pub fn has_cookie_auth_enabled(&self) -> bool {
        !self.authentication.cookie_based_providers.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApi {
    operations: Vec<RawOperation>,
    #[serde(default)]
    authentication: AuthenticationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    name: String,
    operation_type: OperationType,
    #[serde(default = "empty_object_schema")]
    variables_schema: Value,
    #[serde(default = "empty_object_schema")]
    response_schema: Value,
    #[serde(default)]
    internal: bool,
    #[serde(default)]
    live_query_enabled: bool,
    #[serde(default)]
    requires_authentication: bool,
}

fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

impl RawOperation {
    fn lower(self) -> Result<Operation, ApiError> {
        let invalid = |source| ApiError::InvalidSchema {
            operation: self.name.clone(),
            source,
        };
        let variables_schema = lower_root(&self.variables_schema).map_err(invalid)?;
        let response_schema = lower_root(&self.response_schema).map_err(invalid)?;

        Ok(Operation {
            name: self.name,
            operation_type: self.operation_type,
            variables_schema,
            response_schema,
            internal: self.internal,
            live_query_enabled: self.live_query_enabled,
            requires_authentication: self.requires_authentication,
        })
    }
}
