/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

//! The `client.go` unit.

use super::{go_file, input_models, response_models, GoClientConfig, CLIENT_FILE};
use crate::api::ResolvedApi;
use crate::emitter::{go_identifier, TypeNameSet};
use crate::error::{GenerateResult, NamingError};
use crate::filters::{self, Filter};
use crate::render::{OperationView, Renderer};
use crate::template::{Template, TemplateId};
use serde::Serialize;

pub const CLIENT: &str = "golang.client";

const CLIENT_TEMPLATE: &str = "client.go";

/// Methods the template always declares on `Client`.
const BUILTIN_METHODS: &[&str] = &["SetHeader"];

/// Methods declared when cookie auth is enabled.
const AUTH_METHODS: &[&str] = &["LoginURL", "Logout"];

/// A named constant in the generated client: roles and auth providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleView {
    /// Value as declared in the API description.
    pub name: String,
    /// Go identifier suffix.
    pub ident: String,
}

/// Everything the client template reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientProjection {
    pub package_name: String,
    pub queries: Vec<OperationView>,
    pub mutations: Vec<OperationView>,
    pub subscriptions: Vec<OperationView>,
    pub live_queries: Vec<OperationView>,
    pub has_queries: bool,
    pub has_mutations: bool,
    pub has_subscriptions: bool,
    pub has_live_queries: bool,
    pub has_auth_providers: bool,
    pub auth_providers: Vec<RoleView>,
    pub roles: Vec<RoleView>,
}

impl ClientProjection {
    /// Project `api` for the client template. Internal operations are left
    /// out.
    ///
    /// # Errors
    ///
    /// Returns `NamingError::TypeCollision` if two roles or two providers map
    /// to the same Go identifier, and `NamingError::MethodCollision` if two
    /// client methods would share a name.
    pub fn from_api(api: &ResolvedApi, config: &GoClientConfig) -> GenerateResult<Self> {
        let public = Filter::new(filters::is_not_internal);
        let views = |filter: Filter| -> Vec<OperationView> {
            public
                .clone()
                .and(filter)
                .select(api)
                .into_iter()
                .map(OperationView::from)
                .collect()
        };

        let queries = views(Filter::new(filters::is_query));
        let mutations = views(Filter::new(filters::is_mutation));
        let subscriptions = views(Filter::new(filters::is_subscription));
        let live_queries = views(Filter::new(filters::is_live_query));

        let has_auth_providers = api.has_cookie_auth_enabled();
        let mut methods = MethodNames::new(has_auth_providers)?;
        for op in queries.iter().chain(&mutations).chain(&subscriptions) {
            methods.claim(op.ident.clone(), &op.name)?;
        }
        for op in &live_queries {
            methods.claim(format!("{}Live", op.ident), &format!("{} (live)", op.name))?;
        }

        let auth = api.authentication();
        let roles = constants(auth.roles.iter())?;
        let auth_providers = constants(auth.cookie_based_providers.iter())?;

        Ok(Self {
            package_name: config.package_name.clone(),
            has_queries: !queries.is_empty(),
            has_mutations: !mutations.is_empty(),
            has_subscriptions: !subscriptions.is_empty(),
            has_live_queries: !live_queries.is_empty(),
            has_auth_providers,
            queries,
            mutations,
            subscriptions,
            live_queries,
            auth_providers,
            roles,
        })
    }
}

fn constants<'a>(names: impl Iterator<Item = &'a String>) -> GenerateResult<Vec<RoleView>> {
    let mut claimed = TypeNameSet::new();
    names
        .map(|name| -> GenerateResult<RoleView> {
            let ident = claimed.claim_as(go_identifier(name), name)?;
            Ok(RoleView {
                name: name.clone(),
                ident,
            })
        })
        .collect()
}

/// Method identifiers declared on the generated `Client`.
struct MethodNames(TypeNameSet);

impl MethodNames {
    fn new(with_auth: bool) -> Result<Self, NamingError> {
        let mut names = Self(TypeNameSet::new());
        let auth: &[&str] = if with_auth { AUTH_METHODS } else { &[] };
        for builtin in BUILTIN_METHODS.iter().chain(auth) {
            names.claim(builtin.to_string(), builtin)?;
        }
        Ok(names)
    }

    fn claim(&mut self, identifier: String, source: &str) -> Result<String, NamingError> {
        self.0
            .claim_as(identifier, source)
            .map_err(|e| match e {
                NamingError::TypeCollision {
                    identifier,
                    first,
                    second,
                } => NamingError::MethodCollision {
                    identifier,
                    first,
                    second,
                },
                other => other,
            })
    }
}

/// `client.go`: the HTTP client with one method per public operation.
pub fn client(config: &GoClientConfig) -> Template {
    let cfg = config.clone();
    let deps_cfg = config.clone();
    Template::new(
        TemplateId::new(CLIENT, config.package_name.clone()),
        move |api, ctx| {
            let renderer = Renderer::new()
                .with_template(CLIENT_TEMPLATE, include_str!("templates/client.go.tera"))?;
            let projection = ClientProjection::from_api(api, &cfg)?;
            let content = renderer.render(CLIENT_TEMPLATE, &projection)?;
            Ok(go_file(ctx, &cfg, CLIENT_FILE, &content))
        },
    )
    .with_dependencies(move || vec![input_models(&deps_cfg), response_models(&deps_cfg)])
}
