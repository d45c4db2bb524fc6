//! Operation predicates
//!
//! Pure functions of an `Operation`, plus `Filter` for combining them.

use crate::api::{Operation, OperationType, ResolvedApi};
use std::fmt;
use std::sync::Arc;

/// The operation's variables schema declares at least one property.
pub fn has_input(op: &Operation) -> bool {
    op.variables_schema
        .properties()
        .is_some_and(|props| !props.is_empty())
}

pub fn is_query(op: &Operation) -> bool {
    op.operation_type == OperationType::Query
}

pub fn is_mutation(op: &Operation) -> bool {
    op.operation_type == OperationType::Mutation
}

pub fn is_subscription(op: &Operation) -> bool {
    op.operation_type == OperationType::Subscription
}

pub fn is_internal(op: &Operation) -> bool {
    op.internal
}

pub fn is_not_internal(op: &Operation) -> bool {
    !op.internal
}

/// A query with live updates enabled.
pub fn is_live_query(op: &Operation) -> bool {
    is_query(op) && op.live_query_enabled
}

pub fn requires_authentication(op: &Operation) -> bool {
    op.requires_authentication
}

type Predicate = dyn Fn(&Operation) -> bool + Send + Sync;

/// Composable operation filter.
///
/// ```
/// use clientgen_codegen::filters::{self, Filter};
///
/// let public_queries = Filter::new(filters::is_query).and(Filter::new(filters::is_not_internal));
/// # let _ = public_queries;
/// ```
#[derive(Clone)]
pub struct Filter(Arc<Predicate>);

impl Filter {
    pub fn new(predicate: impl Fn(&Operation) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Matches every operation.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    #[must_use]
    pub fn and(self, other: Filter) -> Self {
        Self::new(move |op| self.matches(op) && other.matches(op))
    }

    #[must_use]
    pub fn or(self, other: Filter) -> Self {
        Self::new(move |op| self.matches(op) || other.matches(op))
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(move |op| !self.matches(op))
    }

    pub fn matches(&self, op: &Operation) -> bool {
        (self.0)(op)
    }

    /// Matching operations of `api`, in declaration order.
    pub fn select<'a>(&self, api: &'a ResolvedApi) -> Vec<&'a Operation> {
        api.operations()
            .iter()
            .filter(|op| self.matches(op))
            .collect()
    }
}

impl std::ops::Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        self.negate()
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter")
    }
}
