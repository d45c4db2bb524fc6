//! Dependency ordering for template units.

use crate::error::ResolveError;
use crate::template::{Template, TemplateId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Expand `requested` with all transitive dependencies and order the result
/// so every unit follows its dependencies.
///
/// Units are visited depth-first in request order, dependencies in declared
/// order; each `TemplateId` appears once. The order is fully determined by
/// the input.
///
/// # Errors
///
/// Returns `ResolveError::DependencyCycle` with the units on the cycle, the
/// repeated unit at both ends.
pub fn resolve_order(requested: &[Template]) -> Result<Vec<Template>, ResolveError> {
    let mut resolver = Resolver::default();
    for template in requested {
        resolver.visit(template)?;
    }
    Ok(resolver.order)
}

#[derive(Default)]
struct Resolver {
    marks: HashMap<TemplateId, Mark>,
    path: Vec<TemplateId>,
    order: Vec<Template>,
}

impl Resolver {
    fn visit(&mut self, template: &Template) -> Result<(), ResolveError> {
        let id = template.id();
        match self.marks.get(id) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::InProgress) => {
                let start = self.path.iter().position(|p| p == id).unwrap_or(0);
                let mut cycle = self.path[start..].to_vec();
                cycle.push(id.clone());
                return Err(ResolveError::DependencyCycle { cycle });
            }
            None => {}
        }

        self.marks.insert(id.clone(), Mark::InProgress);
        self.path.push(id.clone());

        for dependency in template.dependencies() {
            self.visit(&dependency)?;
        }

        self.path.pop();
        self.marks.insert(id.clone(), Mark::Done);
        self.order.push(template.clone());
        Ok(())
    }
}
