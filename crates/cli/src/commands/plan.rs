//! Plan command implementation
//!
//! Prints the template units a `generate` run would execute, in order,
//! without reading the API description or writing anything.

use crate::commands::generate::load_settings;
use crate::error::CliResult;
use crate::utils::config::Overrides;
use clientgen_codegen::{golang, resolve_order, TemplateId};

pub struct Options {
    pub package: Option<String>,
    pub config: Option<String>,
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(units) => {
            println!("✓ {} template unit(s) in run order", units.len());
            for (index, unit) in units.iter().enumerate() {
                println!("  {}. {unit}", index + 1);
            }
            0
        }
        Err(e) => {
            eprintln!("✗ Planning failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<Vec<TemplateId>> {
    let overrides = Overrides {
        package: options.package.clone(),
        ..Overrides::default()
    };
    let settings = load_settings(options.config.as_deref(), &overrides)?;
    let order = resolve_order(&golang::all(&settings.client_config()))
        .map_err(clientgen_codegen::GenerateError::from)?;
    Ok(order.iter().map(|t| t.id().clone()).collect())
}
