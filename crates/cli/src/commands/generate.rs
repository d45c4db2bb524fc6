//! Generate command implementation

use crate::error::{CliError, CliResult};
use crate::ops::{load::load_api, write::write_files};
use crate::utils::config::{self, Overrides, Settings};
use clientgen_codegen::golang;
use clientgen_codegen::Runner;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct Options {
    pub api: Option<String>,
    pub output: Option<String>,
    pub package: Option<String>,
    pub language: Option<String>,
    pub formatter: Option<String>,
    pub no_format: bool,
    pub config: Option<String>,
}

impl Options {
    fn overrides(&self) -> Overrides {
        Overrides {
            api: self.api.clone(),
            output: self.output.clone(),
            package: self.package.clone(),
            language: self.language.clone(),
            formatter: self.formatter.clone(),
            no_format: self.no_format,
        }
    }
}

/// Config path from `--config`, or the default location.
pub fn determine_config_path(config: Option<&str>) -> PathBuf {
    PathBuf::from(config.unwrap_or(config::CONFIG_PATH))
}

/// Load the config file and layer `overrides` on top.
pub fn load_settings(config: Option<&str>, overrides: &Overrides) -> CliResult<Settings> {
    let config_path = determine_config_path(config);
    if config.is_some() && !config_path.exists() {
        return Err(CliError::Config(format!(
            "Config file not found: {}",
            config_path.display()
        )));
    }
    let file = config::read_config(&config_path)?;
    Settings::resolve(file, overrides)
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<()> {
    let settings = load_settings(options.config.as_deref(), &options.overrides())?;
    let api = load_api(&settings.api)?;

    let formatter_name = if settings.formatter.enabled {
        settings.formatter.program.as_str()
    } else {
        "none"
    };
    info!(
        api = %settings.api.display(),
        package = %settings.package,
        language = %settings.language,
        formatter = formatter_name,
        "generating client"
    );

    let runner = Runner::new(settings.formatter());
    let output = runner.run(&api, &golang::all(&settings.client_config()))?;

    let written = write_files(&settings.output, &output)?;

    println!(
        "✓ Generated {} file(s) in {}",
        written.len(),
        settings.output.display()
    );
    for path in &written {
        println!("  {}", display_relative(path, &settings.output));
    }
    for warning in &output.warnings {
        eprintln!("  Warning: {warning}");
    }
    Ok(())
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
