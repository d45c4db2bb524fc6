//! Config file reading and settings resolution
//!
//! Settings are layered: built-in defaults, then `.clientgen/config.yaml`,
//! then command-line flags.

use crate::error::{CliError, CliResult};
use clientgen_codegen::format::{CommandFormatter, Formatter, IdentityFormatter};
use clientgen_codegen::golang::{GoClientConfig, DEFAULT_PACKAGE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_PATH: &str = ".clientgen/config.yaml";
pub const DEFAULT_API_PATH: &str = ".clientgen/api.json";
pub const DEFAULT_OUTPUT: &str = "./client";
pub const DEFAULT_LANGUAGE: &str = "go";

/// Full config file structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the resolved API description
    pub api: Option<String>,
    /// Output directory for generated files
    pub output: Option<String>,
    /// Go package name
    pub package: Option<String>,
    pub language: Option<String>,
    pub formatter: Option<FormatterConfig>,
}

/// External pretty-printer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
    pub timeout_ms: u64,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "gofmt".to_string(),
            args: Vec::new(),
            timeout_ms: 10_000,
        }
    }
}

/// Read the config file at `path`. A missing file is not an error.
pub fn read_config(path: &Path) -> CliResult<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("Failed to read {}: {e}", path.display())))?;

    if content.trim().is_empty() {
        return Ok(Some(ConfigFile::default()));
    }

    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| CliError::Config(format!("Failed to parse {}: {e}", path.display())))
}

/// Values given on the command line. `None` keeps the config or default.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api: Option<String>,
    pub output: Option<String>,
    pub package: Option<String>,
    pub language: Option<String>,
    pub formatter: Option<String>,
    pub no_format: bool,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api: PathBuf,
    pub output: PathBuf,
    pub package: String,
    pub language: String,
    pub formatter: FormatterConfig,
}

impl Settings {
    pub fn resolve(config: Option<ConfigFile>, overrides: &Overrides) -> CliResult<Self> {
        let config = config.unwrap_or_default();

        let api = overrides
            .api
            .clone()
            .or(config.api)
            .unwrap_or_else(|| DEFAULT_API_PATH.to_string());
        let output = overrides
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let package = overrides
            .package
            .clone()
            .or(config.package)
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
        let language = overrides
            .language
            .clone()
            .or(config.language)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let mut formatter = config.formatter.unwrap_or_default();
        if let Some(program) = &overrides.formatter {
            formatter.program = program.clone();
            formatter.args.clear();
            formatter.enabled = true;
        }
        if overrides.no_format {
            formatter.enabled = false;
        }

        Ok(Self {
            api: PathBuf::from(api),
            output: PathBuf::from(output),
            package: validate_package(&package)?,
            language: normalize_language(&language)?,
            formatter,
        })
    }

    pub fn client_config(&self) -> GoClientConfig {
        GoClientConfig::new(self.package.clone())
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        if !self.formatter.enabled {
            return Box::new(IdentityFormatter);
        }
        Box::new(
            CommandFormatter::new(self.formatter.program.clone())
                .with_args(self.formatter.args.clone())
                .with_timeout(Duration::from_millis(self.formatter.timeout_ms)),
        )
    }
}

fn normalize_language(language: &str) -> CliResult<String> {
    match language.to_lowercase().as_str() {
        "go" | "golang" => Ok(DEFAULT_LANGUAGE.to_string()),
        other => Err(CliError::Config(format!(
            "Unsupported language: {other}. Supported languages: go"
        ))),
    }
}

/// Go package names: letters, digits and underscores, not starting with a digit.
fn validate_package(package: &str) -> CliResult<String> {
    let valid = package
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && package.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(package.to_string())
    } else {
        Err(CliError::Config(format!(
            "Invalid Go package name: '{package}'"
        )))
    }
}
