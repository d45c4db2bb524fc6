//! Loading the resolved API description

use crate::error::{CliError, CliResult};
use clientgen_codegen::ResolvedApi;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON or YAML description. `.yaml`/`.yml` files are parsed as YAML,
/// everything else as JSON.
pub fn load_api(path: &Path) -> CliResult<ResolvedApi> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Message(format!(
            "Failed to read API description {}: {e}",
            path.display()
        ))
    })?;

    let api = if is_yaml(path) {
        let value: serde_json::Value = serde_yaml::from_str(&content)
            .map_err(|e| CliError::Message(format!("Failed to parse {}: {e}", path.display())))?;
        ResolvedApi::from_value(value)?
    } else {
        ResolvedApi::from_json_str(&content)?
    };

    debug!(
        path = %path.display(),
        operations = api.operations().len(),
        "loaded API description"
    );
    Ok(api)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
