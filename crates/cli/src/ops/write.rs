//! Writing generated files to disk

use crate::error::CliResult;
use clientgen_codegen::GenerationOutput;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write every file of `output` under `output_dir`, header first, creating
/// directories as needed. Returns the written paths in output order.
pub fn write_files(output_dir: &Path, output: &GenerationOutput) -> CliResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(output.files.len());
    for file in output.files.values() {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let rendered = file.render();
        fs::write(&path, &rendered)?;
        debug!(path = %path.display(), bytes = rendered.len(), "wrote generated file");
        written.push(path);
    }
    Ok(written)
}
