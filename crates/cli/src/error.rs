//! CLI error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generation error: {0}")]
    Generate(#[from] clientgen_codegen::GenerateError),

    #[error("Invalid API description: {0}")]
    Api(#[from] clientgen_codegen::ApiError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Message(String),
}

pub type CliResult<T> = Result<T, CliError>;
