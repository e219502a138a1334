//! Terraform discovery error types

use thiserror::Error;

/// Terraform discovery errors
#[derive(Error, Debug)]
pub enum TerraformError {
    #[error("terraform command failed: {0}")]
    CommandFailed(String),

    #[error("no Lambda functions are managed by Terraform")]
    NoFunctions,

    #[error("function selection was cancelled")]
    SelectionAborted,

    #[error("resource {address} has no '{field}' attribute")]
    MissingAttribute { address: String, field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TerraformError>;
