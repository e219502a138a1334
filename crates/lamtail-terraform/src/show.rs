//! terraform CLI wrapper
//!
//! Wraps `terraform show -json` to read the state of the project in the
//! current working directory.

use crate::error::{Result, TerraformError};
use serde_json::Value;
use std::process::Stdio;
use tokio::process::Command;

/// terraform CLI wrapper
pub struct Terraform;

impl Terraform {
    /// Run `terraform show -json` and parse the state document.
    ///
    /// The document has no fixed shape; it is returned as raw JSON and
    /// searched with [`crate::find_objects`].
    pub async fn show_json(&self) -> Result<Value> {
        let mut cmd = Command::new("terraform");
        cmd.arg("show").arg("-json");
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: terraform show -json");

        let output = cmd.output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TerraformError::CommandFailed(stderr.to_string()));
        }

        let state: Value = serde_json::from_slice(&output.stdout)?;
        Ok(state)
    }
}
