//! Resolution of the function to tail

use anyhow::Context;
use lamtail_arn::Arn;
use lamtail_terraform::{Terraform, find_lambda_functions, select_function};

/// The function whose logs will be tailed. Fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Target {
    pub function_name: String,

    /// Absent means the SDK's default region chain decides.
    pub region: Option<String>,
}

/// Turn the CLI argument into a concrete function.
///
/// An `arn:`-prefixed argument is parsed directly, a bare name is taken
/// as-is with no region, and no argument at all triggers Terraform state
/// discovery.
pub async fn resolve(arg: Option<String>) -> anyhow::Result<Target> {
    match arg {
        Some(arg) if arg.starts_with("arn:") => {
            let arn = Arn::parse(&arg)?;
            Ok(Target {
                function_name: arn.resource_name().to_string(),
                region: arn.region,
            })
        }
        Some(name) => Ok(Target {
            function_name: name,
            region: None,
        }),
        None => from_terraform().await,
    }
}

async fn from_terraform() -> anyhow::Result<Target> {
    let state = Terraform
        .show_json()
        .await
        .context("failed to read Terraform state")?;

    let functions = find_lambda_functions(&state)?;
    let chosen = select_function(functions, crate::prompt::choose)?;

    let region = Arn::parse(&chosen.arn)
        .with_context(|| format!("resource {} has a malformed ARN", chosen.address))?
        .region;

    Ok(Target {
        function_name: chosen.function_name,
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_arn_argument_bypasses_discovery() {
        let target = resolve(Some(
            "arn:aws:lambda:ap-northeast-1:123456789012:function:ingest".to_string(),
        ))
        .await
        .unwrap();

        assert_eq!(target.function_name, "ingest");
        assert_eq!(target.region.as_deref(), Some("ap-northeast-1"));
    }

    #[tokio::test]
    async fn test_bare_name_has_no_region() {
        let target = resolve(Some("ingest".to_string())).await.unwrap();

        assert_eq!(target.function_name, "ingest");
        assert_eq!(target.region, None);
    }

    #[tokio::test]
    async fn test_malformed_arn_is_rejected() {
        assert!(resolve(Some("arn:aws:lambda".to_string())).await.is_err());
    }
}
