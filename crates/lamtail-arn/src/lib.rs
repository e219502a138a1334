//! Amazon Resource Name (ARN) parsing
//!
//! Splits an ARN of the form `arn:partition:service:region:account-id:resource`
//! into its components. Only the pieces lamtail needs are modelled: the region
//! and the resource name.

use thiserror::Error;

/// ARN parsing errors
#[derive(Error, Debug)]
pub enum ArnError {
    #[error("Not an ARN (missing 'arn:' prefix): {0}")]
    MissingPrefix(String),

    #[error("Malformed ARN (expected 6 ':'-separated parts): {0}")]
    TooFewParts(String),
}

pub type Result<T> = std::result::Result<T, ArnError>;

/// A parsed ARN.
///
/// The resource part keeps whatever separators it was written with
/// (`function:name`, `table/name`, ...); use [`Arn::resource_name`] to get
/// the bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    /// Absent for global resources (empty region component).
    pub region: Option<String>,
    /// Absent for resources without an account component.
    pub account_id: Option<String>,
    /// Everything after the account id, e.g. `function:my-handler`.
    pub resource: String,
}

impl Arn {
    /// Parse an ARN string.
    ///
    /// The resource part may itself contain `:` so the split is capped at
    /// six fields.
    pub fn parse(input: &str) -> Result<Self> {
        if !input.starts_with("arn:") {
            return Err(ArnError::MissingPrefix(input.to_string()));
        }

        let parts: Vec<&str> = input.splitn(6, ':').collect();
        if parts.len() < 6 {
            return Err(ArnError::TooFewParts(input.to_string()));
        }

        let non_empty = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };

        Ok(Self {
            partition: parts[1].to_string(),
            service: parts[2].to_string(),
            region: non_empty(parts[3]),
            account_id: non_empty(parts[4]),
            resource: parts[5].to_string(),
        })
    }

    /// The resource name with any `function:`-style type prefix removed.
    ///
    /// Handles both the `type:name` and `type/name` forms; a resource part
    /// without a separator is returned as-is.
    pub fn resource_name(&self) -> &str {
        if let Some((_, name)) = self.resource.split_once(':') {
            name
        } else if let Some((_, name)) = self.resource.split_once('/') {
            name
        } else {
            &self.resource
        }
    }
}
