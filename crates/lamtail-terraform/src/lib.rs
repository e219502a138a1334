//! Terraform state discovery for lamtail
//!
//! Locates `aws_lambda_function` resources in the output of
//! `terraform show -json`. The state document has no stable shape across
//! Terraform versions, so resources are found with a schema-free recursive
//! search rather than a fixed path.
//!
//! # Example
//!
//! ```ignore
//! use lamtail_terraform::{find_lambda_functions, select_function, Terraform};
//!
//! let state = Terraform.show_json().await?;
//! let functions = find_lambda_functions(&state)?;
//! let chosen = select_function(functions, |candidates| prompt(candidates))?;
//! ```

pub mod error;
pub mod resource;
pub mod search;
pub mod show;

pub use error::{Result, TerraformError};
pub use resource::{LambdaFunction, find_lambda_functions, select_function};
pub use search::find_objects;
pub use show::Terraform;
