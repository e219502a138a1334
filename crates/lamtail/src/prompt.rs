//! Interactive function selection

use colored::Colorize;
use lamtail_terraform::{LambdaFunction, Result, TerraformError};
use std::io::Write;

/// Ask the operator to pick one function from `candidates`.
///
/// Returns the index of the chosen candidate. A non-numeric or
/// out-of-range answer cancels the selection.
pub fn choose(candidates: &[LambdaFunction]) -> Result<usize> {
    println!(
        "{}",
        "Multiple Lambda functions are managed by Terraform:".bold()
    );
    for (index, function) in candidates.iter().enumerate() {
        println!("  {}: {}", index + 1, function.display_label().cyan());
    }

    print!("Function to tail [1-{}]: ", candidates.len());
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    match input.trim().parse::<usize>() {
        Ok(answer) if (1..=candidates.len()).contains(&answer) => Ok(answer - 1),
        _ => Err(TerraformError::SelectionAborted),
    }
}
