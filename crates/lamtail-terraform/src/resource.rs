//! Lambda function discovery in Terraform state

use crate::error::{Result, TerraformError};
use crate::search::find_objects;
use serde_json::{Map, Value};

/// Terraform resource type tag for Lambda functions.
const LAMBDA_FUNCTION_TYPE: &str = "aws_lambda_function";

/// A Lambda function resource extracted from Terraform state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaFunction {
    /// Resource address within the Terraform graph,
    /// e.g. `module.api.aws_lambda_function.handler`.
    pub address: String,

    pub function_name: String,

    pub arn: String,
}

impl LambdaFunction {
    /// Label shown when the operator has to pick between candidates.
    pub fn display_label(&self) -> String {
        format!("[{}] {}", self.address, self.function_name)
    }

    fn from_state_object(obj: &Map<String, Value>) -> Result<Self> {
        let address = obj
            .get("address")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();

        let values = obj.get("values").and_then(Value::as_object).ok_or_else(|| {
            TerraformError::MissingAttribute {
                address: address.clone(),
                field: "values".to_string(),
            }
        })?;

        let string_value = |field: &str| -> Result<String> {
            values
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| TerraformError::MissingAttribute {
                    address: address.clone(),
                    field: field.to_string(),
                })
        };

        Ok(Self {
            function_name: string_value("function_name")?,
            arn: string_value("arn")?,
            address,
        })
    }
}

fn is_lambda_function(obj: &Map<String, Value>) -> bool {
    obj.get("type").and_then(Value::as_str) == Some(LAMBDA_FUNCTION_TYPE)
}

/// Find every Lambda function resource anywhere in a `terraform show -json`
/// document, in traversal order.
pub fn find_lambda_functions(state: &Value) -> Result<Vec<LambdaFunction>> {
    find_objects(state, is_lambda_function)
        .into_iter()
        .map(LambdaFunction::from_state_object)
        .collect()
}

/// Apply the selection policy.
///
/// No candidate at all is an error, a single candidate is taken without
/// asking, and anything more is handed to `choose`, which must return the
/// index of exactly one candidate.
pub fn select_function<C>(mut functions: Vec<LambdaFunction>, choose: C) -> Result<LambdaFunction>
where
    C: FnOnce(&[LambdaFunction]) -> Result<usize>,
{
    match functions.len() {
        0 => Err(TerraformError::NoFunctions),
        1 => Ok(functions.remove(0)),
        _ => {
            let index = choose(&functions)?;
            if index >= functions.len() {
                return Err(TerraformError::SelectionAborted);
            }
            Ok(functions.remove(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_with_two_functions() -> Value {
        json!({
            "format_version": "1.0",
            "values": {
                "root_module": {
                    "resources": [
                        {
                            "address": "aws_lambda_function.api",
                            "type": "aws_lambda_function",
                            "values": {
                                "function_name": "api",
                                "arn": "arn:aws:lambda:eu-west-1:123456789012:function:api",
                            },
                        },
                        {
                            "address": "aws_s3_bucket.assets",
                            "type": "aws_s3_bucket",
                            "values": {"bucket": "assets"},
                        },
                    ],
                    "child_modules": [
                        {
                            "resources": [
                                {
                                    "address": "module.jobs.aws_lambda_function.worker",
                                    "type": "aws_lambda_function",
                                    "values": {
                                        "function_name": "worker",
                                        "arn": "arn:aws:lambda:eu-west-1:123456789012:function:worker",
                                    },
                                },
                            ],
                        },
                    ],
                },
            },
        })
    }

    #[test]
    fn test_find_lambda_functions() {
        let functions = find_lambda_functions(&state_with_two_functions()).unwrap();

        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].function_name, "api");
        assert_eq!(functions[1].function_name, "worker");
        assert_eq!(
            functions[1].address,
            "module.jobs.aws_lambda_function.worker"
        );
    }

    #[test]
    fn test_missing_function_name_is_an_error() {
        let state = json!({
            "address": "aws_lambda_function.broken",
            "type": "aws_lambda_function",
            "values": {"arn": "arn:aws:lambda:eu-west-1:123456789012:function:broken"},
        });

        let err = find_lambda_functions(&state).unwrap_err();
        assert!(matches!(
            err,
            TerraformError::MissingAttribute { ref field, .. } if field == "function_name"
        ));
    }

    #[test]
    fn test_select_zero_candidates() {
        let result = select_function(Vec::new(), |_| panic!("chooser must not run"));

        assert!(matches!(result, Err(TerraformError::NoFunctions)));
    }

    #[test]
    fn test_select_single_candidate_skips_chooser() {
        let functions = find_lambda_functions(&json!({
            "type": "aws_lambda_function",
            "address": "aws_lambda_function.only",
            "values": {
                "function_name": "only",
                "arn": "arn:aws:lambda:eu-west-1:123456789012:function:only",
            },
        }))
        .unwrap();

        let chosen = select_function(functions, |_| panic!("chooser must not run")).unwrap();
        assert_eq!(chosen.function_name, "only");
    }

    #[test]
    fn test_select_many_uses_chooser() {
        let functions = find_lambda_functions(&state_with_two_functions()).unwrap();

        let chosen = select_function(functions, |candidates| {
            assert_eq!(candidates.len(), 2);
            assert_eq!(candidates[0].display_label(), "[aws_lambda_function.api] api");
            Ok(1)
        })
        .unwrap();

        assert_eq!(chosen.function_name, "worker");
    }

    #[test]
    fn test_out_of_range_choice_is_an_error() {
        let functions = find_lambda_functions(&state_with_two_functions()).unwrap();

        let result = select_function(functions, |_| Ok(5));
        assert!(matches!(result, Err(TerraformError::SelectionAborted)));
    }
}
