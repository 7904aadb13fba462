//! Implementations of the deployment script commands

use serde::Serialize;
use tracing::{error, info};

use crate::{
    cli::{ShowArgs, ValidateArgs},
    constants::DEPLOYMENTS_JSON,
    errors::ScriptError,
    registry::{validate_records, Registry},
    types::{ConstructorArgs, DeploymentRecord, DeploymentsFile},
    utils::print_json,
};

/// The output of the `show` command
#[derive(Serialize)]
struct ShowOutput<'a> {
    /// The selected environment
    label: &'a str,
    /// The constructor arguments, in constructor order
    #[serde(flatten)]
    args: ConstructorArgs,
    /// The deployment note, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

/// Print each configured environment label on its own line
pub fn list(registry: &Registry) -> Result<(), ScriptError> {
    for label in registry.list_environments() {
        println!("{}", label);
    }

    Ok(())
}

/// Print the constructor arguments of the selected environment as JSON
pub fn show(args: ShowArgs, registry: &Registry) -> Result<(), ScriptError> {
    let record = registry.get_record(&args.env)?;
    let constructor_args = record.constructor_args()?;

    info!(
        "selected environment `{}` with registry {:#x}",
        record.label, constructor_args.address
    );

    print_json(&ShowOutput {
        label: &record.label,
        args: constructor_args,
        note: record.note.as_deref(),
    })
}

/// Validate the selected record, or every record, of the embedded deployments table
pub fn validate(args: ValidateArgs) -> Result<(), ScriptError> {
    let checked = validate_table(DEPLOYMENTS_JSON, args.env.as_deref())?;
    info!("{} deployment record(s) valid", checked);
    Ok(())
}

/// Validate the raw records of a deployments table, logging each result.
///
/// Every invalid record is reported, not only the first. Returns the number of
/// records checked.
pub fn validate_table(json: &str, env: Option<&str>) -> Result<usize, ScriptError> {
    let file = DeploymentsFile::from_json(json)?;
    let records: Vec<&DeploymentRecord> = file
        .deployments
        .iter()
        .filter(|r| env.map_or(true, |label| r.label == label))
        .collect();

    if records.is_empty() {
        if let Some(label) = env {
            return Err(ScriptError::NotFound(label.to_string()));
        }
    }

    for record in &records {
        match record.validate() {
            Ok(()) => info!("`{}` is valid", record.label),
            Err(e) => error!("{}", e),
        }
    }
    validate_records(records.iter().copied())?;

    // Label uniqueness only holds across the whole table
    if env.is_none() {
        Registry::new(file.deployments.clone())?;
    }

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use crate::{constants::DEPLOYMENTS_JSON, errors::ScriptError, types::RecordField};

    use super::validate_table;

    /// A table with a valid record between two invalid ones
    const TWO_INVALID: &str = r#"{
        "deployments": [
            {
                "label": "a",
                "token_name": "",
                "token_symbol": "MSPT",
                "dependency_address": "0xcac14f367a032c14563a5ade63e33f00fe0f4c89"
            },
            {
                "label": "ok",
                "token_name": "Microsponsors Time Slots",
                "token_symbol": "MSPT",
                "dependency_address": "0xcac14f367a032c14563a5ade63e33f00fe0f4c89"
            },
            {
                "label": "b",
                "token_name": "Microsponsors Time Slots",
                "token_symbol": "",
                "dependency_address": "0x12"
            }
        ]
    }"#;

    #[test]
    fn test_validate_embedded_table() {
        assert_eq!(validate_table(DEPLOYMENTS_JSON, None).unwrap(), 7);
        assert_eq!(validate_table(DEPLOYMENTS_JSON, Some("latest")).unwrap(), 1);
    }

    #[test]
    fn test_validate_reports_every_invalid_record() {
        match validate_table(TWO_INVALID, None) {
            Err(ScriptError::InvalidDeployments(errors)) => {
                let labels: Vec<&str> = errors.iter().map(|e| e.label.as_str()).collect();
                assert_eq!(labels, vec!["a", "b"]);
                assert_eq!(errors[0].fields(), vec![RecordField::TokenName]);
                assert_eq!(
                    errors[1].fields(),
                    vec![RecordField::TokenSymbol, RecordField::DependencyAddress]
                );
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_single_environment() {
        assert_eq!(validate_table(TWO_INVALID, Some("ok")).unwrap(), 1);

        match validate_table(TWO_INVALID, Some("b")) {
            Err(ScriptError::InvalidDeployments(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].label, "b");
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_unknown_environment() {
        assert!(matches!(
            validate_table(DEPLOYMENTS_JSON, Some("mainnet")),
            Err(ScriptError::NotFound(l)) if l == "mainnet"
        ));
    }

    #[test]
    fn test_validate_duplicate_environment() {
        let json = r#"{
            "deployments": [
                {
                    "label": "kovan-v2",
                    "token_name": "Microsponsors Time Slots",
                    "token_symbol": "MSPT",
                    "dependency_address": "0xcac14f367a032c14563a5ade63e33f00fe0f4c89"
                },
                {
                    "label": "kovan-v2",
                    "token_name": "Microsponsors Test Token",
                    "token_symbol": "MSTEST",
                    "dependency_address": "0xcac14f367a032c14563a5ade63e33f00fe0f4c89"
                }
            ]
        }"#;

        assert!(matches!(
            validate_table(json, None),
            Err(ScriptError::DuplicateEnvironment(l)) if l == "kovan-v2"
        ));
    }
}
