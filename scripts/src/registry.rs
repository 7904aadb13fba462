//! The registry of `Microsponsors` deployment parameters, keyed by environment label.
//!
//! A registry only ever holds validated records with unique labels, and is
//! never modified after construction.

use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::{
    constants::{DEPLOYMENTS_JSON, MAX_ADVISORY_SYMBOL_LEN},
    errors::{ScriptError, ValidationError},
    types::{ConstructorArgs, DeploymentRecord, DeploymentsFile},
};

/// The registry built from the embedded deployments table
static EMBEDDED: OnceCell<Registry> = OnceCell::new();

/// An immutable table of deployment records
#[derive(Debug)]
pub struct Registry {
    /// The records, in authoring order
    records: Vec<DeploymentRecord>,
    /// Maps each label to its position in `records`
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from records in authoring order.
    ///
    /// Rejects duplicate labels, and reports every record that fails validation.
    pub fn new(records: Vec<DeploymentRecord>) -> Result<Self, ScriptError> {
        if let Some(label) = records.iter().map(|r| r.label.as_str()).duplicates().next() {
            return Err(ScriptError::DuplicateEnvironment(label.to_string()));
        }

        validate_records(&records)?;

        for record in &records {
            if record.has_long_symbol() {
                warn!(
                    "token symbol `{}` of `{}` is longer than {} characters",
                    record.token_symbol, record.label, MAX_ADVISORY_SYMBOL_LEN
                );
            }
        }

        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.label.clone(), i))
            .collect();

        debug!("loaded {} deployment records", records.len());
        Ok(Self { records, index })
    }

    /// Parse a deployments table
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Self::new(DeploymentsFile::from_json(json)?.deployments)
    }

    /// The process-wide registry of historical deployments, built on first access
    pub fn embedded() -> Result<&'static Registry, ScriptError> {
        EMBEDDED.get_or_try_init(|| Registry::from_json(DEPLOYMENTS_JSON))
    }

    /// Look up the record for an environment
    pub fn get_record(&self, label: &str) -> Result<&DeploymentRecord, ScriptError> {
        self.index
            .get(label)
            .map(|&i| &self.records[i])
            .ok_or_else(|| ScriptError::NotFound(label.to_string()))
    }

    /// The constructor arguments for an environment
    pub fn constructor_args(&self, label: &str) -> Result<ConstructorArgs, ScriptError> {
        self.get_record(label)?.constructor_args()
    }

    /// All configured environment labels, in authoring order
    pub fn list_environments(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    /// All records, in authoring order
    pub fn records(&self) -> impl Iterator<Item = &DeploymentRecord> {
        self.records.iter()
    }

    /// The number of configured environments
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no environments are configured
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Validate every record, failing with all of the rejected records at once
pub fn validate_records<'a>(
    records: impl IntoIterator<Item = &'a DeploymentRecord>,
) -> Result<(), ScriptError> {
    let errors: Vec<ValidationError> = records
        .into_iter()
        .filter_map(|r| r.validate().err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::InvalidDeployments(errors))
    }
}
