//! Type definitions used throughout the scripts

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    constants::MAX_ADVISORY_SYMBOL_LEN,
    errors::{FieldError, ScriptError, ValidationError},
    utils::check_address,
};

/// The validated fields of a deployment record
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// The human-readable token name
    TokenName,
    /// The ticker-style token symbol
    TokenSymbol,
    /// The address of the registry contract the deployment depends on
    DependencyAddress,
}

impl Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::TokenName => write!(f, "token_name"),
            RecordField::TokenSymbol => write!(f, "token_symbol"),
            RecordField::DependencyAddress => write!(f, "dependency_address"),
        }
    }
}

/// The constructor parameters of one deployment of the `Microsponsors` contract
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentRecord {
    /// The environment this deployment targets, unique within a registry
    pub label: String,
    /// The token name passed to the constructor
    pub token_name: String,
    /// The token symbol passed to the constructor
    pub token_symbol: String,
    /// The registry contract address passed to the constructor, as authored
    pub dependency_address: String,
    /// A free-form description of the deployment event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DeploymentRecord {
    /// Create a record without a note
    pub fn new(
        label: impl Into<String>,
        token_name: impl Into<String>,
        token_symbol: impl Into<String>,
        dependency_address: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            token_name: token_name.into(),
            token_symbol: token_symbol.into(),
            dependency_address: dependency_address.into(),
            note: None,
        }
    }

    /// Check every field of the record, reporting all malformed fields at once
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.token_name.is_empty() {
            errors.push(FieldError {
                field: RecordField::TokenName,
                reason: "must not be empty".to_string(),
            });
        }

        if self.token_symbol.is_empty() {
            errors.push(FieldError {
                field: RecordField::TokenSymbol,
                reason: "must not be empty".to_string(),
            });
        }

        if let Err(reason) = check_address(&self.dependency_address) {
            errors.push(FieldError {
                field: RecordField::DependencyAddress,
                reason,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                label: self.label.clone(),
                errors,
            })
        }
    }

    /// Whether the token symbol is longer than convention allows
    pub fn has_long_symbol(&self) -> bool {
        self.token_symbol.chars().count() > MAX_ADVISORY_SYMBOL_LEN
    }

    /// Parse the dependency address
    pub fn address(&self) -> Result<Address, ScriptError> {
        check_address(&self.dependency_address)
            .and_then(|()| {
                Address::from_str(&self.dependency_address).map_err(|e| e.to_string())
            })
            .map_err(|reason| self.address_error(reason))
    }

    /// A validation error naming only the dependency address
    fn address_error(&self, reason: String) -> ScriptError {
        ScriptError::Validation(ValidationError {
            label: self.label.clone(),
            errors: vec![FieldError {
                field: RecordField::DependencyAddress,
                reason,
            }],
        })
    }

    /// Validate the record and produce the arguments for the contract constructor
    pub fn constructor_args(&self) -> Result<ConstructorArgs, ScriptError> {
        self.validate()?;

        Ok(ConstructorArgs {
            token_name: self.token_name.clone(),
            token_symbol: self.token_symbol.clone(),
            dependency_address: self.dependency_address.clone(),
            address: self.address()?,
        })
    }
}

/// The on-disk layout of a deployments table
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentsFile {
    /// The deployment records, in authoring order
    pub deployments: Vec<DeploymentRecord>,
}

impl DeploymentsFile {
    /// Parse a deployments table without validating its records
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::Parse(e.to_string()))
    }
}

/// The arguments of the `Microsponsors` constructor, in the order the
/// constructor takes them
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConstructorArgs {
    /// The token name
    pub token_name: String,
    /// The token symbol
    pub token_symbol: String,
    /// The registry contract address, exactly as authored
    pub dependency_address: String,
    /// The registry contract address, parsed
    #[serde(skip)]
    pub address: Address,
}

impl ConstructorArgs {
    /// The `(name, symbol, address)` triple handed to the deployer
    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.token_name, &self.token_symbol, &self.dependency_address)
    }
}
