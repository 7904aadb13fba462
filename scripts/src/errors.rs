//! Definitions of errors that can occur during the execution of the deployment scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use itertools::Itertools;

use crate::types::RecordField;

/// Errors that can occur during the execution of the deployment scripts
#[derive(Debug)]
pub enum ScriptError {
    /// No deployment record exists for the requested environment
    NotFound(String),
    /// A deployment record has one or more malformed fields
    Validation(ValidationError),
    /// One or more records of a deployments table are malformed
    InvalidDeployments(Vec<ValidationError>),
    /// Two deployment records share an environment label
    DuplicateEnvironment(String),
    /// Error parsing the deployments table
    Parse(String),
    /// Error serializing script output
    Serde(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::NotFound(label) => {
                write!(f, "no deployment configured for environment `{}`", label)
            }
            ScriptError::Validation(e) => write!(f, "{}", e),
            ScriptError::InvalidDeployments(errors) => write!(
                f,
                "{} invalid deployment(s):\n{}",
                errors.len(),
                errors.iter().join("\n")
            ),
            ScriptError::DuplicateEnvironment(label) => {
                write!(f, "environment `{}` is configured more than once", label)
            }
            ScriptError::Parse(s) => write!(f, "error parsing deployments: {}", s),
            ScriptError::Serde(s) => write!(f, "error serializing output: {}", s),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScriptError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ScriptError {
    fn from(e: ValidationError) -> Self {
        ScriptError::Validation(e)
    }
}

/// A single malformed field of a deployment record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field
    pub field: RecordField,
    /// Why the field was rejected
    pub reason: String,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every malformed field of a single deployment record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// The environment label of the rejected record
    pub label: String,
    /// The rejected fields, in record field order
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// The fields named by this error, in record field order
    pub fn fields(&self) -> Vec<RecordField> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid deployment `{}`: {}",
            self.label,
            self.errors.iter().join("; ")
        )
    }
}

impl Error for ValidationError {}
