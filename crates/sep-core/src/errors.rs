//! Error families of the decomposition crates.
//!
//! Each variant wraps an [`ErrorInfo`]; the variant names the failing layer
//! and the code names the failure.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and key/value context carried by every [`SepError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case identifier tests and callers match on, e.g. `too-many-edges`.
    pub code: String,
    /// One-line description.
    pub message: String,
    /// Offending values: vertex ids, sizes, parameters.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What to change to make the call succeed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload without context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key=value`; a repeated key keeps the last value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Every fallible operation in the workspace returns this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SepError {
    /// Offsets or neighbor ids violate the compressed graph invariants.
    #[error("invalid graph encoding: {0}")]
    InvalidGraphEncoding(ErrorInfo),
    /// The degree matching generator cannot reach the requested distribution.
    #[error("infeasible degree target: {0}")]
    InfeasibleDegreeTarget(ErrorInfo),
    /// The separator oracle refused or failed to split a fragment.
    #[error("oracle failure: {0}")]
    OracleFailure(ErrorInfo),
    /// Invalid generator parameters or stalled rejection sampling.
    #[error("generator error: {0}")]
    Generator(ErrorInfo),
    /// Invalid decomposition configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)?;
        let pairs: Vec<String> = self
            .context
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        if !pairs.is_empty() {
            write!(f, " ({})", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl SepError {
    /// Payload of any variant.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SepError::InvalidGraphEncoding(info)
            | SepError::InfeasibleDegreeTarget(info)
            | SepError::OracleFailure(info)
            | SepError::Generator(info)
            | SepError::Config(info)
            | SepError::Serde(info) => info,
        }
    }

    /// Shorthand for `self.info().code`.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Shorthand for an [`SepError::InvalidGraphEncoding`] without context.
    pub fn encoding(code: &str, message: impl Into<String>) -> Self {
        SepError::InvalidGraphEncoding(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`SepError::Generator`] without context.
    pub fn generator(code: &str, message: impl Into<String>) -> Self {
        SepError::Generator(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`SepError::OracleFailure`] without context.
    pub fn oracle(code: &str, message: impl Into<String>) -> Self {
        SepError::OracleFailure(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`SepError::Config`] without context.
    pub fn config(code: &str, message: impl Into<String>) -> Self {
        SepError::Config(ErrorInfo::new(code, message))
    }
}
