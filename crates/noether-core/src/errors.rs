//! Structured error types shared across Noether crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AlgebraError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (variable names, ring names, sizes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the algebra engine.
///
/// Nothing is recovered locally: every variant is surfaced to the caller and
/// aborts the computation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AlgebraError {
    /// A monomial was built from a negative exponent.
    #[error("invalid exponent: {0}")]
    InvalidExponent(ErrorInfo),
    /// A polynomial references a variable the ring does not declare.
    #[error("variable out of scope: {0}")]
    VariableOutOfScope(ErrorInfo),
    /// An ideal was registered against a ring it does not belong to.
    #[error("foreign ideal: {0}")]
    ForeignIdeal(ErrorInfo),
    /// Reduction guard tripped, unsupported structure or broken invariant.
    #[error("computation error: {0}")]
    Computation(ErrorInfo),
    /// Polynomial or fixture text could not be parsed.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl AlgebraError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AlgebraError::InvalidExponent(info)
            | AlgebraError::VariableOutOfScope(info)
            | AlgebraError::ForeignIdeal(info)
            | AlgebraError::Computation(info)
            | AlgebraError::Parse(info)
            | AlgebraError::Serde(info) => info,
        }
    }

    /// Shorthand for a [`AlgebraError::Computation`] with the given code.
    pub fn computation(code: &str, message: impl Into<String>) -> Self {
        AlgebraError::Computation(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`AlgebraError::Parse`] with the given code.
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        AlgebraError::Parse(ErrorInfo::new(code, message))
    }
}
