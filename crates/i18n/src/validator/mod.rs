//! Validators and their error record.

pub mod datetime;

pub use datetime::{DateTimeOptions, DateTimeValidator};

use std::borrow::Cow;
use std::fmt;

/// Checks a value without changing it.
pub trait Validate {
    /// The type being validated (`str` for text validators).
    type Input: ?Sized;

    /// Returns `Ok(())` when `input` is valid.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// A validation failure.
///
/// `code` is stable and meant for programmatic handling and translation;
/// `message` is the default English text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code, e.g. `datetimeInvalidDateTime`.
    pub code: Cow<'static, str>,
    /// Human-readable message.
    pub message: Cow<'static, str>,
    /// Message parameters as ordered key-value pairs.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
