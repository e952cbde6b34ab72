//! I18n error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type I18nResult<T> = Result<T, I18nError>;

/// Errors raised by locale resolution, formatting and parsing.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The locale identifier is syntactically invalid.
    #[error("invalid locale identifier: {0:?}")]
    InvalidLocale(String),

    /// The locale is well-formed but no locale data is available for it.
    #[error("no locale data for {locale}")]
    UnsupportedLocale {
        /// The requested locale.
        locale: String,
    },

    /// The timezone is not a known IANA identifier.
    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    /// A date/time pattern could not be compiled.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An option value is not one of the accepted values.
    #[error("invalid {option}: {value:?}")]
    InvalidOption {
        /// Option name.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A string could not be parsed as a number.
    #[error("cannot parse {input:?} as a number: {reason}")]
    NumberParse {
        /// The rejected input.
        input: String,
        /// Why parsing stopped.
        reason: String,
    },

    /// A parsed number does not fit the requested numeric type.
    #[error("{input:?} is out of range for {numeric_type}")]
    NumberOutOfRange {
        /// The rejected input.
        input: String,
        /// Name of the requested numeric type.
        numeric_type: &'static str,
    },

    /// A string does not match a date/time pattern.
    #[error("cannot parse {input:?} with pattern {pattern:?}: {reason}")]
    DateParse {
        /// The rejected input.
        input: String,
        /// The pattern that was used.
        pattern: String,
        /// Why parsing stopped.
        reason: String,
    },

    /// An options map could not be deserialized.
    #[error("options: {0}")]
    Options(#[from] serde_json::Error),
}

impl I18nError {
    /// Create a number parse error.
    pub fn number_parse(input: &str, reason: impl Into<String>) -> Self {
        Self::NumberParse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    /// Create a pattern compilation error.
    pub fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: reason.into(),
        }
    }

    /// Create a date parse error.
    pub fn date_parse(input: &str, pattern: &str, reason: impl Into<String>) -> Self {
        Self::DateParse {
            input: input.to_owned(),
            pattern: pattern.to_owned(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error describes bad input rather than bad configuration.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NumberParse { .. } | Self::NumberOutOfRange { .. } | Self::DateParse { .. }
        )
    }
}
