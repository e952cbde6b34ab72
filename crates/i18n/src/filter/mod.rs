//! Value filters.
//!
//! A filter converts a value into its canonical form. Values it does not
//! apply to pass through untouched.

mod number_parse;

pub use number_parse::{NumberParse, NumberParseOptions};

use serde_json::Value;

use crate::error::I18nResult;

/// Converts a value, passing through the values it does not handle.
pub trait Filter {
    /// Filters one value.
    fn filter(&self, value: Value) -> I18nResult<Value>;
}
