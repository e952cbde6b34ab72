//! Common imports.
//!
//! ```
//! use nebula_i18n::prelude::*;
//! ```

pub use crate::defaults::SystemDefaults;
pub use crate::error::{I18nError, I18nResult};
pub use crate::filter::{Filter, NumberParse, NumberParseOptions};
pub use crate::intl::{DateStyle, NumberStyle, NumericType, ParsedNumber};
pub use crate::locale::LocaleId;
pub use crate::validator::{DateTimeOptions, DateTimeValidator, Validate, ValidationError};
