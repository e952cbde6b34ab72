//! # nebula-i18n
//!
//! Locale-aware value converters for Nebula's filter and validation pipeline.
//!
//! - [`NumberParse`] turns locale-formatted numeric strings (`1.234,5` in
//!   `de_DE`) into numbers and passes every other value through.
//! - [`DateTimeValidator`] accepts a string only when it is exactly what the
//!   locale would print for the configured date/time styles, or for an
//!   explicit pattern, in a given timezone.
//!
//! Locale knowledge lives in [`intl`]; the adapters never read process-wide
//! state. Use [`SystemDefaults::detect`] to pick up the host locale and
//! timezone once and pass them in.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_i18n::prelude::*;
//! use serde_json::json;
//!
//! let numbers = NumberParse::from_options(json!({"locale": "ru_RU"}))?;
//! assert_eq!(numbers.filter(json!("1 234 567,891"))?, json!(1234567.891));
//!
//! let mut dates = DateTimeValidator::from_options(json!({"locale": "en", "pattern": "hh:mm"}))?;
//! assert!(dates.is_valid("02:00"));
//! # Ok::<(), nebula_i18n::I18nError>(())
//! ```

pub mod defaults;
pub mod error;
pub mod filter;
pub mod intl;
pub mod locale;
pub mod prelude;
pub mod validator;

pub use defaults::SystemDefaults;
pub use error::{I18nError, I18nResult};
pub use filter::{Filter, NumberParse, NumberParseOptions};
pub use intl::{DateFormatter, DateStyle, NumberFormatter, NumberStyle, NumericType, ParsedNumber};
pub use locale::LocaleId;
pub use validator::{DateTimeOptions, DateTimeValidator, Validate, ValidationError};
