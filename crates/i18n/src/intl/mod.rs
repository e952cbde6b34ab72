//! Locale formatting service.
//!
//! Thin bindings over the ecosystem crates that carry locale data:
//! `num-format` for number symbols, `pure-rust-locales` for calendar names
//! and layouts, `chrono`/`chrono-tz` for instants and timezones. The
//! adapters in [`crate::filter`] and [`crate::validator`] only talk to the
//! formatters defined here.

mod date;
mod number;
mod pattern;
mod style;
mod symbols;

pub use date::DateFormatter;
pub use number::{NumberFormatter, NumberStyle, NumericType, ParsedNumber};
pub use pattern::{Field, Pattern, Token};
pub use style::{DEFAULT_PATTERN, DateStyle, derive_pattern};
pub use symbols::DateSymbols;
