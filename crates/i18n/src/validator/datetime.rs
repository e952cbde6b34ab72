//! Locale-aware date/time validator.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use chrono::DateTime;
use chrono_tz::Tz;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Validate, ValidationError};
use crate::defaults::SystemDefaults;
use crate::error::{I18nError, I18nResult};
use crate::intl::{DateFormatter, DateStyle};
use crate::locale::LocaleId;

/// The input is not a string.
pub const INVALID: &str = "datetimeInvalid";
/// The input does not match the expected format.
pub const INVALID_DATETIME: &str = "datetimeInvalidDateTime";
/// The locale or pattern cannot be used.
pub const INVALID_CONFIGURATION: &str = "datetimeInvalidConfiguration";

/// Configuration of a [`DateTimeValidator`].
///
/// Deserializes from an options map with the keys `locale`, `timezone`,
/// `dateType`, `timeType` and `pattern`; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeOptions {
    /// Locale of the expected input.
    pub locale: LocaleId,
    /// Timezone the input is interpreted in.
    pub timezone: Tz,
    /// Date style, `None` to omit the date.
    pub date_type: DateStyle,
    /// Time style, `None` to omit the time.
    pub time_type: DateStyle,
    /// Explicit pattern; empty or absent means "derive from the styles".
    pub pattern: Option<String>,
}

impl DateTimeOptions {
    /// Options for the host locale and timezone.
    #[must_use]
    pub fn from_system(defaults: &SystemDefaults) -> Self {
        Self {
            locale: defaults.locale.clone(),
            timezone: defaults.timezone,
            date_type: DateStyle::None,
            time_type: DateStyle::None,
            pattern: None,
        }
    }

    /// Sets the locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: LocaleId) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the timezone.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the date style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_date_type(mut self, date_type: DateStyle) -> Self {
        self.date_type = date_type;
        self
    }

    /// Sets the time style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_time_type(mut self, time_type: DateStyle) -> Self {
        self.time_type = time_type;
        self
    }

    /// Sets an explicit pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        Self::from_system(&SystemDefaults::default())
    }
}

/// Checks that a string is a date/time in the layout a locale uses for the
/// configured styles, or in an explicit pattern.
///
/// The input is parsed and formatted again; it is valid only when the
/// result reads the same, ignoring case and the kind of whitespace. A
/// calendar-invalid value such as `May 38` never rolls over.
///
/// # Examples
///
/// ```
/// use nebula_i18n::{DateStyle, DateTimeOptions, DateTimeValidator};
///
/// let options = DateTimeOptions::default()
///     .with_locale("en".parse()?)
///     .with_date_type(DateStyle::Long);
/// let mut validator = DateTimeValidator::new(options);
/// assert!(validator.is_valid("May 7, 2013"));
/// assert!(!validator.is_valid("May 38, 2013"));
/// assert!(validator.messages().contains_key("datetimeInvalidDateTime"));
/// # Ok::<(), nebula_i18n::I18nError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateTimeValidator {
    options: DateTimeOptions,
    formatter: OnceLock<Arc<DateFormatter>>,
    messages: IndexMap<Cow<'static, str>, String>,
}

impl DateTimeValidator {
    /// Creates a validator from options.
    #[must_use]
    pub fn new(options: DateTimeOptions) -> Self {
        Self {
            options,
            formatter: OnceLock::new(),
            messages: IndexMap::new(),
        }
    }

    /// Creates a validator from an options map.
    pub fn from_options(options: Value) -> I18nResult<Self> {
        Ok(Self::new(serde_json::from_value(options)?))
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &DateTimeOptions {
        &self.options
    }

    /// Replaces every option at once.
    pub fn set_options(&mut self, options: DateTimeOptions) -> &mut Self {
        self.options = options;
        self.invalidate()
    }

    /// The locale.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        &self.options.locale
    }

    /// Sets the locale.
    pub fn set_locale(&mut self, locale: LocaleId) -> &mut Self {
        self.options.locale = locale;
        self.invalidate()
    }

    /// The timezone.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.options.timezone
    }

    /// Sets the timezone.
    pub fn set_timezone(&mut self, timezone: Tz) -> &mut Self {
        self.options.timezone = timezone;
        self.invalidate()
    }

    /// The date style.
    #[must_use]
    pub fn date_type(&self) -> DateStyle {
        self.options.date_type
    }

    /// Sets the date style.
    pub fn set_date_type(&mut self, date_type: DateStyle) -> &mut Self {
        self.options.date_type = date_type;
        self.invalidate()
    }

    /// The time style.
    #[must_use]
    pub fn time_type(&self) -> DateStyle {
        self.options.time_type
    }

    /// Sets the time style.
    pub fn set_time_type(&mut self, time_type: DateStyle) -> &mut Self {
        self.options.time_type = time_type;
        self.invalidate()
    }

    /// The pattern in effect.
    ///
    /// `None` until a pattern is set explicitly or derived by a validation.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.options
            .pattern
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.formatter.get().map(|f| f.pattern().as_str()))
    }

    /// Sets an explicit pattern; `None` or `""` derives it from the styles.
    pub fn set_pattern(&mut self, pattern: Option<&str>) -> &mut Self {
        self.options.pattern = pattern.map(str::to_owned);
        self.invalidate()
    }

    /// The formatter for the current options, built on first use.
    pub fn formatter(&self) -> I18nResult<Arc<DateFormatter>> {
        if let Some(formatter) = self.formatter.get() {
            return Ok(Arc::clone(formatter));
        }
        let built = Arc::new(DateFormatter::new(
            self.options.locale.clone(),
            self.options.date_type,
            self.options.time_type,
            self.options.timezone,
            self.options.pattern.as_deref(),
        )?);
        Ok(Arc::clone(self.formatter.get_or_init(|| built)))
    }

    /// Messages of the last failed validation, keyed by error code.
    #[must_use]
    pub fn messages(&self) -> &IndexMap<Cow<'static, str>, String> {
        &self.messages
    }

    /// Validates `input` and records the failure message, if any.
    pub fn is_valid(&mut self, input: &str) -> bool {
        let result = self.validate(input);
        self.record(result)
    }

    /// Validates an arbitrary value; anything but a string is invalid.
    pub fn is_valid_value(&mut self, value: &Value) -> bool {
        match value {
            Value::String(text) => self.is_valid(text),
            other => {
                let kind = match other {
                    Value::Null => "null",
                    Value::Bool(_) => "boolean",
                    Value::Number(_) => "number",
                    Value::Array(_) => "array",
                    Value::Object(_) => "object",
                    Value::String(_) => "string",
                };
                let error = ValidationError::new(INVALID, "Invalid type given. String expected")
                    .with_param("type", kind);
                self.record(Err(error))
            }
        }
    }

    /// Parses `input`, applying the same checks as [`is_valid`](Self::is_valid).
    pub fn parse(&self, input: &str) -> Result<DateTime<Tz>, ValidationError> {
        let formatter = self.formatter().map_err(|e| configuration_error(&e))?;
        let pattern = formatter.pattern().as_str();

        let parsed = formatter.parse(input).map_err(|e| {
            if e.is_input_error() {
                tracing::trace!(input, pattern, error = %e, "date rejected");
                invalid_datetime(input, pattern)
            } else {
                configuration_error(&e)
            }
        })?;

        let rendered = formatter.format(&parsed);
        if normalize(&rendered) != normalize(input) {
            tracing::trace!(input, pattern, %rendered, "date does not survive formatting");
            return Err(invalid_datetime(input, pattern));
        }
        Ok(parsed)
    }

    fn record(&mut self, result: Result<(), ValidationError>) -> bool {
        self.messages.clear();
        match result {
            Ok(()) => true,
            Err(error) => {
                self.messages.insert(error.code, error.message.into_owned());
                false
            }
        }
    }

    fn invalidate(&mut self) -> &mut Self {
        self.formatter = OnceLock::new();
        self
    }
}

impl Validate for DateTimeValidator {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.parse(input).map(|_| ())
    }
}

fn invalid_datetime(input: &str, pattern: &str) -> ValidationError {
    ValidationError::new(
        INVALID_DATETIME,
        "The input does not appear to be a valid datetime",
    )
    .with_param("value", input.to_owned())
    .with_param("pattern", pattern.to_owned())
}

fn configuration_error(error: &I18nError) -> ValidationError {
    tracing::debug!(%error, "date validator is misconfigured");
    ValidationError::new(INVALID_CONFIGURATION, format!("Invalid configuration: {error}"))
}

/// Lowercases and maps every whitespace character to a plain space.
fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn english() -> DateTimeValidator {
        DateTimeValidator::new(
            DateTimeOptions::default()
                .with_locale(LocaleId::parse("en").unwrap())
                .with_timezone(Tz::Europe__Amsterdam),
        )
    }

    #[test]
    fn options_deserialize_from_map() {
        let validator = DateTimeValidator::from_options(json!({
            "locale": "de",
            "timezone": "Europe/Berlin",
            "dateType": "long",
            "timeType": 3,
            "pattern": null,
        }))
        .unwrap();
        assert_eq!(validator.locale(), &LocaleId::parse("de").unwrap());
        assert_eq!(validator.timezone(), Tz::Europe__Berlin);
        assert_eq!(validator.date_type(), DateStyle::Long);
        assert_eq!(validator.time_type(), DateStyle::Short);
        assert_eq!(validator.pattern(), None);
    }

    #[test]
    fn unknown_timezone_is_an_options_error() {
        let err = DateTimeValidator::from_options(json!({"timezone": "Mars/Olympus"})).unwrap_err();
        assert!(matches!(err, I18nError::Options(_)));
    }

    #[test]
    fn mismatch_records_datetime_message() {
        let mut validator = english();
        validator.set_date_type(DateStyle::Long);
        assert!(!validator.is_valid("May 38, 2013"));
        assert_eq!(
            validator.messages().get(INVALID_DATETIME).map(String::as_str),
            Some("The input does not appear to be a valid datetime")
        );
        assert!(validator.is_valid("May 7, 2013"));
        assert!(validator.messages().is_empty());
    }

    #[test]
    fn reformatting_must_match() {
        let mut validator = english();
        validator.set_pattern(Some("MM/dd/yyyy"));
        assert!(validator.is_valid("05/07/2013"));
        assert!(!validator.is_valid("5/7/2013"));
    }

    #[test]
    fn whitespace_and_case_are_normalised() {
        let mut validator = english();
        validator.set_pattern(Some("MMMM d, y"));
        assert!(validator.is_valid("MAY 7,\u{a0}2013"));
    }

    #[test]
    fn non_string_values_are_invalid() {
        let mut validator = english();
        for value in [json!(null), json!(20_200_101), json!(["20200101 12:34 am"]), json!({})] {
            assert!(!validator.is_valid_value(&value), "{value}");
            assert!(validator.messages().contains_key(INVALID));
        }
        assert!(validator.is_valid_value(&json!("20200101 12:34 am")));
    }

    #[test]
    fn bad_pattern_is_a_configuration_error() {
        let mut validator = english();
        validator.set_pattern(Some("QQQ"));
        assert!(!validator.is_valid("anything"));
        assert!(validator.messages().contains_key(INVALID_CONFIGURATION));

        let mut validator = english();
        validator.set_locale(LocaleId::parse("qq").unwrap());
        let err = validator.validate("20200101 12:34 am").unwrap_err();
        assert_eq!(err.code, INVALID_CONFIGURATION);
    }

    #[test]
    fn setters_drop_the_derived_pattern() {
        let mut validator = english();
        assert!(validator.is_valid("20200101 12:34 am"));
        assert_eq!(validator.pattern(), Some("yyyyMMdd hh:mm a"));

        validator.set_time_type(DateStyle::Short);
        assert_eq!(validator.pattern(), None);
        assert!(validator.is_valid("03:15 PM"));
        assert_eq!(validator.pattern(), Some("hh:mm a"));
    }

    #[test]
    fn set_options_reconfigures_in_place() {
        let mut validator = english();
        assert!(validator.is_valid("20200101 12:34 am"));

        validator.set_options(
            DateTimeOptions::default()
                .with_locale(LocaleId::parse("de").unwrap())
                .with_timezone(Tz::Europe__Berlin)
                .with_date_type(DateStyle::Short),
        );
        assert_eq!(validator.locale().as_str(), "de");
        assert_eq!(validator.timezone(), Tz::Europe__Berlin);
        assert_eq!(validator.pattern(), None);
        assert!(validator.is_valid("07.05.2013"));
        assert!(!validator.is_valid("20200101 12:34 am"));
    }

    #[test]
    fn parse_returns_the_instant() {
        let validator = english();
        let dt = validator.parse("20200101 12:34 pm").unwrap();
        assert_eq!(dt.to_rfc3339(), "2020-01-01T12:34:00+01:00");
    }
}
