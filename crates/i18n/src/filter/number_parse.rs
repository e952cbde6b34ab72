//! Locale-aware number parsing filter.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Filter;
use crate::defaults::SystemDefaults;
use crate::error::{I18nError, I18nResult};
use crate::intl::{NumberFormatter, NumberStyle, NumericType, ParsedNumber};
use crate::locale::LocaleId;

/// Configuration of a [`NumberParse`] filter.
///
/// Deserializes from an options map such as
/// `{"locale": "de_DE", "style": "decimal", "type": "double"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberParseOptions {
    /// Locale the input is written in.
    pub locale: LocaleId,
    /// Number style.
    pub style: NumberStyle,
    /// Type of the parsed value.
    #[serde(alias = "type")]
    pub numeric_type: NumericType,
}

impl NumberParseOptions {
    /// Options for the host locale.
    #[must_use]
    pub fn from_system(defaults: &SystemDefaults) -> Self {
        Self {
            locale: defaults.locale.clone(),
            style: NumberStyle::default(),
            numeric_type: NumericType::default(),
        }
    }

    /// Sets the locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: LocaleId) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the number style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_style(mut self, style: NumberStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the numeric type.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_numeric_type(mut self, numeric_type: NumericType) -> Self {
        self.numeric_type = numeric_type;
        self
    }
}

impl Default for NumberParseOptions {
    fn default() -> Self {
        Self::from_system(&SystemDefaults::default())
    }
}

/// Turns locale-formatted numeric strings into numbers.
///
/// Anything that is not a string (null, booleans, numbers, arrays, objects)
/// is returned unchanged. The formatter is built on first use and rebuilt
/// after any setter changes its inputs.
///
/// # Examples
///
/// ```
/// use nebula_i18n::{Filter, NumberParse, NumberStyle, NumericType};
/// use serde_json::json;
///
/// let filter = NumberParse::with("de_DE".parse()?, NumberStyle::Decimal, NumericType::Double);
/// assert_eq!(filter.filter(json!("1.234,5"))?, json!(1234.5));
/// assert_eq!(filter.filter(json!(null))?, json!(null));
/// # Ok::<(), nebula_i18n::I18nError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberParse {
    options: NumberParseOptions,
    formatter: OnceLock<Arc<NumberFormatter>>,
}

impl NumberParse {
    /// Creates a filter from options.
    #[must_use]
    pub fn new(options: NumberParseOptions) -> Self {
        Self {
            options,
            formatter: OnceLock::new(),
        }
    }

    /// Creates a filter from positional arguments.
    #[must_use]
    pub fn with(locale: LocaleId, style: NumberStyle, numeric_type: NumericType) -> Self {
        Self::new(NumberParseOptions {
            locale,
            style,
            numeric_type,
        })
    }

    /// Creates a filter from an options map.
    pub fn from_options(options: Value) -> I18nResult<Self> {
        Ok(Self::new(serde_json::from_value(options)?))
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &NumberParseOptions {
        &self.options
    }

    /// The locale.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        &self.options.locale
    }

    /// Sets the locale and drops the cached formatter.
    pub fn set_locale(&mut self, locale: LocaleId) -> &mut Self {
        self.options.locale = locale;
        self.invalidate()
    }

    /// The number style.
    #[must_use]
    pub fn style(&self) -> NumberStyle {
        self.options.style
    }

    /// Sets the number style and drops the cached formatter.
    pub fn set_style(&mut self, style: NumberStyle) -> &mut Self {
        self.options.style = style;
        self.invalidate()
    }

    /// The numeric type.
    #[must_use]
    pub fn numeric_type(&self) -> NumericType {
        self.options.numeric_type
    }

    /// Sets the numeric type.
    pub fn set_numeric_type(&mut self, numeric_type: NumericType) -> &mut Self {
        self.options.numeric_type = numeric_type;
        self.invalidate()
    }

    /// Uses `formatter` instead of building one from the options.
    pub fn set_formatter(&mut self, formatter: Arc<NumberFormatter>) -> &mut Self {
        self.formatter = OnceLock::from(formatter);
        self
    }

    /// The active formatter, built from the options on first use.
    pub fn formatter(&self) -> I18nResult<Arc<NumberFormatter>> {
        if let Some(formatter) = self.formatter.get() {
            return Ok(Arc::clone(formatter));
        }
        let built = Arc::new(NumberFormatter::new(
            self.options.locale.clone(),
            self.options.style,
        )?);
        Ok(Arc::clone(self.formatter.get_or_init(|| built)))
    }

    /// Parses one string.
    pub fn filter_str(&self, input: &str) -> I18nResult<ParsedNumber> {
        let formatter = self.formatter()?;
        formatter
            .parse(input, self.options.numeric_type)
            .inspect_err(|e| tracing::trace!(input, error = %e, "number parse rejected input"))
    }

    fn invalidate(&mut self) -> &mut Self {
        self.formatter = OnceLock::new();
        self
    }
}

impl Filter for NumberParse {
    fn filter(&self, value: Value) -> I18nResult<Value> {
        match value {
            Value::String(text) => {
                let parsed = self.filter_str(&text)?;
                parsed
                    .to_json()
                    .ok_or_else(|| I18nError::number_parse(&text, "not a finite number"))
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn locale(s: &str) -> LocaleId {
        LocaleId::parse(s).unwrap()
    }

    #[test]
    fn options_deserialize_with_type_alias() {
        let options: NumberParseOptions =
            serde_json::from_value(json!({"locale": "de_DE", "type": "int32"})).unwrap();
        assert_eq!(options.locale, "de_DE");
        assert_eq!(options.style, NumberStyle::Decimal);
        assert_eq!(options.numeric_type, NumericType::Int32);
    }

    #[test]
    fn options_default_to_en_us() {
        let options: NumberParseOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, NumberParseOptions::default());
        assert_eq!(options.locale, "en_US");
    }

    #[test]
    fn missing_option_keys_take_defaults() {
        let filter = NumberParse::from_options(json!({"locale": "ru_RU"})).unwrap();
        assert_eq!(filter.locale(), &locale("ru_RU"));
        assert_eq!(filter.style(), NumberStyle::Decimal);
        assert_eq!(filter.numeric_type(), NumericType::Default);
        assert_eq!(filter.filter(json!("1 234,5")).unwrap(), json!(1234.5));

        let defaults = NumberParse::default();
        assert_eq!(defaults.options(), &NumberParseOptions::default());
        assert_eq!(
            NumberParseOptions::from_system(&SystemDefaults::default()),
            NumberParseOptions::default()
        );
    }

    #[test]
    fn unknown_style_is_an_options_error() {
        let err = NumberParse::from_options(json!({"style": "spellout"})).unwrap_err();
        assert!(matches!(err, I18nError::Options(_)));
    }

    #[test]
    fn formatter_is_cached_until_a_setter_runs() {
        let mut filter = NumberParse::with(locale("en_US"), NumberStyle::Decimal, NumericType::Default);
        let first = filter.formatter().unwrap();
        assert!(Arc::ptr_eq(&first, &filter.formatter().unwrap()));

        filter.set_locale(locale("de_DE"));
        let second = filter.formatter().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.locale(), &locale("de_DE"));

        filter.set_style(NumberStyle::Percent);
        assert_eq!(filter.formatter().unwrap().style(), NumberStyle::Percent);
    }

    #[test]
    fn numeric_type_changes_the_result() {
        let mut filter = NumberParse::with(locale("en_US"), NumberStyle::Decimal, NumericType::Double);
        assert_eq!(filter.filter(json!("1,234.75")).unwrap(), json!(1234.75));
        filter.set_numeric_type(NumericType::Int32);
        assert_eq!(filter.filter(json!("1,234.75")).unwrap(), json!(1234));
    }

    #[test]
    fn malformed_string_is_a_parse_error() {
        let filter = NumberParse::default();
        let err = filter.filter(json!("twelve")).unwrap_err();
        assert!(matches!(err, I18nError::NumberParse { .. }), "{err}");
        assert!(err.is_input_error());
    }

    #[test]
    fn unsupported_locale_surfaces_on_use() {
        let filter = NumberParse::with(locale("qq"), NumberStyle::Decimal, NumericType::Default);
        assert!(matches!(
            filter.filter(json!("1")),
            Err(I18nError::UnsupportedLocale { .. })
        ));
        assert_eq!(filter.filter(json!(true)).unwrap(), json!(true));
    }
}
