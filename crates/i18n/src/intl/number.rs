//! Locale-aware number parsing and formatting.
//!
//! Separator and sign symbols come from `num-format`'s CLDR tables; this
//! module only decides how strictly to read them.

use std::str::FromStr;

use num_format::ToFormattedString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;

/// Zero code points of the decimal digit blocks accepted by [`NumberFormatter::parse`].
const DIGIT_ZEROS: &[char] = &[
    '0',        // ASCII
    '\u{0660}', // Arabic-Indic
    '\u{06F0}', // Extended Arabic-Indic
    '\u{0966}', // Devanagari
    '\u{09E6}', // Bengali
    '\u{0D66}', // Malayalam
    '\u{0DE6}', // Sinhala Lith
    '\u{0E50}', // Thai
    '\u{FF10}', // Fullwidth
];

/// Fraction digits kept by [`NumberFormatter::format_f64`] for decimal output.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formatting style of a number.
///
/// Deserializes from the lowercase name or from the ICU style constants
/// (`1` decimal, `2` currency, `3` percent, `4` scientific).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "OptionRepr")]
pub enum NumberStyle {
    /// Grouped decimal number (`1,234.5`).
    #[default]
    Decimal,
    /// Decimal number with a currency symbol (`$1,234.50`).
    Currency,
    /// Percentage (`12%` is `0.12`).
    Percent,
    /// Scientific notation (`1.5E3`).
    Scientific,
}

impl NumberStyle {
    /// Every style.
    pub const ALL: [Self; 4] = [Self::Decimal, Self::Currency, Self::Percent, Self::Scientific];

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Currency => "currency",
            Self::Percent => "percent",
            Self::Scientific => "scientific",
        }
    }
}

impl FromStr for NumberStyle {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("default") {
            return Ok(Self::Decimal);
        }
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| invalid_option("number style", s))
    }
}

impl TryFrom<i64> for NumberStyle {
    type Error = I18nError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Decimal),
            2 => Ok(Self::Currency),
            3 => Ok(Self::Percent),
            4 => Ok(Self::Scientific),
            other => Err(invalid_option("number style", &other.to_string())),
        }
    }
}

impl TryFrom<OptionRepr> for NumberStyle {
    type Error = I18nError;

    fn try_from(value: OptionRepr) -> Result<Self, Self::Error> {
        match value {
            OptionRepr::Code(code) => Self::try_from(code),
            OptionRepr::Name(name) => name.parse(),
        }
    }
}

/// Numeric type a parsed number is converted to.
///
/// Deserializes from the lowercase name or from the ICU type constants
/// (`0` default, `1` int32, `2` int64, `3` double).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "OptionRepr")]
pub enum NumericType {
    /// Integer when the value is integral and fits `i64`, double otherwise.
    #[default]
    Default,
    /// 32-bit integer, fraction truncated.
    Int32,
    /// 64-bit integer, fraction truncated.
    Int64,
    /// Double precision float.
    Double,
}

impl NumericType {
    /// Every numeric type.
    pub const ALL: [Self; 4] = [Self::Default, Self::Int32, Self::Int64, Self::Double];

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Double => "double",
        }
    }
}

impl FromStr for NumericType {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_option("numeric type", s))
    }
}

impl TryFrom<i64> for NumericType {
    type Error = I18nError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Int32),
            2 => Ok(Self::Int64),
            3 => Ok(Self::Double),
            other => Err(invalid_option("numeric type", &other.to_string())),
        }
    }
}

impl TryFrom<OptionRepr> for NumericType {
    type Error = I18nError;

    fn try_from(value: OptionRepr) -> Result<Self, Self::Error> {
        match value {
            OptionRepr::Code(code) => Self::try_from(code),
            OptionRepr::Name(name) => name.parse(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionRepr {
    Code(i64),
    Name(String),
}

fn invalid_option(option: &'static str, value: &str) -> I18nError {
    I18nError::InvalidOption {
        option,
        value: value.to_owned(),
    }
}

/// A number produced by [`NumberFormatter::parse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// Integral result.
    Int(i64),
    /// Floating point result.
    Float(f64),
}

impl ParsedNumber {
    /// The value as `f64`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// The value as a JSON number. `None` for non-finite floats.
    #[must_use]
    pub fn to_json(self) -> Option<Value> {
        match self {
            Self::Int(i) => Some(Value::from(i)),
            Self::Float(f) => serde_json::Number::from_f64(f).map(Value::Number),
        }
    }
}

/// Parses and formats numbers for one locale and style.
///
/// Built once and shared; parsing never mutates the formatter.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    locale: LocaleId,
    style: NumberStyle,
    data: num_format::Locale,
    decimal: String,
    group: String,
    minus: String,
}

impl NumberFormatter {
    /// Resolves number symbols for `locale`.
    pub fn new(locale: LocaleId, style: NumberStyle) -> I18nResult<Self> {
        let data = resolve_locale(&locale)?;
        tracing::debug!(
            locale = %locale,
            ?style,
            data = data.name(),
            "built number formatter"
        );
        Ok(Self {
            decimal: data.decimal().to_owned(),
            group: data.separator().to_owned(),
            minus: data.minus_sign().to_owned(),
            locale,
            style,
            data,
        })
    }

    /// The configured locale.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// The configured style.
    #[must_use]
    pub fn style(&self) -> NumberStyle {
        self.style
    }

    /// Decimal separator of the locale.
    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal
    }

    /// Grouping separator of the locale.
    #[must_use]
    pub fn grouping_separator(&self) -> &str {
        &self.group
    }

    /// Parses a formatted number.
    ///
    /// Grouping separators are accepted only between integer digits and
    /// their spacing is not checked. The whole input must be consumed.
    pub fn parse(&self, input: &str, numeric_type: NumericType) -> I18nResult<ParsedNumber> {
        let text = input.trim();
        if text.is_empty() {
            return Err(I18nError::number_parse(input, "empty input"));
        }

        let (mut negative, mut body) = self.strip_sign(text);
        let mut percent = false;
        match self.style {
            NumberStyle::Percent => {
                let (stripped, found) = strip_percent(body);
                body = stripped;
                percent = found;
            }
            NumberStyle::Currency => body = self.strip_currency(body),
            NumberStyle::Decimal | NumberStyle::Scientific => {}
        }
        if !negative {
            (negative, body) = self.strip_sign(body);
        }

        let digits = self.scan(input, body)?;
        self.convert(input, &digits, negative, percent, numeric_type)
    }

    /// Formats an integer.
    #[must_use]
    pub fn format_i64(&self, value: i64) -> String {
        match self.style {
            NumberStyle::Decimal => {
                let grouped = value.unsigned_abs().to_formatted_string(&self.data);
                self.signed(value < 0, grouped)
            }
            _ => self.format_f64(value as f64),
        }
    }

    /// Formats a float.
    #[must_use]
    pub fn format_f64(&self, value: f64) -> String {
        if !value.is_finite() {
            return if value.is_nan() {
                self.data.nan().to_owned()
            } else {
                self.signed(value < 0.0, self.data.infinity().to_owned())
            };
        }

        match self.style {
            NumberStyle::Decimal => self.signed(value < 0.0, self.grouped(value.abs(), MAX_FRACTION_DIGITS, 0)),
            NumberStyle::Currency => self.signed(value < 0.0, self.grouped(value.abs(), 2, 2)),
            NumberStyle::Percent => {
                let body = self.grouped(value.abs() * 100.0, 0, 0);
                self.signed(value < 0.0, format!("{body}%"))
            }
            NumberStyle::Scientific => {
                let body = format!("{:E}", value.abs()).replacen('.', &self.decimal, 1);
                self.signed(value < 0.0, body)
            }
        }
    }

    fn signed(&self, negative: bool, body: String) -> String {
        if negative {
            format!("{}{body}", self.minus)
        } else {
            body
        }
    }

    fn grouped(&self, value: f64, max_fraction: u32, min_fraction: u32) -> String {
        let scale = 10_u64.pow(max_fraction);
        let scaled = (value * scale as f64).round();
        if scaled >= u64::MAX as f64 {
            return format!("{value}");
        }
        let scaled = scaled as u64;
        let mut out = (scaled / scale).to_formatted_string(&self.data);

        let mut fraction = if max_fraction == 0 {
            String::new()
        } else {
            format!("{:0width$}", scaled % scale, width = max_fraction as usize)
        };
        while fraction.len() > min_fraction as usize && fraction.ends_with('0') {
            fraction.pop();
        }
        if !fraction.is_empty() {
            out.push_str(&self.decimal);
            out.push_str(&fraction);
        }
        out
    }

    fn strip_sign<'a>(&self, text: &'a str) -> (bool, &'a str) {
        for minus in [self.minus.as_str(), "-", "\u{2212}"] {
            if !minus.is_empty() {
                if let Some(rest) = text.strip_prefix(minus) {
                    return (true, rest.trim_start());
                }
            }
        }
        if let Some(rest) = text.strip_prefix('+') {
            return (false, rest.trim_start());
        }
        (false, text)
    }

    fn strip_currency<'a>(&self, text: &'a str) -> &'a str {
        let start = text
            .char_indices()
            .find(|&(i, c)| digit_value(c).is_some() || self.starts_sign_or_decimal(&text[i..]))
            .map_or(text.len(), |(i, _)| i);
        let end = text
            .char_indices()
            .rev()
            .find(|&(_, c)| digit_value(c).is_some())
            .map_or(start, |(i, c)| i + c.len_utf8());
        if end <= start {
            return "";
        }
        text[start..end].trim()
    }

    fn starts_sign_or_decimal(&self, text: &str) -> bool {
        text.starts_with('-')
            || text.starts_with('+')
            || text.starts_with('\u{2212}')
            || (!self.minus.is_empty() && text.starts_with(self.minus.as_str()))
            || text.starts_with(self.decimal.as_str())
    }

    fn group_len(&self, text: &str) -> Option<usize> {
        if !self.group.is_empty() && text.starts_with(self.group.as_str()) {
            return Some(self.group.len());
        }
        let c = text.chars().next()?;
        let group_is_space = self.group.chars().all(char::is_whitespace);
        let group_is_apostrophe = matches!(self.group.as_str(), "\u{2019}" | "'");
        if (group_is_space && c.is_whitespace()) || (group_is_apostrophe && matches!(c, '\'' | '\u{2019}')) {
            return Some(c.len_utf8());
        }
        None
    }

    fn scan(&self, input: &str, body: &str) -> I18nResult<Digits> {
        let mut digits = Digits::default();
        let mut in_fraction = false;
        let mut pos = 0;

        while pos < body.len() {
            let rest = &body[pos..];
            let Some(c) = rest.chars().next() else { break };

            if let Some(d) = digit_value(c) {
                let target = if in_fraction {
                    &mut digits.fraction
                } else {
                    &mut digits.integer
                };
                target.push(char::from(b'0' + d));
                pos += c.len_utf8();
                continue;
            }

            if !in_fraction && !digits.integer.is_empty() {
                if let Some(len) = self.group_len(rest) {
                    if rest[len..].chars().next().and_then(digit_value).is_some() {
                        pos += len;
                        continue;
                    }
                }
            }

            if !in_fraction && rest.starts_with(self.decimal.as_str()) {
                in_fraction = true;
                pos += self.decimal.len();
                continue;
            }

            if self.style == NumberStyle::Scientific
                && matches!(c, 'E' | 'e')
                && !(digits.integer.is_empty() && digits.fraction.is_empty())
            {
                let exponent = &rest[1..];
                digits.exponent = exponent
                    .replace('\u{2212}', "-")
                    .parse::<i32>()
                    .map_err(|_| I18nError::number_parse(input, format!("invalid exponent {exponent:?}")))?;
                break;
            }

            return Err(I18nError::number_parse(
                input,
                format!("unexpected character {c:?}"),
            ));
        }

        if digits.integer.is_empty() && digits.fraction.is_empty() {
            return Err(I18nError::number_parse(input, "no digits"));
        }
        Ok(digits)
    }

    fn convert(
        &self,
        input: &str,
        digits: &Digits,
        negative: bool,
        percent: bool,
        numeric_type: NumericType,
    ) -> I18nResult<ParsedNumber> {
        let plain = digits.exponent == 0 && !percent;
        let exact_integer = if plain && digits.fraction.trim_end_matches('0').is_empty() {
            digits.signed_integer(negative)
        } else {
            None
        };

        let mut value = digits.to_f64(negative);
        if percent {
            value /= 100.0;
        }
        if !value.is_finite() {
            return Err(I18nError::NumberOutOfRange {
                input: input.to_owned(),
                numeric_type: numeric_type.as_str(),
            });
        }

        let truncated = || -> Option<i64> {
            if plain {
                digits.signed_integer(negative)
            } else {
                let t = value.trunc();
                (t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
            }
        };
        let out_of_range = || I18nError::NumberOutOfRange {
            input: input.to_owned(),
            numeric_type: numeric_type.as_str(),
        };

        match numeric_type {
            NumericType::Double => Ok(ParsedNumber::Float(value)),
            NumericType::Default => Ok(match exact_integer {
                Some(i) => ParsedNumber::Int(i),
                None if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 => {
                    ParsedNumber::Int(value as i64)
                }
                None => ParsedNumber::Float(value),
            }),
            NumericType::Int64 => truncated().map(ParsedNumber::Int).ok_or_else(out_of_range),
            NumericType::Int32 => truncated()
                .and_then(|i| i32::try_from(i).ok())
                .map(|i| ParsedNumber::Int(i64::from(i)))
                .ok_or_else(out_of_range),
        }
    }
}

/// Digits collected by the scanner, normalised to ASCII.
#[derive(Debug, Default)]
struct Digits {
    integer: String,
    fraction: String,
    exponent: i32,
}

impl Digits {
    fn signed_integer(&self, negative: bool) -> Option<i64> {
        let integer = if self.integer.is_empty() { "0" } else { &self.integer };
        let sign = if negative { "-" } else { "" };
        format!("{sign}{integer}").parse().ok()
    }

    fn to_f64(&self, negative: bool) -> f64 {
        let integer = if self.integer.is_empty() { "0" } else { &self.integer };
        let fraction = if self.fraction.is_empty() { "0" } else { &self.fraction };
        let sign = if negative { "-" } else { "" };
        let text = format!("{sign}{integer}.{fraction}e{}", self.exponent);
        text.parse().unwrap_or(f64::NAN)
    }
}

fn digit_value(c: char) -> Option<u8> {
    DIGIT_ZEROS.iter().find_map(|&zero| {
        let d = u32::from(c).checked_sub(u32::from(zero))?;
        u8::try_from(d).ok().filter(|d| *d < 10)
    })
}

fn strip_percent(text: &str) -> (&str, bool) {
    const SIGNS: [char; 2] = ['%', '\u{066A}'];
    if let Some(rest) = text.strip_suffix(SIGNS) {
        return (rest.trim_end(), true);
    }
    if let Some(rest) = text.strip_prefix(SIGNS) {
        return (rest.trim_start(), true);
    }
    (text, false)
}

fn resolve_locale(locale: &LocaleId) -> I18nResult<num_format::Locale> {
    if locale.is_posix() {
        return Ok(num_format::Locale::en_US_POSIX);
    }

    let mut names = vec![locale.to_bcp47()];
    if let Some(region) = locale.region() {
        names.push(format!("{}-{region}", locale.language()));
    }
    names.push(locale.language().to_owned());

    names
        .iter()
        .find_map(|name| num_format::Locale::from_name(name).ok())
        .ok_or_else(|| I18nError::UnsupportedLocale {
            locale: locale.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn formatter(locale: &str, style: NumberStyle) -> NumberFormatter {
        NumberFormatter::new(LocaleId::parse(locale).unwrap(), style).unwrap()
    }

    #[rstest]
    #[case(serde_json::json!("percent"), serde_json::json!("int32"), NumberStyle::Percent, NumericType::Int32)]
    #[case(serde_json::json!("default"), serde_json::json!("DOUBLE"), NumberStyle::Decimal, NumericType::Double)]
    #[case(serde_json::json!(1), serde_json::json!(3), NumberStyle::Decimal, NumericType::Double)]
    #[case(serde_json::json!(4), serde_json::json!(0), NumberStyle::Scientific, NumericType::Default)]
    fn style_and_type_deserialize_from_name_or_code(
        #[case] style: serde_json::Value,
        #[case] numeric_type: serde_json::Value,
        #[case] expected_style: NumberStyle,
        #[case] expected_type: NumericType,
    ) {
        assert_eq!(serde_json::from_value::<NumberStyle>(style).unwrap(), expected_style);
        assert_eq!(serde_json::from_value::<NumericType>(numeric_type).unwrap(), expected_type);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(serde_json::from_value::<NumberStyle>(serde_json::json!(5)).is_err());
        assert!(serde_json::from_value::<NumericType>(serde_json::json!(4)).is_err());
        assert!("spellout".parse::<NumberStyle>().is_err());
        assert_eq!(serde_json::to_value(NumberStyle::Percent).unwrap(), serde_json::json!("percent"));
    }

    #[rstest]
    #[case("en_US", "1,234,567.891")]
    #[case("de_DE", "1.234.567,891")]
    #[case("ru_RU", "1 234 567,891")]
    #[case("ru_RU", "1\u{a0}234\u{a0}567,891")]
    fn parses_grouped_decimals(#[case] locale: &str, #[case] input: &str) {
        let f = formatter(locale, NumberStyle::Decimal);
        assert_eq!(
            f.parse(input, NumericType::Double).unwrap(),
            ParsedNumber::Float(1_234_567.891)
        );
    }

    #[test]
    fn default_type_keeps_integers_integral() {
        let f = formatter("en_US", NumberStyle::Decimal);
        assert_eq!(f.parse("1,234", NumericType::Default).unwrap(), ParsedNumber::Int(1234));
        assert_eq!(f.parse("-12.50", NumericType::Default).unwrap(), ParsedNumber::Float(-12.5));
        assert_eq!(f.parse("7.000", NumericType::Default).unwrap(), ParsedNumber::Int(7));
    }

    #[test]
    fn integer_types_truncate_and_check_range() {
        let f = formatter("en_US", NumberStyle::Decimal);
        assert_eq!(f.parse("12.9", NumericType::Int64).unwrap(), ParsedNumber::Int(12));
        assert_eq!(f.parse("-12.9", NumericType::Int32).unwrap(), ParsedNumber::Int(-12));
        assert!(matches!(
            f.parse("3,000,000,000", NumericType::Int32),
            Err(I18nError::NumberOutOfRange { numeric_type: "int32", .. })
        ));
        assert_eq!(
            f.parse("3,000,000,000", NumericType::Int64).unwrap(),
            ParsedNumber::Int(3_000_000_000)
        );
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12abc")]
    #[case("1,")]
    #[case(",123")]
    #[case("1.2.3")]
    #[case("--5")]
    fn rejects_malformed(#[case] input: &str) {
        let f = formatter("en_US", NumberStyle::Decimal);
        let err = f.parse(input, NumericType::Double).unwrap_err();
        assert!(err.is_input_error(), "{input:?} -> {err}");
    }

    #[test]
    fn negative_signs() {
        let f = formatter("en_US", NumberStyle::Decimal);
        assert_eq!(f.parse("-1,000", NumericType::Default).unwrap(), ParsedNumber::Int(-1000));
        assert_eq!(f.parse("\u{2212}2.5", NumericType::Double).unwrap(), ParsedNumber::Float(-2.5));
        assert_eq!(f.parse("+3", NumericType::Default).unwrap(), ParsedNumber::Int(3));
    }

    #[test]
    fn native_digits() {
        let f = formatter("en_US", NumberStyle::Decimal);
        assert_eq!(
            f.parse("\u{0661}\u{0662}\u{0663}", NumericType::Default).unwrap(),
            ParsedNumber::Int(123)
        );
        assert_eq!(
            f.parse("\u{0967}\u{0968}", NumericType::Default).unwrap(),
            ParsedNumber::Int(12)
        );
    }

    #[test]
    fn percent_style() {
        let f = formatter("en_US", NumberStyle::Percent);
        assert_eq!(f.parse("12.5%", NumericType::Double).unwrap(), ParsedNumber::Float(0.125));
        assert_eq!(f.parse("50 %", NumericType::Double).unwrap(), ParsedNumber::Float(0.5));
        assert_eq!(f.format_f64(0.25), "25%");
    }

    #[test]
    fn currency_style() {
        let f = formatter("en_US", NumberStyle::Currency);
        assert_eq!(f.parse("$1,234.50", NumericType::Double).unwrap(), ParsedNumber::Float(1234.5));
        assert_eq!(f.parse("-$5", NumericType::Default).unwrap(), ParsedNumber::Int(-5));

        let f = formatter("de_DE", NumberStyle::Currency);
        assert_eq!(f.parse("1.234,50 €", NumericType::Double).unwrap(), ParsedNumber::Float(1234.5));
        assert_eq!(f.format_f64(1234.5), "1.234,50");
    }

    #[test]
    fn scientific_style() {
        let f = formatter("en_US", NumberStyle::Scientific);
        assert_eq!(f.parse("1.5E3", NumericType::Default).unwrap(), ParsedNumber::Int(1500));
        assert_eq!(f.parse("2e-2", NumericType::Double).unwrap(), ParsedNumber::Float(0.02));
        assert!(f.parse("1.5E", NumericType::Double).is_err());
    }

    #[rstest]
    #[case("en_US", 1_234_567.891, "1,234,567.891")]
    #[case("de_DE", 1_234_567.891, "1.234.567,891")]
    #[case("en_US", -0.5, "-0.5")]
    #[case("en_US", 42.0, "42")]
    fn formats_decimals(#[case] locale: &str, #[case] value: f64, #[case] expected: &str) {
        assert_eq!(formatter(locale, NumberStyle::Decimal).format_f64(value), expected);
    }

    #[test]
    fn formats_integers_with_grouping() {
        let f = formatter("en_US", NumberStyle::Decimal);
        assert_eq!(f.format_i64(-1_234_567), "-1,234,567");
    }

    #[test]
    fn formatted_output_parses_back() {
        for locale in ["en_US", "de_DE", "ru_RU", "fr"] {
            let f = formatter(locale, NumberStyle::Decimal);
            let text = f.format_f64(98_765.432);
            assert_eq!(
                f.parse(&text, NumericType::Double).unwrap(),
                ParsedNumber::Float(98_765.432),
                "{locale}: {text:?}"
            );
        }
    }

    #[test]
    fn unknown_language_is_unsupported() {
        let err = NumberFormatter::new(LocaleId::parse("qq").unwrap(), NumberStyle::Decimal).unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale { .. }));
    }

    #[test]
    fn json_conversion() {
        assert_eq!(ParsedNumber::Int(3).to_json(), Some(Value::from(3)));
        assert_eq!(ParsedNumber::Float(f64::NAN).to_json(), None);
    }
}
