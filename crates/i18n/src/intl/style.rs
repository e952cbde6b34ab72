//! Date and time styles and the patterns they imply for a locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pattern::{Field, Pattern, PatternWriter, Token};
use super::symbols::DateSymbols;
use crate::error::{I18nError, I18nResult};

/// Pattern used when neither a date nor a time style is requested.
pub const DEFAULT_PATTERN: &str = "yyyyMMdd hh:mm a";

const FALLBACK_DATE: &str = "yyyy-MM-dd";
const FALLBACK_TIME: &str = "HH:mm:ss";
const FALLBACK_AMPM_LAYOUT: &str = "%I:%M:%S %p";

/// Languages that write the day of a long date as an ordinal (`7. Mai 2013`).
/// Other `dd.MM.yyyy` locales, such as Russian, write a bare day.
const ORDINAL_DAY_LANGUAGES: &[&str] = &[
    "bs", "cs", "da", "de", "et", "fi", "fo", "hr", "is", "lb", "nb", "nn", "no", "sk", "sl", "sr",
];

/// Verbosity of the date or the time part of a formatted value.
///
/// Deserializes from the lowercase name or from the classic ICU constants
/// (`0` full, `1` long, `2` medium, `3` short, `-1` none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "StyleRepr")]
pub enum DateStyle {
    /// Most verbose: weekday and full month name, zone name for times.
    Full,
    /// Full month name, zone abbreviation for times.
    Long,
    /// Abbreviated month name, seconds for times.
    Medium,
    /// The locale's numeric layout.
    Short,
    /// Part omitted.
    #[default]
    None,
}

impl DateStyle {
    /// Every style, most verbose first.
    pub const ALL: [Self; 5] = [Self::Full, Self::Long, Self::Medium, Self::Short, Self::None];

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateStyle {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| I18nError::InvalidOption {
                option: "date/time style",
                value: s.to_owned(),
            })
    }
}

impl TryFrom<i64> for DateStyle {
    type Error = I18nError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Full),
            1 => Ok(Self::Long),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Short),
            -1 => Ok(Self::None),
            other => Err(I18nError::InvalidOption {
                option: "date/time style",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<StyleRepr> for DateStyle {
    type Error = I18nError;

    fn try_from(value: StyleRepr) -> Result<Self, Self::Error> {
        match value {
            StyleRepr::Code(code) => Self::try_from(code),
            StyleRepr::Name(name) => name.parse(),
        }
    }
}

/// Order of the calendar fields in a locale's numeric date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    Dmy,
    Mdy,
    Ymd,
}

/// Derives the pattern a locale uses for the given date and time styles.
#[must_use]
pub fn derive_pattern(symbols: &DateSymbols, date: DateStyle, time: DateStyle) -> String {
    let date_part = date_pattern(symbols, date);
    let time_part = time_pattern(symbols, time);
    match (date_part, time_part) {
        (Some(d), Some(t)) => format!("{d} {t}"),
        (Some(d), None) => d,
        (None, Some(t)) => t,
        (None, None) => DEFAULT_PATTERN.to_owned(),
    }
}

fn date_pattern(symbols: &DateSymbols, style: DateStyle) -> Option<String> {
    if style == DateStyle::None {
        return None;
    }

    let short = strftime_to_pattern(symbols.date_layout(), symbols.time_ampm_layout())
        .filter(|p| Pattern::compile(p).is_ok_and(|p| p.has_date()))
        .unwrap_or_else(|| FALLBACK_DATE.to_owned());
    if style == DateStyle::Short {
        return Some(short);
    }

    let Ok(compiled) = Pattern::compile(&short) else {
        return Some(short);
    };
    let (order, dotted) = field_order(&compiled);
    let language = symbols.data_name().split(['_', '@']).next().unwrap_or_default();
    let ordinal_day = dotted && ORDINAL_DAY_LANGUAGES.contains(&language);

    // Layouts with word-like literals (年月日) keep them and only swap in names.
    let ideographic = compiled.tokens().iter().any(|t| match t {
        Token::Literal(text) => text.chars().any(|c| c.is_alphabetic() && !c.is_ascii()),
        Token::Field(_) => false,
    });
    if ideographic {
        let long = render(&compiled, |field| match field {
            Field::Month(_) => Some("M"),
            Field::Day(_) => Some("d"),
            Field::Year(_) => Some("y"),
            _ => None,
        });
        return Some(match style {
            DateStyle::Full => format!("{long}EEEE"),
            _ => long,
        });
    }

    let month = if style == DateStyle::Medium { "MMM" } else { "MMMM" };
    let body = match order {
        FieldOrder::Mdy => format!("{month} d, y"),
        FieldOrder::Dmy if ordinal_day => format!("d. {month} y"),
        FieldOrder::Dmy => format!("d {month} y"),
        FieldOrder::Ymd => format!("y {month} d"),
    };
    Some(match style {
        DateStyle::Full => format!("EEEE, {body}"),
        _ => body,
    })
}

fn time_pattern(symbols: &DateSymbols, style: DateStyle) -> Option<String> {
    if style == DateStyle::None {
        return None;
    }

    let Some(medium) = strftime_to_pattern(symbols.time_layout(), symbols.time_ampm_layout())
        .and_then(|p| Pattern::compile(&p).ok())
        .filter(Pattern::has_time)
    else {
        return Some(match style {
            DateStyle::Short => "HH:mm".to_owned(),
            DateStyle::Medium => FALLBACK_TIME.to_owned(),
            DateStyle::Long => format!("{FALLBACK_TIME} z"),
            _ => format!("{FALLBACK_TIME} zzzz"),
        });
    };
    let has_zone = medium
        .fields()
        .any(|f| matches!(f, Field::Zone(_) | Field::ZoneOffset));

    Some(match style {
        DateStyle::Short => without_seconds(&medium),
        DateStyle::Medium => medium.as_str().to_owned(),
        DateStyle::Long if has_zone => medium.as_str().to_owned(),
        DateStyle::Long => format!("{} z", medium.as_str()),
        _ if has_zone => render(&medium, |field| match field {
            Field::Zone(_) => Some("zzzz"),
            _ => None,
        }),
        _ => format!("{} zzzz", medium.as_str()),
    })
}

fn field_order(pattern: &Pattern) -> (FieldOrder, bool) {
    let mut seen = Vec::with_capacity(3);
    let mut dotted = false;
    let mut after_day = false;
    for token in pattern.tokens() {
        match token {
            Token::Field(Field::Year(_)) => seen.push('y'),
            Token::Field(Field::Month(_)) => seen.push('m'),
            Token::Field(Field::Day(_)) => {
                seen.push('d');
                after_day = true;
                continue;
            }
            Token::Literal(text) if after_day => dotted = text.starts_with('.'),
            _ => {}
        }
        after_day = false;
    }
    seen.dedup();
    let order = match seen.as_slice() {
        ['d', 'm', 'y', ..] => FieldOrder::Dmy,
        ['m', 'd', 'y', ..] => FieldOrder::Mdy,
        _ => FieldOrder::Ymd,
    };
    (order, dotted)
}

fn without_seconds(pattern: &Pattern) -> String {
    let tokens = pattern.tokens();
    let Some(pos) = tokens
        .iter()
        .position(|t| matches!(t, Token::Field(Field::Second(_))))
    else {
        return pattern.as_str().to_owned();
    };

    let mut drop = vec![pos];
    match (tokens.get(pos + 1), pos.checked_sub(1).and_then(|p| tokens.get(p))) {
        // `ss秒` style suffix belongs to the seconds
        (Some(Token::Literal(next)), _) if next.chars().next().is_some_and(char::is_alphabetic) => {
            drop.push(pos + 1);
        }
        (_, Some(Token::Literal(_))) => drop.push(pos - 1),
        _ => {}
    }
    if let Some(Token::Field(Field::Fraction(_))) = tokens.get(pos + 1) {
        drop.push(pos + 1);
    }

    let kept: Vec<Token> = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| !drop.contains(i))
        .map(|(_, t)| t.clone())
        .collect();
    write_tokens(&kept)
}

/// Re-renders a pattern, replacing the text of fields for which `swap` answers.
fn render<F>(pattern: &Pattern, swap: F) -> String
where
    F: Fn(Field) -> Option<&'static str>,
{
    let mut writer = PatternWriter::default();
    for token in pattern.tokens() {
        match token {
            Token::Literal(text) => writer.literal(text),
            Token::Field(field) => match swap(*field) {
                Some(text) => writer.field(text),
                None => writer.field(&field_text(*field)),
            },
        }
    }
    writer.finish()
}

fn write_tokens(tokens: &[Token]) -> String {
    let mut writer = PatternWriter::default();
    for token in tokens {
        match token {
            Token::Literal(text) => writer.literal(text),
            Token::Field(field) => writer.field(&field_text(*field)),
        }
    }
    writer.finish()
}

fn field_text(field: Field) -> String {
    let (letter, width) = match field {
        Field::Year(w) => ('y', w),
        Field::Month(w) => ('M', w),
        Field::Day(w) => ('d', w),
        Field::Weekday(long) => ('E', if long { 4 } else { 3 }),
        Field::DayPeriod => ('a', 1),
        Field::Hour12(w) => ('h', w),
        Field::Hour24(w) => ('H', w),
        Field::Minute(w) => ('m', w),
        Field::Second(w) => ('s', w),
        Field::Fraction(w) => ('S', w),
        Field::Zone(long) => ('z', if long { 4 } else { 1 }),
        Field::ZoneOffset => ('Z', 1),
    };
    letter.to_string().repeat(usize::from(width))
}

/// Converts a glibc strftime layout into pattern text.
///
/// Returns `None` for directives with no pattern equivalent.
pub(crate) fn strftime_to_pattern(layout: &str, ampm_layout: &str) -> Option<String> {
    let mut writer = PatternWriter::default();
    write_strftime(&mut writer, layout, ampm_layout, 0)?;
    let text = writer.finish();
    (!text.trim().is_empty()).then_some(text)
}

fn write_strftime(
    writer: &mut PatternWriter,
    layout: &str,
    ampm_layout: &str,
    depth: u8,
) -> Option<()> {
    let mut chars = layout.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            let mut buf = [0; 4];
            writer.literal(c.encode_utf8(&mut buf));
            continue;
        }

        let mut unpadded = false;
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => unpadded = true,
                '_' | '0' | '^' | '#' => {}
                d if d.is_ascii_digit() => {}
                'E' | 'O' => {}
                _ => break,
            }
            chars.next();
        }

        let pick = |padded: &'static str, bare: &'static str| if unpadded { bare } else { padded };
        let text = match chars.next()? {
            'Y' => pick("yyyy", "y"),
            'y' => "yy",
            'm' => pick("MM", "M"),
            'd' => pick("dd", "d"),
            'e' => "d",
            'B' => "MMMM",
            'b' | 'h' => "MMM",
            'A' => "EEEE",
            'a' => "EEE",
            'H' => pick("HH", "H"),
            'k' => "H",
            'I' => pick("hh", "h"),
            'l' => "h",
            'M' => pick("mm", "m"),
            'S' => pick("ss", "s"),
            'p' | 'P' => "a",
            'Z' => "z",
            'z' => "Z",
            'T' => "HH:mm:ss",
            'R' => "HH:mm",
            'D' => "MM/dd/yy",
            'F' => "yyyy-MM-dd",
            'r' if depth == 0 => {
                let nested = if ampm_layout.trim().is_empty() {
                    FALLBACK_AMPM_LAYOUT
                } else {
                    ampm_layout
                };
                write_strftime(writer, nested, ampm_layout, depth + 1)?;
                continue;
            }
            'n' | 't' => {
                writer.literal(" ");
                continue;
            }
            '%' => {
                writer.literal("%");
                continue;
            }
            other => {
                tracing::trace!(directive = %other, layout, "strftime directive has no pattern equivalent");
                return None;
            }
        };
        writer.field(text);
    }
    Some(())
}

/// Compiles the derived pattern; used where a pattern must exist.
pub(crate) fn derived(symbols: &DateSymbols, date: DateStyle, time: DateStyle) -> I18nResult<Pattern> {
    Pattern::compile(&derive_pattern(symbols, date, time))
}
