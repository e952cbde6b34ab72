//! Date/time patterns.
//!
//! Patterns use the ICU/LDML syntax: runs of the same ASCII letter form a
//! field (`yyyy`, `MMM`, `hh`), text between single quotes is literal and
//! `''` is a quote. Any other character is literal.
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `y` `yy` `yyyy` | year; `yy` is two-digit |
//! | `M` `MM` `MMM` `MMMM` (`L`) | month number, abbreviated or full name |
//! | `d` `dd` | day of month |
//! | `E`..`EEE` `EEEE` | abbreviated or full weekday |
//! | `a` | AM/PM marker |
//! | `h` `hh` / `H` `HH` | hour 1-12 / 0-23 |
//! | `m` `mm`, `s` `ss` | minute, second |
//! | `S`.. | fraction of second |
//! | `z`..`zzz` / `zzzz` | zone abbreviation / IANA name |
//! | `Z` | zone offset `+hhmm` |

use std::fmt;
use std::str::FromStr;

use crate::error::{I18nError, I18nResult};

/// One field of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Year; width 2 renders the last two digits.
    Year(u8),
    /// Month; widths 1-2 numeric, 3 abbreviated, 4+ full name.
    Month(u8),
    /// Day of month.
    Day(u8),
    /// Weekday name; `true` for the full name.
    Weekday(bool),
    /// AM/PM marker.
    DayPeriod,
    /// Hour 1-12.
    Hour12(u8),
    /// Hour 0-23.
    Hour24(u8),
    /// Minute.
    Minute(u8),
    /// Second.
    Second(u8),
    /// Fraction of second with this many digits.
    Fraction(u8),
    /// Zone; `true` for the IANA name, `false` for the abbreviation.
    Zone(bool),
    /// Zone offset.
    ZoneOffset,
}

impl Field {
    /// Returns true when the field renders as digits.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        match self {
            Self::Month(w) => w <= 2,
            Self::Year(_)
            | Self::Day(_)
            | Self::Hour12(_)
            | Self::Hour24(_)
            | Self::Minute(_)
            | Self::Second(_)
            | Self::Fraction(_) => true,
            Self::Weekday(_) | Self::DayPeriod | Self::Zone(_) | Self::ZoneOffset => false,
        }
    }

    /// Returns true for calendar-date fields.
    #[must_use]
    pub fn is_date(self) -> bool {
        matches!(
            self,
            Self::Year(_) | Self::Month(_) | Self::Day(_) | Self::Weekday(_)
        )
    }

    fn from_letter(letter: char, width: usize) -> Option<Self> {
        let w = u8::try_from(width.min(usize::from(u8::MAX))).ok()?;
        Some(match letter {
            'y' => Self::Year(w),
            'M' | 'L' => Self::Month(w),
            'd' if w <= 2 => Self::Day(w),
            'E' => Self::Weekday(w >= 4),
            'a' if w == 1 => Self::DayPeriod,
            'h' if w <= 2 => Self::Hour12(w),
            'H' if w <= 2 => Self::Hour24(w),
            'm' if w <= 2 => Self::Minute(w),
            's' if w <= 2 => Self::Second(w),
            'S' if w <= 9 => Self::Fraction(w),
            'z' => Self::Zone(w >= 4),
            'Z' if w <= 3 => Self::ZoneOffset,
            _ => return None,
        })
    }
}

/// A pattern element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A field to render or parse.
    Field(Field),
    /// Text matched verbatim.
    Literal(String),
}

/// A compiled date/time pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Compiles a pattern.
    pub fn compile(source: &str) -> I18nResult<Self> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            literal.push('\'');
                        } else {
                            closed = true;
                            break;
                        }
                    } else {
                        literal.push(q);
                    }
                }
                if !closed {
                    return Err(I18nError::invalid_pattern(source, "unterminated quote"));
                }
                continue;
            }

            if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                let field = Field::from_letter(c, width).ok_or_else(|| {
                    I18nError::invalid_pattern(
                        source,
                        format!("unsupported field {:?}", c.to_string().repeat(width)),
                    )
                })?;
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field(field));
                continue;
            }

            literal.push(c);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        if !tokens.iter().any(|t| matches!(t, Token::Field(_))) {
            return Err(I18nError::invalid_pattern(source, "no date or time fields"));
        }

        Ok(Self {
            source: source.to_owned(),
            tokens,
        })
    }

    /// The pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates the fields of the pattern.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Field(f) => Some(*f),
            Token::Literal(_) => None,
        })
    }

    /// Returns true if the pattern names any calendar-date field.
    #[must_use]
    pub fn has_date(&self) -> bool {
        self.fields().any(Field::is_date)
    }

    /// Returns true if the pattern names any time-of-day field.
    #[must_use]
    pub fn has_time(&self) -> bool {
        self.fields().any(|f| {
            matches!(
                f,
                Field::Hour12(_) | Field::Hour24(_) | Field::Minute(_) | Field::Second(_)
            )
        })
    }
}

impl FromStr for Pattern {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Builds pattern text, quoting literal runs that would read as fields.
#[derive(Debug, Default)]
pub(crate) struct PatternWriter {
    out: String,
    literal: String,
}

impl PatternWriter {
    pub(crate) fn field(&mut self, text: &str) {
        self.flush();
        self.out.push_str(text);
    }

    pub(crate) fn literal(&mut self, text: &str) {
        self.literal.push_str(text);
    }

    pub(crate) fn finish(mut self) -> String {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.literal.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.literal);
        if text.chars().any(|c| c.is_ascii_alphabetic() || c == '\'') {
            self.out.push('\'');
            self.out.push_str(&text.replace('\'', "''"));
            self.out.push('\'');
        } else {
            self.out.push_str(&text);
        }
    }
}
