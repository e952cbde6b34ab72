//! Locale-aware date/time formatting and strict parsing.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use super::pattern::{Field, Pattern, Token};
use super::style::{self, DateStyle};
use super::symbols::DateSymbols;
use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;

/// Largest number of digits read for a variable-width numeric field.
const MAX_DIGITS: usize = 9;

/// How far from today a time-only value is moved to find a matching day.
const MAX_ANCHOR_DAYS: u64 = 190;

/// Formats and parses instants with a fixed locale, pattern and timezone.
///
/// The pattern is either given explicitly or derived from the date and
/// time styles for the locale (see [`derive_pattern`](super::derive_pattern)).
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: LocaleId,
    date_style: DateStyle,
    time_style: DateStyle,
    timezone: Tz,
    symbols: DateSymbols,
    pattern: Pattern,
    explicit: bool,
}

impl DateFormatter {
    /// Builds a formatter. An empty or absent `pattern` means "derive it
    /// from the styles".
    pub fn new(
        locale: LocaleId,
        date_style: DateStyle,
        time_style: DateStyle,
        timezone: Tz,
        pattern: Option<&str>,
    ) -> I18nResult<Self> {
        let symbols = DateSymbols::for_locale(&locale)?;
        let explicit = pattern.filter(|p| !p.is_empty());
        let compiled = match explicit {
            Some(text) => Pattern::compile(text)?,
            None => style::derived(&symbols, date_style, time_style)?,
        };

        tracing::debug!(
            locale = %locale,
            date_style = %date_style,
            time_style = %time_style,
            timezone = timezone.name(),
            pattern = compiled.as_str(),
            explicit = explicit.is_some(),
            "built date formatter"
        );

        Ok(Self {
            locale,
            date_style,
            time_style,
            timezone,
            symbols,
            pattern: compiled,
            explicit: explicit.is_some(),
        })
    }

    /// The locale.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// The date style.
    #[must_use]
    pub fn date_style(&self) -> DateStyle {
        self.date_style
    }

    /// The time style.
    #[must_use]
    pub fn time_style(&self) -> DateStyle {
        self.time_style
    }

    /// The timezone values are formatted in and parsed against.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The effective pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns true when the pattern was supplied rather than derived.
    #[must_use]
    pub fn is_pattern_explicit(&self) -> bool {
        self.explicit
    }

    /// The calendar names in use.
    #[must_use]
    pub fn symbols(&self) -> &DateSymbols {
        &self.symbols
    }

    /// Formats `instant` in the formatter's timezone.
    pub fn format<T: TimeZone>(&self, instant: &DateTime<T>) -> String {
        let local = instant.with_timezone(&self.timezone);
        let mut out = String::new();
        for token in self.pattern.tokens() {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Field(field) => self.write_field(&mut out, *field, &local),
            }
        }
        out
    }

    fn write_field(&self, out: &mut String, field: Field, dt: &DateTime<Tz>) {
        let s = &self.symbols;
        match field {
            Field::Year(2) => pad(out, dt.year().rem_euclid(100), 2),
            Field::Year(w) => pad(out, dt.year(), w),
            Field::Month(w @ 1..=2) => pad(out, dt.month(), w),
            Field::Month(3) => out.push_str(s.short_month(dt.month())),
            Field::Month(_) => out.push_str(s.month(dt.month())),
            Field::Day(w) => pad(out, dt.day(), w),
            Field::Weekday(long) => {
                let day = dt.weekday().num_days_from_sunday();
                out.push_str(if long { s.weekday(day) } else { s.short_weekday(day) });
            }
            Field::DayPeriod => out.push_str(s.am_pm(dt.hour() >= 12)),
            Field::Hour12(w) => pad(out, dt.hour12().1, w),
            Field::Hour24(w) => pad(out, dt.hour(), w),
            Field::Minute(w) => pad(out, dt.minute(), w),
            Field::Second(w) => pad(out, dt.second(), w),
            Field::Fraction(w) => {
                let nanos = format!("{:09}", dt.nanosecond() % 1_000_000_000);
                let width = usize::from(w).min(nanos.len());
                out.push_str(&nanos[..width]);
            }
            Field::Zone(false) => out.push_str(&dt.format("%Z").to_string()),
            Field::Zone(true) => out.push_str(self.timezone.name()),
            Field::ZoneOffset => out.push_str(&dt.format("%z").to_string()),
        }
    }

    /// Parses `input` strictly against the pattern.
    ///
    /// Two-digit years are placed relative to the current year, and a value
    /// without date fields is placed on the nearest day it can exist on.
    pub fn parse(&self, input: &str) -> I18nResult<DateTime<Tz>> {
        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        self.parse_relative_to(input, today)
    }

    /// Parses `input` relative to `today`.
    ///
    /// Two-digit years resolve into the window from 80 years before to 20
    /// years after `today`'s year. Without date fields the value lands on
    /// `today`, or on the closest day where its wall time and zone
    /// abbreviation exist together.
    pub fn parse_relative_to(&self, input: &str, today: NaiveDate) -> I18nResult<DateTime<Tz>> {
        let fail = |reason: String| I18nError::date_parse(input, self.pattern.as_str(), reason);

        let tokens = self.pattern.tokens();
        let mut parts = Parts::default();
        let mut rest = input;
        for (i, token) in tokens.iter().enumerate() {
            rest = match token {
                Token::Literal(text) => match_literal(rest, text)
                    .ok_or_else(|| fail(format!("expected {text:?} at {rest:?}")))?,
                Token::Field(field) => {
                    let fixed = field.is_numeric()
                        && matches!(tokens.get(i + 1), Some(Token::Field(next)) if next.is_numeric());
                    self.read_field(rest, *field, fixed, &mut parts)
                        .ok_or_else(|| fail(format!("expected {field:?} at {rest:?}")))?
                }
            };
        }
        if !rest.is_empty() {
            return Err(fail(format!("unexpected trailing text {rest:?}")));
        }

        let parsed = parts
            .resolve(self.timezone, today)
            .map_err(|reason| fail(reason.to_owned()))?;
        tracing::trace!(input, pattern = self.pattern.as_str(), parsed = %parsed, "parsed date");
        Ok(parsed)
    }

    fn read_field<'a>(
        &self,
        rest: &'a str,
        field: Field,
        fixed: bool,
        parts: &mut Parts,
    ) -> Option<&'a str> {
        let s = &self.symbols;
        let width = |w: u8| fixed.then_some(usize::from(w));
        match field {
            Field::Year(w) => {
                let (value, len, rest) = read_number(rest, width(w))?;
                parts.year = Some(i32::try_from(value).ok()?);
                parts.two_digit_year = w == 2 && len == 2;
                Some(rest)
            }
            Field::Month(w @ 1..=2) => {
                let (value, _, rest) = read_number(rest, width(w))?;
                parts.month = Some(value);
                Some(rest)
            }
            Field::Month(_) => {
                let (index, rest) = match_name(rest, s.months())
                    .into_iter()
                    .chain(match_name(rest, s.short_months()))
                    .min_by_key(|(_, r)| r.len())?;
                parts.month = Some(index + 1);
                Some(rest)
            }
            Field::Day(w) => {
                let (value, _, rest) = read_number(rest, width(w))?;
                parts.day = Some(value);
                Some(rest)
            }
            Field::Weekday(_) => {
                let (index, rest) = match_name(rest, s.weekdays())
                    .into_iter()
                    .chain(match_name(rest, s.short_weekdays()))
                    .min_by_key(|(_, r)| r.len())?;
                parts.weekday = Some(index);
                Some(rest)
            }
            Field::DayPeriod => {
                let (index, rest) = match_name(rest, s.am_pm_markers())?;
                parts.pm = Some(index == 1);
                Some(rest)
            }
            Field::Hour12(w) => {
                let (value, _, rest) = read_number(rest, width(w))?;
                parts.hour = Some(value);
                parts.hour12 = true;
                Some(rest)
            }
            Field::Hour24(w) => {
                let (value, _, rest) = read_number(rest, width(w))?;
                parts.hour = Some(value);
                Some(rest)
            }
            Field::Minute(w) => {
                let (value, _, rest) = read_number(rest, width(w))?;
                parts.minute = Some(value);
                Some(rest)
            }
            Field::Second(w) => {
                let (value, _, rest) = read_number(rest, width(w))?;
                parts.second = Some(value);
                Some(rest)
            }
            Field::Fraction(w) => {
                let (value, len, rest) = read_number(rest, width(w))?;
                parts.nanos = Some(value * 10_u32.pow(u32::try_from(MAX_DIGITS - len).ok()?));
                Some(rest)
            }
            Field::Zone(false) => {
                let end = rest
                    .find(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '-' | ':')))
                    .unwrap_or(rest.len());
                if end == 0 {
                    return None;
                }
                parts.zone_abbreviation = Some(rest[..end].to_owned());
                Some(&rest[end..])
            }
            Field::Zone(true) => {
                let end = rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '+' | '-')))
                    .unwrap_or(rest.len());
                parts.zone = Some(rest[..end].parse::<Tz>().ok()?);
                Some(&rest[end..])
            }
            Field::ZoneOffset => {
                let (offset, rest) = read_offset(rest)?;
                parts.offset = Some(offset);
                Some(rest)
            }
        }
    }
}

/// Field values collected while walking the pattern.
#[derive(Debug, Default)]
struct Parts {
    year: Option<i32>,
    two_digit_year: bool,
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<u32>,
    hour: Option<u32>,
    hour12: bool,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    nanos: Option<u32>,
    zone_abbreviation: Option<String>,
    zone: Option<Tz>,
    offset: Option<FixedOffset>,
}

impl Parts {
    fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    fn resolve(self, timezone: Tz, today: NaiveDate) -> Result<DateTime<Tz>, &'static str> {
        let mut hour = self.hour.unwrap_or(0);
        if self.hour12 {
            if !(1..=12).contains(&hour) {
                return Err("hour out of range");
            }
            hour = hour % 12 + if self.pm == Some(true) { 12 } else { 0 };
        }
        let time = NaiveTime::from_hms_nano_opt(
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.nanos.unwrap_or(0),
        )
        .ok_or("time out of range")?;

        if self.has_date() {
            let mut year = self.year.unwrap_or(1970);
            if self.two_digit_year {
                year = window_year(year, today.year());
            }
            let date = NaiveDate::from_ymd_opt(year, self.month.unwrap_or(1), self.day.unwrap_or(1))
                .ok_or("date out of range")?;
            return self.resolve_on(date, time, timezone);
        }

        // Time-only values: today first, then alternate outwards day by day.
        let first = self.resolve_on(today, time, timezone);
        if first.is_ok() {
            return first;
        }
        (1..=MAX_ANCHOR_DAYS)
            .flat_map(|n| {
                let days = Days::new(n);
                [today.checked_sub_days(days), today.checked_add_days(days)]
            })
            .flatten()
            .find_map(|date| self.resolve_on(date, time, timezone).ok())
            .map_or(first, Ok)
    }

    fn resolve_on(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        timezone: Tz,
    ) -> Result<DateTime<Tz>, &'static str> {
        let naive = NaiveDateTime::new(date, time);

        if let Some(weekday) = self.weekday
            && weekday != naive.weekday().num_days_from_sunday()
        {
            return Err("weekday does not match date");
        }

        if let Some(offset) = self.offset {
            return offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&timezone))
                .ok_or("time out of range");
        }

        let zone = self.zone.unwrap_or(timezone);
        let abbreviation = self.zone_abbreviation.as_deref();
        let local = match zone.from_local_datetime(&naive) {
            MappedLocalTime::Single(dt) => dt,
            MappedLocalTime::Ambiguous(earlier, later) => {
                if abbreviation.is_some_and(|a| matches_abbreviation(&later, a)) {
                    later
                } else {
                    earlier
                }
            }
            MappedLocalTime::None => return Err("local time does not exist in this timezone"),
        };
        if abbreviation.is_some_and(|a| !matches_abbreviation(&local, a)) {
            return Err("zone does not match");
        }
        Ok(local.with_timezone(&timezone))
    }
}

fn matches_abbreviation(dt: &DateTime<Tz>, text: &str) -> bool {
    dt.format("%Z").to_string().eq_ignore_ascii_case(text)
}

/// Places a two-digit year in `[reference - 80, reference + 20)`.
fn window_year(two_digit: i32, reference_year: i32) -> i32 {
    let start = reference_year - 80;
    let mut year = start - start.rem_euclid(100) + two_digit;
    if year < start {
        year += 100;
    }
    year
}

fn pad(out: &mut String, value: impl Into<i64>, width: u8) {
    out.push_str(&format!("{:0width$}", value.into(), width = usize::from(width)));
}

/// Reads ASCII digits: exactly `fixed` of them, or a greedy run.
/// Returns the value, the digit count and the remaining text.
fn read_number(text: &str, fixed: Option<usize>) -> Option<(u32, usize, &str)> {
    let run = text.bytes().take_while(u8::is_ascii_digit).count();
    let len = match fixed {
        Some(width) if run >= width => width,
        Some(_) => return None,
        None => run.min(MAX_DIGITS),
    };
    if len == 0 {
        return None;
    }
    let value = text[..len].parse().ok()?;
    Some((value, len, &text[len..]))
}

/// Reads `+hhmm`, `+hh:mm` or `Z`.
fn read_offset(text: &str) -> Option<(FixedOffset, &str)> {
    if let Some(rest) = text.strip_prefix(['Z', 'z']) {
        return Some((FixedOffset::east_opt(0)?, rest));
    }
    let sign = match text.chars().next()? {
        '+' => 1,
        '-' | '\u{2212}' => -1,
        _ => return None,
    };
    let rest = &text[text.chars().next()?.len_utf8()..];
    let (hours, _, rest) = read_number(rest, Some(2))?;
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    let (minutes, _, rest) = read_number(rest, Some(2))?;
    let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
    Some((FixedOffset::east_opt(sign * seconds)?, rest))
}

/// Matches a literal; whitespace matches any run of whitespace and the
/// comparison ignores case.
fn match_literal<'a>(text: &'a str, literal: &str) -> Option<&'a str> {
    let mut rest = text;
    let mut expected = literal.chars().peekable();
    while let Some(want) = expected.next() {
        if want.is_whitespace() {
            while expected.next_if(|c| c.is_whitespace()).is_some() {}
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return None;
            }
            rest = trimmed;
            continue;
        }
        rest = strip_prefix_ignore_case(rest, want.encode_utf8(&mut [0; 4]))?;
    }
    Some(rest)
}

/// Longest case-insensitive match of any non-empty name at the start of
/// `text`. Returns the index of the name and the remaining text.
fn match_name<'a>(text: &'a str, names: &[String]) -> Option<(u32, &'a str)> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .filter_map(|(i, name)| strip_prefix_ignore_case(text, name).map(|rest| (i, rest)))
        .min_by_key(|(_, rest)| rest.len())
        .and_then(|(i, rest)| Some((u32::try_from(i).ok()?, rest)))
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.chars();
    for want in prefix.chars() {
        let got = chars.next()?;
        if got != want && !got.to_lowercase().eq(want.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn formatter(locale: &str, pattern: &str) -> DateFormatter {
        DateFormatter::new(
            LocaleId::parse(locale).unwrap(),
            DateStyle::None,
            DateStyle::None,
            Tz::Europe__Amsterdam,
            Some(pattern),
        )
        .unwrap()
    }

    fn amsterdam(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Tz> {
        Tz::Europe__Amsterdam
            .with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .unwrap()
    }

    #[test]
    fn empty_pattern_means_derived() {
        let f = DateFormatter::new(
            LocaleId::parse("en").unwrap(),
            DateStyle::None,
            DateStyle::None,
            Tz::UTC,
            Some(""),
        )
        .unwrap();
        assert_eq!(f.pattern().as_str(), style::DEFAULT_PATTERN);
        assert!(!f.is_pattern_explicit());
    }

    #[rstest]
    #[case("en", "yyyyMMdd hh:mm a", "20130507 03:04 PM")]
    #[case("en", "EEEE, MMMM d, y", "Tuesday, May 7, 2013")]
    #[case("en", "EEE MMM dd yy", "Tue May 07 13")]
    #[case("de", "d. MMMM y HH:mm:ss", "7. Mai 2013 15:04:05")]
    #[case("en", "HH:mm:ss.SSS", "15:04:05.000")]
    #[case("en", "h 'o''clock' a", "3 o'clock PM")]
    fn formats(#[case] locale: &str, #[case] pattern: &str, #[case] expected: &str) {
        let dt = amsterdam(2013, 5, 7, 15, 4, 5);
        assert_eq!(formatter(locale, pattern).format(&dt), expected);
    }

    #[test]
    fn formats_zones() {
        let dt = amsterdam(2013, 1, 7, 9, 0, 0);
        assert_eq!(formatter("en", "HH:mm z").format(&dt), "09:00 CET");
        assert_eq!(formatter("en", "HH:mm zzzz").format(&dt), "09:00 Europe/Amsterdam");
        assert_eq!(formatter("en", "HH:mm Z").format(&dt), "09:00 +0100");
    }

    #[test]
    fn formats_in_configured_timezone() {
        let utc = Utc.with_ymd_and_hms(2013, 5, 7, 22, 30, 0).single().unwrap();
        assert_eq!(formatter("en", "yyyy-MM-dd HH:mm").format(&utc), "2013-05-08 00:30");
    }

    #[test]
    fn midnight_is_twelve_am() {
        let dt = amsterdam(2020, 1, 1, 0, 34, 0);
        assert_eq!(formatter("en", "yyyyMMdd hh:mm a").format(&dt), "20200101 12:34 AM");
    }

    #[test]
    fn parses_default_pattern() {
        let f = formatter("en", "yyyyMMdd hh:mm a");
        assert_eq!(f.parse("20200101 12:34 am").unwrap(), amsterdam(2020, 1, 1, 0, 34, 0));
        assert_eq!(f.parse("20200101 12:34 PM").unwrap(), amsterdam(2020, 1, 1, 12, 34, 0));
        assert_eq!(f.parse("20200101 01:05 pm").unwrap(), amsterdam(2020, 1, 1, 13, 5, 0));
    }

    #[test]
    fn parses_names_case_insensitively() {
        let f = formatter("en", "EEEE, MMMM d, y");
        assert_eq!(
            f.parse("tuesday, MAY 7, 2013").unwrap(),
            amsterdam(2013, 5, 7, 0, 0, 0)
        );
    }

    #[test]
    fn whitespace_literal_matches_any_whitespace() {
        let f = formatter("en", "MMMM d, y");
        assert!(f.parse("May\u{a0}7,\t2013").is_ok());
        assert!(f.parse("May7, 2013").is_err());
    }

    #[rstest]
    #[case("May 38, 2013")]
    #[case("Mai 7, 2013")]
    #[case("May 7, 2013 extra")]
    #[case("May , 2013")]
    fn rejects_malformed_input(#[case] input: &str) {
        let err = formatter("en", "MMMM d, y").parse(input).unwrap_err();
        assert!(matches!(err, I18nError::DateParse { .. }), "{err}");
    }

    #[test]
    fn rejects_mismatched_weekday() {
        let f = formatter("en", "EEEE, MMMM d, y");
        assert!(f.parse("Monday, May 7, 2013").is_err());
    }

    #[test]
    fn rejects_nonexistent_local_time() {
        // Clocks in Amsterdam jumped from 02:00 to 03:00 on 2013-03-31.
        let f = formatter("en", "yyyy-MM-dd HH:mm");
        assert!(f.parse("2013-03-31 02:30").is_err());
        assert!(f.parse("2013-03-31 03:30").is_ok());
    }

    #[test]
    fn ambiguous_time_follows_zone_abbreviation() {
        let f = formatter("en", "yyyy-MM-dd HH:mm z");
        let summer = f.parse("2013-10-27 02:30 CEST").unwrap();
        let winter = f.parse("2013-10-27 02:30 CET").unwrap();
        assert_eq!(winter - summer, chrono::Duration::hours(1));
        assert!(f.parse("2013-05-07 02:30 CET").is_err());
    }

    #[test]
    fn offset_and_zone_name_are_honoured() {
        let f = formatter("en", "yyyy-MM-dd HH:mm Z");
        let dt = f.parse("2013-05-07 12:00 +0000").unwrap();
        assert_eq!(dt, amsterdam(2013, 5, 7, 14, 0, 0));

        let f = formatter("en", "yyyy-MM-dd HH:mm zzzz");
        let dt = f.parse("2013-05-07 12:00 UTC").unwrap();
        assert_eq!(dt, amsterdam(2013, 5, 7, 14, 0, 0));
    }

    #[rstest]
    #[case(13, 2026, 2013)]
    #[case(45, 2026, 2045)]
    #[case(46, 2026, 1946)]
    #[case(99, 2026, 1999)]
    #[case(0, 2026, 2000)]
    fn two_digit_year_window(#[case] yy: i32, #[case] reference: i32, #[case] expected: i32) {
        assert_eq!(window_year(yy, reference), expected);
    }

    #[test]
    fn two_digit_year_is_resolved_on_parse() {
        let f = formatter("en", "MM/dd/yy");
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let dt = f.parse_relative_to("05/07/13", today).unwrap();
        assert_eq!(dt.year(), 2013);
        let dt = f.parse_relative_to("05/07/2013", today).unwrap();
        assert_eq!(dt.year(), 2013);
    }

    #[test]
    fn time_only_value_lands_on_today() {
        let f = formatter("en", "HH:mm");
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let dt = f.parse_relative_to("15:04", today).unwrap();
        assert_eq!(dt, amsterdam(2024, 7, 1, 15, 4, 0));
    }

    #[rstest]
    #[case(amsterdam(2024, 7, 1, 15, 4, 5), NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())]
    #[case(amsterdam(2024, 1, 15, 15, 4, 5), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())]
    #[case(amsterdam(2024, 7, 1, 15, 4, 5), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())]
    fn time_with_zone_survives_any_season(#[case] instant: DateTime<Tz>, #[case] today: NaiveDate) {
        let f = formatter("en", "hh:mm:ss a z");
        let text = f.format(&instant);
        let parsed = f.parse_relative_to(&text, today).unwrap();
        assert_eq!(f.format(&parsed), text);
    }

    #[test]
    fn time_only_value_skips_a_dst_gap_today() {
        let f = formatter("en", "HH:mm");
        let gap_day = NaiveDate::from_ymd_opt(2013, 3, 31).unwrap();
        let dt = f.parse_relative_to("02:30", gap_day).unwrap();
        assert_eq!(f.format(&dt), "02:30");
        assert_ne!(dt.date_naive(), gap_day);
    }

    #[test]
    fn unknown_abbreviation_is_rejected_for_time_only_values() {
        let f = formatter("en", "HH:mm z");
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(f.parse_relative_to("15:04 PST", today).is_err());
    }

    #[test]
    fn adjacent_numeric_fields_use_fixed_widths() {
        let f = formatter("en", "yyyyMMddHHmm");
        assert_eq!(f.parse("201305071504").unwrap(), amsterdam(2013, 5, 7, 15, 4, 0));
        assert!(f.parse("2013571504").is_err());
    }

    #[test]
    fn fraction_digits_scale_to_nanoseconds() {
        let f = formatter("en", "HH:mm:ss.SSS");
        let dt = f.parse("15:04:05.250").unwrap();
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn format_then_parse_round_trips_for_styles() {
        let now = amsterdam(2024, 11, 3, 16, 7, 9);
        for date in [DateStyle::Full, DateStyle::Medium, DateStyle::Short] {
            let f = DateFormatter::new(
                LocaleId::parse("ja").unwrap(),
                date,
                DateStyle::Medium,
                Tz::Europe__Amsterdam,
                None,
            )
            .unwrap();
            let text = f.format(&now);
            assert_eq!(f.parse(&text).unwrap(), now, "{} -> {text}", f.pattern());
        }
    }
}
