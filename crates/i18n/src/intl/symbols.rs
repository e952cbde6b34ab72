//! Calendar symbols and layouts for a locale.
//!
//! Backed by the glibc locale tables shipped in `pure-rust-locales`, the
//! same data chrono's localized formatting reads.

use pure_rust_locales::{Locale, locale_match};

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;

const EN_AM_PM: [&str; 2] = ["AM", "PM"];

/// Month, weekday and day-period names plus the locale's strftime layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSymbols {
    data_name: String,
    months: Vec<String>,
    short_months: Vec<String>,
    weekdays: Vec<String>,
    short_weekdays: Vec<String>,
    am_pm: [String; 2],
    date_layout: &'static str,
    time_layout: &'static str,
    time_ampm_layout: &'static str,
}

impl DateSymbols {
    /// Loads the symbols for `locale`, falling back from `lang_REGION` to
    /// the language's most likely region.
    pub fn for_locale(locale: &LocaleId) -> I18nResult<Self> {
        let (data_name, data) = locale
            .posix_candidates()
            .into_iter()
            .find_map(|name| Locale::try_from(name.as_str()).ok().map(|l| (name, l)))
            .ok_or_else(|| I18nError::UnsupportedLocale {
                locale: locale.to_string(),
            })?;

        let am_pm_raw: &[&str] = locale_match!(data => LC_TIME::AM_PM);
        let am_pm = match am_pm_raw {
            [am, pm] if !am.is_empty() && !pm.is_empty() => [(*am).to_owned(), (*pm).to_owned()],
            _ => EN_AM_PM.map(str::to_owned),
        };

        let incomplete = || I18nError::UnsupportedLocale {
            locale: format!("{locale} (incomplete calendar names in {data_name})"),
        };
        let symbols = Self {
            months: names(locale_match!(data => LC_TIME::MON), 12).ok_or_else(incomplete)?,
            short_months: names(locale_match!(data => LC_TIME::ABMON), 12).ok_or_else(incomplete)?,
            weekdays: names(locale_match!(data => LC_TIME::DAY), 7).ok_or_else(incomplete)?,
            short_weekdays: names(locale_match!(data => LC_TIME::ABDAY), 7).ok_or_else(incomplete)?,
            am_pm,
            date_layout: locale_match!(data => LC_TIME::D_FMT),
            time_layout: locale_match!(data => LC_TIME::T_FMT),
            time_ampm_layout: locale_match!(data => LC_TIME::T_FMT_AMPM),
            data_name,
        };
        tracing::debug!(locale = %locale, data = %symbols.data_name, "loaded date symbols");
        Ok(symbols)
    }

    /// Name of the locale data actually used (`en_US` for `en`).
    #[must_use]
    pub fn data_name(&self) -> &str {
        &self.data_name
    }

    /// Full month name, `month` in 1..=12.
    #[must_use]
    pub fn month(&self, month: u32) -> &str {
        pick(&self.months, month.wrapping_sub(1))
    }

    /// Abbreviated month name, `month` in 1..=12.
    #[must_use]
    pub fn short_month(&self, month: u32) -> &str {
        pick(&self.short_months, month.wrapping_sub(1))
    }

    /// Full weekday name, `day` counted from Sunday = 0.
    #[must_use]
    pub fn weekday(&self, day: u32) -> &str {
        pick(&self.weekdays, day)
    }

    /// Abbreviated weekday name, `day` counted from Sunday = 0.
    #[must_use]
    pub fn short_weekday(&self, day: u32) -> &str {
        pick(&self.short_weekdays, day)
    }

    /// Day-period marker; `pm` selects the afternoon one.
    #[must_use]
    pub fn am_pm(&self, pm: bool) -> &str {
        &self.am_pm[usize::from(pm)]
    }

    pub(crate) fn months(&self) -> &[String] {
        &self.months
    }

    pub(crate) fn short_months(&self) -> &[String] {
        &self.short_months
    }

    pub(crate) fn weekdays(&self) -> &[String] {
        &self.weekdays
    }

    pub(crate) fn short_weekdays(&self) -> &[String] {
        &self.short_weekdays
    }

    pub(crate) fn am_pm_markers(&self) -> &[String; 2] {
        &self.am_pm
    }

    /// strftime layout of the locale's numeric date (`%m/%d/%Y`).
    #[must_use]
    pub fn date_layout(&self) -> &str {
        self.date_layout
    }

    /// strftime layout of the locale's time (`%r`, `%T`).
    #[must_use]
    pub fn time_layout(&self) -> &str {
        self.time_layout
    }

    /// strftime layout of the locale's 12-hour time; may be empty.
    #[must_use]
    pub fn time_ampm_layout(&self) -> &str {
        self.time_ampm_layout
    }
}

fn names(raw: &[&str], expected: usize) -> Option<Vec<String>> {
    if raw.len() != expected || raw.iter().any(|n| n.trim().is_empty()) {
        return None;
    }
    Some(raw.iter().map(|n| (*n).to_owned()).collect())
}

fn pick(list: &[String], index: u32) -> &str {
    usize::try_from(index)
        .ok()
        .and_then(|i| list.get(i))
        .map_or("", String::as_str)
}
