//! Host locale and timezone detection.
//!
//! Adapters never read process-wide state on their own. Callers that want
//! "whatever the host is configured with" detect it once here and pass the
//! result into the options explicitly.

use chrono_tz::Tz;

use crate::locale::LocaleId;

/// Environment variables consulted for the host locale, highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_TIME", "LC_NUMERIC", "LANG"];

/// Locale and timezone of the host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemDefaults {
    /// Host locale.
    pub locale: LocaleId,
    /// Host timezone.
    pub timezone: Tz,
}

impl SystemDefaults {
    /// Reads the host locale from the environment and the host timezone
    /// from the operating system.
    #[must_use]
    pub fn detect() -> Self {
        let tz_name = match iana_time_zone::get_timezone() {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!(error = %e, "could not determine host timezone, using UTC");
                None
            }
        };
        Self::detect_with(|key| std::env::var(key).ok(), tz_name.as_deref())
    }

    /// Same as [`detect`](Self::detect) with an injectable environment.
    pub fn detect_with<F>(lookup: F, tz_name: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            locale: detect_locale(&lookup),
            timezone: detect_timezone(tz_name),
        }
    }
}

impl Default for SystemDefaults {
    fn default() -> Self {
        Self {
            locale: LocaleId::en_us(),
            timezone: Tz::UTC,
        }
    }
}

fn detect_locale<F>(lookup: &F) -> LocaleId
where
    F: Fn(&str) -> Option<String>,
{
    for &var in LOCALE_VARS {
        let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        match LocaleId::parse(&value) {
            Ok(locale) => {
                tracing::debug!(var, locale = %locale, "detected host locale");
                return locale;
            }
            Err(e) => tracing::warn!(var, error = %e, "ignoring unusable locale variable"),
        }
    }
    LocaleId::en_us()
}

fn detect_timezone(name: Option<&str>) -> Tz {
    match name.map(str::parse::<Tz>) {
        Some(Ok(tz)) => tz,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "unknown host timezone, using UTC");
            Tz::UTC
        }
        None => Tz::UTC,
    }
}
