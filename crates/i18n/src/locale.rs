//! Locale identifiers.
//!
//! [`LocaleId`] accepts both BCP-47 (`zh-Hant-TW`) and POSIX (`de_DE.UTF-8@euro`)
//! spellings. The text the identifier was created from is kept verbatim so
//! accessors hand back exactly what the caller configured.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, I18nResult};

/// Region assumed for a bare language when looking up region-keyed locale data.
const LIKELY_REGIONS: &[(&str, &str)] = &[
    ("ar", "SA"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("fa", "IR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("ml", "IN"),
    ("nb", "NO"),
    ("si", "LK"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("vi", "VN"),
    ("zh", "CN"),
];

/// A parsed locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleId {
    raw: String,
    language: String,
    script: Option<String>,
    region: Option<String>,
    posix: bool,
}

impl LocaleId {
    /// Parses a locale identifier.
    ///
    /// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are accepted and
    /// ignored. `C` and `POSIX` name the POSIX locale.
    pub fn parse(input: &str) -> I18nResult<Self> {
        let raw = input.trim();
        let core = raw
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        if core.eq_ignore_ascii_case("c") || core.eq_ignore_ascii_case("posix") {
            return Ok(Self {
                raw: raw.to_owned(),
                language: "en".to_owned(),
                script: None,
                region: None,
                posix: true,
            });
        }

        let mut parts = core.split(['-', '_']);
        let language = parts
            .next()
            .filter(|l| (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()))
            .ok_or_else(|| I18nError::InvalidLocale(input.to_owned()))?
            .to_ascii_lowercase();

        let mut script = None;
        let mut region = None;
        for part in parts {
            let is_alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            let is_digit = part.chars().all(|c| c.is_ascii_digit());
            match part.len() {
                4 if is_alpha && script.is_none() && region.is_none() => {
                    let mut s = part.to_ascii_lowercase();
                    s[..1].make_ascii_uppercase();
                    script = Some(s);
                }
                2 if is_alpha && region.is_none() => region = Some(part.to_ascii_uppercase()),
                3 if is_digit && region.is_none() => region = Some(part.to_owned()),
                // variants and extensions carry nothing the formatters use
                5..=8 => {}
                _ => return Err(I18nError::InvalidLocale(input.to_owned())),
            }
        }

        Ok(Self {
            raw: raw.to_owned(),
            language,
            script,
            region,
            posix: false,
        })
    }

    /// `en_US`, the locale assumed when nothing else is configured.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            raw: "en_US".to_owned(),
            language: "en".to_owned(),
            script: None,
            region: Some("US".to_owned()),
            posix: false,
        }
    }

    /// The identifier exactly as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercase language subtag (`en`, `zh`).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Title-case script subtag, if present (`Hant`).
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase region subtag, if present (`TW`).
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns true for the `C` / `POSIX` locale.
    #[must_use]
    pub fn is_posix(&self) -> bool {
        self.posix
    }

    /// Canonical BCP-47 form (`zh-Hant-TW`).
    #[must_use]
    pub fn to_bcp47(&self) -> String {
        let mut tag = self.language.clone();
        for sub in [self.script.as_deref(), self.region.as_deref()]
            .into_iter()
            .flatten()
        {
            tag.push('-');
            tag.push_str(sub);
        }
        tag
    }

    /// POSIX names to try, most specific first, when looking up
    /// region-keyed locale data (`ml_IN`, `de_DE`).
    #[must_use]
    pub fn posix_candidates(&self) -> Vec<String> {
        if self.posix {
            return vec!["POSIX".to_owned()];
        }

        let mut candidates = Vec::with_capacity(3);
        if let Some(region) = &self.region {
            candidates.push(format!("{}_{region}", self.language));
        }
        if let Some((_, region)) = LIKELY_REGIONS
            .iter()
            .find(|(lang, _)| *lang == self.language)
        {
            candidates.push(format!("{}_{region}", self.language));
        }
        candidates.push(format!(
            "{}_{}",
            self.language,
            self.language.to_ascii_uppercase()
        ));
        candidates.dedup();
        candidates
    }
}

impl FromStr for LocaleId {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleId {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for LocaleId {
    type Error = I18nError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LocaleId> for String {
    fn from(value: LocaleId) -> Self {
        value.raw
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq<str> for LocaleId {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for LocaleId {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
