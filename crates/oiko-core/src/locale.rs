// Language/region identifiers scoping which dictionary and rules apply.

use std::fmt;
use std::str::FromStr;

/// Error type for language tag parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("empty language tag")]
    Empty,
    #[error("malformed language subtag: {0:?}")]
    MalformedLanguage(String),
    #[error("malformed region subtag: {0:?}")]
    MalformedRegion(String),
}

/// A language/region identifier such as `fi` or `fi-FI`.
///
/// Tags are normalized on parse: the language subtag is lowercased,
/// the region subtag is uppercased, and `_` is accepted as a separator
/// alongside `-`. The canonical display form is `ll-RR`.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageTag {
    language: String,
    region: Option<String>,
}

impl LanguageTag {
    /// Parse a tag of the form `ll`, `ll-RR` or `ll_RR`.
    ///
    /// The language subtag must be 2-8 ASCII letters, the region subtag
    /// 2-3 ASCII letters. Anything else is rejected.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        let mut parts = tag.splitn(2, ['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.len() < 2
            || language.len() > 8
            || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(LocaleError::MalformedLanguage(language.to_string()));
        }
        let region = match parts.next() {
            None | Some("") => None,
            Some(r) => {
                if r.len() < 2 || r.len() > 3 || !r.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(LocaleError::MalformedRegion(r.to_string()));
                }
                Some(r.to_ascii_uppercase())
            }
        };
        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// The lowercase language subtag, e.g. `"fi"`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The uppercase region subtag, e.g. `"FI"`, if present.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The same tag with the region stripped.
    ///
    /// Used for fallback resolution: a checker registered for plain
    /// `fi` also serves text tagged `fi-FI` when no regional checker
    /// exists.
    pub fn without_region(&self) -> Self {
        Self {
            language: self.language.clone(),
            region: None,
        }
    }

    /// Whether this tag can serve text tagged `other`: the languages
    /// match and this tag either has no region or the same region.
    pub fn serves(&self, other: &LanguageTag) -> bool {
        self.language == other.language
            && (self.region.is_none() || self.region == other.region)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for LanguageTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
