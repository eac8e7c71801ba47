// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale tags of the `language[_COUNTRY][.encoding]` form (e.g.
//! `en_US.UTF-8`), as used for translation lookup and as the `LC_TIME`
//! value handed to the locale formatting backend.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Encoding appended to a tag that carries none.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// A parsed locale tag.
///
/// Language is 1-3 letters, country 2 letters, encoding alphanumeric with
/// dashes. The default locale is `en_US.UTF-8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    country: Option<String>,
    encoding: Option<String>,
}

impl Locale {
    pub fn new(
        language: &str,
        country: Option<&str>,
        encoding: Option<&str>,
    ) -> Result<Self> {
        let valid_language = (1..=3).contains(&language.len())
            && language.bytes().all(|b| b.is_ascii_alphabetic());
        let valid_country = country.map_or(true, |c| {
            c.len() == 2 && c.bytes().all(|b| b.is_ascii_alphabetic())
        });
        let valid_encoding = encoding.map_or(true, |e| {
            !e.is_empty() && e.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        });

        if !valid_language || !valid_country || !valid_encoding {
            let mut tag = language.to_string();
            if let Some(c) = country {
                tag.push('_');
                tag.push_str(c);
            }
            if let Some(e) = encoding {
                tag.push('.');
                tag.push_str(e);
            }
            return Err(Error::InvalidLocale(tag));
        }

        Ok(Self {
            language: language.to_string(),
            country: country.map(str::to_string),
            encoding: encoding.map(str::to_string),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// The tag with the default encoding appended when none is set, which
    /// is the form used as a translation table key.
    pub fn normalized(&self) -> String {
        match self.encoding {
            Some(_) => self.to_string(),
            None => format!("{}.{}", self, DEFAULT_ENCODING),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: Some("US".to_string()),
            encoding: Some(DEFAULT_ENCODING.to_string()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{}", country)?;
        }
        if let Some(encoding) = &self.encoding {
            write!(f, ".{}", encoding)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (head, encoding) = match s.split_once('.') {
            Some((head, enc)) => (head, Some(enc)),
            None => (s, None),
        };
        let (language, country) = match head.split_once('_') {
            Some((lang, country)) => (lang, Some(country)),
            None => (head, None),
        };

        Self::new(language, country, encoding).map_err(|_| Error::InvalidLocale(s.to_string()))
    }
}

/// Normalize a raw tag for table-key use, appending the default encoding
/// when the tag carries none (`en_US` and `en_US.UTF-8` share a key).
pub(crate) fn normalize_tag(tag: &str) -> String {
    if tag.contains('.') {
        tag.to_string()
    } else {
        format!("{}.{}", tag, DEFAULT_ENCODING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tag() {
        let locale: Locale = "en_US.UTF-8".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), Some("US"));
        assert_eq!(locale.encoding(), Some("UTF-8"));
        assert_eq!(locale.to_string(), "en_US.UTF-8");
    }

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "tr".parse().unwrap();
        assert_eq!(locale.language(), "tr");
        assert_eq!(locale.country(), None);
        assert_eq!(locale.normalized(), "tr.UTF-8");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Locale>().is_err());
        assert!("english_USA".parse::<Locale>().is_err());
        assert!("en_U".parse::<Locale>().is_err());
        assert!("en_US.".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_is_en_us() {
        assert_eq!(Locale::default().to_string(), "en_US.UTF-8");
    }

    #[test]
    fn test_normalized_appends_encoding() {
        let locale: Locale = "tr_TR".parse().unwrap();
        assert_eq!(locale.normalized(), "tr_TR.UTF-8");
        assert_eq!(normalize_tag("tr_TR"), "tr_TR.UTF-8");
        assert_eq!(normalize_tag("tr_TR.UTF-8"), "tr_TR.UTF-8");
    }
}
