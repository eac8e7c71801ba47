// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Translation table for locale-aware formatting.
//!
//! Maps a locale tag to a [`Translation`] bundle: day names (Monday-first),
//! month names (January-first), am/pm period markers and a flat map of
//! relative-time words (`yesterday`, `hour`, `hours`, `minute`, `minutes`,
//! `now`). The table ships empty; callers populate it. Lookups never fail,
//! they degrade to the supplied fallback.

use std::collections::HashMap;

use crate::locale::normalize_tag;

/// am/pm markers for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Periods {
    pub am: String,
    pub pm: String,
}

/// Translation bundle for one locale. Every part is optional; missing
/// parts fall back to the platform's English field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    days: Option<Vec<String>>,
    months: Option<Vec<String>>,
    periods: Option<Periods>,
    words: HashMap<String, String>,
}

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Day names, Monday-first.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = Some(days.into_iter().map(Into::into).collect());
        self
    }

    /// Month names, January-first.
    pub fn with_months<I, S>(mut self, months: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.months = Some(months.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_periods(mut self, am: impl Into<String>, pm: impl Into<String>) -> Self {
        self.periods = Some(Periods { am: am.into(), pm: pm.into() });
        self
    }

    /// A flat relative-time word (`yesterday`, `hour`, `now`, ...).
    pub fn with_word(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.words.insert(key.into(), value.into());
        self
    }

    pub fn day(&self, index: usize) -> Option<&str> {
        self.days.as_ref()?.get(index).map(String::as_str)
    }

    pub fn month(&self, index: usize) -> Option<&str> {
        self.months.as_ref()?.get(index).map(String::as_str)
    }

    pub fn period(&self, key: &str) -> Option<&str> {
        let periods = self.periods.as_ref()?;
        match key {
            "am" => Some(&periods.am),
            "pm" => Some(&periods.pm),
            _ => None,
        }
    }

    pub fn word(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }
}

/// Lookup key for [`Intl::translate`]: ordered categories (days, months)
/// index by position, the rest by name.
#[derive(Debug, Clone, Copy)]
pub enum IntlKey<'a> {
    Index(usize),
    Name(&'a str),
}

/// The translation table. Keys are normalized locale tags, so `en_US` and
/// `en_US.UTF-8` address the same bundle.
#[derive(Debug, Clone, Default)]
pub struct Intl {
    translations: HashMap<String, Translation>,
}

impl Intl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, locale: &str, translation: Translation) -> &mut Self {
        self.translations.insert(normalize_tag(locale), translation);
        self
    }

    pub fn get(&self, locale: &str) -> Option<&Translation> {
        self.translations.get(&normalize_tag(locale))
    }

    pub fn has(&self, locale: &str) -> bool {
        self.get(locale).is_some()
    }

    pub fn set_days<I, S>(&mut self, locale: &str, days: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(locale).days = Some(days.into_iter().map(Into::into).collect());
        self
    }

    pub fn set_months<I, S>(&mut self, locale: &str, months: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(locale).months = Some(months.into_iter().map(Into::into).collect());
        self
    }

    pub fn set_periods(
        &mut self,
        locale: &str,
        am: impl Into<String>,
        pm: impl Into<String>,
    ) -> &mut Self {
        self.entry(locale).periods = Some(Periods { am: am.into(), pm: pm.into() });
        self
    }

    fn entry(&mut self, locale: &str) -> &mut Translation {
        self.translations.entry(normalize_tag(locale)).or_default()
    }

    /// Translate one key for a locale, degrading to `fallback` when the
    /// locale or the key is missing.
    ///
    /// The `am`/`pm` keys are special: a locale whose language prefix is
    /// neither `en` nor `tr` yields the empty string, mirroring the
    /// platform strftime output which omits the marker for such locales.
    /// Only those two locales were verified against the platform, so the
    /// rule is deliberately narrow.
    pub fn translate(
        &self,
        locale: &str,
        category: Option<&str>,
        key: IntlKey<'_>,
        fallback: &str,
    ) -> String {
        let tag = normalize_tag(locale);

        if let IntlKey::Name(name) = key {
            if (name == "am" || name == "pm")
                && !(tag.starts_with("en_") || tag.starts_with("tr_"))
            {
                return String::new();
            }
        }

        let Some(translation) = self.translations.get(&tag) else {
            return fallback.to_string();
        };

        let found = match (category, key) {
            (Some("days"), IntlKey::Index(index)) => translation.day(index),
            (Some("months"), IntlKey::Index(index)) => translation.month(index),
            (Some("periods"), IntlKey::Name(name)) => translation.period(name),
            (None, IntlKey::Name(name)) => translation.word(name),
            _ => None,
        };

        found.map(str::to_string).unwrap_or_else(|| fallback.to_string())
    }
}
