// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale-aware formatting.
//!
//! [`Formatter`] carries a pattern, a locale and a translation table, each
//! settable independently, and renders a [`DateTime`] three ways: direct
//! field-code delegation (`format`), `%`-directive locale patterns
//! (`format_locale`) and relative "ago" text (`format_ago`). It mutates no
//! process-global locale or timezone state; everything travels as values.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use tracing::debug;

use crate::backend::{DateCommand, LocaleDateBackend};
use crate::datetime::DateTime;
use crate::error::{Error, Result};
use crate::format;
use crate::intl::{Intl, IntlKey};
use crate::locale::Locale;

#[derive(Debug)]
pub struct Formatter {
    intl: Intl,
    format: Option<String>,
    locale: Locale,
    locale_key: String,
    backend: Box<dyn LocaleDateBackend>,
}

impl Default for Formatter {
    fn default() -> Self {
        let locale = Locale::default();
        Self {
            intl: Intl::new(),
            format: None,
            locale_key: locale.normalized(),
            locale,
            backend: Box::new(DateCommand::new()),
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intl(mut self, intl: Intl) -> Self {
        self.intl = intl;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.set_locale(locale);
        self
    }

    pub fn with_backend(mut self, backend: Box<dyn LocaleDateBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn set_intl(&mut self, intl: Intl) -> &mut Self {
        self.intl = intl;
        self
    }

    pub fn set_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.format = Some(format.into());
        self
    }

    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        self.locale_key = locale.normalized();
        self.locale = locale;
        self
    }

    pub fn set_backend(&mut self, backend: Box<dyn LocaleDateBackend>) -> &mut Self {
        self.backend = backend;
        self
    }

    pub fn intl(&self) -> &Intl {
        &self.intl
    }

    pub fn pattern(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Format with platform field codes, no locale translation. Used for
    /// the machine-readable patterns (ISO, SQL, HTTP).
    pub fn format(&self, when: &DateTime, pattern: Option<&str>) -> Result<String> {
        let pattern = self.resolve_pattern(pattern)?;
        Ok(when.format(pattern))
    }

    /// As [`Formatter::format`] against the UTC view of `when`; the
    /// argument itself is never touched.
    pub fn format_utc(&self, when: &DateTime, pattern: Option<&str>) -> Result<String> {
        let utc;
        let when = if when.offset() != 0 {
            utc = when.to_utc();
            &utc
        } else {
            when
        };
        self.format(when, pattern)
    }

    /// Format a `%`-directive pattern with locale translation.
    ///
    /// A `%`-letter preceded by another `%` is not a directive; after
    /// substitution every remaining `%%` collapses to a single `%`.
    /// `%n` and `%t` emit a newline and a tab. An unrecognized directive
    /// fails with [`Error::InvalidFormatDirective`].
    pub fn format_locale(&self, when: &DateTime, pattern: Option<&str>) -> Result<String> {
        let pattern = self.resolve_pattern(pattern)?;
        self.substitute(when, pattern)
    }

    /// As [`Formatter::format_locale`] against the UTC view of `when`.
    pub fn format_locale_utc(&self, when: &DateTime, pattern: Option<&str>) -> Result<String> {
        let utc;
        let when = if when.offset() != 0 {
            utc = when.to_utc();
            &utc
        } else {
            when
        };
        self.format_locale(when, pattern)
    }

    /// Relative rendering of `when` against now, computed afresh in
    /// `when`'s own zone. `pattern` overrides the beyond-a-week fallback
    /// only.
    pub fn format_ago(
        &self,
        when: &DateTime,
        pattern: Option<&str>,
        show_time: bool,
    ) -> Result<String> {
        let now = DateTime::now_in(when.zone());
        self.format_ago_from(when, &now, pattern, show_time)
    }

    /// As [`Formatter::format_ago`] with an explicit reference instant.
    pub fn format_ago_from(
        &self,
        when: &DateTime,
        now: &DateTime,
        pattern: Option<&str>,
        show_time: bool,
    ) -> Result<String> {
        let diff = now.diff(when, true)?;

        if diff.days == 1 {
            let yesterday = self.translate_word("yesterday", "Yesterday");
            return Ok(if show_time {
                format!("{yesterday}, {}", self.substitute(when, "%H:%M")?)
            } else {
                yesterday
            });
        }

        if (2..=7).contains(&diff.days) {
            return self.substitute(when, if show_time { "%A, %H:%M" } else { "%A" });
        }

        if diff.days > 7 {
            let fallback = if show_time { format::AGO } else { format::AGO_SHORT };
            return self.substitute(when, pattern.unwrap_or(fallback));
        }

        if diff.hour >= 1 {
            let key = if diff.hour == 1 { "hour" } else { "hours" };
            return Ok(format!("{} {}", diff.hour, self.translate_word(key, key)));
        }

        if diff.minute >= 1 {
            let key = if diff.minute == 1 { "minute" } else { "minutes" };
            return Ok(format!("{} {}", diff.minute, self.translate_word(key, key)));
        }

        // A few seconds ago.
        Ok(self.translate_word("now", "Just now"))
    }

    fn resolve_pattern<'a>(&'a self, pattern: Option<&'a str>) -> Result<&'a str> {
        pattern
            .filter(|p| !p.is_empty())
            .or_else(|| self.format.as_deref().filter(|p| !p.is_empty()))
            .ok_or(Error::MissingFormat)
    }

    fn substitute(&self, when: &DateTime, pattern: &str) -> Result<String> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if ch == '%' && i + 1 < chars.len() {
                let letter = chars[i + 1];
                let escaped = i > 0 && chars[i - 1] == '%';
                if letter.is_ascii_alphabetic() && !escaped {
                    match letter {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        _ => out.push_str(&self.directive(when, letter)?),
                    }
                    i += 2;
                    continue;
                }
            }
            out.push(ch);
            i += 1;
        }

        Ok(out.replace("%%", "%"))
    }

    fn directive(&self, when: &DateTime, letter: char) -> Result<String> {
        Ok(match letter {
            // Day.
            'A' => self.day_name(when),
            'a' => self.day_abbr(when),
            'd' => when.format("d"),
            'e' => when.format("j"),
            'j' => day_of_year(when),
            'u' => when.format("N"),
            'w' => when.format("w"),

            // Week.
            'U' => week_of_year(when, Weekday::Sun),
            'W' => week_of_year(when, Weekday::Mon),
            'V' => when.format("W"),

            // Month.
            'B' => self.month_name(when),
            'b' | 'h' => self.month_abbr(when),
            'm' => when.format("m"),

            // Year.
            'C' => century(when),
            'g' => short_iso_year(when),
            'G' => when.format("o"),
            'y' => when.format("y"),
            'Y' => when.format("Y"),

            // Time.
            'H' => when.format("H"),
            'k' => when.format("G"),
            'I' => when.format("h"),
            'l' => when.format("g"),
            'M' => when.format("i"),
            'p' => self.day_period(when, true),
            'P' => self.day_period(when, false),
            'r' => self.time_with_period(when),
            'R' => when.format("H:i"),
            'S' => when.format("s"),
            'T' => when.format("H:i:s"),

            // Zone.
            'z' => when.format("O"),
            'Z' => when.format("T"),

            // Stamp.
            'D' => when.format("m/d/y"),
            'F' => when.format("Y-m-d"),
            's' => when.format("U"),

            // Full locale representations, best effort.
            'c' | 'x' | 'X' => self.locale_representation(when, letter),

            _ => return Err(Error::InvalidFormatDirective(format!("%{letter}"))),
        })
    }

    fn translate_word(&self, key: &str, fallback: &str) -> String {
        self.intl
            .translate(&self.locale_key, None, IntlKey::Name(key), fallback)
    }

    /// Day name (`%A`).
    fn day_name(&self, when: &DateTime) -> String {
        let index = when.local().weekday().num_days_from_monday() as usize;
        self.intl
            .translate(&self.locale_key, Some("days"), IntlKey::Index(index), &when.format("l"))
    }

    /// Abbreviated day name (`%a`), with per-locale exceptions.
    fn day_abbr(&self, when: &DateTime) -> String {
        let index = when.local().weekday().num_days_from_monday() as usize;
        let name = self.intl.translate(
            &self.locale_key,
            Some("days"),
            IntlKey::Index(index),
            &when.format("D"),
        );

        if self.locale_key.starts_with("tr_") {
            return match index {
                0 => "Pzt".to_string(),
                5 => "Cmt".to_string(),
                _ => take_chars(&name, 3),
            };
        }
        if self.locale_key.starts_with("de_") {
            return take_chars(&name, 2);
        }

        take_chars(&name, 3)
    }

    /// Month name (`%B`).
    fn month_name(&self, when: &DateTime) -> String {
        let index = when.local().month0() as usize;
        self.intl
            .translate(&self.locale_key, Some("months"), IntlKey::Index(index), &when.format("F"))
    }

    /// Abbreviated month name (`%b`, `%h`).
    fn month_abbr(&self, when: &DateTime) -> String {
        let index = when.local().month0() as usize;
        let name = self.intl.translate(
            &self.locale_key,
            Some("months"),
            IntlKey::Index(index),
            &when.format("M"),
        );
        take_chars(&name, 3)
    }

    /// am/pm marker (`%p`, `%P`), empty for locales outside the verified
    /// en/tr pair.
    fn day_period(&self, when: &DateTime, upper: bool) -> String {
        let key = if when.local().hour() < 12 { "am" } else { "pm" };
        let marker =
            self.intl
                .translate(&self.locale_key, Some("periods"), IntlKey::Name(key), key);
        if upper {
            marker.to_uppercase()
        } else {
            marker.to_lowercase()
        }
    }

    /// Time with the period marker (`%r`), trimmed when the marker is
    /// empty.
    fn time_with_period(&self, when: &DateTime) -> String {
        format!("{} {}", when.format("h:i:s"), self.day_period(when, true))
            .trim()
            .to_string()
    }

    /// `%c`/`%x`/`%X` through the locale backend, degrading to a fixed
    /// English rendering when the backend declines.
    fn locale_representation(&self, when: &DateTime, directive: char) -> String {
        let wall = when.format("Y-m-d H:i:s");
        let offset_code = when.offset_code();

        if let Some(output) = self
            .backend
            .format(&self.locale_key, &offset_code, &wall, directive)
        {
            // Somehow, the zone id is not always added by the backend.
            if directive == 'c' && !has_zone_suffix(&output) {
                return format!("{output} {}", self.zone_suffix(when));
            }
            return output;
        }

        debug!(directive = %directive, "locale backend declined, using fixed format");
        match directive {
            'c' => format!("{} {}", when.format("D d M Y H:i:s"), self.zone_suffix(when)),
            'x' => when.format("m/d/Y"),
            _ => when.format("h:i:s A"),
        }
    }

    fn zone_suffix(&self, when: &DateTime) -> String {
        if when.zone().is_utc() {
            "GMT".to_string()
        } else {
            when.format("T")
        }
    }
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Day of year, 1-based, zero-padded to 3 digits (`%j`).
fn day_of_year(when: &DateTime) -> String {
    format!("{:03}", when.local().ordinal0() + 1)
}

/// Week of year anchored to the year's first `anchor` day (`%U`, `%W`).
fn week_of_year(when: &DateTime, anchor: Weekday) -> String {
    let local = when.local();
    let Some(jan1) = NaiveDate::from_ymd_opt(local.year(), 1, 1) else {
        return "00".to_string();
    };
    let to_anchor = match anchor {
        Weekday::Sun => (7 - jan1.weekday().num_days_from_sunday()) % 7,
        _ => (7 - jan1.weekday().num_days_from_monday()) % 7,
    };
    let week = (local.ordinal0() as i32 - to_anchor as i32) / 7 + 1;
    format!("{week:02}")
}

/// Century (`%C`).
fn century(when: &DateTime) -> String {
    (when.local().year() / 100).to_string()
}

/// Last two digits of the ISO week-numbering year (`%g`).
fn short_iso_year(when: &DateTime) -> String {
    format!("{:02}", when.local().iso_week().year().rem_euclid(100))
}

fn has_zone_suffix(s: &str) -> bool {
    if s.ends_with("GMT") {
        return true;
    }
    match s.rsplit_once(' ') {
        Some((_, tail)) => {
            let mut chars = tail.chars();
            matches!(chars.next(), Some('+' | '-' | ':')) && {
                let digits = chars.as_str();
                !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
            }
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NullBackend;
    use crate::zone::Zone;

    fn utc(text: &str) -> DateTime {
        DateTime::parse(text, Zone::Utc).unwrap()
    }

    fn formatter() -> Formatter {
        Formatter::new().with_backend(Box::new(NullBackend))
    }

    fn turkish_formatter() -> Formatter {
        let mut intl = Intl::new();
        intl.set_days(
            "tr_TR",
            ["Pazartesi", "Salı", "Çarşamba", "Perşembe", "Cuma", "Cumartesi", "Pazar"],
        );
        intl.set_months(
            "tr_TR",
            [
                "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos",
                "Eylül", "Ekim", "Kasım", "Aralık",
            ],
        );
        formatter()
            .with_locale("tr_TR".parse().unwrap())
            .with_intl(intl)
    }

    #[test]
    fn test_percent_escape() {
        let out = formatter().format_locale(&utc("2012-09-12 23:42:53"), Some("100%% done"));
        assert_eq!(out.unwrap(), "100% done");
    }

    #[test]
    fn test_newline_and_tab() {
        let out = formatter().format_locale(&utc("2012-09-12 23:42:53"), Some("%H%n%M%t%S"));
        assert_eq!(out.unwrap(), "23\n42\t53");
    }

    #[test]
    fn test_unknown_directive() {
        let result = formatter().format_locale(&utc("2012-09-12 23:42:53"), Some("%Q"));
        assert!(matches!(result, Err(Error::InvalidFormatDirective(_))));
    }

    #[test]
    fn test_missing_format() {
        let result = formatter().format_locale(&utc("2012-09-12 23:42:53"), None);
        assert!(matches!(result, Err(Error::MissingFormat)));
        let result = formatter().format(&utc("2012-09-12 23:42:53"), Some(""));
        assert!(matches!(result, Err(Error::MissingFormat)));
    }

    #[test]
    fn test_stored_format() {
        let formatter = formatter().with_format(crate::format::ISO);
        let out = formatter.format(&utc("2012-09-12 23:42:53"), None).unwrap();
        assert_eq!(out, "2012-09-12T23:42:53+00:00");
    }

    #[test]
    fn test_field_code_directives() {
        let when = utc("2012-09-12 23:42:53");
        let formatter = formatter();
        assert_eq!(
            formatter.format_locale(&when, Some("%Y-%m-%d %H:%M:%S")).unwrap(),
            "2012-09-12 23:42:53"
        );
        assert_eq!(formatter.format_locale(&when, Some("%D")).unwrap(), "09/12/12");
        assert_eq!(formatter.format_locale(&when, Some("%F")).unwrap(), "2012-09-12");
        assert_eq!(formatter.format_locale(&when, Some("%T %R")).unwrap(), "23:42:53 23:42");
        assert_eq!(formatter.format_locale(&when, Some("%e %u %V %G")).unwrap(), "12 3 37 2012");
        assert_eq!(formatter.format_locale(&when, Some("%I %l %k")).unwrap(), "11 11 23");
        assert_eq!(formatter.format_locale(&when, Some("%z %Z")).unwrap(), "+0000 UTC");
        assert_eq!(formatter.format_locale(&when, Some("%s")).unwrap(), "1347493373");
    }

    #[test]
    fn test_names_default_to_english() {
        let when = utc("2012-09-12 23:42:53");
        let out = formatter().format_locale(&when, Some("%A %a %B %b")).unwrap();
        assert_eq!(out, "Wednesday Wed September Sep");
    }

    #[test]
    fn test_turkish_names() {
        let formatter = turkish_formatter();
        let wednesday = utc("2012-09-12 23:42:53");
        assert_eq!(formatter.format_locale(&wednesday, Some("%A")).unwrap(), "Çarşamba");
        assert_eq!(formatter.format_locale(&wednesday, Some("%a")).unwrap(), "Çar");
        assert_eq!(formatter.format_locale(&wednesday, Some("%B")).unwrap(), "Eylül");
        assert_eq!(formatter.format_locale(&wednesday, Some("%b")).unwrap(), "Eyl");

        // Monday and Saturday have fixed abbreviations.
        assert_eq!(formatter.format_locale(&utc("2012-09-10 08:00:00"), Some("%a")).unwrap(), "Pzt");
        assert_eq!(formatter.format_locale(&utc("2012-09-15 08:00:00"), Some("%a")).unwrap(), "Cmt");
    }

    #[test]
    fn test_german_two_char_abbreviation() {
        let mut intl = Intl::new();
        intl.set_days(
            "de_DE",
            ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"],
        );
        let formatter = formatter().with_locale("de_DE".parse().unwrap()).with_intl(intl);
        let out = formatter.format_locale(&utc("2012-09-12 23:42:53"), Some("%a")).unwrap();
        assert_eq!(out, "Mi");
    }

    #[test]
    fn test_day_of_year() {
        let formatter = formatter();
        assert_eq!(formatter.format_locale(&utc("2012-01-01 00:00:00"), Some("%j")).unwrap(), "001");
        assert_eq!(formatter.format_locale(&utc("2012-09-12 00:00:00"), Some("%j")).unwrap(), "256");
    }

    #[test]
    fn test_week_of_year() {
        let formatter = formatter();
        // 2024 starts on a Monday; the first Sunday is January 7.
        assert_eq!(formatter.format_locale(&utc("2024-01-07 00:00:00"), Some("%U %W")).unwrap(), "01 01");
        assert_eq!(formatter.format_locale(&utc("2024-01-08 00:00:00"), Some("%U %W")).unwrap(), "01 02");
        assert_eq!(formatter.format_locale(&utc("2024-01-10 00:00:00"), Some("%U %W")).unwrap(), "01 02");
        assert_eq!(formatter.format_locale(&utc("2024-01-14 00:00:00"), Some("%U %W")).unwrap(), "02 02");
    }

    #[test]
    fn test_century_and_short_iso_year() {
        let formatter = formatter();
        assert_eq!(formatter.format_locale(&utc("2012-09-12 00:00:00"), Some("%C")).unwrap(), "20");
        assert_eq!(formatter.format_locale(&utc("1999-09-12 00:00:00"), Some("%C")).unwrap(), "19");
        // 2021-01-01 belongs to ISO year 2020.
        assert_eq!(formatter.format_locale(&utc("2021-01-01 00:00:00"), Some("%g")).unwrap(), "20");
        assert_eq!(formatter.format_locale(&utc("2012-09-12 00:00:00"), Some("%g")).unwrap(), "12");
    }

    #[test]
    fn test_period_markers() {
        let formatter = formatter();
        let evening = utc("2012-09-12 23:42:53");
        let morning = utc("2012-09-12 08:00:00");
        assert_eq!(formatter.format_locale(&evening, Some("%p")).unwrap(), "PM");
        assert_eq!(formatter.format_locale(&morning, Some("%P")).unwrap(), "am");
        assert_eq!(formatter.format_locale(&evening, Some("%r")).unwrap(), "11:42:53 PM");
    }

    #[test]
    fn test_period_markers_outside_verified_locales() {
        let formatter = formatter().with_locale("fr_FR".parse().unwrap());
        let evening = utc("2012-09-12 23:42:53");
        assert_eq!(formatter.format_locale(&evening, Some("%p")).unwrap(), "");
        // The empty marker is trimmed away.
        assert_eq!(formatter.format_locale(&evening, Some("%r")).unwrap(), "11:42:53");
    }

    #[test]
    fn test_locale_representation_fallback() {
        let formatter = formatter();
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(
            formatter.format_locale(&when, Some("%c")).unwrap(),
            "Wed 12 Sep 2012 23:42:53 GMT"
        );
        assert_eq!(formatter.format_locale(&when, Some("%x")).unwrap(), "09/12/2012");
        assert_eq!(formatter.format_locale(&when, Some("%X")).unwrap(), "11:42:53 PM");
    }

    #[derive(Debug)]
    struct Canned(&'static str);

    impl LocaleDateBackend for Canned {
        fn format(&self, _: &str, _: &str, _: &str, _: char) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn test_backend_output_gets_zone_suffix() {
        let when = utc("2012-09-12 23:42:53");
        {
            let formatter = formatter().with_backend(Box::new(Canned("Wed 12 Sep 2012 11:42:53 PM")));
            assert_eq!(
                formatter.format_locale(&when, Some("%c")).unwrap(),
                "Wed 12 Sep 2012 11:42:53 PM GMT"
            );
        }

        {
            let formatter = formatter().with_backend(Box::new(Canned("Wed 12 Sep 2012 23:42:53 +0300")));
            assert_eq!(
                formatter.format_locale(&when, Some("%c")).unwrap(),
                "Wed 12 Sep 2012 23:42:53 +0300"
            );
        }
    }

    #[test]
    fn test_format_utc_leaves_argument_untouched() {
        let zone = Zone::from_id("Europe/Istanbul").unwrap();
        let when = DateTime::parse("2012-09-12 23:42:53", zone).unwrap();
        let formatter = formatter();
        assert_eq!(
            formatter.format_utc(&when, Some(crate::format::HTTP)).unwrap(),
            "Wed, 12 Sep 2012 20:42:53 GMT"
        );
        assert_eq!(when.offset(), 10800);
        assert_eq!(
            formatter.format(&when, Some(crate::format::ISO)).unwrap(),
            "2012-09-12T23:42:53+03:00"
        );
    }

    #[test]
    fn test_ago_yesterday() {
        let formatter = formatter();
        let now = utc("2024-01-10 12:00:00");
        let when = utc("2024-01-09 12:00:00");
        assert_eq!(
            formatter.format_ago_from(&when, &now, None, true).unwrap(),
            "Yesterday, 12:00"
        );
        assert_eq!(
            formatter.format_ago_from(&when, &now, None, false).unwrap(),
            "Yesterday"
        );
    }

    #[test]
    fn test_ago_weekday_range() {
        let formatter = formatter();
        let now = utc("2024-01-10 12:00:00");
        // Two days back is a Monday.
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-08 12:00:00"), &now, None, true).unwrap(),
            "Monday, 12:00"
        );
        // Seven days back still falls in the weekday range.
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-03 12:00:00"), &now, None, false).unwrap(),
            "Wednesday"
        );
    }

    #[test]
    fn test_ago_beyond_a_week() {
        let formatter = formatter();
        let now = utc("2024-01-10 12:00:00");
        let when = utc("2024-01-02 12:00:00");
        assert_eq!(
            formatter.format_ago_from(&when, &now, None, true).unwrap(),
            "02 January 2024, 12:00"
        );
        assert_eq!(
            formatter.format_ago_from(&when, &now, None, false).unwrap(),
            "02 January 2024"
        );
        assert_eq!(
            formatter.format_ago_from(&when, &now, Some("%F"), true).unwrap(),
            "2024-01-02"
        );
    }

    #[test]
    fn test_ago_hours_and_minutes() {
        let formatter = formatter();
        let now = utc("2024-01-10 12:00:00");
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-10 10:00:00"), &now, None, true).unwrap(),
            "2 hours"
        );
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-10 11:00:00"), &now, None, true).unwrap(),
            "1 hour"
        );
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-10 11:59:00"), &now, None, true).unwrap(),
            "1 minute"
        );
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-10 11:58:00"), &now, None, true).unwrap(),
            "2 minutes"
        );
    }

    #[test]
    fn test_ago_just_now() {
        let formatter = formatter();
        let now = utc("2024-01-10 12:00:00");
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-10 11:59:50"), &now, None, true).unwrap(),
            "Just now"
        );
    }

    #[test]
    fn test_ago_translated_words() {
        let mut intl = Intl::new();
        intl.set(
            "tr_TR",
            crate::intl::Translation::new()
                .with_word("yesterday", "Dün")
                .with_word("now", "Şimdi"),
        );
        let formatter = formatter().with_locale("tr_TR".parse().unwrap()).with_intl(intl);
        let now = utc("2024-01-10 12:00:00");
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-09 12:00:00"), &now, None, false).unwrap(),
            "Dün"
        );
        assert_eq!(
            formatter.format_ago_from(&utc("2024-01-10 11:59:55"), &now, None, true).unwrap(),
            "Şimdi"
        );
    }

    #[test]
    fn test_has_zone_suffix() {
        assert!(has_zone_suffix("Wed 12 Sep 2012 23:42:53 GMT"));
        assert!(has_zone_suffix("Wed 12 Sep 2012 23:42:53 +0300"));
        assert!(has_zone_suffix("Wed 12 Sep 2012 23:42:53 -05"));
        assert!(!has_zone_suffix("Wed 12 Sep 2012 23:42:53"));
        assert!(!has_zone_suffix("Wed 12 Sep 2012 11:42:53 PM"));
    }
}
