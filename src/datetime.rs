// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The point-in-time value the formatters operate on.
//!
//! A [`DateTime`] couples an absolute instant (microsecond precision) with
//! a [`Zone`] and is immutable: zone conversion produces a new value. The
//! constructors take a tagged [`DateTimeInput`] instead of switching on
//! runtime types.

use std::fmt;

use chrono::{DateTime as ChronoDateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::fields;
use crate::format;
use crate::formatter::Formatter;
use crate::interval::Interval;
use crate::intl::Intl;
use crate::locale::Locale;
use crate::zone::{offset_to_code, Zone};

/// Accepted date/time input variants.
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimeInput {
    /// Epoch seconds.
    Epoch(i64),
    /// Epoch seconds with a fractional microsecond part.
    EpochFloat(f64),
    /// A parseable date/time text.
    Text(String),
}

impl From<i64> for DateTimeInput {
    fn from(seconds: i64) -> Self {
        DateTimeInput::Epoch(seconds)
    }
}

impl From<f64> for DateTimeInput {
    fn from(seconds: f64) -> Self {
        DateTimeInput::EpochFloat(seconds)
    }
}

impl From<&str> for DateTimeInput {
    fn from(text: &str) -> Self {
        DateTimeInput::Text(text.to_string())
    }
}

impl From<String> for DateTimeInput {
    fn from(text: String) -> Self {
        DateTimeInput::Text(text)
    }
}

/// An absolute instant with an associated time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTime {
    instant: ChronoDateTime<Utc>,
    zone: Zone,
}

impl DateTime {
    pub fn new(when: impl Into<DateTimeInput>, zone: Zone) -> Result<Self> {
        match when.into() {
            DateTimeInput::Epoch(seconds) => Self::from_epoch(seconds, zone),
            DateTimeInput::EpochFloat(seconds) => Self::from_epoch_float(seconds, zone),
            DateTimeInput::Text(text) => Self::parse(&text, zone),
        }
    }

    /// The current instant in the system zone.
    pub fn now() -> Self {
        Self::now_in(Zone::system())
    }

    /// The current instant in the given zone.
    pub fn now_in(zone: Zone) -> Self {
        Self { instant: Utc::now(), zone }
    }

    pub fn from_epoch(seconds: i64, zone: Zone) -> Result<Self> {
        let instant = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| Error::InvalidDateTimeInput(seconds.to_string()))?;
        Ok(Self { instant, zone })
    }

    pub fn from_epoch_float(seconds: f64, zone: Zone) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(Error::InvalidDateTimeInput(seconds.to_string()));
        }
        let micros = (seconds * 1_000_000.0).round() as i64;
        let instant = Utc
            .timestamp_micros(micros)
            .single()
            .ok_or_else(|| Error::InvalidDateTimeInput(seconds.to_string()))?;
        Ok(Self { instant, zone })
    }

    /// Parse a compact date/time text, interpreted in the given zone. Text
    /// with an explicit offset (RFC 3339) keeps that offset as its zone;
    /// the empty string means now.
    pub fn parse(text: &str, zone: Zone) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::now_in(zone));
        }

        if let Ok(parsed) = ChronoDateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self {
                instant: parsed.with_timezone(&Utc),
                zone: Zone::Fixed(*parsed.offset()),
            });
        }

        const WALL_FORMATS: [&str; 3] = [
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ];
        for wall_format in WALL_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, wall_format) {
                return Self::from_wall(naive, zone);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::from_wall(date.and_time(NaiveTime::MIN), zone);
        }

        Err(Error::InvalidDateTimeInput(text.to_string()))
    }

    /// Interpret a wall-clock date/time in the given zone.
    pub fn from_wall(naive: NaiveDateTime, zone: Zone) -> Result<Self> {
        let instant = match zone {
            Zone::Utc => Some(Utc.from_utc_datetime(&naive)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|local| local.with_timezone(&Utc)),
            Zone::Named(tz) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc)),
        };
        instant
            .map(|instant| Self { instant, zone })
            .ok_or_else(|| Error::InvalidDateTimeInput(naive.to_string()))
    }

    /// Build from calendar fields in the given zone.
    pub fn from_civil(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        zone: Zone,
    ) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                Error::InvalidDateTimeInput(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;
        Self::from_wall(naive, zone)
    }

    /// The same instant viewed in another zone.
    pub fn with_zone(&self, zone: Zone) -> Self {
        Self { instant: self.instant, zone }
    }

    pub fn to_utc(&self) -> Self {
        self.with_zone(Zone::Utc)
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn timestamp(&self) -> i64 {
        self.instant.timestamp()
    }

    pub fn timestamp_micros(&self) -> i64 {
        self.instant.timestamp_micros()
    }

    /// Epoch seconds with the fractional microseconds, the `U.u` form.
    pub fn timestamp_float(&self) -> f64 {
        self.timestamp_micros() as f64 / 1_000_000.0
    }

    pub fn subsec_micros(&self) -> u32 {
        self.instant.timestamp_subsec_micros()
    }

    /// UTC offset seconds in effect at this instant.
    pub fn offset(&self) -> i32 {
        self.zone.offset_at(&self.instant).local_minus_utc()
    }

    pub fn offset_code(&self) -> String {
        offset_to_code(self.offset())
    }

    pub fn zone_id(&self) -> String {
        self.zone.id()
    }

    pub fn zone_abbr(&self) -> String {
        self.zone.abbr_at(&self.instant)
    }

    /// The wall-clock view of this instant in its zone.
    pub(crate) fn local(&self) -> ChronoDateTime<FixedOffset> {
        self.instant.with_timezone(&self.zone.offset_at(&self.instant))
    }

    /// Format with platform field codes, no locale translation.
    pub fn format(&self, pattern: &str) -> String {
        fields::format_fields(self, pattern)
    }

    /// Calendar difference from this instant to `other`.
    pub fn diff(&self, other: &DateTime, absolute: bool) -> Result<Interval> {
        Interval::between(self, other, absolute)
    }

    /// Relative rendering against now, see [`Formatter::format_ago`].
    pub fn format_ago(
        &self,
        locale: Option<Locale>,
        intl: Option<Intl>,
        pattern: Option<&str>,
        show_time: bool,
    ) -> Result<String> {
        let mut formatter = Formatter::new();
        if let Some(locale) = locale {
            formatter = formatter.with_locale(locale);
        }
        if let Some(intl) = intl {
            formatter = formatter.with_intl(intl);
        }
        formatter.format_ago(self, pattern, show_time)
    }

    /// Locale rendering with the default locale pattern.
    pub fn to_locale_string(
        &self,
        pattern: Option<&str>,
        locale: Option<Locale>,
        intl: Option<Intl>,
    ) -> Result<String> {
        let mut formatter = Formatter::new();
        if let Some(locale) = locale {
            formatter = formatter.with_locale(locale);
        }
        if let Some(intl) = intl {
            formatter = formatter.with_intl(intl);
        }
        formatter.format_locale(self, Some(pattern.unwrap_or(format::LOCALE)))
    }

    /// ISO rendering of the UTC view of this instant.
    pub fn to_utc_string(&self) -> String {
        self.to_utc().format(format::ISO_UTC_MS)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(format::ISO_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wall_clock_in_zone() {
        let zone = Zone::from_id("Europe/Istanbul").unwrap();
        let when = DateTime::parse("2012-09-12 23:42:53", zone).unwrap();
        // EEST, +03:00 in 2012.
        assert_eq!(when.timestamp(), 1_347_482_573);
        assert_eq!(when.offset(), 10800);
    }

    #[test]
    fn test_parse_fraction() {
        let when = DateTime::parse("2012-09-12 23:42:53.123456", Zone::Utc).unwrap();
        assert_eq!(when.subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let when = DateTime::parse("2012-09-12", Zone::Utc).unwrap();
        assert_eq!(when.format("Y-m-d H:i:s"), "2012-09-12 00:00:00");
    }

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let when = DateTime::parse("2012-09-12T23:42:53+02:00", Zone::Utc).unwrap();
        assert_eq!(when.offset(), 7200);
        assert_eq!(when.timestamp(), 1_347_486_173);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            DateTime::parse("not a date", Zone::Utc),
            Err(Error::InvalidDateTimeInput(_))
        ));
    }

    #[test]
    fn test_from_epoch() {
        let when = DateTime::from_epoch(1_347_493_373, Zone::Utc).unwrap();
        assert_eq!(when.format("Y-m-d H:i:s"), "2012-09-12 23:42:53");
    }

    #[test]
    fn test_from_epoch_float_keeps_micros() {
        let when = DateTime::from_epoch_float(1_347_493_373.25, Zone::Utc).unwrap();
        assert_eq!(when.timestamp(), 1_347_493_373);
        assert_eq!(when.subsec_micros(), 250_000);
    }

    #[test]
    fn test_tagged_input() {
        let a = DateTime::new(1_347_493_373_i64, Zone::Utc).unwrap();
        let b = DateTime::new("2012-09-12 23:42:53", Zone::Utc).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_zone_is_non_mutating() {
        let utc = DateTime::from_epoch(1_347_493_373, Zone::Utc).unwrap();
        let istanbul = utc.with_zone(Zone::from_id("Europe/Istanbul").unwrap());
        assert_eq!(utc.offset(), 0);
        assert_eq!(istanbul.offset(), 10800);
        assert_eq!(utc.timestamp(), istanbul.timestamp());
    }

    #[test]
    fn test_display_is_iso_with_micros() {
        let when = DateTime::parse("2012-09-12 23:42:53.000120", Zone::Utc).unwrap();
        assert_eq!(when.to_string(), "2012-09-12T23:42:53.000120+00:00");
    }

    #[test]
    fn test_to_utc_string() {
        let zone = Zone::from_id("Europe/Istanbul").unwrap();
        let when = DateTime::parse("2012-09-12 23:42:53", zone).unwrap();
        assert_eq!(when.to_utc_string(), "2012-09-12T20:42:53.000000Z");
    }
}
