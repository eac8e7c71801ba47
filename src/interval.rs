// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Calendar difference between two points in time.
//!
//! The subtraction itself is delegated to jiff: both instants are rebuilt
//! as zoned values over their fixed offsets, so offsets are respected while
//! the breakdown happens on a shared reference.

use std::fmt;
use std::str::FromStr;

use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Unit, Zoned};

use crate::datetime::DateTime;
use crate::error::{Error, Result};

/// A calendar-field decomposition of the distance between two instants.
///
/// `days` is the platform's own total-elapsed-days count, computed
/// independently of the `year`/`month`/`day` breakdown. The two are not
/// required to agree with any arithmetic relation between them; consumers
/// must not derive one from the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    /// Total elapsed whole days, decoupled from the field breakdown.
    pub days: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub microsecond: i64,
}

/// The difference produced by [`DateTime::diff`].
pub type Diff = Interval;

impl Interval {
    /// Positional constructor for the six calendar fields.
    pub fn of(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self { year, month, day, hour, minute, second, ..Self::default() }
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn with_microsecond(mut self, microsecond: i64) -> Self {
        self.microsecond = microsecond;
        self
    }

    /// Calendar difference from `a` to `b`. With `absolute` the result is
    /// sign-free and symmetric in its arguments.
    pub fn between(a: &DateTime, b: &DateTime, absolute: bool) -> Result<Self> {
        let start = to_zoned(a)?;
        let end = to_zoned(b)?;

        let mut span = start
            .until((Unit::Year, &end))
            .map_err(|e| Error::InvalidDateTimeInput(e.to_string()))?;
        let mut total = start
            .until((Unit::Day, &end))
            .map_err(|e| Error::InvalidDateTimeInput(e.to_string()))?;

        if absolute {
            span = span.abs();
            total = total.abs();
        }

        Ok(Self {
            year: i64::from(span.get_years()),
            month: i64::from(span.get_months()),
            day: i64::from(span.get_days()),
            days: i64::from(total.get_days()),
            hour: i64::from(span.get_hours()),
            minute: span.get_minutes(),
            second: span.get_seconds(),
            microsecond: span.get_milliseconds() * 1000 + span.get_microseconds(),
        })
    }

    /// Whether any calendar field (not `days`) is nonzero.
    pub fn has_diff(&self) -> bool {
        self.year != 0
            || self.month != 0
            || self.day != 0
            || self.hour != 0
            || self.minute != 0
            || self.second != 0
            || self.microsecond != 0
    }
}

fn to_zoned(when: &DateTime) -> Result<Zoned> {
    let timestamp = Timestamp::from_microsecond(when.timestamp_micros())
        .map_err(|e| Error::InvalidDateTimeInput(e.to_string()))?;
    let offset = Offset::from_seconds(when.offset())
        .map_err(|e| Error::InvalidDateTimeInput(e.to_string()))?;
    Ok(timestamp.to_zoned(TimeZone::fixed(offset)))
}

impl fmt::Display for Interval {
    /// ISO-8601 duration, zero fields omitted, `PT0S` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date_empty = self.year == 0 && self.month == 0 && self.day == 0;
        let time_empty = self.hour == 0 && self.minute == 0 && self.second == 0;

        if date_empty && time_empty {
            return f.write_str("PT0S");
        }

        f.write_str("P")?;
        if self.year != 0 {
            write!(f, "{}Y", self.year)?;
        }
        if self.month != 0 {
            write!(f, "{}M", self.month)?;
        }
        if self.day != 0 {
            write!(f, "{}D", self.day)?;
        }
        if !time_empty {
            f.write_str("T")?;
            if self.hour != 0 {
                write!(f, "{}H", self.hour)?;
            }
            if self.minute != 0 {
                write!(f, "{}M", self.minute)?;
            }
            if self.second != 0 {
                write!(f, "{}S", self.second)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Interval {
    type Err = Error;

    /// Parse the [`fmt::Display`] form back; `days` is not part of the
    /// textual round trip.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateTimeInput(s.to_string());
        let body = s.strip_prefix('P').ok_or_else(invalid)?;

        let mut interval = Interval::default();
        let mut in_time = false;
        let mut number = String::new();

        for ch in body.chars() {
            if ch == 'T' {
                if in_time || !number.is_empty() {
                    return Err(invalid());
                }
                in_time = true;
            } else if ch.is_ascii_digit() || ch == '-' {
                number.push(ch);
            } else {
                let value: i64 = number.parse().map_err(|_| invalid())?;
                number.clear();
                match (in_time, ch) {
                    (false, 'Y') => interval.year = value,
                    (false, 'M') => interval.month = value,
                    (false, 'D') => interval.day = value,
                    (true, 'H') => interval.hour = value,
                    (true, 'M') => interval.minute = value,
                    (true, 'S') => interval.second = value,
                    _ => return Err(invalid()),
                }
            }
        }

        if !number.is_empty() {
            return Err(invalid());
        }
        Ok(interval)
    }
}
