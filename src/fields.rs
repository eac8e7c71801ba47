// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Platform field-code formatter.
//!
//! Resolves single-letter field codes (`Y`, `m`, `d`, `H`, ...) against a
//! [`DateTime`]'s wall clock, with no locale translation: names render in
//! English. `'...'` runs are literal text, a doubled `''` escapes a quote,
//! and letters with no field meaning pass through unchanged.

use chrono::{Datelike, NaiveDate, Timelike};

use crate::datetime::DateTime;

/// Day names, Monday-first; the locale-agnostic defaults.
pub(crate) static DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names, January-first.
pub(crate) static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a field-code pattern against `when`'s wall clock.
pub(crate) fn format_fields(when: &DateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    for literal in chars.by_ref() {
                        if literal == '\'' {
                            break;
                        }
                        out.push(literal);
                    }
                }
            },
            'a'..='z' | 'A'..='Z' => format_field(when, ch, &mut out),
            _ => out.push(ch),
        }
    }

    out
}

fn format_field(when: &DateTime, code: char, out: &mut String) {
    let local = when.local();

    match code {
        // Day.
        'd' => push_padded(out, i64::from(local.day()), 2),
        'j' => push_int(out, i64::from(local.day())),
        'D' => out.push_str(&DAYS[local.weekday().num_days_from_monday() as usize][..3]),
        'l' => out.push_str(DAYS[local.weekday().num_days_from_monday() as usize]),
        'N' => push_int(out, i64::from(local.weekday().number_from_monday())),
        'S' => out.push_str(ordinal_suffix(local.day())),
        'w' => push_int(out, i64::from(local.weekday().num_days_from_sunday())),
        'z' => push_int(out, i64::from(local.ordinal0())),

        // Week.
        'W' => push_padded(out, i64::from(local.iso_week().week()), 2),

        // Month.
        'F' => out.push_str(MONTHS[local.month0() as usize]),
        'm' => push_padded(out, i64::from(local.month()), 2),
        'M' => out.push_str(&MONTHS[local.month0() as usize][..3]),
        'n' => push_int(out, i64::from(local.month())),
        't' => push_int(out, days_in_month(local.year(), local.month())),
        'L' => push_int(out, i64::from(is_leap_year(local.year()))),

        // Year.
        'o' => push_int(out, i64::from(local.iso_week().year())),
        'Y' => push_int(out, i64::from(local.year())),
        'y' => push_padded(out, i64::from(local.year().rem_euclid(100)), 2),

        // Time.
        'a' => out.push_str(if local.hour() < 12 { "am" } else { "pm" }),
        'A' => out.push_str(if local.hour() < 12 { "AM" } else { "PM" }),
        'g' => push_int(out, i64::from(hour12(local.hour()))),
        'G' => push_int(out, i64::from(local.hour())),
        'h' => push_padded(out, i64::from(hour12(local.hour())), 2),
        'H' => push_padded(out, i64::from(local.hour()), 2),
        'i' => push_padded(out, i64::from(local.minute()), 2),
        's' => push_padded(out, i64::from(local.second()), 2),
        'u' => push_padded(out, i64::from(when.subsec_micros()), 6),
        'v' => push_padded(out, i64::from(when.subsec_micros() / 1000), 3),

        // Zone.
        'e' => out.push_str(&when.zone_id()),
        'O' => {
            let offset = when.offset();
            out.push(if offset < 0 { '-' } else { '+' });
            push_padded(out, i64::from((offset / 3600).abs()), 2);
            push_padded(out, i64::from(((offset % 3600) / 60).abs()), 2);
        },
        'P' => out.push_str(&when.offset_code()),
        'T' => out.push_str(&when.zone_abbr()),
        'Z' => push_int(out, i64::from(when.offset())),

        // Full stamps.
        'c' => out.push_str(&format_fields(when, "Y-m-d'T'H:i:sP")),
        'r' => out.push_str(&format_fields(when, "D, d M Y H:i:s O")),
        'U' => push_int(out, when.timestamp()),

        _ => out.push(code),
    }
}

fn push_int(out: &mut String, value: i64) {
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(value));
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(value);
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(digits);
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        clock => clock,
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> i64 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days(),
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;
    use crate::zone::Zone;

    fn utc(text: &str) -> DateTime {
        DateTime::parse(text, Zone::Utc).unwrap()
    }

    #[test]
    fn test_iso() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format(format::ISO), "2012-09-12T23:42:53+00:00");
        assert_eq!(when.format(format::SQL), "2012-09-12 23:42:53");
    }

    #[test]
    fn test_http_date() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format(format::HTTP), "Wed, 12 Sep 2012 23:42:53 GMT");
    }

    #[test]
    fn test_deterministic() {
        let when = utc("2012-09-12 23:42:53.123456");
        assert_eq!(when.format(format::ISO_MS), when.format(format::ISO_MS));
    }

    #[test]
    fn test_day_fields() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format("d j D l N w z"), "12 12 Wed Wednesday 3 3 255");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(utc("2012-09-01 00:00:00").format("jS"), "1st");
        assert_eq!(utc("2012-09-02 00:00:00").format("jS"), "2nd");
        assert_eq!(utc("2012-09-03 00:00:00").format("jS"), "3rd");
        assert_eq!(utc("2012-09-11 00:00:00").format("jS"), "11th");
        assert_eq!(utc("2012-09-12 00:00:00").format("jS"), "12th");
        assert_eq!(utc("2012-09-21 00:00:00").format("jS"), "21st");
        assert_eq!(utc("2012-09-30 00:00:00").format("jS"), "30th");
    }

    #[test]
    fn test_month_and_year_fields() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format("F M n t L o y W"), "September Sep 9 30 1 2012 12 37");
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(utc("2012-09-12 00:00:00").format("g h a A"), "12 12 am AM");
        assert_eq!(utc("2012-09-12 12:00:00").format("g h a A"), "12 12 pm PM");
        assert_eq!(utc("2012-09-12 13:05:00").format("g h G H"), "1 01 13 13");
    }

    #[test]
    fn test_subsecond_fields() {
        let when = utc("2012-09-12 23:42:53.123456");
        assert_eq!(when.format("u"), "123456");
        assert_eq!(when.format("v"), "123");
        assert_eq!(utc("2012-09-12 23:42:53.000120").format("u"), "000120");
    }

    #[test]
    fn test_zone_fields() {
        let zone = Zone::from_id("Europe/Istanbul").unwrap();
        let when = DateTime::parse("2012-09-12 23:42:53", zone).unwrap();
        assert_eq!(when.format("e"), "Europe/Istanbul");
        assert_eq!(when.format("T"), "EEST");
        assert_eq!(when.format("O"), "+0300");
        assert_eq!(when.format("P"), "+03:00");
        assert_eq!(when.format("Z"), "10800");
    }

    #[test]
    fn test_full_stamps() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format("c"), "2012-09-12T23:42:53+00:00");
        assert_eq!(when.format("r"), "Wed, 12 Sep 2012 23:42:53 +0000");
        assert_eq!(when.format("U"), "1347493373");
    }

    #[test]
    fn test_quoted_literals() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format("'at' H:i"), "at 23:42");
        assert_eq!(when.format("H''i"), "23'42");
    }

    #[test]
    fn test_unknown_letter_passes_through() {
        let when = utc("2012-09-12 23:42:53");
        assert_eq!(when.format("Q"), "Q");
    }
}
