// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Time zone resolution and metadata.
//!
//! A [`Zone`] is either UTC, a named IANA zone backed by the chrono-tz
//! database, or a fixed UTC offset. Resolving an id yields a
//! [`TimeZoneInfo`] snapshot (offset taken at resolution time); the
//! transition record is computed only on request.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::{Error, Result};
use crate::zone_data;

/// A resolved time zone value.
///
/// The UTC variant replaces a dedicated UTC subtype: pinning a date/time to
/// UTC is composition over this enum, not inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    Named(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    /// The system default zone, UTC when discovery fails.
    pub fn system() -> Self {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|id| id.parse::<Tz>().ok())
            .map(Zone::Named)
            .unwrap_or(Zone::Utc)
    }

    /// Resolve an id to a zone value.
    ///
    /// The empty string and ids failing [`is_valid_id`] or the database
    /// lookup are rejected.
    pub fn from_id(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::EmptyTimeZoneId);
        }
        if !is_valid_id(id) {
            return Err(Error::InvalidTimeZoneId(id.to_string()));
        }
        if id == "UTC" {
            return Ok(Zone::Utc);
        }
        if let Some(offset) = parse_offset_id(id) {
            return Ok(Zone::Fixed(offset));
        }
        id.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| Error::InvalidTimeZoneId(id.to_string()))
    }

    pub fn id(&self) -> String {
        match self {
            Zone::Utc => "UTC".to_string(),
            Zone::Named(tz) => tz.name().to_string(),
            Zone::Fixed(offset) => offset_to_code(offset.local_minus_utc()),
        }
    }

    pub fn is_utc(&self) -> bool {
        self.id() == "UTC"
    }

    /// UTC offset in effect at the given instant.
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Named(tz) => instant.with_timezone(tz).offset().fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    /// Zone abbreviation at the given instant; numeric-only zones and
    /// fixed offsets render as the offset code.
    pub fn abbr_at(&self, instant: &DateTime<Utc>) -> String {
        match self {
            Zone::Utc => "UTC".to_string(),
            Zone::Named(tz) => instant.with_timezone(tz).offset().to_string(),
            Zone::Fixed(offset) => offset_to_code(offset.local_minus_utc()),
        }
    }

    /// Whether daylight saving is in effect at the given instant.
    pub fn is_dst_at(&self, instant: &DateTime<Utc>) -> bool {
        match self {
            Zone::Named(tz) => !instant.with_timezone(tz).offset().dst_offset().is_zero(),
            _ => false,
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Zone::from_id(s)
    }
}

/// Resolved metadata for a time zone id, offset taken at resolution time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeZoneInfo {
    pub id: String,
    pub name: String,
    pub offset: i32,
    pub offset_code: String,
}

/// Transition snapshot for a zone at one instant, computed on request.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTransition {
    pub date: String,
    pub time: i64,
    pub utime: f64,
    pub abbr: String,
    pub dst: bool,
}

impl TimeZoneInfo {
    pub fn of(zone: &Zone) -> Self {
        Self::at(zone, Utc::now())
    }

    pub(crate) fn at(zone: &Zone, instant: DateTime<Utc>) -> Self {
        let id = zone.id();
        let name = id_to_name(&id);
        let offset = zone.offset_at(&instant).local_minus_utc();
        let offset_code = offset_to_code(offset);
        Self { id, name, offset, offset_code }
    }

    /// Current transition record for this zone.
    pub fn transition(&self) -> Result<ZoneTransition> {
        let zone = Zone::from_id(&self.id)?;
        let instant = Utc::now();
        let local = instant.with_timezone(&zone.offset_at(&instant));
        Ok(ZoneTransition {
            date: local.to_rfc3339_opts(SecondsFormat::Secs, false),
            time: instant.timestamp(),
            utime: instant.timestamp() as f64
                + f64::from(instant.timestamp_subsec_micros()) / 1_000_000.0,
            abbr: zone.abbr_at(&instant),
            dst: zone.is_dst_at(&instant),
        })
    }
}

/// Resolve an id to its metadata.
pub fn resolve(id: &str) -> Result<TimeZoneInfo> {
    Ok(TimeZoneInfo::of(&Zone::from_id(id)?))
}

/// Whether an id has a resolvable shape: exactly `UTC`, a fixed offset
/// (`±HH` / `±HH:MM`) or `Region/City[/Sub]`. The bare abbreviation `Z`
/// and anything shorter than 3 characters are rejected as too ambiguous.
pub fn is_valid_id(id: &str) -> bool {
    if id.len() < 3 {
        return false;
    }
    if id == "UTC" {
        return true;
    }
    is_offset_id(id) || is_region_id(id)
}

fn is_offset_id(id: &str) -> bool {
    let b = id.as_bytes();
    if b[0] != b'+' && b[0] != b'-' {
        return false;
    }
    match b.len() {
        3 => b[1].is_ascii_digit() && b[2].is_ascii_digit(),
        6 => {
            b[1].is_ascii_digit()
                && b[2].is_ascii_digit()
                && b[3] == b':'
                && b[4].is_ascii_digit()
                && b[5].is_ascii_digit()
        }
        _ => false,
    }
}

fn is_region_id(id: &str) -> bool {
    let mut segments = 0;
    for segment in id.split('/') {
        let word = !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'+');
        if !word {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

fn parse_offset_id(id: &str) -> Option<FixedOffset> {
    if !is_offset_id(id) {
        return None;
    }
    let hours: i32 = id[1..3].parse().ok()?;
    let minutes: i32 = if id.len() == 6 { id[4..6].parse().ok()? } else { 0 };
    let seconds = hours * 3600 + minutes * 60;
    let signed = if id.starts_with('-') { -seconds } else { seconds };
    FixedOffset::east_opt(signed)
}

/// Named categories of zone ids used to filter enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneGroup {
    Africa,
    America,
    Antarctica,
    Arctic,
    Asia,
    Atlantic,
    Australia,
    Europe,
    Indian,
    Pacific,
    Utc,
    All,
    PerCountry,
}

impl ZoneGroup {
    fn region_prefix(&self) -> Option<&'static str> {
        match self {
            ZoneGroup::Africa => Some("Africa/"),
            ZoneGroup::America => Some("America/"),
            ZoneGroup::Antarctica => Some("Antarctica/"),
            ZoneGroup::Arctic => Some("Arctic/"),
            ZoneGroup::Asia => Some("Asia/"),
            ZoneGroup::Atlantic => Some("Atlantic/"),
            ZoneGroup::Australia => Some("Australia/"),
            ZoneGroup::Europe => Some("Europe/"),
            ZoneGroup::Indian => Some("Indian/"),
            ZoneGroup::Pacific => Some("Pacific/"),
            _ => None,
        }
    }
}

impl FromStr for ZoneGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // COUNTRY accepted as a shortcut for PER_COUNTRY.
        match s.to_ascii_uppercase().as_str() {
            "AFRICA" => Ok(ZoneGroup::Africa),
            "AMERICA" => Ok(ZoneGroup::America),
            "ANTARCTICA" => Ok(ZoneGroup::Antarctica),
            "ARCTIC" => Ok(ZoneGroup::Arctic),
            "ASIA" => Ok(ZoneGroup::Asia),
            "ATLANTIC" => Ok(ZoneGroup::Atlantic),
            "AUSTRALIA" => Ok(ZoneGroup::Australia),
            "EUROPE" => Ok(ZoneGroup::Europe),
            "INDIAN" => Ok(ZoneGroup::Indian),
            "PACIFIC" => Ok(ZoneGroup::Pacific),
            "UTC" => Ok(ZoneGroup::Utc),
            "ALL" => Ok(ZoneGroup::All),
            "PER_COUNTRY" | "PERCOUNTRY" | "COUNTRY" => Ok(ZoneGroup::PerCountry),
            _ => Err(Error::InvalidGroup(s.to_string())),
        }
    }
}

/// Enumerate known zone ids, optionally filtered by group or country.
///
/// With no filters the sequence places `UTC` first, followed by the
/// database's natural order with no duplicate `UTC` entry. A country given
/// without a group implies per-country filtering.
pub fn list_ids(group: Option<&str>, country: Option<&str>) -> Result<Vec<String>> {
    let group = match (group, country) {
        (Some(g), _) => Some(g.parse::<ZoneGroup>()?),
        (None, Some(_)) => Some(ZoneGroup::PerCountry),
        (None, None) => None,
    };

    let ids = match group {
        None => {
            let mut ids = vec!["UTC".to_string()];
            ids.extend(
                chrono_tz::TZ_VARIANTS
                    .iter()
                    .map(|tz| tz.name())
                    .filter(|name| *name != "UTC")
                    .map(str::to_string),
            );
            ids
        }
        Some(ZoneGroup::All) => chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| tz.name().to_string())
            .collect(),
        Some(ZoneGroup::Utc) => vec!["UTC".to_string()],
        Some(ZoneGroup::PerCountry) => {
            let raw = country.unwrap_or("");
            // Uppercased for typos (eg: tr => TR).
            let code = raw.to_ascii_uppercase();
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(Error::InvalidCountry(raw.to_string()));
            }
            zone_data::zones_for_country(&code)
                .iter()
                .map(|id| id.to_string())
                .collect()
        }
        Some(region) => {
            let prefix = region.region_prefix().unwrap_or_default();
            chrono_tz::TZ_VARIANTS
                .iter()
                .map(|tz| tz.name())
                .filter(|name| name.starts_with(prefix))
                .map(str::to_string)
                .collect()
        }
    };

    Ok(ids)
}

/// As [`list_ids`], resolving each id to its metadata.
pub fn list(group: Option<&str>, country: Option<&str>) -> Result<Vec<TimeZoneInfo>> {
    list_ids(group, country)?
        .iter()
        .map(|id| resolve(id))
        .collect()
}

/// Cosmetic display name for an id (`Europe/Istanbul` → `Europe / Istanbul`).
pub fn id_to_name(id: &str) -> String {
    id.replace('/', " / ").replace('_', " ")
}

/// Offset code for an offset in seconds (`-12600` → `-03:30`).
pub fn offset_to_code(offset: i32) -> String {
    format!(
        "{}{:02}:{:02}",
        if offset < 0 { '-' } else { '+' },
        (offset / 3600).abs(),
        ((offset % 3600) / 60).abs()
    )
}

/// Case-normalize an id (`EUROPE/ISTANBUL` → `Europe/Istanbul`); `UTC`,
/// `GMT` and offset codes pass through uppercased.
pub fn normalize_id(id: &str) -> String {
    let upper = id.to_ascii_uppercase();
    if upper == "UTC" || upper == "GMT" || upper.contains(':') {
        return upper;
    }

    let mut out = String::with_capacity(upper.len());
    let mut word_start = true;
    for ch in upper.chars() {
        out.push(if word_start { ch } else { ch.to_ascii_lowercase() });
        word_start = matches!(ch, '/' | '_' | '-');
    }
    out
}
