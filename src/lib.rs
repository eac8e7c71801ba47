// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale-aware date/time formatting utilities on top of chrono.
//!
//! This crate does not implement its own calendar arithmetic, time zone
//! database or clock; it wraps the ecosystem's date/time engines (chrono,
//! chrono-tz, jiff) and adds convenience layers on top:
//!
//! - **Formatting**: platform field-code patterns (`Y-m-d H:i:s`) and
//!   strftime-style locale patterns (`%d %B %Y, %R`) with translation
//!   tables, plus named constants for the ISO, SQL, HTTP and cookie forms.
//! - **Relative time**: "Yesterday, 12:30", weekday names inside a week,
//!   "2 hours", "Just now".
//! - **Time zone metadata**: id validation and normalization, offset and
//!   abbreviation lookup, region- and country-filtered zone listing.
//! - **Calendar differences**: an [`Interval`] value with an ISO-8601
//!   textual form, produced by [`DateTime::diff`].
//!
//! # Example
//!
//! ```no_run
//! use dater::{DateTime, Formatter, Zone, format};
//!
//! let zone = Zone::from_id("Europe/Istanbul")?;
//! let when = DateTime::parse("2012-09-12 23:42:53", zone)?;
//!
//! let formatter = Formatter::new();
//! assert_eq!(
//!     formatter.format(&when, Some(format::ISO))?,
//!     "2012-09-12T23:42:53+03:00"
//! );
//! assert_eq!(
//!     formatter.format_locale(&when, Some("%d %B %Y, %R"))?,
//!     "12 September 2012, 23:42"
//! );
//! # Ok::<(), dater::Error>(())
//! ```
//!
//! Formatting is a pure function of its inputs: locale and zone travel as
//! values, and no process-global state is read or written apart from the
//! optional `date(1)` subprocess behind the `%c`/`%x`/`%X` directives.

mod backend;
mod datetime;
mod error;
mod fields;
pub mod format;
mod formatter;
mod interval;
mod intl;
mod locale;
mod zone;
mod zone_data;

pub use backend::{DateCommand, LocaleDateBackend, NullBackend};
pub use datetime::{DateTime, DateTimeInput};
pub use error::{Error, Result};
pub use formatter::Formatter;
pub use interval::{Diff, Interval};
pub use intl::{Intl, IntlKey, Periods, Translation};
pub use locale::{Locale, DEFAULT_ENCODING};
pub use zone::{
    id_to_name, is_valid_id, list, list_ids, normalize_id, offset_to_code, resolve,
    TimeZoneInfo, Zone, ZoneGroup, ZoneTransition,
};
