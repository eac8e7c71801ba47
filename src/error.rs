// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the crate.
//!
//! Every failure is raised synchronously at the point of detection and
//! aborts the operation with no partial output. The only silent degrade in
//! the crate is the `%c`/`%x`/`%X` subprocess fallback, which is not an
//! error path at all (see `backend`).

use thiserror::Error;

/// Errors produced by zone resolution, locale parsing and formatting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Zone id argument was the empty string.
    #[error("empty time zone id")]
    EmptyTimeZoneId,

    /// Zone id is non-empty but fails format validation or database lookup.
    #[error("invalid time zone id `{0}`, use UTC, Xxx/Xxx, ±NN or ±NN:NN convention")]
    InvalidTimeZoneId(String),

    /// Unrecognized zone group name in a listing filter.
    #[error("invalid zone group `{0}`, use a region group, UTC, All or PerCountry")]
    InvalidGroup(String),

    /// Country listing filter is not a two-letter code.
    #[error("country must be a two-letter ISO 3166-1 code, `{0}` given")]
    InvalidCountry(String),

    /// Formatting requested with no pattern available from any source.
    #[error("no format yet, set a format or pass one as argument")]
    MissingFormat,

    /// Unrecognized `%`-letter directive in a locale format pattern.
    #[error("invalid format directive `{0}`")]
    InvalidFormatDirective(String),

    /// Unparseable date/time text or out-of-range numeric timestamp.
    #[error("invalid date/time input `{0}`")]
    InvalidDateTimeInput(String),

    /// Unparseable locale tag.
    #[error("invalid locale `{0}`, use language[_COUNTRY][.encoding] convention")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, Error>;
