// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Named format patterns.
//!
//! Field-code patterns (`Y`, `m`, `d`, ...) go through the platform field
//! formatter verbatim; `'...'` runs are literal text. The `LOCALE`/`AGO`
//! patterns use `%`-directives and belong to the locale formatter.

/// `2012-09-12 23:42:53`
pub const SQL: &str = "Y-m-d H:i:s";

/// `2012-09-12 23:42:53 +03:00`
pub const TZ: &str = "Y-m-d H:i:s P";

/// `2012-09-12 23:42:53.123456`
pub const MS: &str = "Y-m-d H:i:s.u";

/// `2012-09-12 23:42:53.123456 +03:00`
pub const TZ_MS: &str = "Y-m-d H:i:s.u P";

/// [`SQL`] with microseconds.
pub const SQL_MS: &str = MS;

/// `12 September 2012, 23:42`
pub const LOCALE: &str = "%d %B %Y, %R";

/// `12 September 2012`
pub const LOCALE_SHORT: &str = "%d %B %Y";

/// Fallback pattern for relative rendering beyond one week.
pub const AGO: &str = "%d %B %Y, %R";

/// As [`AGO`], date only.
pub const AGO_SHORT: &str = "%d %B %Y";

/// RFC 7231 date, always rendered against UTC-converted input.
pub const HTTP: &str = "D, d M Y H:i:s 'GMT'";

/// RFC 6265 cookie date.
pub const HTTP_COOKIE: &str = HTTP;

/// `2012-09-12T23:42:53+03:00`
pub const ISO: &str = "Y-m-d'T'H:i:sP";

/// `2012-09-12T23:42:53.123456+03:00`
pub const ISO_MS: &str = "Y-m-d'T'H:i:s.uP";

/// `2012-09-12T20:42:53Z`
pub const ISO_UTC: &str = "Y-m-d'T'H:i:s'Z'";

/// `2012-09-12T20:42:53.123456Z`
pub const ISO_UTC_MS: &str = "Y-m-d'T'H:i:s.u'Z'";
