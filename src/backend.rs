// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locale formatting backend for the `%c`/`%x`/`%X` directives.
//!
//! The platform's own locale facilities cannot render full locale
//! representations, so the formatter asks a backend. The default backend
//! shells out to `date(1)`; a backend returning `None` makes the formatter
//! degrade to its fixed English rendering, which is the documented
//! best-effort contract for these directives.

use std::fmt;
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Renders a wall-clock date/time under a locale, `None` to decline.
pub trait LocaleDateBackend: fmt::Debug + Send + Sync {
    /// `locale` is an `LC_TIME`-style tag, `offset_code` a `±HH:MM` code,
    /// `wall` a `Y-m-d H:i:s` stamp, `directive` one of `c`/`x`/`X`.
    fn format(&self, locale: &str, offset_code: &str, wall: &str, directive: char)
        -> Option<String>;
}

/// The `date(1)` backend: `LC_TIME=<locale> TZ=<offset> date -d <wall> +%c`
/// with stderr discarded and a hard timeout.
#[derive(Debug, Clone)]
pub struct DateCommand {
    timeout: Duration,
}

impl DateCommand {
    pub fn new() -> Self {
        Self { timeout: DEFAULT_TIMEOUT }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleDateBackend for DateCommand {
    fn format(
        &self,
        locale: &str,
        offset_code: &str,
        wall: &str,
        directive: char,
    ) -> Option<String> {
        let format_arg = match directive {
            'c' => "+%c",
            'x' => "+%x",
            'X' => "+%X",
            _ => return None,
        };

        let mut child = match Command::new("date")
            .env("LC_TIME", locale)
            .env("TZ", offset_code)
            .arg("-d")
            .arg(wall)
            .arg(format_arg)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(error) => {
                debug!(error = %error, "date(1) unavailable");
                return None;
            },
        };

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    warn!(timeout = ?self.timeout, "date(1) timed out, killing");
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                },
                Ok(None) => std::thread::sleep(POLL_INTERVAL),
                Err(error) => {
                    debug!(error = %error, "date(1) wait failed");
                    return None;
                },
            }
        };

        if !status.success() {
            debug!(status = %status, "date(1) exited nonzero");
            return None;
        }

        let mut output = String::new();
        child.stdout.take()?.read_to_string(&mut output).ok()?;
        let line = output.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }
}

/// A backend that always declines, forcing the fixed-format rendering.
/// Useful where shelling out is unwanted, and for deterministic tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl LocaleDateBackend for NullBackend {
    fn format(&self, _: &str, _: &str, _: &str, _: char) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_backend_declines() {
        assert_eq!(
            NullBackend.format("en_US.UTF-8", "+00:00", "2012-09-12 23:42:53", 'c'),
            None
        );
    }

    #[test]
    fn test_date_command_rejects_other_directives() {
        let backend = DateCommand::with_timeout(Duration::from_millis(100));
        assert_eq!(
            backend.format("en_US.UTF-8", "+00:00", "2012-09-12 23:42:53", 'Y'),
            None
        );
    }
}
