// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use core::fmt::{self, Display, Formatter};

/// Severity of a log record, ordered from least to most severe.
///
/// The ordering is used only for threshold filtering: a record passes iff its
/// level is at least the logger's current minimum.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Notice = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
}

impl Level {
    /// The literal tag embedded in the decorated line, without brackets.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Terminal escape sequence written before the tag, empty for `Info`.
    pub(crate) const fn color(self) -> &'static str {
        match self {
            Self::Debug => "\x1b[32m",
            Self::Info => "",
            Self::Notice => "\x1b[34m",
            Self::Warning => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Critical => "\x1b[31m\x1b[5m",
        }
    }

    /// Escape sequence written after the tag, empty for `Info`.
    pub(crate) const fn reset(self) -> &'static str {
        match self {
            Self::Info => "",
            _ => "\x1b[0m",
        }
    }

    /// Whether the decorated line carries `file:line` in addition to the
    /// function name. Only the levels a human reads while debugging or
    /// triaging a failure get the full location.
    pub(crate) const fn with_location(self) -> bool {
        matches!(self, Self::Debug | Self::Error | Self::Critical)
    }

    /// Recovers a level from its discriminant. Used to decode the logger's
    /// atomic level cell, which only ever holds values stored from a `Level`.
    pub(crate) const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Notice,
            3 => Self::Warning,
            4 => Self::Error,
            _ => Self::Critical,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Notice);
        assert!(Level::Notice < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn raw_round_trip() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Notice,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ] {
            assert_eq!(Level::from_raw(level as u8), level);
        }
    }

    #[test]
    fn info_has_no_escape_codes() {
        assert_eq!(Level::Info.color(), "");
        assert_eq!(Level::Info.reset(), "");
    }
}
