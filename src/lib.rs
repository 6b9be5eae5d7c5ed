// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Minimal leveled logger for embedded targets.
//!
//! Formats printf-style messages with source location and terminal colors,
//! filters them by a process-wide minimum [`Level`], serializes concurrent
//! calls, and hands each finished line to a user-supplied [`Sink`] such as a
//! UART writer. No allocation; two fixed scratch buffers bound every record
//! and oversized input is silently truncated, never overrun.
//!
//! Install a sink once during single-threaded startup, then log through the
//! leveled macros:
//!
//! ```
//! serlog::init(Box::leak(Box::new(|line: &str| print!("{line}"))));
//! serlog::set_level(serlog::Level::Info);
//!
//! serlog::info!("starting, {} devices", 3);
//! serlog::debug!("suppressed below the Info threshold");
//! ```
//!
//! With the default `lock` feature the emit path is guarded by a spin mutex
//! so lines from concurrent contexts never interleave. Builds without the
//! feature skip locking entirely and must only log from a single context.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

mod buffer;
mod callsite;
#[cfg(feature = "log-compat")]
pub mod compat;
mod level;
mod lock;
mod logger;
mod sink;

pub use callsite::CallSite;
pub use level::Level;
pub use logger::{DEFAULT_LEVEL, Logger, MAX_LINE_LEN, MAX_MSG_LEN, global, init, set_level};
pub use sink::{IoSink, Sink};

/// Logs a formatted message at the given level through the process-wide
/// logger, capturing the call site.
#[macro_export]
macro_rules! logf {
    ($level:expr, $($arg:tt)*) => {
        $crate::global().log($level, $crate::callsite!(), ::core::format_args!($($arg)*))
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::logf!($crate::Level::Debug, $($arg)*) };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::logf!($crate::Level::Info, $($arg)*) };
}

/// Logs at [`Level::Notice`](crate::Level::Notice).
#[macro_export]
macro_rules! notice {
    ($($arg:tt)*) => { $crate::logf!($crate::Level::Notice, $($arg)*) };
}

/// Logs at [`Level::Warning`](crate::Level::Warning).
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => { $crate::logf!($crate::Level::Warning, $($arg)*) };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::logf!($crate::Level::Error, $($arg)*) };
}

/// Logs at [`Level::Critical`](crate::Level::Critical).
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => { $crate::logf!($crate::Level::Critical, $($arg)*) };
}


#[cfg(test)]
mod tests {
    extern crate std;

    use crate::Level;
    use crate::test_support::{capture, take};
    use std::format;

    #[test]
    fn leveled_macros_log_through_the_global_logger() {
        let _guard = crate::test_support::GLOBAL_LOGGER.lock().unwrap();
        let (sink, lines) = capture();
        crate::init(sink);
        crate::set_level(Level::Debug);

        info!("marker {}", 1);
        warning!("marker {}", 2);
        debug!("marker {}", 3);

        let emitted = take(&lines);
        assert_eq!(emitted.len(), 3);
        assert!(emitted[0].contains("[INFO]"));
        assert!(emitted[0].contains("marker 1"));
        assert!(
            emitted[0].contains("leveled_macros_log_through_the_global_logger"),
            "call site function missing: {:?}",
            emitted[0],
        );
        assert!(emitted[1].contains("\x1b[33m[WARNING]\x1b[0m"));
        assert!(emitted[2].contains(&format!("{}:", file!())));
    }

    #[test]
    fn logf_takes_an_explicit_level() {
        let _guard = crate::test_support::GLOBAL_LOGGER.lock().unwrap();
        let (sink, lines) = capture();
        crate::init(sink);
        crate::set_level(Level::Debug);

        logf!(Level::Notice, "explicit {}", 9);

        let emitted = take(&lines);
        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].contains("[NOTICE]"));
        assert!(emitted[0].contains("explicit 9"));
    }
}
