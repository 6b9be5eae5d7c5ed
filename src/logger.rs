// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::buffer::ScratchBuf;
use crate::callsite::CallSite;
use crate::level::Level;
use crate::lock::Lock;
use crate::sink::Sink;
use core::fmt::{Arguments, Write};
use core::sync::atomic::{AtomicU8, Ordering};

/// Minimum level a fresh logger lets through.
pub const DEFAULT_LEVEL: Level = Level::Debug;

/// Capacity in bytes of the raw expanded message. Anything longer is cut.
pub const MAX_MSG_LEN: usize = 128;

/// Capacity in bytes of the decorated line handed to the sink.
pub const MAX_LINE_LEN: usize = 255;

/// Filters, formats and dispatches log records to a [`Sink`].
///
/// One process-wide instance lives behind [`global`]; the leveled macros log
/// through it. Separate instances (mainly useful in tests) behave
/// identically.
///
/// The current minimum level is read with a relaxed atomic load on the fast
/// path, so a [`set_level`](Logger::set_level) racing an in-flight call may
/// see one record filtered by the old threshold. Filtering is best-effort by
/// design; the alternative would put a lock acquisition in front of every
/// suppressed record.
pub struct Logger {
    level: AtomicU8,
    sink: Lock<Option<&'static mut dyn Sink>>,
}

impl Logger {
    /// Creates a logger with no sink and the given minimum level.
    ///
    /// Records logged before [`set_sink`](Logger::set_sink) are dropped.
    pub const fn new(level: Level) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            sink: Lock::new(None),
        }
    }

    /// Installs the output sink.
    ///
    /// Call once during single-threaded startup, before any context logs
    /// concurrently. Replacing the sink later is possible but takes the
    /// emit lock, so it serializes against in-flight log calls.
    pub fn set_sink(&self, sink: &'static mut dyn Sink) {
        self.sink.lock().replace(sink);
    }

    /// Sets the minimum level; records below it are suppressed.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Returns the current minimum level.
    pub fn level(&self) -> Level {
        Level::from_raw(self.level.load(Ordering::Relaxed))
    }

    /// Returns whether a record at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Formats one record and hands it to the sink.
    ///
    /// Records below the current minimum level return immediately without
    /// taking the lock. Everything else is expanded into a bounded scratch
    /// buffer, wrapped in the level's decoration and emitted as a single
    /// sink call; both formatting stages truncate silently at their buffer
    /// capacity. The lock is held from before formatting until the sink
    /// returns, so lines from concurrent callers never interleave.
    pub fn log(&self, level: Level, site: CallSite, args: Arguments) {
        if !self.enabled(level) {
            return;
        }

        let mut guard = self.sink.lock();
        let Some(sink) = guard.as_mut() else {
            return;
        };

        let mut msg = ScratchBuf::<MAX_MSG_LEN>::new();
        let _ = msg.write_fmt(args);

        let mut line = ScratchBuf::<MAX_LINE_LEN>::new();
        let _ = if level.with_location() {
            write!(
                line,
                "{}[{}]{} {}:{}({}): {}\r\n",
                level.color(),
                level.tag(),
                level.reset(),
                site.file,
                site.line,
                site.func,
                msg.as_str(),
            )
        } else {
            write!(
                line,
                "{}[{}]{} {}: {}\r\n",
                level.color(),
                level.tag(),
                level.reset(),
                site.func,
                msg.as_str(),
            )
        };

        sink.emit(line.as_str());
    }
}

static LOGGER: Logger = Logger::new(DEFAULT_LEVEL);

/// Returns the process-wide logger the leveled macros log through.
pub fn global() -> &'static Logger {
    &LOGGER
}

/// Installs `sink` on the process-wide logger.
///
/// Call once during single-threaded startup, before any concurrent logging.
pub fn init(sink: &'static mut dyn Sink) {
    LOGGER.set_sink(sink);
}

/// Sets the process-wide minimum level.
pub fn set_level(level: Level) {
    LOGGER.set_level(level);
}
