// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Bridge from the `log` facade into this logger.
//!
//! Lets dependencies that log through `log` share the process sink. `log`
//! has no `Notice` or `Critical`, so records map onto the nearest level;
//! `Trace` collapses into `Debug`.

use crate::callsite::CallSite;
use crate::level::Level;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct Facade;

static FACADE: Facade = Facade;

const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl Log for Facade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        crate::global().enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        // `log` records carry a module path rather than a function name.
        let site = CallSite {
            file: record.file_static().unwrap_or("<unknown>"),
            func: record.module_path_static().unwrap_or("<unknown>"),
            line: record.line().unwrap_or(0),
        };
        crate::global().log(
            map_level(record.level()),
            site,
            *record.args(),
        );
    }

    fn flush(&self) {}
}

/// Routes the `log` facade into the process-wide logger.
///
/// `max_level` is `log`'s own coarse filter; this logger's threshold still
/// applies on top of it.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&FACADE)?;
    log::set_max_level(max_level);
    Ok(())
}
