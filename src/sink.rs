// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use embedded_io::Write;

/// Transport for finished log lines.
///
/// The logger calls [`emit`](Sink::emit) exactly once per record that passes
/// the level filter, with the fully decorated line (escape codes and trailing
/// CR+LF included, possibly truncated to the line buffer capacity). Under the
/// `lock` build the call happens inside the logger's critical section, so an
/// implementation must not log recursively.
///
/// The sink owns the actual transport (UART, semihosting, a test buffer) and
/// its failures: the logger neither observes nor reports them.
pub trait Sink: Send {
    /// Writes one decorated line.
    fn emit(&mut self, line: &str);
}

impl<F: FnMut(&str) + Send> Sink for F {
    fn emit(&mut self, line: &str) {
        self(line)
    }
}

/// Adapts an [`embedded_io::Write`] (e.g. a UART driver) into a [`Sink`].
///
/// Write errors are discarded; a lost log line is not worth a panic path in
/// the logger.
pub struct IoSink<W> {
    writer: W,
}

impl<W: Write + Send> IoSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the adapter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for IoSink<W> {
    fn emit(&mut self, line: &str) {
        let _ = self.writer.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::String;
    use std::vec::Vec;

    #[test]
    fn closure_is_a_sink() {
        let mut captured = String::new();
        {
            let mut sink = |line: &str| captured.push_str(line);
            Sink::emit(&mut sink, "hello\r\n");
        }
        assert_eq!(captured, "hello\r\n");
    }

    #[test]
    fn io_sink_forwards_bytes() {
        let mut sink = IoSink::new(Vec::new());
        sink.emit("[INFO] f: hi\r\n");
        assert_eq!(sink.into_inner(), b"[INFO] f: hi\r\n");
    }
}
