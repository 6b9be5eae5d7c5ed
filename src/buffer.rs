// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use arrayvec::ArrayString;
use core::fmt::{self, Write};

/// Fixed-capacity format buffer that truncates instead of failing.
///
/// `ArrayString`'s own `Write` impl rejects a write that does not fit, which
/// would abort formatting mid-line. Log output instead keeps the longest
/// prefix that fits (cut at a char boundary) and silently drops the rest, so
/// an oversized message can never overrun the buffer or surface an error.
pub(crate) struct ScratchBuf<const CAP: usize> {
    inner: ArrayString<CAP>,
}

impl<const CAP: usize> ScratchBuf<CAP> {
    pub(crate) const fn new() -> Self {
        Self {
            inner: ArrayString::new_const(),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl<const CAP: usize> Write for ScratchBuf<CAP> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.inner.remaining_capacity();
        if s.len() <= room {
            self.inner.push_str(s);
        } else {
            let mut end = room;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            self.inner.push_str(&s[..end]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_within_capacity() {
        let mut buf = ScratchBuf::<16>::new();
        write!(buf, "value={}", 42).unwrap();
        assert_eq!(buf.as_str(), "value=42");
    }

    #[test]
    fn truncates_at_capacity() {
        let mut buf = ScratchBuf::<8>::new();
        write!(buf, "0123456789abcdef").unwrap();
        assert_eq!(buf.as_str(), "01234567");
        assert_eq!(buf.as_str().len(), 8);
    }

    #[test]
    fn truncates_across_multiple_writes() {
        let mut buf = ScratchBuf::<8>::new();
        write!(buf, "abc{}xyz", 12345).unwrap();
        assert_eq!(buf.as_str(), "abc12345");
    }

    #[test]
    fn truncates_at_char_boundary() {
        // 'é' is two bytes; a five-byte buffer cannot hold "aaaaé" so the
        // trailing char is dropped whole.
        let mut buf = ScratchBuf::<5>::new();
        write!(buf, "aaaaé").unwrap();
        assert_eq!(buf.as_str(), "aaaa");
    }
}
