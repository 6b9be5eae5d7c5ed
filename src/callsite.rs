// Copyright 2025 the serlog authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

/// Source location of a log call, captured by [`callsite!`](crate::callsite)
/// at the point of logging. Transient; used only to render the decorated
/// line, never stored.
#[derive(Clone, Copy, Debug)]
pub struct CallSite {
    /// Path of the file containing the call, as reported by `file!()`.
    pub file: &'static str,
    /// Name of the enclosing function, without its module path.
    pub func: &'static str,
    /// 1-based line number of the call.
    pub line: u32,
}

/// Captures the current file, enclosing function name and line number as a
/// [`CallSite`].
///
/// The function name comes from `type_name_of_val` on a nested item, which
/// yields the full module path; everything up to the last `::` is stripped so
/// the decorated line stays short.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn f() {}
        let path = ::core::any::type_name_of_val(&f);
        // "crate::module::enclosing::f" -> "enclosing"
        let path = path.strip_suffix("::f").unwrap_or(path);
        let func = match path.rfind("::") {
            Some(start) => &path[start + 2..],
            None => path,
        };
        $crate::CallSite {
            file: ::core::file!(),
            func,
            line: ::core::line!(),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn captures_enclosing_function_name() {
        let site = callsite!();
        assert_eq!(site.func, "captures_enclosing_function_name");
        assert!(site.file.ends_with("callsite.rs"));
        assert!(site.line > 0);
    }

    #[test]
    fn captures_distinct_lines() {
        let first = callsite!();
        let second = callsite!();
        assert!(second.line > first.line);
    }
}
