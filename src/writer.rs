//! Line-oriented output buffer and the three statement shapes.
//!
//! The whole script is assembled in memory first; nothing touches the
//! output file until the statement stream is complete (see
//! [`write_if_changed`]).  Every parameter line is one of three shapes:
//! `TAG "value"` (quoted scalar), `TAG value` (unquoted, for ON/OFF and
//! enum values), or `TAG` followed by indented quoted list items — and each
//! degrades to a `# TAG` commented placeholder when there is no value, so
//! the generated file documents every available setting.

use std::path::Path;

use crate::error::Error;
use crate::transform::escape;

#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

// ═══════════════════════════════════════════════════════════════════════════════
//  LineWriter
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct LineWriter {
    out: String,
}

/// Write one formatted line: `wln!(w, "fmt", args...)` or `wln!(w)` for a
/// blank line.
macro_rules! wln {
    ($w:expr) => {
        $w.blank()
    };
    ($w:expr, $($arg:tt)*) => {
        $w.line(&format!($($arg)*))
    };
}
pub(crate) use wln;

impl LineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(NEWLINE);
    }

    pub fn blank(&mut self) {
        self.out.push_str(NEWLINE);
    }

    pub fn into_string(self) -> String {
        self.out
    }

    // ─── Statement shapes ────────────────────────────────────────────────

    /// `  TAG value` — or `  # TAG` when the value is empty.
    pub fn keyword_unquoted(&mut self, keyword: &str, value: &str) {
        if value.is_empty() {
            wln!(self, "  # {keyword}");
        } else {
            wln!(self, "  {keyword} {value}");
        }
    }

    /// `  TAG "value"` — or `  # TAG` when the value is empty.
    ///
    /// A trailing backslash run is stripped before escaping so the value
    /// can never swallow its closing quote.
    pub fn keyword_quoted(&mut self, keyword: &str, value: &str) {
        if value.is_empty() {
            wln!(self, "  # {keyword}");
        } else {
            wln!(
                self,
                "  {keyword} \"{}\"",
                escape("\\\";", value.trim_end_matches('\\'))
            );
        }
    }

    /// `  TAG` plus one indented quoted line per non-empty item — or
    /// `  # TAG` when the list is empty.
    pub fn keyword_list(&mut self, keyword: &str, values: &[String]) {
        if values.is_empty() {
            wln!(self, "  # {keyword}");
            return;
        }

        wln!(self, "  {keyword}");
        for item in values {
            if !item.is_empty() {
                wln!(self, "    \"{}\"", escape("\\\";", item.trim_end_matches('\\')));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Output file
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The existing file already had identical bytes; nothing was written.
    UpToDate,
    Written,
}

/// Write `contents` to `path` unless the file already holds exactly those
/// bytes.  Leaving an up-to-date file untouched preserves its modification
/// time, which downstream incremental builds rely on.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome, Error> {
    if let Ok(existing) = std::fs::read(path) {
        if existing == contents.as_bytes() {
            return Ok(WriteOutcome::UpToDate);
        }
    }

    std::fs::write(path, contents)
        .map_err(|e| Error::new(format!("Failed to write to {}: {e}", path.display())))?;
    Ok(WriteOutcome::Written)
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut LineWriter)) -> String {
        let mut w = LineWriter::new();
        f(&mut w);
        w.into_string()
    }

    #[test]
    fn quoted_scalar_and_placeholder() {
        assert_eq!(
            rendered(|w| w.keyword_quoted("PROJECT_NAME", "Demo")),
            format!("  PROJECT_NAME \"Demo\"{NEWLINE}")
        );
        assert_eq!(
            rendered(|w| w.keyword_quoted("PROJECT_NAME", "")),
            format!("  # PROJECT_NAME{NEWLINE}")
        );
    }

    #[test]
    fn quoted_scalar_escapes_and_trims_trailing_backslashes() {
        assert_eq!(
            rendered(|w| w.keyword_quoted("K", r#"a"b;c\"#)),
            format!("  K \"a\\\"b\\;c\"{NEWLINE}")
        );
    }

    #[test]
    fn unquoted_scalar() {
        assert_eq!(
            rendered(|w| w.keyword_unquoted("DEBUG_MODE", "ON")),
            format!("  DEBUG_MODE ON{NEWLINE}")
        );
        assert_eq!(
            rendered(|w| w.keyword_unquoted("DEBUG_MODE", "")),
            format!("  # DEBUG_MODE{NEWLINE}")
        );
    }

    #[test]
    fn list_block_skips_empty_items() {
        let out = rendered(|w| {
            w.keyword_list(
                "PREPROCESSOR_DEFINITIONS",
                &["A=1".to_string(), String::new(), "B".to_string()],
            )
        });
        assert_eq!(
            out,
            format!(
                "  PREPROCESSOR_DEFINITIONS{NEWLINE}    \"A=1\"{NEWLINE}    \"B\"{NEWLINE}"
            )
        );
    }

    #[test]
    fn empty_list_emits_placeholder() {
        assert_eq!(
            rendered(|w| w.keyword_list("HEADER_SEARCH_PATHS", &[])),
            format!("  # HEADER_SEARCH_PATHS{NEWLINE}")
        );
    }

    #[test]
    fn write_if_changed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");

        assert_eq!(
            write_if_changed(&path, "hello\n").unwrap(),
            WriteOutcome::Written
        );
        let mtime = std::fs::metadata(&path).unwrap().modified().unwrap();

        assert_eq!(
            write_if_changed(&path, "hello\n").unwrap(),
            WriteOutcome::UpToDate
        );
        assert_eq!(
            std::fs::metadata(&path).unwrap().modified().unwrap(),
            mtime
        );

        assert_eq!(
            write_if_changed(&path, "changed\n").unwrap(),
            WriteOutcome::Written
        );
    }
}
