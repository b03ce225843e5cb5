//! Pure value transforms used by the emission engine.
//!
//! Every function here maps a raw attribute string to its output form
//! without touching the filesystem or the output buffer.  Transforms never
//! fail: a value outside a transform's domain degrades to an empty result,
//! which the caller renders as a commented placeholder.
//!
//! The preprocessor-definitions attribute carries its own mini-grammar
//! (whitespace/comma-separated `NAME=value` tokens with backslash-escaped
//! spaces and commas inside values); that one is parsed with [`chumsky`].

use chumsky::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════════
//  Escaping & quoting
// ═══════════════════════════════════════════════════════════════════════════════

/// Backslash-escape every occurrence of a character from `chars_to_escape`.
pub fn escape(chars_to_escape: &str, value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if chars_to_escape.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Strip one layer of surrounding quotes, if present.
///
/// Only a leading `"` or `'` triggers unquoting; the trailing quote is
/// removed when it matches the leading one.
pub fn unquoted(s: &str) -> &str {
    let Some(first) = s.chars().next() else {
        return s;
    };
    if first != '"' && first != '\'' {
        return s;
    }
    let rest = &s[1..];
    match rest.strip_suffix(first) {
        Some(inner) => inner,
        None => rest,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Identifiers & names
// ═══════════════════════════════════════════════════════════════════════════════

/// Reduce a string to a C-like identifier.
///
/// Empty input maps to the `"unknown"` fallback.  Punctuation commonly used
/// in project names becomes `_`, everything else outside `[A-Za-z0-9_]` is
/// dropped, and a leading digit gets an underscore prefix.
pub fn make_valid_identifier(s: &str) -> String {
    if s.is_empty() {
        return "unknown".to_string();
    }

    let replaced: String = s
        .chars()
        .map(|c| if ".,;:/@".contains(c) { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match replaced.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{replaced}"),
        _ => replaced,
    }
}

/// Derive a valid build-configuration name: runs of characters outside
/// `[A-Za-z0-9_]` collapse to a single `_`, with no leading or trailing
/// separator.
pub fn make_valid_configuration_name(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join("_")
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Paths
// ═══════════════════════════════════════════════════════════════════════════════

fn is_absolute_path(path: &str) -> bool {
    let mut chars = path.chars();
    match chars.next() {
        Some('/') | Some('~') | Some('\\') => true,
        Some(c) if c.is_ascii_alphabetic() => chars.next() == Some(':'),
        _ => false,
    }
}

/// Render a descriptor path for the output script: relative paths are
/// anchored at the script's own directory, and separators are normalized.
pub fn cmake_path(path: &str) -> String {
    let anchored = if is_absolute_path(path) {
        path.to_string()
    } else {
        format!("${{CMAKE_CURRENT_LIST_DIR}}/{path}")
    };
    anchored.replace('\\', "/")
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Scalar coercions
// ═══════════════════════════════════════════════════════════════════════════════

/// Leading-integer parse: optional whitespace, optional `-`, then digits.
/// Trailing non-digits are ignored; no digits yields 0.
pub fn int_value(s: &str) -> i64 {
    let t = s.trim_start();
    let (negative, digits) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t),
    };

    let mut value: i64 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(i64::from(d)),
            None => break,
        }
    }

    if negative { -value } else { value }
}

/// Loose boolean coercion: any non-zero leading integer, `true`, or `yes`.
pub fn bool_like(s: &str) -> bool {
    int_value(s) != 0
        || s.trim().eq_ignore_ascii_case("true")
        || s.trim().eq_ignore_ascii_case("yes")
}

/// Human-readable byte count ("10.0 KB", "1 byte", "512 bytes").
pub fn description_of_size_in_bytes(bytes: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = 1024 * KB;
    const GB: i64 = 1024 * MB;

    if bytes == 1 {
        "1 byte".to_string()
    } else if bytes < KB {
        format!("{bytes} bytes")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  List transforms
// ═══════════════════════════════════════════════════════════════════════════════

/// Split on any of `break_chars`, honoring `quote_chars` for grouping.
///
/// Quote characters are kept in the tokens; empty tokens between
/// consecutive separators are kept too (callers that care filter them).
/// Empty input yields no tokens.
pub fn tokens(input: &str, break_chars: &str, quote_chars: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in input.chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
        } else if quote_chars.contains(c) {
            quote = Some(c);
            current.push(c);
        } else if break_chars.contains(c) {
            out.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    out.push(current);
    out
}

/// Split on whitespace, like a shell word-splitter without quote handling.
pub fn whitespace_tokens(input: &str) -> Vec<String> {
    tokens(input, " \t\r\n", "")
}

/// Split a search-path attribute (`;`- or newline-separated), dropping
/// empty segments and one layer of quotes around each path.
pub fn parse_search_paths(input: &str) -> Vec<String> {
    input
        .split([';', '\r', '\n'])
        .filter(|p| !p.is_empty())
        .map(|p| unquoted(p).to_string())
        .collect()
}

/// Map raw id codes to their labels, in *table* order.
///
/// Unrecognized ids are dropped; table rows with an empty id never match.
pub fn ids_to_strings(ids: &[String], table: &[(&str, &str)]) -> Vec<String> {
    table
        .iter()
        .filter(|(id, _)| !id.is_empty() && ids.iter().any(|i| i == id))
        .map(|(_, label)| label.to_string())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Preprocessor definitions — chumsky grammar
// ═══════════════════════════════════════════════════════════════════════════════

/// Build the parser for the preprocessor-definitions attribute.
///
/// ```text
/// definitions = (token)*                 separated by whitespace
/// token       = name ('=' ' '* value)?   | '=' ' '* value   (dropped)
/// name        = (char not in whitespace, '=')+
/// value       = (('\' (' '|',')) | char not in whitespace, ',')*  [',']
/// ```
///
/// A trailing `,` terminates a value; `\ ` and `\,` escape a space or comma
/// inside one.  A value without a name is consumed but dropped.
fn definitions_parser<'a>()
-> impl Parser<'a, &'a str, Vec<Option<String>>, extra::Err<Simple<'a, char>>> {
    let ws = one_of(" \t\r\n").repeated();

    let value_char = just('\\')
        .ignore_then(one_of(" ,"))
        .or(none_of(" \t\r\n,"));
    let value = value_char
        .repeated()
        .collect::<String>()
        .then_ignore(just(',').or_not());

    let eq_value = ws
        .ignore_then(just('='))
        .ignore_then(just(' ').repeated())
        .ignore_then(value);

    let name = none_of(" \t\r\n=")
        .repeated()
        .at_least(1)
        .collect::<String>();

    let named = name.then(eq_value.clone().or_not()).map(|(name, value)| {
        Some(match value {
            Some(v) if !v.is_empty() => format!("{name}={v}"),
            _ => name,
        })
    });
    let orphan = eq_value.map(|_| None);

    named.or(orphan).padded().repeated().collect()
}

/// Parse a preprocessor-definitions attribute into `NAME` / `NAME=value`
/// entries, in source order.  Malformed input degrades to an empty list.
pub fn parse_preprocessor_definitions(input: &str) -> Vec<String> {
    definitions_parser()
        .parse(input)
        .into_result()
        .map(|tokens| tokens.into_iter().flatten().collect())
        .unwrap_or_default()
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Escaping ─────────────────────────────────────────────────────────

    fn unescape(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn escape_quotes_and_backslashes() {
        assert_eq!(escape("\\\";", r#"a"b\c;d"#), r#"a\"b\\c\;d"#);
        assert_eq!(escape("\\\"", "plain"), "plain");
    }

    proptest! {
        #[test]
        fn escape_round_trips(s in r#"[a-z"\\;]{0,24}"#) {
            prop_assert_eq!(unescape(&escape("\\\";", &s)), s);
        }

        /// An escaped value never ends with an odd number of backslashes,
        /// so it can never swallow the closing quote of its literal.
        #[test]
        fn escaped_value_cannot_terminate_literal(s in r#"[a-z"\\]{0,24}"#) {
            let escaped = escape("\\\";", s.trim_end_matches('\\'));
            let trailing = escaped.len() - escaped.trim_end_matches('\\').len();
            prop_assert_eq!(trailing % 2, 0);
        }
    }

    #[test]
    fn unquoted_strips_matching_quotes() {
        assert_eq!(unquoted("\"path\""), "path");
        assert_eq!(unquoted("'path'"), "path");
        assert_eq!(unquoted("\"path"), "path");
        assert_eq!(unquoted("path\""), "path\"");
        assert_eq!(unquoted("path"), "path");
        assert_eq!(unquoted(""), "");
    }

    // ── Identifiers ──────────────────────────────────────────────────────

    #[test]
    fn identifier_fallback_for_empty() {
        assert_eq!(make_valid_identifier(""), "unknown");
    }

    #[test]
    fn identifier_replaces_and_filters() {
        assert_eq!(make_valid_identifier("my.company"), "my_company");
        assert_eq!(make_valid_identifier("app (beta)"), "appbeta");
        assert_eq!(make_valid_identifier("3dviewer"), "_3dviewer");
    }

    #[test]
    fn configuration_name_collapses_runs() {
        assert_eq!(make_valid_configuration_name("Debug Build"), "Debug_Build");
        assert_eq!(make_valid_configuration_name("Debug   Build"), "Debug_Build");
        assert_eq!(make_valid_configuration_name(" Debug+Build "), "Debug_Build");
        assert_eq!(make_valid_configuration_name("Release_x64"), "Release_x64");
    }

    #[test]
    fn configuration_name_preserves_valid_input() {
        assert_eq!(make_valid_configuration_name("Debug"), "Debug");
    }

    // ── Paths ────────────────────────────────────────────────────────────

    #[test]
    fn cmake_path_anchors_relative_paths() {
        assert_eq!(cmake_path("Source/Main.cpp"), "${CMAKE_CURRENT_LIST_DIR}/Source/Main.cpp");
        assert_eq!(cmake_path("/opt/JUCE"), "/opt/JUCE");
        assert_eq!(cmake_path("~/JUCE"), "~/JUCE");
        assert_eq!(cmake_path(r"C:\JUCE\modules"), "C:/JUCE/modules");
        assert_eq!(cmake_path(r"..\modules"), "${CMAKE_CURRENT_LIST_DIR}/../modules");
    }

    // ── Scalar coercions ─────────────────────────────────────────────────

    #[test]
    fn int_value_parses_leading_integer() {
        assert_eq!(int_value("42"), 42);
        assert_eq!(int_value("  -3"), -3);
        assert_eq!(int_value("1abc"), 1);
        assert_eq!(int_value("abc"), 0);
        assert_eq!(int_value(""), 0);
    }

    #[test]
    fn bool_like_accepts_common_forms() {
        for s in ["1", "true", "TRUE", " yes ", "2"] {
            assert!(bool_like(s), "{s:?} should be true");
        }
        for s in ["0", "false", "no", "", "off"] {
            assert!(!bool_like(s), "{s:?} should be false");
        }
    }

    #[test]
    fn size_descriptions() {
        assert_eq!(description_of_size_in_bytes(1), "1 byte");
        assert_eq!(description_of_size_in_bytes(512), "512 bytes");
        assert_eq!(description_of_size_in_bytes(10240), "10.0 KB");
        assert_eq!(description_of_size_in_bytes(20971520), "20.0 MB");
        assert_eq!(description_of_size_in_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    // ── List transforms ──────────────────────────────────────────────────

    #[test]
    fn tokens_split_and_keep_empties() {
        assert_eq!(tokens("a,b", ",", ""), ["a", "b"]);
        assert_eq!(tokens("a,,b,", ",", ""), ["a", "", "b", ""]);
        assert_eq!(tokens("", ",", ""), Vec::<String>::new());
    }

    #[test]
    fn tokens_honor_quotes() {
        assert_eq!(
            tokens("AVFoundation;'Core Audio'", ",;", "\"'"),
            ["AVFoundation", "'Core Audio'"]
        );
    }

    #[test]
    fn search_paths_drop_empties_and_quotes() {
        assert_eq!(
            parse_search_paths("a/b;\"c d\"\n../e;;"),
            ["a/b", "c d", "../e"]
        );
        assert_eq!(parse_search_paths(""), Vec::<String>::new());
    }

    #[test]
    fn ids_to_strings_uses_table_order() {
        let table: &[(&str, &str)] = &[("x", "X"), ("y", "Y"), ("", "never")];
        let ids = vec!["y".to_string(), "x".to_string(), "z".to_string()];
        assert_eq!(ids_to_strings(&ids, table), ["X", "Y"]);
    }

    // ── Preprocessor definitions ─────────────────────────────────────────

    #[test]
    fn definitions_basic() {
        assert_eq!(
            parse_preprocessor_definitions("FOO=1 BAR=2"),
            ["FOO=1", "BAR=2"]
        );
    }

    #[test]
    fn definitions_without_value() {
        assert_eq!(parse_preprocessor_definitions("NDEBUG"), ["NDEBUG"]);
        assert_eq!(parse_preprocessor_definitions("A= B"), ["A", "B"]);
    }

    #[test]
    fn definitions_comma_separated() {
        assert_eq!(
            parse_preprocessor_definitions("A=1,B=2"),
            ["A=1", "B=2"]
        );
    }

    #[test]
    fn definitions_escaped_spaces_and_commas() {
        assert_eq!(
            parse_preprocessor_definitions(r"NAME=John\ Smith LIST=a\,b"),
            ["NAME=John Smith", "LIST=a,b"]
        );
    }

    #[test]
    fn definitions_spaces_around_equals() {
        assert_eq!(parse_preprocessor_definitions("A = 2"), ["A=2"]);
    }

    #[test]
    fn definitions_orphan_value_is_dropped() {
        assert_eq!(parse_preprocessor_definitions("=5 B=1"), ["B=1"]);
    }

    #[test]
    fn definitions_empty_input() {
        assert_eq!(parse_preprocessor_definitions(""), Vec::<String>::new());
        assert_eq!(parse_preprocessor_definitions("   "), Vec::<String>::new());
    }
}
