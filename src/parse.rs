//! Line-level parsing of the `.env` format.
//!
//! The format is deliberately flat: one `KEY=value` per line, `#` comment
//! lines, optional surrounding quotes. There are no multi-line values, no
//! escapes, and no interpolation. Anything that does not fit is dropped
//! rather than reported.

use tracing::trace;

use crate::types::Entry;

const COMMENT_MARKER: char = '#';
const SEPARATOR: char = '=';
const QUOTES: [char; 2] = ['"', '\''];

/// Parse one raw line into a `(key, value)` pair.
///
/// Returns `None` for blank lines, comment lines, lines without `=`, and lines
/// whose key is empty after trimming. The split happens on the first `=`, so
/// values may contain further `=` characters. A single matching pair of `"`
/// or `'` around the value is stripped; mismatched quotes are kept verbatim.
pub fn parse_line(raw: &str) -> Option<(&str, &str)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let (key, value) = line.split_once(SEPARATOR)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key, strip_quotes(value.trim())))
}

fn strip_quotes(value: &str) -> &str {
    QUOTES
        .iter()
        .find_map(|&q| value.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(value)
}

/// Parse a whole buffer, keeping line order and recording line numbers.
pub fn parse_str(content: &str) -> Vec<Entry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| match parse_line(raw) {
            Some((key, value)) => Some(Entry {
                key: key.to_string(),
                value: value.to_string(),
                line: idx + 1,
            }),
            None => {
                if is_malformed(raw) {
                    trace!(line = idx + 1, "dropping malformed env line");
                }
                None
            }
        })
        .collect()
}

// Blank and comment lines are expected; anything else that failed to parse
// is worth a trace event.
fn is_malformed(raw: &str) -> bool {
    let line = raw.trim();
    !line.is_empty() && !line.starts_with(COMMENT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn simple_pair() {
        assert_eq!(parse_line("KEY=value"), Some(("KEY", "value")));
    }

    #[test]
    fn whitespace_around_key_and_value_is_trimmed() {
        assert_eq!(parse_line("  KEY  =   value  "), Some(("KEY", "value")));
        assert_eq!(parse_line("\tKEY\t=\tvalue\t"), Some(("KEY", "value")));
    }

    #[test]
    fn empty_value_is_kept() {
        assert_eq!(parse_line("EMPTY="), Some(("EMPTY", "")));
        assert_eq!(parse_line("EMPTY=   "), Some(("EMPTY", "")));
    }

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(
            parse_line("DSN=postgres://u:p@h/db?sslmode=require"),
            Some(("DSN", "postgres://u:p@h/db?sslmode=require"))
        );
        assert_eq!(parse_line("A==b"), Some(("A", "=b")));
    }

    #[test]
    fn blank_and_whitespace_lines_yield_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t  "), None);
    }

    #[test]
    fn comment_lines_yield_nothing() {
        assert_eq!(parse_line("# KEY=value"), None);
        assert_eq!(parse_line("   #indented=comment"), None);
    }

    #[test]
    fn hash_inside_value_is_literal() {
        assert_eq!(parse_line("COLOR=#ff0000"), Some(("COLOR", "#ff0000")));
        assert_eq!(parse_line("A=b # not a comment"), Some(("A", "b # not a comment")));
    }

    #[test]
    fn line_without_separator_yields_nothing() {
        assert_eq!(parse_line("INVALID_LINE_WITHOUT_EQUALS"), None);
    }

    #[test]
    fn empty_key_yields_nothing() {
        assert_eq!(parse_line("=value"), None);
        assert_eq!(parse_line("   = value"), None);
    }

    #[test]
    fn double_quotes_are_stripped() {
        assert_eq!(
            parse_line("QUOTED=\"quoted value\""),
            Some(("QUOTED", "quoted value"))
        );
    }

    #[test]
    fn single_quotes_are_stripped() {
        assert_eq!(
            parse_line("SINGLE='single quoted'"),
            Some(("SINGLE", "single quoted"))
        );
    }

    #[test]
    fn whitespace_inside_quotes_is_preserved() {
        assert_eq!(parse_line("PAD=\"  padded  \""), Some(("PAD", "  padded  ")));
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        assert_eq!(parse_line("A=\"abc'"), Some(("A", "\"abc'")));
        assert_eq!(parse_line("A='abc"), Some(("A", "'abc")));
        assert_eq!(parse_line("A=abc\""), Some(("A", "abc\"")));
    }

    #[test]
    fn only_one_pair_is_stripped() {
        assert_eq!(parse_line("A=\"\"abc\"\""), Some(("A", "\"abc\"")));
        assert_eq!(parse_line("A=\"'abc'\""), Some(("A", "'abc'")));
    }

    #[test]
    fn empty_quotes_give_empty_value() {
        assert_eq!(parse_line("A=\"\""), Some(("A", "")));
        assert_eq!(parse_line("A=''"), Some(("A", "")));
    }

    #[test]
    fn lone_quote_is_kept() {
        assert_eq!(parse_line("A=\""), Some(("A", "\"")));
    }

    #[test]
    fn escapes_are_not_processed() {
        assert_eq!(parse_line(r#"A="line\nbreak""#), Some(("A", r"line\nbreak")));
    }

    #[test]
    fn parse_str_keeps_order_and_line_numbers() {
        let entries = parse_str("# header\n\nFIRST=1\nnot a pair\nSECOND=\"2\"\n");
        assert_eq!(
            entries,
            vec![
                Entry {
                    key: "FIRST".into(),
                    value: "1".into(),
                    line: 3,
                },
                Entry {
                    key: "SECOND".into(),
                    value: "2".into(),
                    line: 5,
                },
            ]
        );
    }

    #[test]
    fn parse_str_handles_crlf() {
        let entries = parse_str("A=1\r\nB='two'\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "1");
        assert_eq!(entries[1].value, "two");
    }

    #[test]
    fn parse_str_keeps_duplicate_keys_in_order() {
        let entries = parse_str("A=1\nA=2\n");
        let values: Vec<&str> = entries.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn parse_str_empty_buffer() {
        assert!(parse_str("").is_empty());
    }

    proptest! {
        #[test]
        fn valid_pairs_round_trip(
            key in "[A-Za-z_][A-Za-z0-9_]{0,15}",
            value in "[A-Za-z0-9_./:=@-]{0,24}",
        ) {
            let line = format!("{key}={value}");
            prop_assert_eq!(parse_line(&line), Some((key.as_str(), value.as_str())));
        }

        #[test]
        fn quoted_values_are_unwrapped(
            key in "[A-Za-z_][A-Za-z0-9_]{0,15}",
            value in "[A-Za-z0-9 _./:=#-]{0,24}",
            quote in prop::sample::select(vec!['"', '\'']),
        ) {
            let line = format!("{key} = {quote}{value}{quote}");
            prop_assert_eq!(parse_line(&line), Some((key.as_str(), value.as_str())));
        }

        #[test]
        fn parsed_keys_are_never_empty_or_contain_separator(raw in "\\PC{0,40}") {
            if let Some((key, _)) = parse_line(&raw) {
                prop_assert!(!key.is_empty());
                prop_assert!(!key.contains('='));
                prop_assert_eq!(key, key.trim());
            }
        }
    }
}
