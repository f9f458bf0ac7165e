// ============================================================
// FILENAME RESOLVER
// ============================================================
// Candidate filename per row: source column or positional fallback,
// prefix/suffix decoration, sanitization, .txt normalization

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::table::{ConversionOptions, Row, Table};

/// Path separators, drive markers, glob/quote characters and control
/// characters are illegal in common filesystem namespaces
static INVALID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|[:cntrl:]]"#).unwrap());

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const EMPTY_NAME_FALLBACK: &str = "untitled";

/// Filename policy for one run: optional source column plus fixed decoration
#[derive(Debug, Clone)]
pub struct FilenameResolver {
    column: Option<usize>,
    prefix: String,
    suffix: String,
}

impl FilenameResolver {
    /// An unknown or unset column name means positional naming for every row
    pub fn from_options(options: &ConversionOptions, table: &Table) -> Self {
        let column = options
            .filename_column
            .as_deref()
            .and_then(|name| table.column_index(name));
        Self {
            column,
            prefix: options.prefix.clone(),
            suffix: options.suffix.clone(),
        }
    }

    /// Sanitized, `.txt`-suffixed filename for one row. Never empty, never
    /// contains path separators or control characters.
    pub fn resolve(&self, row: &Row) -> String {
        let base = self
            .column
            .and_then(|index| row.values.get(index))
            .and_then(|value| value.coerce_text())
            .unwrap_or_else(|| format!("row_{}", row.index + 1));

        let decorated = format!("{}{}{}", self.prefix, base, self.suffix);
        ensure_txt_suffix(sanitize_filename(&decorated))
    }
}

/// Replace unsafe characters with underscores, collapse whitespace runs to a
/// single space, trim. Applying the sanitizer to its own output changes
/// nothing.
pub fn sanitize_filename(name: &str) -> String {
    let replaced = INVALID_CHARS.replace_all(name, "_");
    let collapsed = WHITESPACE_RUNS.replace_all(&replaced, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        EMPTY_NAME_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Append `.txt` unless the name already ends with it, case-insensitively
pub fn ensure_txt_suffix(name: String) -> String {
    if name.to_ascii_lowercase().ends_with(".txt") {
        name
    } else {
        format!("{}.txt", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::CellValue;

    fn table(columns: &[&str]) -> Table {
        Table::new(columns.iter().map(|name| name.to_string()).collect(), Vec::new())
    }

    fn row(index: usize, raw: &[&str]) -> Row {
        Row::new(index, raw.iter().map(|value| CellValue::from_raw(value)).collect())
    }

    fn resolver(filename_column: Option<&str>, columns: &[&str]) -> FilenameResolver {
        let options = ConversionOptions {
            filename_column: filename_column.map(|name| name.to_string()),
            ..Default::default()
        };
        FilenameResolver::from_options(&options, &table(columns))
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("a/b:c*.txt"), "a_b_c_.txt");
        assert_eq!(sanitize_filename("re\"port<1>|2?"), "re_port_1__2_");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_filename("  hello   world  "), "hello world");
        assert_eq!(sanitize_filename("tab\there"), "tab_here");
    }

    #[test]
    fn test_sanitize_empty_becomes_untitled() {
        assert_eq!(sanitize_filename(""), "untitled");
        assert_eq!(sanitize_filename("   "), "untitled");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in ["a/b:c*.txt", "  hello   world  ", "x\\y\r\nz", "untitled"] {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once);
        }
    }

    #[test]
    fn test_txt_suffix_not_duplicated() {
        assert_eq!(ensure_txt_suffix("report".to_string()), "report.txt");
        assert_eq!(ensure_txt_suffix("report.txt".to_string()), "report.txt");
        assert_eq!(ensure_txt_suffix("report.TXT".to_string()), "report.TXT");
    }

    #[test]
    fn test_positional_fallback_is_one_based() {
        let resolver = resolver(None, &["name"]);
        assert_eq!(resolver.resolve(&row(0, &["Alice"])), "row_1.txt");
        assert_eq!(resolver.resolve(&row(4, &["Bob"])), "row_5.txt");
    }

    #[test]
    fn test_column_value_used_when_present() {
        let resolver = resolver(Some("name"), &["name", "note"]);
        assert_eq!(resolver.resolve(&row(0, &["Alice", "hello"])), "Alice.txt");
    }

    #[test]
    fn test_missing_cell_falls_back_to_position() {
        let resolver = resolver(Some("name"), &["name", "note"]);
        assert_eq!(resolver.resolve(&row(2, &["", "hello"])), "row_3.txt");
    }

    #[test]
    fn test_numeric_cell_is_coerced() {
        let resolver = resolver(Some("id"), &["id", "note"]);
        assert_eq!(resolver.resolve(&row(0, &["1001", "hello"])), "1001.txt");
    }

    #[test]
    fn test_unknown_column_ignored() {
        let resolver = resolver(Some("nope"), &["name"]);
        assert_eq!(resolver.resolve(&row(0, &["Alice"])), "row_1.txt");
    }

    #[test]
    fn test_prefix_and_suffix_applied_before_sanitization() {
        let options = ConversionOptions {
            filename_column: Some("name".to_string()),
            prefix: "out/".to_string(),
            suffix: "_v2".to_string(),
            ..Default::default()
        };
        let resolver = FilenameResolver::from_options(&options, &table(&["name"]));
        assert_eq!(resolver.resolve(&row(0, &["Alice"])), "out_Alice_v2.txt");
    }
}
