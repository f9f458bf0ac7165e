// ============================================================
// TEXT SELECTOR
// ============================================================
// Per-row text payload selection

use crate::domain::error::AppError;
use crate::domain::table::{ConversionOptions, Row, Table, TextMode};

/// Text selection policy, resolved against the table's columns once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSelector {
    /// Scan cells in column order for the first non-empty text value
    FirstNonEmptyText,

    /// Read one resolved column position
    NamedColumn(usize),
}

impl TextSelector {
    /// Resolve the selector. NamedColumn mode requires a configured column
    /// that is present in the table.
    pub fn from_options(options: &ConversionOptions, table: &Table) -> Result<Self, AppError> {
        match options.text_mode {
            TextMode::FirstNonEmptyText => Ok(TextSelector::FirstNonEmptyText),
            TextMode::NamedColumn => {
                let name = options.text_column.as_deref().ok_or_else(|| {
                    AppError::ConfigError(
                        "text_mode is named_column but no text_column was given".to_string(),
                    )
                })?;
                let index = table.column_index(name).ok_or_else(|| {
                    AppError::ConfigError(format!(
                        "text column '{}' is not present in the CSV",
                        name
                    ))
                })?;
                Ok(TextSelector::NamedColumn(index))
            }
        }
    }

    /// The row's text payload, or None when the row carries no usable text.
    /// Numeric, boolean and missing cells never count, even if stringifiable.
    pub fn select<'a>(&self, row: &'a Row) -> Option<&'a str> {
        match self {
            TextSelector::FirstNonEmptyText => {
                row.values.iter().find_map(|value| value.as_text())
            }
            TextSelector::NamedColumn(index) => {
                row.values.get(*index).and_then(|value| value.as_text())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::CellValue;

    fn table(columns: &[&str]) -> Table {
        Table::new(columns.iter().map(|name| name.to_string()).collect(), Vec::new())
    }

    fn row(raw: &[&str]) -> Row {
        Row::new(0, raw.iter().map(|value| CellValue::from_raw(value)).collect())
    }

    #[test]
    fn test_first_non_empty_skips_numbers() {
        let selector = TextSelector::FirstNonEmptyText;
        assert_eq!(selector.select(&row(&["1001", "", "hello"])), Some("hello"));
    }

    #[test]
    fn test_first_non_empty_takes_column_order() {
        let selector = TextSelector::FirstNonEmptyText;
        assert_eq!(selector.select(&row(&["Alice", "hello"])), Some("Alice"));
    }

    #[test]
    fn test_absent_when_no_text() {
        let selector = TextSelector::FirstNonEmptyText;
        assert_eq!(selector.select(&row(&["1", "2", "true", ""])), None);
    }

    #[test]
    fn test_named_column_does_not_stringify_numbers() {
        let selector = TextSelector::NamedColumn(0);
        assert_eq!(selector.select(&row(&["42", "hello"])), None);
        assert_eq!(TextSelector::NamedColumn(1).select(&row(&["42", "hello"])), Some("hello"));
    }

    #[test]
    fn test_from_options_rejects_missing_column() {
        let options = ConversionOptions {
            text_mode: TextMode::NamedColumn,
            text_column: Some("note".to_string()),
            ..Default::default()
        };
        let result = TextSelector::from_options(&options, &table(&["a", "b"]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let resolved = TextSelector::from_options(&options, &table(&["a", "note"])).unwrap();
        assert_eq!(resolved, TextSelector::NamedColumn(1));
    }
}
