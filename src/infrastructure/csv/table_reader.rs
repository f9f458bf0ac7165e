// ============================================================
// TABLE READER
// ============================================================
// Parse decoded CSV text into the domain Table

use csv::{ReaderBuilder, Trim};

use crate::domain::error::AppError;
use crate::domain::table::{CellValue, Row, Table};

/// Tabular reader over decoded text. The delimiter comes from the caller
/// (explicit option or prober output).
pub struct TableReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for TableReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse CSV content into a Table
    pub fn parse_str(&self, content: &str) -> Result<Table, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("failed to read CSV headers: {}", e)))?
            .clone();
        let columns: Vec<String> = headers.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("failed to parse CSV row {}: {}", index + 1, e))
            })?;
            let values = (0..columns.len())
                .map(|position| CellValue::from_raw(record.get(position).unwrap_or("")))
                .collect();
            rows.push(Row::new(index, values));
        }

        Ok(Table::new(columns, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = TableReader::new().parse_str(content).unwrap();

        assert_eq!(table.columns, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0].values[0],
            CellValue::Text("Alice".to_string())
        );
        assert_eq!(table.rows[0].values[1], CellValue::Number(30.0));
    }

    #[test]
    fn test_parse_with_semicolon_delimiter() {
        let content = "a;b\nx;y";
        let table = TableReader::new().with_delimiter(b';').parse_str(content).unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows[0].values[1], CellValue::Text("y".to_string()));
    }

    #[test]
    fn test_short_rows_padded_with_missing() {
        let content = "a,b,c\nonly";
        let table = TableReader::new().parse_str(content).unwrap();
        assert_eq!(table.rows[0].values.len(), 3);
        assert!(table.rows[0].values[2].is_missing());
    }

    #[test]
    fn test_values_are_trimmed() {
        let content = "a,b\n  hello  , 42 ";
        let table = TableReader::new().parse_str(content).unwrap();
        assert_eq!(
            table.rows[0].values[0],
            CellValue::Text("hello".to_string())
        );
        assert_eq!(table.rows[0].values[1], CellValue::Number(42.0));
    }
}
