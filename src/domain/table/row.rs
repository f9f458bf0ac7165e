// ============================================================
// ROW AND TABLE TYPES
// ============================================================
// Read-only row/column view of one parsed upload

use serde::{Deserialize, Serialize};

use super::CellValue;

/// A single row in a parsed table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    /// Row index (0-based)
    pub index: usize,

    /// Cell values, one per declared column
    pub values: Vec<CellValue>,
}

impl Row {
    pub fn new(index: usize, values: Vec<CellValue>) -> Self {
        Self { index, values }
    }
}

/// Ordered rows sharing one ordered set of column names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Every row is padded (or truncated) to the declared column count
    pub fn new(columns: Vec<String>, mut rows: Vec<Row>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.values.resize(width, CellValue::Missing);
        }
        Self { columns, rows }
    }

    /// Position of an exactly matching column name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
