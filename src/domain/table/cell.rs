// ============================================================
// CELL VALUES
// ============================================================
// Tagged variant for dynamically typed table cells

use serde::{Deserialize, Serialize};

/// A single cell of a parsed row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Free-form text
    Text(String),
    /// Value that parses cleanly as a number
    Number(f64),
    /// Empty or absent cell
    Missing,
    /// Recognized non-text literal (boolean tokens)
    Other(String),
}

impl CellValue {
    /// Classify a raw field from the CSV reader
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Other(trimmed.to_string());
        }
        if let Some(number) = Self::parse_numeric(trimmed) {
            return CellValue::Number(number);
        }
        CellValue::Text(trimmed.to_string())
    }

    /// Numeric parse, tolerating thousands separators
    fn parse_numeric(trimmed: &str) -> Option<f64> {
        if let Ok(number) = trimmed.parse::<f64>() {
            return Some(number);
        }
        let stripped = trimmed.replace(',', "");
        if stripped != trimmed && !stripped.is_empty() {
            return stripped.parse::<f64>().ok();
        }
        None
    }

    /// The cell's text payload: Some only for non-empty-after-trim text.
    /// Numbers and other literals are not stringified.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            }
            _ => None,
        }
    }

    /// Coerce any present cell to display text (used for filename bases)
    pub fn coerce_text(&self) -> Option<String> {
        match self {
            CellValue::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Number(number) => Some(format_number(*number)),
            CellValue::Other(token) => Some(token.clone()),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// Integral values print without a trailing `.0`
fn format_number(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}
