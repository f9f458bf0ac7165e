// ============================================================
// CONVERSION OPTIONS
// ============================================================
// Configuration values for one conversion run

use serde::{Deserialize, Serialize};

/// How the text payload is chosen from each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// First cell holding non-empty text, scanning in column order
    #[default]
    FirstNonEmptyText,

    /// A single caller-selected column
    NamedColumn,
}

/// Explicit encoding label, or candidate-chain probing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingChoice {
    #[default]
    Auto,
    Named(String),
}

/// Explicit delimiter, or best-effort sniffing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterChoice {
    #[default]
    Auto,
    Char(char),
}

/// Configuration for a single conversion run. One value per run; the core
/// never reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    #[serde(default)]
    pub text_mode: TextMode,

    /// Required iff text_mode is NamedColumn
    #[serde(default)]
    pub text_column: Option<String>,

    /// Column supplying filename bases; rows fall back to "row_N" when
    /// unset or when the cell is missing
    #[serde(default)]
    pub filename_column: Option<String>,

    /// Decoration applied around the filename base (default: empty)
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,

    #[serde(default)]
    pub encoding: EncodingChoice,

    #[serde(default)]
    pub delimiter: DelimiterChoice,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            text_mode: TextMode::FirstNonEmptyText,
            text_column: None,
            filename_column: None,
            prefix: String::new(),
            suffix: String::new(),
            encoding: EncodingChoice::Auto,
            delimiter: DelimiterChoice::Auto,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate against the parsed table's columns. Runs before any row
    /// processing; a failure aborts the whole run.
    pub fn validate(&self, columns: &[String]) -> Result<(), String> {
        match self.text_mode {
            TextMode::FirstNonEmptyText => Ok(()),
            TextMode::NamedColumn => match &self.text_column {
                None => Err("text_mode is named_column but no text_column was given".to_string()),
                Some(name) if !columns.iter().any(|column| column == name) => Err(format!(
                    "text column '{}' is not present in the CSV (columns: {})",
                    name,
                    columns.join(", ")
                )),
                Some(_) => Ok(()),
            },
        }
    }
}
