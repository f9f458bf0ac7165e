// ============================================================
// CONVERSION OUTPUTS
// ============================================================
// Output units and the per-run result summary

use serde::{Deserialize, Serialize};

/// One file destined for the output archive.
/// Filenames are sanitized and unique within a run before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTextFile {
    pub filename: String,
    pub content: String,
}

/// Counts and payload of a finished conversion run.
/// Created once per run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Total rows seen, including skipped ones
    pub rows_processed: usize,

    /// Rows that yielded an archive entry
    pub files_created: usize,

    /// Name of the encoding that decoded the upload
    pub encoding_used: String,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Complete ZIP bytes (DEFLATE entries)
    #[serde(skip)]
    pub archive: Vec<u8>,
}

/// Outcome of a run: an archive, or the non-fatal empty-table status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Archive(ConversionResult),
    EmptyTable,
}
