// ============================================================
// ZIP WRITER
// ============================================================
// One compressed entry per text file, written to an in-memory buffer

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::error::AppError;
use crate::domain::table::NamedTextFile;

/// Archive assembly over an in-memory sink; no filesystem writes
pub struct ZipArchiveWriter {
    method: CompressionMethod,
}

impl Default for ZipArchiveWriter {
    fn default() -> Self {
        Self {
            method: CompressionMethod::Deflated,
        }
    }
}

impl ZipArchiveWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every item as one compressed entry, entry name = filename,
    /// entry content = UTF-8 text bytes. Returns the complete archive bytes.
    pub fn write(&self, items: &[NamedTextFile]) -> Result<Vec<u8>, AppError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(self.method);

        for item in items {
            writer.start_file(item.filename.as_str(), options).map_err(|e| {
                AppError::ArchiveError(format!("failed to open entry '{}': {}", item.filename, e))
            })?;
            writer.write_all(item.content.as_bytes()).map_err(|e| {
                AppError::ArchiveError(format!("failed to write entry '{}': {}", item.filename, e))
            })?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| AppError::ArchiveError(format!("failed to finalize archive: {}", e)))?;
        Ok(cursor.into_inner())
    }
}
