// ============================================================
// CSV TO TEXT CONVERTER USE CASE
// ============================================================
// Orchestrate probing, parsing, per-row extraction and archive assembly

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::use_cases::filename_resolver::FilenameResolver;
use crate::application::use_cases::text_selector::TextSelector;
use crate::application::use_cases::unique_names::UniqueNames;
use crate::domain::error::AppError;
use crate::domain::table::{
    ConversionOptions, ConversionOutcome, ConversionResult, DelimiterChoice, NamedTextFile,
};
use crate::infrastructure::archive::ZipArchiveWriter;
use crate::infrastructure::csv::{
    detect_delimiter, encoding_candidates, probe_encoding, TableReader, SNIFF_WINDOW,
};

/// Row-to-file conversion use case. One instance per run; holds no state
/// across invocations.
pub struct CsvToTextConverter {
    options: ConversionOptions,
}

impl CsvToTextConverter {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Create with default options
    pub fn default_options() -> Self {
        Self::new(ConversionOptions::default())
    }

    /// Convert a raw CSV upload into a ZIP of per-row text files.
    ///
    /// Table-level failures (encoding, parse, config) abort the whole run;
    /// rows without a usable text value are skipped and only counted.
    pub fn convert(&self, raw: &[u8]) -> Result<ConversionOutcome, AppError> {
        let start = Instant::now();

        let delimiter = self.resolve_delimiter(raw)?;
        let reader = TableReader::new().with_delimiter(delimiter);
        let candidates = encoding_candidates(&self.options.encoding)?;
        let (table, encoding) = probe_encoding(raw, &candidates, &reader)?;

        self.options
            .validate(&table.columns)
            .map_err(AppError::ConfigError)?;

        if table.is_empty() {
            info!("CSV parsed but contains no data rows");
            return Ok(ConversionOutcome::EmptyTable);
        }

        let selector = TextSelector::from_options(&self.options, &table)?;
        let resolver = FilenameResolver::from_options(&self.options, &table);
        let mut unique_names = UniqueNames::new();

        let mut items = Vec::new();
        for row in &table.rows {
            let text = match selector.select(row) {
                Some(text) => text,
                None => {
                    debug!(row = row.index, "no text value found, row skipped");
                    continue;
                }
            };
            let filename = unique_names.reserve(resolver.resolve(row));
            items.push(NamedTextFile {
                filename,
                content: text.to_string(),
            });
        }

        let archive = ZipArchiveWriter::new().write(&items)?;
        let result = ConversionResult {
            rows_processed: table.row_count(),
            files_created: items.len(),
            encoding_used: encoding.name().to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            archive,
        };
        info!(
            rows = result.rows_processed,
            files = result.files_created,
            encoding = %result.encoding_used,
            "conversion complete"
        );
        Ok(ConversionOutcome::Archive(result))
    }

    /// Explicit delimiter, else sniffed from a bounded prefix, else comma.
    /// Sniffing failure never blocks the run.
    fn resolve_delimiter(&self, raw: &[u8]) -> Result<u8, AppError> {
        match self.options.delimiter {
            DelimiterChoice::Char(delimiter) => {
                if !delimiter.is_ascii() {
                    return Err(AppError::ConfigError(format!(
                        "delimiter must be an ASCII character, got {:?}",
                        delimiter
                    )));
                }
                Ok(delimiter as u8)
            }
            DelimiterChoice::Auto => {
                let window = &raw[..raw.len().min(SNIFF_WINDOW)];
                let sample = String::from_utf8_lossy(window);
                Ok(detect_delimiter(&sample).unwrap_or_else(|| {
                    warn!("delimiter sniffing failed, defaulting to comma");
                    b','
                }))
            }
        }
    }
}
