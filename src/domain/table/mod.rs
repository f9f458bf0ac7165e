// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// Core types and value objects for row-to-file conversion
// No I/O, no async, no external dependencies

mod cell;
mod options;
mod output;
mod row;

pub use cell::CellValue;
pub use options::{ConversionOptions, DelimiterChoice, EncodingChoice, TextMode};
pub use output::{ConversionOutcome, ConversionResult, NamedTextFile};
pub use row::{Row, Table};
