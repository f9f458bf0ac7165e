pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::use_cases::converter::CsvToTextConverter;
pub use domain::error::{AppError, Result};
pub use domain::table::{
    CellValue, ConversionOptions, ConversionOutcome, ConversionResult, DelimiterChoice,
    EncodingChoice, NamedTextFile, Row, Table, TextMode,
};
