// ============================================================
// ENCODING AND DELIMITER PROBES
// ============================================================
// Candidate-chain encoding detection and statistical delimiter sniffing

use encoding_rs::{Encoding, EUC_KR, SHIFT_JIS, UTF_8, WINDOWS_1252};
use tracing::debug;

use super::TableReader;
use crate::domain::error::AppError;
use crate::domain::table::{EncodingChoice, Table};

/// Upper bound on the bytes inspected for delimiter sniffing
pub const SNIFF_WINDOW: usize = 20 * 1024;

/// Recognized delimiters, in preference order
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// UTF-8 plus a Latin-1-family fallback
pub fn default_encoding_candidates() -> Vec<&'static Encoding> {
    vec![UTF_8, WINDOWS_1252]
}

/// UTF-8, two CJK legacy encodings, then Latin-1. Widens recovery for
/// non-Latin legacy exports; cp949 and euc-kr labels share the EUC-KR
/// decoder.
pub fn extended_encoding_candidates() -> Vec<&'static Encoding> {
    vec![UTF_8, EUC_KR, SHIFT_JIS, WINDOWS_1252]
}

/// Candidate chain for a caller choice; an unknown label is an error
pub fn encoding_candidates(choice: &EncodingChoice) -> Result<Vec<&'static Encoding>, AppError> {
    match choice {
        EncodingChoice::Auto => Ok(extended_encoding_candidates()),
        EncodingChoice::Named(label) => Encoding::for_label(label.as_bytes())
            .map(|encoding| vec![encoding])
            .ok_or_else(|| AppError::EncodingError(format!("unknown encoding label: {}", label))),
    }
}

/// Try candidates strictly in order; the first one that decodes without
/// errors AND parses as tabular data wins. No scoring beyond first success.
pub fn probe_encoding(
    raw: &[u8],
    candidates: &[&'static Encoding],
    reader: &TableReader,
) -> Result<(Table, &'static Encoding), AppError> {
    let mut attempted = Vec::new();
    for &candidate in candidates {
        let (text, actual, had_errors) = candidate.decode(raw);
        if had_errors {
            debug!(encoding = actual.name(), "candidate produced decode errors");
            attempted.push(actual.name());
            continue;
        }
        match reader.parse_str(&text) {
            Ok(table) => return Ok((table, actual)),
            Err(error) => {
                debug!(encoding = actual.name(), %error, "candidate decoded but did not parse");
                attempted.push(actual.name());
            }
        }
    }
    Err(AppError::EncodingError(format!(
        "no candidate encoding produced a parseable table (tried: {})",
        attempted.join(", ")
    )))
}

/// Best-effort statistical sniffing over the recognized delimiters.
/// Scores per-line occurrence counts by frequency and consistency; returns
/// None when no candidate scores, leaving the default to the caller.
pub fn detect_delimiter(sample: &str) -> Option<u8> {
    let lines: Vec<&str> = sample.lines().take(10).collect();
    if lines.is_empty() {
        return None;
    }

    let mut best: Option<(u8, f32)> = None;
    for &delimiter in &DELIMITER_CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|&byte| byte == delimiter).count())
            .collect();

        let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
        let variance = counts
            .iter()
            .map(|&count| (count as f32 - avg).powi(2))
            .sum::<f32>()
            / counts.len() as f32;
        let score = avg / (1.0 + variance.sqrt());

        if score > 0.0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((delimiter, score));
        }
    }

    best.map(|(delimiter, _)| delimiter)
}
