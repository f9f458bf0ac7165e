// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing plus encoding and delimiter probing

mod probe;
mod table_reader;

pub use probe::{
    default_encoding_candidates, detect_delimiter, encoding_candidates,
    extended_encoding_candidates, probe_encoding, SNIFF_WINDOW,
};
pub use table_reader::TableReader;
