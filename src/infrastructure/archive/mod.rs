// ============================================================
// ARCHIVE INFRASTRUCTURE LAYER
// ============================================================
// In-memory ZIP assembly

mod zip_writer;

pub use zip_writer::ZipArchiveWriter;
