//! Object key/path conventions.
//!
//! Pure string functions. These define the canonical layout of objects in the
//! Screener data directory.

use uuid::Uuid;

pub const RECORDS_PREFIX: &str = "records/";

pub fn record(id: Uuid) -> String {
    format!("records/{id}.json")
}

pub fn report_docx(id: Uuid) -> String {
    format!("reports/{id}/report.docx")
}

/// Parse a record id back out of a key produced by [`record`].
pub fn record_id(key: &str) -> Option<Uuid> {
    key.strip_prefix(RECORDS_PREFIX)?
        .strip_suffix(".json")?
        .parse()
        .ok()
}
