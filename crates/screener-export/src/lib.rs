//! screener-export
//!
//! Assessment reports: Tera rendering to a Markdown-ish text, then DOCX.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;

use screener_core::models::record::AssessmentRecord;
use tracing::info;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Render the built-in report template for `record` and pack it as DOCX.
pub fn export_docx(
    record: &AssessmentRecord,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render::render_report(record)?;
    let bytes = docx::generate_docx(&rendered, styles)?;
    info!(record_id = %record.id, bytes = bytes.len(), "report exported");
    Ok(bytes)
}
