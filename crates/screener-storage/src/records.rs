//! Typed access to stored assessment records and reports.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};
use uuid::Uuid;

use screener_core::keys;
use screener_core::models::record::AssessmentRecord;

use crate::error::StorageError;
use crate::objects;

/// Load a JSON object.
pub async fn load_json<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save a JSON object, pretty-printed.
pub async fn save_json<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, &body).await
}

pub async fn save_record(root: &Path, record: &AssessmentRecord) -> Result<(), StorageError> {
    save_json(root, &keys::record(record.id), record).await?;
    info!(record_id = %record.id, "assessment record saved");
    Ok(())
}

pub async fn load_record(root: &Path, id: Uuid) -> Result<AssessmentRecord, StorageError> {
    load_json(root, &keys::record(id)).await
}

/// Every readable record, newest first. Unreadable files are logged and
/// skipped.
pub async fn list_records(root: &Path) -> Result<Vec<AssessmentRecord>, StorageError> {
    let mut records = Vec::new();

    for key in objects::list_objects(root, keys::RECORDS_PREFIX).await? {
        if keys::record_id(&key).is_none() {
            continue;
        }
        match load_json::<AssessmentRecord>(root, &key).await {
            Ok(record) => records.push(record),
            Err(e) => warn!(key, error = %e, "skipping unreadable record"),
        }
    }

    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(records)
}

pub async fn save_report(root: &Path, id: Uuid, docx: &[u8]) -> Result<(), StorageError> {
    objects::put_object(root, &keys::report_docx(id), docx).await?;
    info!(record_id = %id, bytes = docx.len(), "report saved");
    Ok(())
}
