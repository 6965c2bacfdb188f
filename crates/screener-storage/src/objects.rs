use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::StorageError;

/// Resolve a key to a path under `root`. Rejects empty keys, absolute keys
/// and any `.`/`..` segment.
pub fn object_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let invalid = || StorageError::InvalidKey {
        key: key.to_string(),
    };

    if key.is_empty() || key.ends_with('/') {
        return Err(invalid());
    }

    let relative = Path::new(key);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(invalid());
    }

    Ok(root.join(relative))
}

/// Read an object's bytes.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key)?;
    tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::GetObject {
                key: key.to_string(),
                source: e,
            }
        }
    })
}

/// Write an object, creating parent directories. The bytes land in a
/// sibling temp file first and are renamed into place.
pub async fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    let put_err = |source| StorageError::PutObject {
        key: key.to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(put_err)?;
    }

    let mut staging = path.clone().into_os_string();
    staging.push(".partial");
    tokio::fs::write(&staging, body).await.map_err(put_err)?;
    tokio::fs::rename(&staging, &path).await.map_err(put_err)?;

    debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// List keys starting with `prefix`, sorted. A missing data directory lists
/// as empty.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let list_err = |source| StorageError::ListObjects {
        prefix: prefix.to_string(),
        source,
    };

    let mut keys = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(list_err(e)),
        };

        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            let path = entry.path();
            if entry.file_type().await.map_err(list_err)?.is_dir() {
                pending.push(path);
                continue;
            }

            let Some(key) = key_for(root, &path) else {
                continue;
            };
            if key.starts_with(prefix) && !key.ends_with(".partial") {
                keys.push(key);
            }
        }
    }

    keys.sort();
    Ok(keys)
}

/// Inverse of [`object_path`]; `None` for non-UTF-8 paths.
fn key_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(segments?.join("/"))
}
