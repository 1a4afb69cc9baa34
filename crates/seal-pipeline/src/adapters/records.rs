//! # Filesystem Record Source
//!
//! Loads batch records from a directory of `*.json` files and runs the
//! freeze pass over them.
//!
//! Only `canonical_id` and `status` are read out of each record; the rest of
//! the document is opaque bytes here, digested exactly as stored. Upstream
//! schema validation is trusted.

use crate::domain::entities::{FreezeOutcome, Record, RecordStatus};
use crate::ports::outbound::{RecordSource, RecordSourceError};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The two record fields the pipeline re-checks.
#[derive(Debug, Deserialize)]
struct RecordHeader {
    canonical_id: String,
    status: RecordStatus,
}

/// Record source over a flat directory of JSON files.
pub struct FsRecordSource {
    dir: PathBuf,
}

impl FsRecordSource {
    /// Create a source over `dir`. The directory is not touched until a
    /// stage runs.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The record directory this source reads.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List record files in stable path order.
    fn record_paths(&self) -> Result<Vec<PathBuf>, RecordSourceError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RecordSourceError::Missing {
                    path: self.dir.clone(),
                }
            } else {
                RecordSourceError::Io {
                    path: self.dir.clone(),
                    source: e,
                }
            }
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RecordSourceError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn read_file(path: &Path) -> Result<Vec<u8>, RecordSourceError> {
        fs::read(path).map_err(|source| RecordSourceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl RecordSource for FsRecordSource {
    fn load_records(&self) -> Result<Vec<Record>, RecordSourceError> {
        let paths = self.record_paths()?;
        let mut records = Vec::with_capacity(paths.len());
        let mut seen_ids: HashSet<String> = HashSet::with_capacity(paths.len());

        for path in paths {
            let bytes = Self::read_file(&path)?;
            let header: RecordHeader =
                serde_json::from_slice(&bytes).map_err(|e| RecordSourceError::InvalidRecord {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

            if !seen_ids.insert(header.canonical_id.clone()) {
                return Err(RecordSourceError::InvalidRecord {
                    path,
                    reason: format!("duplicate canonical_id `{}`", header.canonical_id),
                });
            }

            records.push(Record::new(header.canonical_id, header.status, bytes));
        }

        debug!(dir = %self.dir.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn freeze_drafts(&self) -> Result<FreezeOutcome, RecordSourceError> {
        let paths = self.record_paths()?;
        let mut outcome = FreezeOutcome::default();

        for path in paths {
            let bytes = Self::read_file(&path)?;
            let mut document: Value =
                serde_json::from_slice(&bytes).map_err(|e| RecordSourceError::InvalidRecord {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

            let is_draft = document
                .as_object()
                .and_then(|obj| obj.get("status"))
                .and_then(Value::as_str)
                == Some("DRAFT");

            if !is_draft {
                debug!(record = %path.display(), "not a draft, skipping");
                outcome.skipped += 1;
                continue;
            }

            // Guarded by is_draft, so the document is an object here.
            if let Some(obj) = document.as_object_mut() {
                obj.insert("status".to_string(), Value::String("FROZEN".to_string()));
            }

            // serde_json maps are sorted, so the rewrite is sorted-key JSON.
            let rewritten = serde_json::to_vec_pretty(&document).map_err(|e| {
                RecordSourceError::InvalidRecord {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;
            fs::write(&path, rewritten).map_err(|source| RecordSourceError::Io {
                path: path.clone(),
                source,
            })?;

            info!(record = %path.display(), "froze record");
            outcome.frozen.push(path);
        }

        Ok(outcome)
    }
}
