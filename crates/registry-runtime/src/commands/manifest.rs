//! `build-manifest` - aggregate PASS records into a sealed manifest.

use crate::commands::CommandError;
use anyhow::Context;
use seal_pipeline::{service, FsRecordSource, PipelineError};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub fn run(records_dir: &Path, out: &Path, batch_id: Option<String>) -> Result<(), CommandError> {
    let batch_id = batch_id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let source = FsRecordSource::new(records_dir);

    let manifest = service::build_batch_manifest(&source, &batch_id)?;
    let bytes = manifest
        .canonical_bytes()
        .map_err(PipelineError::Serialize)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(out, &bytes).with_context(|| format!("writing manifest {}", out.display()))?;

    println!(
        "manifest written: {} ({} item(s), batch {})",
        out.display(),
        manifest.items.len(),
        manifest.meta.batch_id
    );
    println!("aggregate digest: {}", manifest.aggregate_digest);
    Ok(())
}
