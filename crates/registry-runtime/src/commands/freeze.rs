//! `freeze` - lock DRAFT records for review.

use crate::commands::CommandError;
use seal_pipeline::{service, FsRecordSource};
use std::path::Path;

pub fn run(records_dir: &Path) -> Result<(), CommandError> {
    let source = FsRecordSource::new(records_dir);
    let outcome = service::freeze_records(&source)?;

    if outcome.frozen.is_empty() {
        println!(
            "nothing to freeze ({} record(s) left as-is)",
            outcome.skipped
        );
        return Ok(());
    }

    for path in &outcome.frozen {
        println!("froze {}", path.display());
    }
    println!(
        "froze {} record(s), skipped {}",
        outcome.frozen.len(),
        outcome.skipped
    );
    Ok(())
}
