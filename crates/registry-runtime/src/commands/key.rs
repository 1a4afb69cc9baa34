//! `public-key` - print the identity's public key.

use crate::commands::CommandError;
use seal_pipeline::{FileKeyStore, PipelineError};
use std::path::Path;

pub fn run(key: &Path) -> Result<(), CommandError> {
    let keystore = FileKeyStore::load_or_create(key).map_err(PipelineError::from)?;
    println!("{}", keystore.public_key_hex());
    Ok(())
}
