//! Subcommand implementations, one per pipeline stage.
//!
//! Every command failure carries a stable exit code: `1` for infrastructure
//! failures, a dedicated code per verification rejection so CI can branch on
//! the outcome without parsing stderr.

mod freeze;
mod key;
mod manifest;
mod sign;
mod verify;

use crate::cli::Commands;
use seal_pipeline::{PipelineError, RejectReason};
use thiserror::Error;

/// Failure of one runtime command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The verifier rejected the manifest
    #[error("REJECTED [{}]: {}", .0.code(), .0)]
    Rejected(#[from] RejectReason),

    /// A pipeline stage failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Runtime-level I/O failure outside the pipeline
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    /// Stable process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Rejected(reason) => match reason {
                RejectReason::MissingPublicKey => 3,
                RejectReason::MalformedPublicKey { .. } => 4,
                RejectReason::MissingArtifact { .. } => 5,
                RejectReason::MalformedSignature { .. } => 6,
                RejectReason::BadSignature => 7,
            },
            CommandError::Pipeline(_) | CommandError::Other(_) => 1,
        }
    }
}

/// Run the selected subcommand.
pub fn dispatch(command: Commands) -> Result<(), CommandError> {
    match command {
        Commands::Freeze { records_dir } => freeze::run(&records_dir),
        Commands::BuildManifest {
            records_dir,
            out,
            batch_id,
        } => manifest::run(&records_dir, &out, batch_id),
        Commands::Sign {
            manifest,
            signature,
            key,
        } => sign::run(&manifest, &signature, &key),
        Commands::Verify {
            manifest,
            signature,
            public_key,
        } => verify::run(&manifest, &signature, public_key),
        Commands::PublicKey { key } => key::run(&key),
    }
}
