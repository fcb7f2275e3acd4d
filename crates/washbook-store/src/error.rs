use std::path::PathBuf;
use thiserror::Error;

use washbook_core::{AppointmentId, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not a washbook store: {0}")]
    NotAStore(PathBuf),
    #[error("appointment not found: {0}")]
    NotFound(AppointmentId),
    #[error("invalid appointment: {0}")]
    Validation(#[from] ValidationError),
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reading or writing the appointment blob failed.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored appointments are unreadable: {0}")]
    Corrupt(String),
    #[error("could not encode appointments: {0}")]
    Encode(String),
    #[error("unsupported schema version {found} (max {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("store is locked: {0}")]
    Locked(PathBuf),
}
