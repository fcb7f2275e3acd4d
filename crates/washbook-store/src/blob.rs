//! On-disk encoding of the appointment collection.

use serde::{Deserialize, Serialize};

use washbook_core::Appointment;

use crate::PersistenceError;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct VersionedBlob {
    schema_version: u32,
    appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredBlob {
    Versioned(VersionedBlob),
    // Written before the schema version existed: a bare array of records.
    Legacy(Vec<Appointment>),
}

pub fn encode(appointments: &[Appointment]) -> Result<Vec<u8>, PersistenceError> {
    #[derive(Serialize)]
    struct Out<'a> {
        schema_version: u32,
        appointments: &'a [Appointment],
    }

    serde_json::to_vec_pretty(&Out {
        schema_version: SCHEMA_VERSION,
        appointments,
    })
    .map_err(|e| PersistenceError::Encode(e.to_string()))
}

pub fn decode(data: &[u8]) -> Result<Vec<Appointment>, PersistenceError> {
    let value: serde_json::Value =
        serde_json::from_slice(data).map_err(|e| PersistenceError::Corrupt(e.to_string()))?;

    // Check the version before the records: a newer layout may not parse as ours.
    if let Some(found) = value.get("schema_version").and_then(serde_json::Value::as_u64) {
        if found > u64::from(SCHEMA_VERSION) {
            return Err(PersistenceError::UnsupportedVersion {
                found: u32::try_from(found).unwrap_or(u32::MAX),
                supported: SCHEMA_VERSION,
            });
        }
    }

    let stored: StoredBlob =
        serde_json::from_value(value).map_err(|e| PersistenceError::Corrupt(e.to_string()))?;
    let appointments = match stored {
        StoredBlob::Versioned(blob) => blob.appointments,
        StoredBlob::Legacy(appointments) => appointments,
    };
    for record in &appointments {
        record
            .price
            .check_bounds()
            .map_err(|e| PersistenceError::Corrupt(format!("appointment {}: {e}", record.id)))?;
    }
    Ok(appointments)
}
