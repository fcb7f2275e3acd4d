pub mod backend;
pub mod blob;
pub mod config;
pub mod error;
pub mod layout;
pub mod lockfile;

pub use backend::{BlobBackend, BlobLock, FileBackend, MemoryBackend};
pub use config::StoreConfig;
pub use error::{PersistenceError, StoreError};

use std::path::Path;

use washbook_core::{Appointment, AppointmentId, NewAppointment};

use crate::layout::StoreLayout;

/// Result of reading the persisted collection. A failed read still yields a
/// (empty) collection; the failure is carried alongside it.
#[derive(Debug)]
pub struct LoadReport {
    pub appointments: Vec<Appointment>,
    pub error: Option<PersistenceError>,
}

impl LoadReport {
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// The single owner of the appointment collection.
///
/// Every mutation locks the blob, re-reads it, applies the change to what was
/// read and rewrites the whole collection before unlocking. The in-memory
/// copy only changes once that write has succeeded.
pub struct AppointmentStore {
    layout: Option<StoreLayout>,
    config: StoreConfig,
    backend: Box<dyn BlobBackend>,
    appointments: Vec<Appointment>,
    load_error: Option<PersistenceError>,
}

impl AppointmentStore {
    pub fn init(root: &Path) -> Result<Self, StoreError> {
        Self::init_with_config(root, StoreConfig::default())
    }

    /// Create the store directory. An existing `store.toml` is left alone.
    pub fn init_with_config(root: &Path, config: StoreConfig) -> Result<Self, StoreError> {
        let layout = StoreLayout::new(root);
        layout.create_dirs()?;
        if !layout.config_file().exists() {
            config::write_config(&layout, &config)?;
        }
        Self::open(root)
    }

    pub fn open(root: &Path) -> Result<Self, StoreError> {
        let layout = StoreLayout::new(root);
        if !layout.store_dir().is_dir() {
            return Err(StoreError::NotAStore(root.to_path_buf()));
        }
        let config = config::read_config(&layout)?;
        let backend = FileBackend::new(&layout.kv_dir());
        let mut store = Self::with_backend(backend, config);
        store.layout = Some(layout);
        Ok(store)
    }

    /// Build a store over any backend and hydrate it. A persisted blob that
    /// cannot be read is logged and the store starts empty.
    pub fn with_backend(backend: impl BlobBackend + 'static, config: StoreConfig) -> Self {
        let mut store = Self {
            layout: None,
            config,
            backend: Box::new(backend),
            appointments: Vec::new(),
            load_error: None,
        };
        if let Err(e) = store.reload() {
            tracing::warn!(key = %store.config.blob_key, error = %e, "starting with an empty appointment book");
            store.load_error = Some(e);
        }
        store
    }

    pub fn root(&self) -> Option<&Path> {
        self.layout.as_ref().map(StoreLayout::root)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Why the store opened empty, if the persisted blob could not be read.
    pub fn load_error(&self) -> Option<&PersistenceError> {
        self.load_error.as_ref()
    }

    /// Records in the order they were booked.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn snapshot(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, id: &AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == *id)
    }

    pub fn create(&mut self, request: NewAppointment) -> Result<Appointment, StoreError> {
        request.validate()?;

        let appointment = self.mutate(|records| {
            let mut id = AppointmentId::new();
            while records.iter().any(|a| a.id == id) {
                id = AppointmentId::new();
            }
            let appointment = Appointment::from_request(id, request);
            records.push(appointment.clone());
            Ok(appointment)
        })?;

        tracing::info!(id = %appointment.id, date = %appointment.entry_date, "appointment created");
        Ok(appointment)
    }

    pub fn advance_status(&mut self, id: &AppointmentId) -> Result<Appointment, StoreError> {
        let (previous, updated) = self.mutate(|records| {
            let record = records
                .iter_mut()
                .find(|a| a.id == *id)
                .ok_or(StoreError::NotFound(*id))?;
            let previous = record.status;
            record.status = previous.next();
            Ok((previous, record.clone()))
        })?;

        tracing::info!(id = %updated.id, from = %previous, to = %updated.status, "status advanced");
        Ok(updated)
    }

    /// Read every persisted record straight from storage. Never fails: an
    /// unreadable blob produces an empty collection plus the error.
    pub fn load_all(&self) -> LoadReport {
        match self.read_persisted() {
            Ok(appointments) => LoadReport {
                appointments,
                error: None,
            },
            Err((error, _)) => {
                tracing::warn!(key = %self.config.blob_key, error = %error, "stored appointments unreadable");
                LoadReport {
                    appointments: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    /// Write the in-memory collection as one unit, replacing what is stored.
    /// A blob from a newer schema is never replaced.
    pub fn persist(&self) -> Result<(), PersistenceError> {
        let _lock = self.backend.lock(&self.config.blob_key)?;
        self.records_for_write()?;
        self.backend
            .write(&self.config.blob_key, &blob::encode(&self.appointments)?)
    }

    /// Replace the in-memory collection with the persisted one. On failure the
    /// collection is empty and the error is returned.
    pub fn reload(&mut self) -> Result<usize, PersistenceError> {
        match self.read_persisted() {
            Ok(appointments) => {
                self.appointments = appointments;
                tracing::debug!(count = self.appointments.len(), "appointments reloaded");
                Ok(self.appointments.len())
            }
            Err((error, _)) => {
                self.appointments.clear();
                Err(error)
            }
        }
    }

    /// Lock, re-read, apply `change` to the fresh collection and write it back.
    /// Nothing is written when `change` fails.
    fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<Appointment>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _lock = self.backend.lock(&self.config.blob_key)?;
        let mut records = self.records_for_write()?;
        let out = change(&mut records)?;
        self.backend
            .write(&self.config.blob_key, &blob::encode(&records)?)?;
        self.appointments = records;
        Ok(out)
    }

    /// The collection a write should start from. An unreadable blob is copied
    /// to `<key>.corrupt` and treated as empty; io failures and newer schemas
    /// stop the write.
    fn records_for_write(&self) -> Result<Vec<Appointment>, PersistenceError> {
        match self.read_persisted() {
            Ok(records) => Ok(records),
            Err((PersistenceError::Corrupt(reason), Some(raw))) => {
                let key = format!("{}.corrupt", self.config.blob_key);
                self.backend.write(&key, &raw)?;
                tracing::warn!(key = %key, %reason, "kept unreadable appointment blob before overwriting");
                Ok(Vec::new())
            }
            Err((error, _)) => Err(error),
        }
    }

    fn read_persisted(&self) -> Result<Vec<Appointment>, (PersistenceError, Option<Vec<u8>>)> {
        let raw = match self.backend.read(&self.config.blob_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err((e, None)),
        };
        blob::decode(&raw).map_err(|e| (e, Some(raw)))
    }
}
