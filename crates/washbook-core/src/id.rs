use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

use crate::CoreError;

/// Appointment identifier. ULIDs sort by creation time, which is what the
/// day view uses for display order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentId(Ulid);

impl AppointmentId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Ulid::from_bytes(bytes))
    }

    pub fn as_bytes(&self) -> [u8; 16] {
        self.0.to_bytes()
    }

    pub fn from_string(s: &str) -> Result<Self, CoreError> {
        let ulid = Ulid::from_string(s.trim()).map_err(|e| CoreError::InvalidId(e.to_string()))?;
        Ok(Self(ulid))
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for AppointmentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppointmentId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        let id = AppointmentId::new();
        let parsed = AppointmentId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            AppointmentId::from_string("not-a-ulid"),
            Err(CoreError::InvalidId(_))
        ));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = AppointmentId::from_bytes([7; 16]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
