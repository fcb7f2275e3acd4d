use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an appointment sits in the service lifecycle.
///
/// The lifecycle is a cycle with no terminal state: advancing a cancelled
/// appointment puts it back to `ToDo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceStatus {
    #[default]
    ToDo,
    Done,
    ToBill,
    Cancelled,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 4] = [
        ServiceStatus::ToDo,
        ServiceStatus::Done,
        ServiceStatus::ToBill,
        ServiceStatus::Cancelled,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::Done => Self::ToBill,
            Self::ToBill => Self::Cancelled,
            Self::Cancelled => Self::ToDo,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ToDo => "toDo",
            Self::Done => "done",
            Self::ToBill => "toBill",
            Self::Cancelled => "cancelled",
        }
    }

    /// Badge text for the status button, in the shop's Portuguese.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "FAZER",
            Self::Done => "CONCLUIDO",
            Self::ToBill => "COBRAR",
            Self::Cancelled => "CANCELADO",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
