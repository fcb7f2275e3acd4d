use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::AppointmentId;
use crate::money::Money;
use crate::status::ServiceStatus;
use crate::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    pub vehicle_model: String,
    pub plate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub service_description: String,
    pub price: Money,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub status: ServiceStatus,
}

impl Appointment {
    /// Build the stored record for a validated request.
    pub fn from_request(id: AppointmentId, request: NewAppointment) -> Self {
        let contact = request
            .contact
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self {
            id,
            client_name: request.client_name.trim().to_string(),
            vehicle_model: request.vehicle_model.trim().to_string(),
            plate: request.plate.trim().to_string(),
            contact,
            service_description: request.service_description.trim().to_string(),
            price: request.price,
            entry_date: request.entry_date,
            status: ServiceStatus::ToDo,
        }
    }
}

/// What the operator filled in on the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub client_name: String,
    pub vehicle_model: String,
    pub plate: String,
    pub contact: Option<String>,
    pub service_description: String,
    pub price: Money,
    pub entry_date: NaiveDate,
}

impl NewAppointment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("client_name", &self.client_name),
            ("vehicle_model", &self.vehicle_model),
            ("plate", &self.plate),
            ("service_description", &self.service_description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        self.price.check_bounds()
    }
}
