use serde::{Deserialize, Serialize};

/// Everything needed to book an appointment in one call. The doctor,
/// symptom, and patient are resolved (created if absent) by name before
/// the appointment row is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: i64,
    pub birth: String,
    pub doctor: String,
    pub month: String,
    pub symptom: String,
}

/// A fully joined appointment: the appointment's own fields flattened
/// with the referenced patient fields and the doctor/symptom names,
/// never the raw foreign-key ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: i64,
    pub birth: String,
    pub doctor: String,
    pub month: String,
    pub symptom: String,
}
