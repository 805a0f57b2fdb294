//! Appointment endpoints.
//!
//! Booking is the one multi-entity write path: the doctor, symptom,
//! and patient named in the request are resolved (created if absent)
//! before the appointment row is written, all in one transaction.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::{require_field, MessageResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{AppointmentRecord, NewAppointment};

#[derive(Deserialize)]
pub struct CreateAppointment {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub birth: Option<String>,
    pub doctor: Option<String>,
    pub month: Option<String>,
    pub symptom: Option<String>,
}

impl CreateAppointment {
    /// Check every required field, naming the first missing one.
    fn into_new_appointment(self) -> Result<NewAppointment, ApiError> {
        Ok(NewAppointment {
            first_name: require_field(self.first_name, "first_name")?,
            last_name: require_field(self.last_name, "last_name")?,
            gender: require_field(self.gender, "gender")?,
            age: require_field(self.age, "age")?,
            birth: require_field(self.birth, "birth")?,
            doctor: require_field(self.doctor, "doctor")?,
            month: require_field(self.month, "month")?,
            symptom: require_field(self.symptom, "symptom")?,
        })
    }
}

pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<AppointmentRecord>>, ApiError> {
    let conn = ctx.store()?;
    Ok(Json(repository::get_all_appointments(&conn)?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<AppointmentRecord>, ApiError> {
    let conn = ctx.store()?;
    repository::get_appointment_by_id(&conn, id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("appointment not found".into()))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<CreateAppointment>,
) -> Result<Json<AppointmentRecord>, ApiError> {
    let new = body.into_new_appointment()?;
    let mut conn = ctx.store()?;
    Ok(Json(repository::insert_appointment(&mut conn, &new)?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = ctx.store()?;
    if repository::get_appointment_by_id(&conn, id)?.is_none() {
        return Err(ApiError::NotFound("appointment not found".into()));
    }
    repository::delete_appointment(&conn, id)?;
    Ok(Json(MessageResponse {
        message: "appointment deleted successfully".into(),
    }))
}
