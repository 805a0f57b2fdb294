//! Doctor endpoints.
//!
//! - `GET /api/doctors` — list all doctors
//! - `GET /api/doctors/:id` — single doctor
//! - `POST /api/doctors` — upsert a doctor by name
//! - `DELETE /api/doctors/:id` — delete a doctor and its appointments

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::{require_field, MessageResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Doctor;

#[derive(Deserialize)]
pub struct CreateDoctor {
    pub name: Option<String>,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let conn = ctx.store()?;
    Ok(Json(repository::get_all_doctors(&conn)?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Doctor>, ApiError> {
    let conn = ctx.store()?;
    repository::get_doctor_by_id(&conn, id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("doctor not found".into()))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<CreateDoctor>,
) -> Result<Json<Doctor>, ApiError> {
    let name = require_field(body.name, "name")?;
    let conn = ctx.store()?;
    Ok(Json(repository::find_or_create_doctor(&conn, &name)?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = ctx.store()?;
    if repository::get_doctor_by_id(&conn, id)?.is_none() {
        return Err(ApiError::NotFound("doctor not found".into()));
    }
    repository::delete_doctor(&conn, id)?;
    Ok(Json(MessageResponse {
        message: "doctor deleted successfully".into(),
    }))
}
