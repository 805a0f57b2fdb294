//! Patient endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::{require_field, MessageResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{NewPatient, Patient};

#[derive(Deserialize)]
pub struct CreatePatient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub birth: Option<String>,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let conn = ctx.store()?;
    Ok(Json(repository::get_all_patients(&conn)?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.store()?;
    repository::get_patient_by_id(&conn, id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("patient not found".into()))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<CreatePatient>,
) -> Result<Json<Patient>, ApiError> {
    let patient = NewPatient {
        first_name: require_field(body.first_name, "first_name")?,
        last_name: require_field(body.last_name, "last_name")?,
        gender: require_field(body.gender, "gender")?,
        age: require_field(body.age, "age")?,
        birth: require_field(body.birth, "birth")?,
    };
    let conn = ctx.store()?;
    Ok(Json(repository::find_or_create_patient(&conn, &patient)?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = ctx.store()?;
    if repository::get_patient_by_id(&conn, id)?.is_none() {
        return Err(ApiError::NotFound("patient not found".into()));
    }
    repository::delete_patient(&conn, id)?;
    Ok(Json(MessageResponse {
        message: "patient deleted successfully".into(),
    }))
}
