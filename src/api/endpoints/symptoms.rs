//! Symptom endpoints — same surface as doctors, keyed by symptom name.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::{require_field, MessageResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Symptom;

#[derive(Deserialize)]
pub struct CreateSymptom {
    pub name: Option<String>,
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Symptom>>, ApiError> {
    let conn = ctx.store()?;
    Ok(Json(repository::get_all_symptoms(&conn)?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Symptom>, ApiError> {
    let conn = ctx.store()?;
    repository::get_symptom_by_id(&conn, id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("symptom not found".into()))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<CreateSymptom>,
) -> Result<Json<Symptom>, ApiError> {
    let name = require_field(body.name, "name")?;
    let conn = ctx.store()?;
    Ok(Json(repository::find_or_create_symptom(&conn, &name)?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = ctx.store()?;
    if repository::get_symptom_by_id(&conn, id)?.is_none() {
        return Err(ApiError::NotFound("symptom not found".into()));
    }
    repository::delete_symptom(&conn, id)?;
    Ok(Json(MessageResponse {
        message: "symptom deleted successfully".into(),
    }))
}
