//! Manufacturer endpoints

use crate::{
    api::extract::{parse_id, ValidatedJson},
    models::{manufacturer_dto, CreateManufacturer, ManufacturerDto, UpdateManufacturer},
    services::MANUFACTURER_NOT_FOUND,
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Response> {
    let manufacturers = state.manufacturer_service.find_all().await?;
    let dtos: Vec<ManufacturerDto> = manufacturers.iter().map(manufacturer_dto).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let manufacturer = state
        .manufacturer_service
        .find_by_id(id)
        .await?
        .ok_or(Error::NotFound(MANUFACTURER_NOT_FOUND))?;

    Ok((StatusCode::OK, Json(manufacturer_dto(&manufacturer))).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateManufacturer>,
) -> Result<Response> {
    let manufacturer = state.manufacturer_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(manufacturer_dto(&manufacturer))).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateManufacturer>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let manufacturer = state.manufacturer_service.update(id, patch).await?;

    Ok((StatusCode::OK, Json(manufacturer_dto(&manufacturer))).into_response())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id)?;
    state.manufacturer_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
