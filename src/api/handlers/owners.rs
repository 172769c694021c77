//! Owner endpoints

use crate::{
    api::extract::{parse_id, ValidatedJson},
    models::{owner_dto, CreateOwner, OwnerDto, UpdateOwner},
    services::OWNER_NOT_FOUND,
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
    let owners = state.owner_service.find_all().await?;
    let dtos: Vec<OwnerDto> = owners.iter().map(owner_dto).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let owner = state
        .owner_service
        .find_by_id(id)
        .await?
        .ok_or(Error::NotFound(OWNER_NOT_FOUND))?;

    Ok((StatusCode::OK, Json(owner_dto(&owner))).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOwner>,
) -> Result<Response> {
    let owner = state.owner_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(owner_dto(&owner))).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateOwner>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let owner = state.owner_service.update(id, patch).await?;

    Ok((StatusCode::OK, Json(owner_dto(&owner))).into_response())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id)?;
    state.owner_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
