//! Car endpoints

use crate::{
    api::extract::{parse_id, ValidatedJson},
    models::{car_dto, manufacturer_dto, CarDto, CreateCar, UpdateCar},
    services::CAR_NOT_FOUND,
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
    let cars = state.car_service.find_all().await?;
    let dtos: Vec<CarDto> = cars.iter().map(car_dto).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let car = state
        .car_service
        .find_by_id(id)
        .await?
        .ok_or(Error::NotFound(CAR_NOT_FOUND))?;

    Ok((StatusCode::OK, Json(car_dto(&car))).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCar>,
) -> Result<Response> {
    let car = state.car_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(car_dto(&car))).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateCar>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let car = state.car_service.update(id, patch).await?;

    Ok((StatusCode::OK, Json(car_dto(&car))).into_response())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id)?;
    state.car_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let manufacturer = state.car_service.manufacturer_of(id).await?;

    Ok((StatusCode::OK, Json(manufacturer_dto(&manufacturer))).into_response())
}
