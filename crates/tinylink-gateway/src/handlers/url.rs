use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, GetUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use tinylink_core::ShortCode;

pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let Json(request) = payload?;
    let mapping = state.shortener().shorten(&request.url).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUrlResponse::new(mapping, state.base_url())),
    ))
}

pub async fn get_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GetUrlResponse>> {
    let code = parse_code(&short_code)?;
    let mapping = state.redirector().resolve(&code).await?;
    Ok(Json(mapping.into()))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let code = parse_code(&short_code)?;
    let mapping = state.redirector().resolve(&code).await?;
    Ok(Redirect::temporary(&mapping.original_url))
}

/// A malformed code can never have been assigned, so it is reported the
/// same way as an unknown one.
fn parse_code(raw: &str) -> Result<ShortCode> {
    ShortCode::new(raw).map_err(|_| AppError::NotFound)
}
