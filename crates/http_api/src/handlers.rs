use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use app_api::{
    AddCostRequest, EmptyRequest, ReportRequest, SettingsPutRequest, YearlyReportRequest,
};

use crate::{errors::HttpError, state::HttpState};

pub async fn add_cost(
    State(state): State<HttpState>,
    Json(req): Json<AddCostRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::add_cost(&state.context, req).await?;
    Ok(Json(response))
}

pub async fn report(
    State(state): State<HttpState>,
    Json(req): Json<ReportRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::report(&state.context, req).await?;
    Ok(Json(response))
}

pub async fn category_report(
    State(state): State<HttpState>,
    Json(req): Json<ReportRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::category_report(&state.context, req).await?;
    Ok(Json(response))
}

pub async fn yearly_report(
    State(state): State<HttpState>,
    Json(req): Json<YearlyReportRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::yearly_report(&state.context, req).await?;
    Ok(Json(response))
}

pub async fn rates(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> impl IntoResponse {
    Json(app_api::rates(&state.context).await)
}

pub async fn settings_get(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_get(&state.context).await?;
    Ok(Json(response))
}

pub async fn settings_put(
    State(state): State<HttpState>,
    Json(req): Json<SettingsPutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_put(&state.context, req).await?;
    Ok(Json(response))
}

pub async fn not_found() -> HttpError {
    HttpError::not_found()
}
