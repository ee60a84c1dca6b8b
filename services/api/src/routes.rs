use crate::infra::{deserialize_date, AppState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use employment_history::domain::EmploymentRecord;
use employment_history::error::AppError;
use employment_history::lookup::EmploymentHistoryService;
use employment_history::registry::{EmploymentRegistry, IncomeRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct EmploymentHistoryRequest {
    pub(crate) person_id: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) from: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) to: NaiveDate,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmploymentHistoryResponse {
    pub(crate) person_id: String,
    pub(crate) from: NaiveDate,
    pub(crate) to: NaiveDate,
    pub(crate) records: Vec<EmploymentRecord>,
}

pub(crate) fn employment_router<R, I>(service: Arc<EmploymentHistoryService<R, I>>) -> Router
where
    R: EmploymentRegistry + 'static,
    I: IncomeRegistry + 'static,
{
    Router::new()
        .route(
            "/api/v1/employment-history",
            post(employment_history_endpoint::<R, I>),
        )
        .with_state(service)
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn employment_history_endpoint<R, I>(
    State(service): State<Arc<EmploymentHistoryService<R, I>>>,
    Json(request): Json<EmploymentHistoryRequest>,
) -> Result<Json<EmploymentHistoryResponse>, AppError>
where
    R: EmploymentRegistry + 'static,
    I: IncomeRegistry + 'static,
{
    let EmploymentHistoryRequest {
        person_id,
        from,
        to,
    } = request;

    // Registry adapters block; keep them off the async workers.
    let lookup_id = person_id.clone();
    let records = tokio::task::spawn_blocking(move || {
        service.find_employment_history(&lookup_id, from, to)
    })
    .await
    .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))??;

    Ok(Json(EmploymentHistoryResponse {
        person_id,
        from,
        to,
        records,
    }))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
