//! Lending report endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::ReportSnapshot,
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Reference date (YYYY-MM-DD); defaults to today (UTC)
    pub date: Option<String>,
}

impl ReportQuery {
    fn reference_date(&self) -> AppResult<NaiveDate> {
        match self.date.as_deref() {
            None | Some("") => Ok(Utc::now().date_naive()),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw))),
        }
    }
}

/// Lending report as of a reference date
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Lending report", body = ReportSnapshot),
        (status = 400, description = "Invalid reference date", body = crate::error::ErrorResponse),
        (status = 500, description = "Lending records unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ReportSnapshot>> {
    let reference_date = query.reference_date()?;
    let snapshot = state.services.reports.compute_snapshot(reference_date).await?;
    Ok(Json(snapshot))
}
