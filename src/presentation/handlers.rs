// HTTP request handlers
use crate::domain::device::DeviceType;
use crate::domain::facility::{ALL, Facility};
use crate::domain::filter::{FilterError, FilterState};
use crate::domain::metric::{MetricId, MetricSeries};
use crate::domain::mission_time::{MissionTimeQuery, MissionTimeReport};
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// A dashboard card: the combined series plus a link to its detail view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    #[serde(flatten)]
    pub series: MetricSeries,
    pub detail_href: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: Vec<MetricCard>,
}

/// Repeated keys (`robotType`) need the pair form rather than a struct
type FilterParams = Vec<(String, String)>;

fn filter_from(params: &FilterParams) -> Result<FilterState, FilterError> {
    FilterState::from_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

pub fn detail_href(id: MetricId, filter: &FilterState) -> String {
    format!("/metrics/{}?{}", id.as_str(), filter.to_query())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Facility selector options
pub async fn list_facilities() -> Json<Vec<&'static str>> {
    Json(std::iter::once(ALL).chain(Facility::ALL.iter().map(|f| f.name())).collect())
}

/// Robot type multi-select options
pub async fn list_device_types() -> Json<Vec<&'static str>> {
    Json(std::iter::once(ALL).chain(DeviceType::ALL.iter().map(|d| d.name())).collect())
}

/// Combined metrics for the dashboard cards and charts
pub async fn dashboard_metrics(
    Query(params): Query<FilterParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let filter = filter_from(&params)?;

    let metrics = state
        .dashboard_service
        .combined_metrics(&filter)
        .into_iter()
        .map(|series| MetricCard {
            detail_href: detail_href(series.id, &filter),
            series,
        })
        .collect();

    Ok(Json(MetricsResponse { metrics }))
}

/// Single metric for the detail view, under the same filter
pub async fn metric_detail(
    Path(id): Path<String>,
    Query(params): Query<FilterParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetricSeries>, ApiError> {
    let metric = MetricId::from_str_id(&id).ok_or_else(|| ApiError::UnknownMetric(id.clone()))?;
    let filter = filter_from(&params)?;

    state
        .dashboard_service
        .metric_detail(&filter, metric)
        .map(Json)
        .ok_or(ApiError::NoData(id))
}

/// Mission-time report from the external API; `null` when unavailable
pub async fn mission_time(
    Query(query): Query<MissionTimeQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Option<MissionTimeReport>> {
    Json(state.mission_time_service.mission_time(&query).await)
}
