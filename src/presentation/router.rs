// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_metrics, health_check, list_device_types, list_facilities, metric_detail, mission_time,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/facilities", get(list_facilities))
        .route("/device-types", get(list_device_types))
        .route("/metrics", get(dashboard_metrics))
        .route("/metrics/:id", get(metric_detail))
        .route("/mission-time", get(mission_time))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::mission_time_service::MissionTimeService;
    use crate::application::mission_time_source::MissionTimeSource;
    use crate::domain::mission_time::{MissionTimeQuery, MissionTimeReport};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    struct UnavailableSource;

    #[async_trait]
    impl MissionTimeSource for UnavailableSource {
        async fn fetch_mission_time_metrics(&self, _query: &MissionTimeQuery) -> anyhow::Result<MissionTimeReport> {
            anyhow::bail!("connection refused")
        }
    }

    fn router() -> Router {
        build_router(Arc::new(AppState {
            dashboard_service: DashboardService::new(Some(8)),
            mission_time_service: MissionTimeService::new(Arc::new(UnavailableSource)),
        }))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_selector_options() {
        let (status, body) = get_json("/facilities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0], "All");
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (_, body) = get_json("/device-types").await;
        assert_eq!(body[1], "Medical Supply Bot");
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_dashboard_metrics_cards() {
        let (status, body) = get_json("/metrics?facility=All&dateRange=Today&robotType=All").await;
        assert_eq!(status, StatusCode::OK);

        let metrics = body["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 7);
        assert_eq!(metrics[0]["id"], "utilization");
        assert_eq!(metrics[0]["hourlyData"].as_array().unwrap().len(), 24);
        assert_eq!(
            metrics[0]["detailHref"],
            "/metrics/utilization?facility=All&dateRange=Today&robotType=All"
        );
        assert!(metrics[2]["value"].as_str().unwrap().ends_with('m'));
    }

    #[tokio::test]
    async fn test_metric_detail_follows_filter() {
        let uri = "/metrics/error-rate?facility=Mayo%20Clinic%20-%20Rochester\
                   &dateRange=Last%207%20Days&robotType=Medical%20Supply%20Bot";
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "error-rate");
        assert_eq!(body["label"], "Error Rate");
        assert_eq!(body["trend"], "down");
    }

    #[tokio::test]
    async fn test_emptied_robot_types_yield_no_metrics() {
        let (status, body) = get_json("/metrics?facility=Mayo%20Clinic%20-%20Rochester&robotType=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metrics"], serde_json::json!([]));

        // the detail link of an emptied selection must not widen back to every robot type
        let (status, _) = get_json("/metrics/utilization?facility=All&dateRange=Today&robotType=").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_detail_href_reproduces_card() {
        let uri = "/metrics?facility=Johns%20Hopkins%20Hospital&dateRange=Last+30+Days\
                   &robotType=Lab%20Sample%20Courier&robotType=Linen%20%26%20Waste%20Bot";
        let (_, body) = get_json(uri).await;
        let card = &body["metrics"][5];
        assert_eq!(card["id"], "downtime");

        let (status, detail) = get_json(card["detailHref"].as_str().unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["value"], card["value"]);
        assert_eq!(detail["hourlyData"], card["hourlyData"]);
    }

    #[tokio::test]
    async fn test_percent_encoded_keys_are_decoded() {
        let (_, plain) = get_json("/metrics?robotType=Medical%20Supply%20Bot").await;
        let (_, encoded) = get_json("/metrics?robot%54ype=Medical%20Supply%20Bot").await;
        assert_eq!(encoded, plain);

        let (status, _) = get_json("/metrics?robot%54ype=Drone").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_bad_input() {
        let (status, body) = get_json("/metrics?dateRange=Custom&dateFrom=2024-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "custom date range requires dateTo");

        let (status, _) = get_json("/metrics/battery-level").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mission_time_unavailable_is_null() {
        let (status, body) = get_json("/mission-time?missionType=delivery&pointCount=12").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());
    }
}
