// HTTP client for the external mission-time metrics API
use crate::application::mission_time_source::MissionTimeSource;
use crate::domain::mission_time::{MissionTimeQuery, MissionTimeReport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MissionTimeClient {
    base_url: String,
    client: reqwest::Client,
}

impl MissionTimeClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build mission time HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, query: &MissionTimeQuery) -> String {
        let mut params = Vec::new();
        if let Some(mission_type) = &query.mission_type {
            params.push(format!("missionType={}", urlencoding::encode(mission_type)));
        }
        if let Some(date_range) = &query.date_range {
            params.push(format!("dateRange={}", urlencoding::encode(date_range)));
        }
        if let Some(points) = query.point_count {
            params.push(format!("pointCount={}", points));
        }

        let url = format!("{}/metrics/mission-time", self.base_url);
        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params.join("&"))
        }
    }
}

#[async_trait]
impl MissionTimeSource for MissionTimeClient {
    async fn fetch_mission_time_metrics(&self, query: &MissionTimeQuery) -> Result<MissionTimeReport> {
        let url = self.build_url(query);
        tracing::debug!("Fetching mission time metrics from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to mission time API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Mission time API failed with status {}: {}", status, body);
        }

        response
            .json::<MissionTimeReport>()
            .await
            .context("Failed to parse mission time response")
    }
}
