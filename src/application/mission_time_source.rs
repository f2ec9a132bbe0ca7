// Source trait for the external mission-time metrics API
use crate::domain::mission_time::{MissionTimeQuery, MissionTimeReport};
use async_trait::async_trait;

#[async_trait]
pub trait MissionTimeSource: Send + Sync {
    /// Fetch the mission-time report for a mission type and date range
    async fn fetch_mission_time_metrics(&self, query: &MissionTimeQuery) -> anyhow::Result<MissionTimeReport>;
}
