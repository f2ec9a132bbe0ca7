// Mission-time service - Wraps the external API so failures read as "no data"
use crate::application::mission_time_source::MissionTimeSource;
use crate::domain::mission_time::{MissionTimeQuery, MissionTimeReport};
use std::sync::Arc;

#[derive(Clone)]
pub struct MissionTimeService {
    source: Arc<dyn MissionTimeSource>,
}

impl MissionTimeService {
    pub fn new(source: Arc<dyn MissionTimeSource>) -> Self {
        Self { source }
    }

    pub async fn mission_time(&self, query: &MissionTimeQuery) -> Option<MissionTimeReport> {
        match self.source.fetch_mission_time_metrics(query).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!("Error fetching mission time metrics: {:#}", e);
                None
            }
        }
    }
}
