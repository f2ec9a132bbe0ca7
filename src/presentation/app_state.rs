// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::mission_time_service::MissionTimeService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub mission_time_service: MissionTimeService,
}
