// Application layer - Metric pipeline and use cases
pub mod aggregator;
pub mod dashboard_service;
pub mod mission_time_service;
pub mod mission_time_source;
pub mod signal_generator;
