// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod mission_time_client;
