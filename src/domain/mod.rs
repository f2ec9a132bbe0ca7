// Domain layer - Fleet metric types and enumerations
pub mod date_range;
pub mod device;
pub mod facility;
pub mod filter;
pub mod fleet;
pub mod metric;
pub mod mission_time;
