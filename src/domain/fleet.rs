// Generated fleet metrics: facility -> device type -> metric series
use super::device::DeviceType;
use super::facility::Facility;
use super::metric::MetricSeries;
use std::collections::BTreeMap;

pub type DeviceMetrics = BTreeMap<DeviceType, Vec<MetricSeries>>;

pub type FacilityMetrics = BTreeMap<Facility, DeviceMetrics>;
