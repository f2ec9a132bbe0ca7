// Mission-time report returned by the external metrics API
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionTimeReport {
    pub name: String,
    pub unit: String,
    pub overall: f64,
    // Entry shapes are owned by the upstream API and passed through untouched
    #[serde(default)]
    pub values_by_mission_types: Vec<Value>,
    #[serde(default)]
    pub chart_point_groups: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionTimeQuery {
    pub mission_type: Option<String>,
    pub date_range: Option<String>,
    pub point_count: Option<u32>,
}
