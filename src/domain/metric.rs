// Metric domain model and per-metric registry
use serde::Serialize;

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricId {
    Utilization,
    MissionTime,
    MilesSaved,
    HoursSaved,
    CompletedMissions,
    Downtime,
    ErrorRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// How per-combination current values fold into one dashboard value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Average,
    /// Total of the combined hourly series
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Percent { decimals: usize },
    Seconds,
    Count,
    Miles,
    PerHour,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Percent { decimals } => format!("{:.*}%", decimals, value),
            ValueFormat::Seconds => format!("{:.0} sec", value),
            ValueFormat::Count => format!("{:.0}", value),
            ValueFormat::Miles => format!("{:.0}m", value),
            ValueFormat::PerHour => format!("{:.0} / hour", value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub label: &'static str,
    pub ceiling: f64,
    pub trend: Trend,
    pub aggregation: Aggregation,
    /// Format of per-device values and chart points
    pub generated: ValueFormat,
    /// Format of the combined dashboard value
    pub aggregated: ValueFormat,
}

impl MetricId {
    pub const ALL: [MetricId; 7] = [
        MetricId::Utilization,
        MetricId::MissionTime,
        MetricId::MilesSaved,
        MetricId::HoursSaved,
        MetricId::CompletedMissions,
        MetricId::Downtime,
        MetricId::ErrorRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::Utilization => "utilization",
            MetricId::MissionTime => "mission-time",
            MetricId::MilesSaved => "miles-saved",
            MetricId::HoursSaved => "hours-saved",
            MetricId::CompletedMissions => "completed-missions",
            MetricId::Downtime => "downtime",
            MetricId::ErrorRate => "error-rate",
        }
    }

    pub fn from_str_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == id)
    }

    pub fn spec(&self) -> MetricSpec {
        const PERCENT: ValueFormat = ValueFormat::Percent { decimals: 0 };
        match self {
            MetricId::Utilization => MetricSpec {
                label: "Utilization",
                ceiling: 100.0,
                trend: Trend::Up,
                aggregation: Aggregation::Average,
                generated: PERCENT,
                aggregated: PERCENT,
            },
            MetricId::MissionTime => MetricSpec {
                label: "Mission Time",
                ceiling: 100.0,
                trend: Trend::Down,
                aggregation: Aggregation::Sum,
                generated: ValueFormat::Seconds,
                aggregated: ValueFormat::Seconds,
            },
            MetricId::MilesSaved => MetricSpec {
                label: "Miles Saved",
                ceiling: 100.0,
                trend: Trend::Up,
                aggregation: Aggregation::Average,
                generated: ValueFormat::Count,
                aggregated: ValueFormat::Miles,
            },
            MetricId::HoursSaved => MetricSpec {
                label: "Hours Saved",
                ceiling: 100.0,
                trend: Trend::Up,
                aggregation: Aggregation::Average,
                generated: ValueFormat::Count,
                aggregated: ValueFormat::Count,
            },
            MetricId::CompletedMissions => MetricSpec {
                label: "Completed Missions",
                ceiling: 100.0,
                trend: Trend::Stable,
                aggregation: Aggregation::Average,
                generated: ValueFormat::PerHour,
                aggregated: ValueFormat::PerHour,
            },
            MetricId::Downtime => MetricSpec {
                label: "Downtime",
                ceiling: 100.0,
                trend: Trend::Down,
                aggregation: Aggregation::Average,
                generated: PERCENT,
                aggregated: PERCENT,
            },
            MetricId::ErrorRate => MetricSpec {
                label: "Error Rate",
                ceiling: 5.0,
                trend: Trend::Down,
                aggregation: Aggregation::Average,
                generated: ValueFormat::Percent { decimals: 1 },
                aggregated: ValueFormat::Percent { decimals: 1 },
            },
        }
    }

    pub fn cap(&self, value: f64) -> f64 {
        value.clamp(0.0, self.spec().ceiling)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourPoint {
    pub hour: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

impl HourPoint {
    pub fn new(hour: usize, value: f64, display_value: Option<String>) -> Self {
        Self {
            hour: hour_label(hour),
            value,
            display_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub id: MetricId,
    pub label: String,
    pub trend: Trend,
    pub value: String,
    pub hourly_data: Vec<HourPoint>,
}

impl MetricSeries {
    pub fn new(id: MetricId, value: String, hourly_data: Vec<HourPoint>) -> Self {
        let spec = id.spec();
        Self {
            id,
            label: spec.label.to_string(),
            trend: spec.trend,
            value,
            hourly_data,
        }
    }
}

pub fn hour_label(hour: usize) -> String {
    format!("{:02}:00", hour)
}

/// Numeric part of a formatted value ("82%" -> 82.0); anything unparseable is zero
pub fn parse_numeric(formatted: &str) -> f64 {
    let digits: String = formatted
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(0.0)
}
