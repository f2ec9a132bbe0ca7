// Robot device type domain model
use super::facility::ALL;
use super::filter::FilterError;
use super::metric::MetricId;
use serde::Serialize;

/// Empty multi-select entry: keeps an emptied selection distinct from "All" in URLs
pub const NONE: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DeviceType {
    #[serde(rename = "Medical Supply Bot")]
    MedicalSupplyBot,
    #[serde(rename = "Pharmacy Delivery Bot")]
    PharmacyDeliveryBot,
    #[serde(rename = "Lab Sample Courier")]
    LabSampleCourier,
    #[serde(rename = "Linen & Waste Bot")]
    LinenWasteBot,
}

/// Baseline operating figures for one device type before any scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseProfile {
    pub utilization: f64,
    pub mission_time: f64,
    pub downtime: f64,
    pub error_rate: f64,
    pub miles_saved: f64,
    pub hours_saved: f64,
    pub completed_missions: f64,
}

impl BaseProfile {
    pub fn base(&self, metric: MetricId) -> f64 {
        match metric {
            MetricId::Utilization => self.utilization,
            MetricId::MissionTime => self.mission_time,
            MetricId::MilesSaved => self.miles_saved,
            MetricId::HoursSaved => self.hours_saved,
            MetricId::CompletedMissions => self.completed_missions,
            MetricId::Downtime => self.downtime,
            MetricId::ErrorRate => self.error_rate,
        }
    }
}

impl DeviceType {
    pub const ALL: [DeviceType; 4] = [
        DeviceType::MedicalSupplyBot,
        DeviceType::PharmacyDeliveryBot,
        DeviceType::LabSampleCourier,
        DeviceType::LinenWasteBot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::MedicalSupplyBot => "Medical Supply Bot",
            DeviceType::PharmacyDeliveryBot => "Pharmacy Delivery Bot",
            DeviceType::LabSampleCourier => "Lab Sample Courier",
            DeviceType::LinenWasteBot => "Linen & Waste Bot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    pub fn profile(&self) -> BaseProfile {
        match self {
            DeviceType::MedicalSupplyBot => BaseProfile {
                utilization: 78.0,
                mission_time: 42.0,
                downtime: 6.0,
                error_rate: 1.8,
                miles_saved: 36.0,
                hours_saved: 14.0,
                completed_missions: 22.0,
            },
            DeviceType::PharmacyDeliveryBot => BaseProfile {
                utilization: 72.0,
                mission_time: 55.0,
                downtime: 8.0,
                error_rate: 2.4,
                miles_saved: 28.0,
                hours_saved: 11.0,
                completed_missions: 16.0,
            },
            DeviceType::LabSampleCourier => BaseProfile {
                utilization: 84.0,
                mission_time: 38.0,
                downtime: 5.0,
                error_rate: 1.2,
                miles_saved: 44.0,
                hours_saved: 17.0,
                completed_missions: 26.0,
            },
            DeviceType::LinenWasteBot => BaseProfile {
                utilization: 65.0,
                mission_time: 61.0,
                downtime: 10.0,
                error_rate: 3.1,
                miles_saved: 22.0,
                hours_saved: 9.0,
                completed_missions: 12.0,
            },
        }
    }
}

/// Device types chosen in the dashboard filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeviceSelection {
    #[default]
    All,
    Only(Vec<DeviceType>),
}

impl DeviceSelection {
    /// Builds a selection from multi-select entries; any "All" entry wins and
    /// empty entries select nothing
    pub fn from_names<'a, I>(names: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selected = Vec::new();
        for name in names {
            if name == ALL {
                return Ok(DeviceSelection::All);
            }
            if name == NONE {
                continue;
            }
            let device = DeviceType::from_name(name)
                .ok_or_else(|| FilterError::UnknownDeviceType(name.to_string()))?;
            if !selected.contains(&device) {
                selected.push(device);
            }
        }
        Ok(DeviceSelection::Only(selected))
    }

    pub fn names(&self) -> Vec<&'static str> {
        match self {
            DeviceSelection::All => vec![ALL],
            DeviceSelection::Only(devices) if devices.is_empty() => vec![NONE],
            DeviceSelection::Only(devices) => devices.iter().map(|d| d.name()).collect(),
        }
    }
}
