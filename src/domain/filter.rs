// Dashboard filter state and its URL query form
use super::date_range::{CUSTOM, DateRange};
use super::device::DeviceSelection;
use super::facility::FacilitySelection;
use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown facility: {0}")]
    UnknownFacility(String),
    #[error("unknown robot type: {0}")]
    UnknownDeviceType(String),
    #[error("unknown date range: {0}")]
    UnknownDateRange(String),
    #[error("custom date range requires {0}")]
    MissingDate(&'static str),
    #[error("invalid date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub facility: FacilitySelection,
    pub device_types: DeviceSelection,
    pub date_range: DateRange,
}

impl FilterState {
    pub fn new(facility: FacilitySelection, device_types: DeviceSelection, date_range: DateRange) -> Self {
        Self {
            facility,
            device_types,
            date_range,
        }
    }

    /// Build from decoded `facility`, `dateRange`, `dateFrom`, `dateTo` and repeated
    /// `robotType` pairs. Missing parameters fall back to All / All / Today; a
    /// single empty `robotType` selects no device types.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut facility = None;
        let mut range = None;
        let mut date_from = None;
        let mut date_to = None;
        let mut robot_types = Vec::new();

        for (key, value) in pairs {
            match key {
                "facility" => facility = Some(value),
                "dateRange" => range = Some(value),
                "dateFrom" => date_from = Some(value),
                "dateTo" => date_to = Some(value),
                "robotType" => robot_types.push(value),
                _ => tracing::debug!("Ignoring unknown filter parameter {}", key),
            }
        }

        let facility = match facility {
            Some(name) => FacilitySelection::from_name(name)
                .ok_or_else(|| FilterError::UnknownFacility(name.to_string()))?,
            None => FacilitySelection::All,
        };

        let device_types = if robot_types.is_empty() {
            DeviceSelection::All
        } else {
            DeviceSelection::from_names(robot_types)?
        };

        let date_range = match range {
            None => DateRange::Today,
            Some(CUSTOM) => DateRange::Custom {
                from: parse_date("dateFrom", date_from)?,
                to: parse_date("dateTo", date_to)?,
            },
            Some(label) => {
                DateRange::preset(label).ok_or_else(|| FilterError::UnknownDateRange(label.to_string()))?
            }
        };

        Ok(Self::new(facility, device_types, date_range))
    }

    /// Query string that carries this filter to the metric-detail view
    pub fn to_query(&self) -> String {
        let mut params = vec![
            format!("facility={}", urlencoding::encode(self.facility.name())),
            format!("dateRange={}", urlencoding::encode(self.date_range.label())),
        ];
        if let DateRange::Custom { from, to } = self.date_range {
            params.push(format!("dateFrom={}", from.format(DATE_FORMAT)));
            params.push(format!("dateTo={}", to.format(DATE_FORMAT)));
        }
        for name in self.device_types.names() {
            params.push(format!("robotType={}", urlencoding::encode(name)));
        }
        params.join("&")
    }
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<NaiveDate, FilterError> {
    let value = value.ok_or(FilterError::MissingDate(field))?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FilterError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
