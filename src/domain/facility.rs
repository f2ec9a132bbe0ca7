// Facility domain model
use serde::Serialize;

/// Name used by the dashboard for the synthetic "every facility" selection.
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Facility {
    #[serde(rename = "Mayo Clinic - Rochester")]
    MayoClinicRochester,
    #[serde(rename = "Cleveland Clinic - Main Campus")]
    ClevelandClinicMainCampus,
    #[serde(rename = "Johns Hopkins Hospital")]
    JohnsHopkinsHospital,
}

impl Facility {
    pub const ALL: [Facility; 3] = [
        Facility::MayoClinicRochester,
        Facility::ClevelandClinicMainCampus,
        Facility::JohnsHopkinsHospital,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Facility::MayoClinicRochester => "Mayo Clinic - Rochester",
            Facility::ClevelandClinicMainCampus => "Cleveland Clinic - Main Campus",
            Facility::JohnsHopkinsHospital => "Johns Hopkins Hospital",
        }
    }

    /// Scale applied to every generated value for this facility
    pub fn multiplier(&self) -> f64 {
        match self {
            Facility::MayoClinicRochester => 1.2,
            Facility::ClevelandClinicMainCampus => 1.0,
            Facility::JohnsHopkinsHospital => 0.8,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Facility scope chosen in the dashboard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacilitySelection {
    #[default]
    All,
    One(Facility),
}

impl FacilitySelection {
    /// Concrete facilities this selection folds over
    pub fn resolve(&self) -> Vec<Facility> {
        match self {
            FacilitySelection::All => Facility::ALL.to_vec(),
            FacilitySelection::One(facility) => vec![*facility],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FacilitySelection::All => ALL,
            FacilitySelection::One(facility) => facility.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        if name == ALL {
            return Some(FacilitySelection::All);
        }
        Facility::from_name(name).map(FacilitySelection::One)
    }
}
