// Date range domain model
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    Today,
    Last7Days,
    Last30Days,
    Last90Days,
    Custom { from: NaiveDate, to: NaiveDate },
}

pub const CUSTOM: &str = "Custom";

impl DateRange {
    pub const PRESETS: [DateRange; 4] = [
        DateRange::Today,
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Last7Days => "Last 7 Days",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::Last90Days => "Last 90 Days",
            DateRange::Custom { .. } => CUSTOM,
        }
    }

    /// Looks up a preset by label. "Custom" needs its dates and is not a preset
    pub fn preset(label: &str) -> Option<Self> {
        Self::PRESETS.into_iter().find(|r| r.label() == label)
    }

    /// Whole days between the two ends of a custom range
    pub fn day_span(from: NaiveDate, to: NaiveDate) -> i64 {
        (to - from).num_days().abs()
    }

    /// Scale applied to every generated value for this range
    pub fn global_multiplier(&self) -> f64 {
        match self {
            DateRange::Today => 0.85,
            DateRange::Last7Days => 0.90,
            DateRange::Last30Days => 0.95,
            DateRange::Last90Days => 1.00,
            DateRange::Custom { from, to } => {
                let span = Self::day_span(*from, *to) as f64;
                0.85 + (span * 0.1).sin() * 0.15
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_preset_multipliers() {
        assert_eq!(DateRange::Today.global_multiplier(), 0.85);
        assert_eq!(DateRange::Last7Days.global_multiplier(), 0.90);
        assert_eq!(DateRange::Last30Days.global_multiplier(), 0.95);
        assert_eq!(DateRange::Last90Days.global_multiplier(), 1.00);
    }

    #[test]
    fn test_custom_multiplier() {
        let same_day = DateRange::Custom {
            from: date(2024, 3, 1),
            to: date(2024, 3, 1),
        };
        assert!((same_day.global_multiplier() - 0.85).abs() < 1e-9);

        let ten_days = DateRange::Custom {
            from: date(2024, 3, 1),
            to: date(2024, 3, 11),
        };
        assert!((ten_days.global_multiplier() - 0.976_221).abs() < 1e-4);

        // reversed pickers still measure the same span
        let reversed = DateRange::Custom {
            from: date(2024, 3, 11),
            to: date(2024, 3, 1),
        };
        assert_eq!(reversed.global_multiplier(), ten_days.global_multiplier());
    }

    #[test]
    fn test_preset_labels() {
        assert_eq!(DateRange::preset("Last 30 Days"), Some(DateRange::Last30Days));
        assert_eq!(DateRange::preset("Custom"), None);
        assert_eq!(DateRange::preset("Last 14 Days"), None);
    }
}
