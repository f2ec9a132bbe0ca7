// Aggregator - Folds per-facility/device series into dashboard metrics
use crate::domain::device::{DeviceSelection, DeviceType};
use crate::domain::facility::FacilitySelection;
use crate::domain::fleet::FacilityMetrics;
use crate::domain::metric::{Aggregation, HOURS_PER_DAY, HourPoint, MetricId, MetricSeries, parse_numeric};

/// Combine the selected facilities and device types into one series per metric.
///
/// Returns an empty list when no device type resolves. Facilities or series
/// missing from `metrics` contribute nothing rather than failing.
pub fn aggregate(
    metrics: &FacilityMetrics,
    facility: &FacilitySelection,
    devices: &DeviceSelection,
) -> Vec<MetricSeries> {
    let facilities = facility.resolve();
    let device_types: Vec<DeviceType> = match devices {
        DeviceSelection::All => facilities
            .first()
            .and_then(|f| metrics.get(f))
            .map(|d| d.keys().copied().collect())
            .unwrap_or_default(),
        DeviceSelection::Only(selected) => selected.clone(),
    };

    if device_types.is_empty() {
        return Vec::new();
    }

    let combinations: Vec<&Vec<MetricSeries>> = facilities
        .iter()
        .filter_map(|f| metrics.get(f))
        .flat_map(|by_device| device_types.iter().filter_map(move |d| by_device.get(d)))
        .collect();

    tracing::debug!(
        "Aggregating {} facilities x {} device types ({} series sets)",
        facilities.len(),
        device_types.len(),
        combinations.len()
    );

    MetricId::ALL
        .into_iter()
        .map(|metric| {
            let series: Vec<&MetricSeries> = combinations
                .iter()
                .filter_map(|set| set.iter().find(|s| s.id == metric))
                .collect();
            combine(metric, &series)
        })
        .collect()
}

/// Fold one metric's series into a single combined series
pub fn combine(metric: MetricId, series: &[&MetricSeries]) -> MetricSeries {
    let spec = metric.spec();

    let hourly_data: Vec<HourPoint> = (0..HOURS_PER_DAY)
        .map(|hour| {
            let values: Vec<f64> = series
                .iter()
                .filter_map(|s| s.hourly_data.get(hour))
                .map(|p| p.value)
                .collect();
            let value = metric.cap(mean(&values));
            HourPoint::new(hour, value, Some(spec.generated.format(value)))
        })
        .collect();

    let current = match spec.aggregation {
        Aggregation::Sum => hourly_data.iter().map(|p| p.value).sum(),
        Aggregation::Average => {
            let values: Vec<f64> = series.iter().map(|s| parse_numeric(&s.value)).collect();
            mean(&values)
        }
    };

    MetricSeries::new(metric, spec.aggregated.format(current), hourly_data)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
