// Signal generator - Synthetic hourly fleet metrics
use crate::domain::date_range::DateRange;
use crate::domain::device::{BaseProfile, DeviceType};
use crate::domain::facility::Facility;
use crate::domain::fleet::{DeviceMetrics, FacilityMetrics};
use crate::domain::metric::{HOURS_PER_DAY, HourPoint, MetricId, MetricSeries};
use rand::Rng;

const NIGHT_FACTOR: f64 = 0.2;
const PEAK_FACTOR: f64 = 1.0;
const TRANSITION_FACTOR: f64 = 0.6;
const JITTER: f64 = 0.1;

/// Activity level for an hour of the day
pub fn hour_factor(hour: usize) -> f64 {
    match hour {
        0..=5 | 22.. => NIGHT_FACTOR,
        9..=16 => PEAK_FACTOR,
        _ => TRANSITION_FACTOR,
    }
}

/// Generate metrics for every facility and device type.
///
/// Values are drawn from `rng`, so two calls only agree when given
/// identically seeded sources.
pub fn generate<R: Rng>(range: &DateRange, rng: &mut R) -> FacilityMetrics {
    let global = range.global_multiplier();
    tracing::debug!(
        "Generating fleet metrics for {} (global multiplier {:.4})",
        range.label(),
        global
    );

    Facility::ALL
        .into_iter()
        .map(|facility| {
            let devices: DeviceMetrics = DeviceType::ALL
                .into_iter()
                .map(|device| {
                    let series = device_series(&device.profile(), facility.multiplier() * global, rng);
                    (device, series)
                })
                .collect();
            (facility, devices)
        })
        .collect()
}

fn device_series<R: Rng>(profile: &BaseProfile, scale: f64, rng: &mut R) -> Vec<MetricSeries> {
    MetricId::ALL
        .into_iter()
        .map(|metric| metric_series(metric, profile.base(metric), scale, rng))
        .collect()
}

fn metric_series<R: Rng>(metric: MetricId, base: f64, scale: f64, rng: &mut R) -> MetricSeries {
    let format = metric.spec().generated;

    let hourly_data = (0..HOURS_PER_DAY)
        .map(|hour| {
            let raw = match metric {
                // error spikes are not tied to time of day
                MetricId::ErrorRate => rng.random_range(0.0..=base),
                _ => {
                    let noise = 1.0 + rng.random_range(-JITTER..=JITTER);
                    base * hour_factor(hour) * noise * scale
                }
            };
            let value = metric.cap(raw);
            HourPoint::new(hour, value, Some(format.format(value)))
        })
        .collect();

    let current = metric.cap(base * scale);
    MetricSeries::new(metric, format.format(current), hourly_data)
}
