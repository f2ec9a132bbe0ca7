// Dashboard service - Use case for building combined fleet metrics
use crate::application::aggregator::aggregate;
use crate::application::signal_generator::generate;
use crate::domain::filter::FilterState;
use crate::domain::metric::{MetricId, MetricSeries};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Default)]
pub struct DashboardService {
    seed: Option<u64>,
}

impl DashboardService {
    /// A fixed `seed` makes every request render the same mock data
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Regenerate the fleet and fold it down to the filter's selection
    pub fn combined_metrics(&self, filter: &FilterState) -> Vec<MetricSeries> {
        let fleet = generate(&filter.date_range, &mut self.rng());
        let metrics = aggregate(&fleet, &filter.facility, &filter.device_types);
        tracing::debug!(
            "Built {} metrics for facility={} range={}",
            metrics.len(),
            filter.facility.name(),
            filter.date_range.label()
        );
        metrics
    }

    pub fn metric_detail(&self, filter: &FilterState, id: MetricId) -> Option<MetricSeries> {
        self.combined_metrics(filter).into_iter().find(|s| s.id == id)
    }
}
