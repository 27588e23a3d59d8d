use async_trait::async_trait;

use crate::request::Statistic;
use crate::window::TimeWindow;

/// One aggregated sample from the provider. Values are kept as the
/// provider-rendered strings so they reach stdout unconverted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Datapoint {
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub average: Option<String>,
    pub sum: Option<String>,
    pub sample_count: Option<String>,
}

impl Datapoint {
    /// Looks up the field that carries the given statistic
    pub fn value_for(&self, statistic: Statistic) -> Option<&str> {
        let field = match statistic {
            Statistic::Minimum => &self.minimum,
            Statistic::Maximum => &self.maximum,
            Statistic::Average => &self.average,
            Statistic::Sum => &self.sum,
            Statistic::SampleCount => &self.sample_count,
        };
        field.as_deref()
    }
}

/// Fully resolved get-metric-statistics call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsQuery {
    pub namespace: String,
    pub metric_name: String,
    pub dimension_name: String,
    pub dimension_value: String,
    pub window: TimeWindow,
    pub statistic: Statistic,
}

/// Generic trait for the monitoring backend
#[async_trait]
pub trait MetricsProvider {
    /// Cheap call that only proves the credentials and region work
    async fn probe(&self) -> Result<(), Box<dyn std::error::Error>>;

    /// Returns datapoints in whatever order the provider chose
    async fn get_metric_statistics(
        &self,
        query: StatisticsQuery,
    ) -> Result<Vec<Datapoint>, Box<dyn std::error::Error>>;
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_for_picks_matching_field() {
        let datapoint = Datapoint {
            minimum: Some("10.1".to_string()),
            average: Some("10.0".to_string()),
            ..Datapoint::default()
        };
        assert_eq!(datapoint.value_for(Statistic::Minimum), Some("10.1"));
        assert_eq!(datapoint.value_for(Statistic::Average), Some("10.0"));
        assert_eq!(datapoint.value_for(Statistic::Sum), None);
    }
}
