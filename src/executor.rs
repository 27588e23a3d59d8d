use log::{debug, info};
use thiserror::Error;

use crate::provider::{MetricsProvider, StatisticsQuery};
use crate::request::MetricRequest;
use crate::window::TimeWindow;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// One error for every probe failure. Bad keys, bad region, missing
    /// IAM permission and NTP drift all look the same from here.
    #[error(
        "You cannot access AWS due to one of the following reasons:\n\
         \x20 - The AWS keys provided do not have access to Cloudwatch\n\
         \x20 - your server is not synced with NTP\n\
         \x20 - The Region setting is missing or incorrect"
    )]
    ProviderUnreachable,
    #[error("no datapoint returned for the query window")]
    NoDatapoint,
    #[error("datapoint has no '{0}' field")]
    FieldMissing(&'static str),
    #[error("metric query failed: {0}")]
    QueryFailed(String),
}

/// Runs one query: probe, compute the window, fetch, extract.
/// The first failure is terminal, nothing is retried.
pub async fn execute(
    request: &MetricRequest,
    provider: &dyn MetricsProvider,
) -> Result<String, ExecutionError> {
    if let Err(err) = provider.probe().await {
        debug!("Connectivity probe failed: {}", err);
        return Err(ExecutionError::ProviderUnreachable);
    }

    let window = TimeWindow::compute(request.monitoring_type);
    info!(
        "Querying {}/{} between {} and {} with period {}",
        request.namespace, request.metric_name, window.start, window.end, window.period_seconds
    );

    let query = StatisticsQuery {
        namespace: request.namespace.clone(),
        metric_name: request.metric_name.clone(),
        dimension_name: request.dimension_name.clone(),
        dimension_value: request.dimension_value.clone(),
        window,
        statistic: request.statistic,
    };
    let datapoints = provider
        .get_metric_statistics(query)
        .await
        .map_err(|err| ExecutionError::QueryFailed(err.to_string()))?;

    // Take the first datapoint as returned, without sorting by timestamp
    let datapoint = datapoints.first().ok_or(ExecutionError::NoDatapoint)?;
    let value = datapoint
        .value_for(request.statistic)
        .ok_or(ExecutionError::FieldMissing(request.statistic.field_name()))?;
    Ok(value.to_string())
}
