use crate::config::AwsSettings;
use crate::provider::{Datapoint, MetricsProvider, StatisticsQuery};
use crate::request::Statistic;

use std::time::SystemTime;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::config::{Credentials, Region};
use aws_sdk_cloudwatch::types::Dimension;
use aws_sdk_cloudwatch::types::Statistic as AwsStatistic;
use aws_sdk_cloudwatch::Client;
use log::debug;

/// Provider implementation backed by the Cloudwatch API
pub struct CloudwatchProvider {
    client: Client,
}

pub async fn create_cloudwatch_provider(settings: AwsSettings) -> CloudwatchProvider {
    CloudwatchProvider {
        client: create_client(&settings).await,
    }
}

async fn create_client(settings: &AwsSettings) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()));
    if let (Some(access_key), Some(secret_key)) = (&settings.access_key, &settings.secret_key) {
        loader = loader.credentials_provider(Credentials::new(
            access_key,
            secret_key,
            None,
            None,
            "zabbix_cloudwatch",
        ));
    }
    let shared_config = loader.load().await;
    Client::new(&shared_config)
}

fn to_aws_statistic(statistic: Statistic) -> AwsStatistic {
    match statistic {
        Statistic::Minimum => AwsStatistic::Minimum,
        Statistic::Maximum => AwsStatistic::Maximum,
        Statistic::Average => AwsStatistic::Average,
        Statistic::Sum => AwsStatistic::Sum,
        Statistic::SampleCount => AwsStatistic::SampleCount,
    }
}

fn convert_datapoint(datapoint: &aws_sdk_cloudwatch::types::Datapoint) -> Datapoint {
    Datapoint {
        minimum: datapoint.minimum().map(|value| value.to_string()),
        maximum: datapoint.maximum().map(|value| value.to_string()),
        average: datapoint.average().map(|value| value.to_string()),
        sum: datapoint.sum().map(|value| value.to_string()),
        sample_count: datapoint.sample_count().map(|value| value.to_string()),
    }
}

#[async_trait]
impl MetricsProvider for CloudwatchProvider {
    async fn probe(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.client.describe_alarms().max_records(1).send().await?;
        Ok(())
    }

    async fn get_metric_statistics(
        &self,
        query: StatisticsQuery,
    ) -> Result<Vec<Datapoint>, Box<dyn std::error::Error>> {
        debug!("Sending get_metric_statistics for {:?}", query);

        let output = self
            .client
            .get_metric_statistics()
            .namespace(&query.namespace)
            .metric_name(&query.metric_name)
            .dimensions(
                Dimension::builder()
                    .name(&query.dimension_name)
                    .value(&query.dimension_value)
                    .build(),
            )
            .period(query.window.period_seconds)
            .start_time(SystemTime::from(query.window.start).into())
            .end_time(SystemTime::from(query.window.end).into())
            .statistics(to_aws_statistic(query.statistic))
            .send()
            .await?;

        Ok(output.datapoints().iter().map(convert_datapoint).collect())
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistic_conversion() {
        assert_eq!(to_aws_statistic(Statistic::Minimum), AwsStatistic::Minimum);
        assert_eq!(to_aws_statistic(Statistic::Maximum), AwsStatistic::Maximum);
        assert_eq!(to_aws_statistic(Statistic::Average), AwsStatistic::Average);
        assert_eq!(to_aws_statistic(Statistic::Sum), AwsStatistic::Sum);
        assert_eq!(
            to_aws_statistic(Statistic::SampleCount),
            AwsStatistic::SampleCount
        );
    }

    #[test]
    fn test_datapoint_conversion() {
        let source = aws_sdk_cloudwatch::types::Datapoint::builder()
            .minimum(10.1)
            .average(10.0)
            .build();
        let datapoint = convert_datapoint(&source);
        assert_eq!(datapoint.minimum.as_deref(), Some("10.1"));
        assert_eq!(datapoint.average.as_deref(), Some("10"));
        assert_eq!(datapoint.sum, None);
    }
}
