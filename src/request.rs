use std::fmt;

use thiserror::Error;

/// Aggregation function requested from Cloudwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Minimum,
    Maximum,
    Average,
    Sum,
    SampleCount,
}

impl Statistic {
    /// Name of the statistic as Cloudwatch expects it in a request
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Minimum => "Minimum",
            Statistic::Maximum => "Maximum",
            Statistic::Average => "Average",
            Statistic::Sum => "Sum",
            Statistic::SampleCount => "SampleCount",
        }
    }

    /// Name of the corresponding datapoint field
    pub fn field_name(&self) -> &'static str {
        match self {
            Statistic::Minimum => "minimum",
            Statistic::Maximum => "maximum",
            Statistic::Average => "average",
            Statistic::Sum => "sum",
            Statistic::SampleCount => "sample_count",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// Cloudwatch monitoring granularity of the watched resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitoringType {
    /// Five-minute datapoints
    #[default]
    Basic,
    /// One-minute datapoints
    Detailed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required option: --{0}")]
    MissingField(&'static str),
    /// Covers both the dimension name and the dimension value
    #[error("Missing required options: --dimension-name and --dimension-value")]
    MissingDimension,
    #[error("Statistic type must be one of: Minimum, Maximum, Average, Sum, SampleCount")]
    InvalidStatistic(String),
    #[error("Monitoring type must be either 'detailed' or 'basic'")]
    InvalidMonitoringType(String),
}

/// Raw option values as they come from the command line, before validation
#[derive(Debug, Default, Clone)]
pub struct RawOptions {
    pub namespace: Option<String>,
    pub metricname: Option<String>,
    pub dimension_name: Option<String>,
    pub dimension_value: Option<String>,
    pub monitoring_type: Option<String>,
    pub statistic: Option<String>,
}

/// Validated description of one metric query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRequest {
    pub namespace: String,
    pub metric_name: String,
    pub dimension_name: String,
    pub dimension_value: String,
    pub monitoring_type: MonitoringType,
    pub statistic: Statistic,
}

impl MetricRequest {
    /// Builds a request from raw options.
    /// Performs no I/O, so a bad request never reaches AWS.
    pub fn from_raw(raw: RawOptions) -> Result<MetricRequest, ValidationError> {
        let namespace = raw
            .namespace
            .ok_or(ValidationError::MissingField("namespace"))?;
        let metric_name = raw
            .metricname
            .ok_or(ValidationError::MissingField("metricname"))?;
        // name and value are checked together, as one dimension
        let (dimension_name, dimension_value) = match (raw.dimension_name, raw.dimension_value) {
            (Some(name), Some(value)) => (name, value),
            _ => return Err(ValidationError::MissingDimension),
        };
        let statistic = resolve_statistic(raw.statistic.as_deref())?;
        let monitoring_type = resolve_monitoring_type(raw.monitoring_type.as_deref())?;
        Ok(MetricRequest {
            namespace,
            metric_name,
            dimension_name,
            dimension_value,
            monitoring_type,
            statistic,
        })
    }
}

fn resolve_statistic(raw: Option<&str>) -> Result<Statistic, ValidationError> {
    match raw {
        None => Ok(Statistic::Average),
        Some("Minimum") => Ok(Statistic::Minimum),
        Some("Maximum") => Ok(Statistic::Maximum),
        Some("Average") => Ok(Statistic::Average),
        Some("Sum") => Ok(Statistic::Sum),
        Some("SampleCount") => Ok(Statistic::SampleCount),
        Some(other) => Err(ValidationError::InvalidStatistic(other.to_string())),
    }
}

fn resolve_monitoring_type(raw: Option<&str>) -> Result<MonitoringType, ValidationError> {
    match raw {
        None => Ok(MonitoringType::Basic),
        Some("basic") => Ok(MonitoringType::Basic),
        Some("detailed") => Ok(MonitoringType::Detailed),
        Some(other) => Err(ValidationError::InvalidMonitoringType(other.to_string())),
    }
}
