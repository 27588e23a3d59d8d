//! Fetches one Cloudwatch metric statistic and prints it for Zabbix.
//!
//! The crate is split into a pure request-building half and an executing
//! half behind a narrow provider trait, so everything except the actual
//! AWS calls is testable with fakes.

pub mod config;
pub mod request;
pub mod window;
pub mod provider;
pub mod executor;
pub mod cloudwatch;

pub use executor::{execute, ExecutionError};
pub use request::{MetricRequest, RawOptions, ValidationError};
