use std::process::exit;

use clap::Parser;
use log::{debug, info};
use zabbix_cloudwatch::cloudwatch::create_cloudwatch_provider;
use zabbix_cloudwatch::config::AwsSettings;
use zabbix_cloudwatch::executor::{execute, ExecutionError};
use zabbix_cloudwatch::request::{MetricRequest, RawOptions};

#[derive(Debug, Parser)]
#[command(disable_help_flag = true)]
struct Opt {
    /// Metric namespace (AWS/Autoscaling, AWS/EC2, etc...)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Metric name (GroupInServiceInstances, EstimatedCharges, etc...)
    #[arg(short, long)]
    metricname: Option<String>,

    /// Dimension name (AutoScalingGroupName, etc...)
    #[arg(short, long)]
    dimension_name: Option<String>,

    /// Dimension value
    #[arg(short = 'v', long)]
    dimension_value: Option<String>,

    /// Monitoring type, detailed or basic
    #[arg(short = 't', long)]
    monitoring_type: Option<String>,

    /// Statistic to fetch
    #[arg(short, long)]
    statistic: Option<String>,

    /// AWS access key, falls back to AWS_ACCESS_KEY_ID
    #[arg(long)]
    aws_access_key: Option<String>,

    /// AWS secret key, falls back to AWS_SECRET_ACCESS_KEY
    #[arg(long)]
    aws_secret_key: Option<String>,

    /// AWS region, falls back to AWS_REGION, then us-east-1
    #[arg(long)]
    aws_region: Option<String>,

    /// This message
    #[arg(short, long)]
    help: bool,
}

// Zabbix treats a non-zero exit as item failure, so usage exits 1 too
fn usage() -> ! {
    println!(
        "Usage: {}

  -h, --help              This Message
  -n, --namespace         Namespace (AWS/Autoscaling, AWS/EC2, etc...)
  -m, --metricname        Metric Name (GroupInServiceInstances,EstimatedCharges, etc...)
  -d, --dimension-name    Dimension Name (AutoScalingGroupName, etc...)
  -v, --dimension-value   Dimension Value
  -t, --monitoring-type   detailed|basic                            Default: basic
  -s, --statistic         Minimum|Maximum|Average|Sum|SampleCount   Default: Average",
        std::env::args().next().unwrap_or_default()
    );
    exit(1);
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env().init();

    let opt = Opt::parse();
    if opt.help {
        usage();
    }

    let raw = RawOptions {
        namespace: opt.namespace,
        metricname: opt.metricname,
        dimension_name: opt.dimension_name,
        dimension_value: opt.dimension_value,
        monitoring_type: opt.monitoring_type,
        statistic: opt.statistic,
    };
    let request = match MetricRequest::from_raw(raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    let settings = AwsSettings::resolve(opt.aws_access_key, opt.aws_secret_key, opt.aws_region);
    info!("Using region {}", settings.region);
    let provider = create_cloudwatch_provider(settings).await;

    match execute(&request, &provider).await {
        Ok(value) => {
            println!("{}", value);
        }
        // stays silent so Zabbix sees a clean failure code
        Err(err @ (ExecutionError::NoDatapoint | ExecutionError::FieldMissing(_))) => {
            debug!("No value extracted: {}", err);
            exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    }
}
