mod config;
mod handler;

use common::telemetry::{init_telemetry, TelemetryConfig};
use config::ServiceConfig;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sensorflow_domain::{ReadingGenerator, ReadingPublishService};
use sensorflow_kinesis::{KinesisClient, KinesisReadingProducer};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Missing or invalid configuration is fatal for the whole runtime
    let config = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_telemetry(&TelemetryConfig {
        service_name: "generator_lambda".to_string(),
        log_level: config.log_level.clone(),
    }) {
        eprintln!("Failed to initialize telemetry: {}", e);
        std::process::exit(1);
    }

    info!(stream = %config.stream_name, "Starting generator_lambda");
    debug!("Configuration: {:?}", config);

    // Built once per cold start and reused across invocations
    let kinesis = KinesisClient::connect(config.kinesis_endpoint_url.as_deref()).await;
    let producer = Arc::new(KinesisReadingProducer::new(
        kinesis.create_publisher_client(),
        config.stream_name.clone(),
        config.partition_key.clone(),
    ));
    let service = ReadingPublishService::new(ReadingGenerator::default(), producer);
    let service = &service;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::function_handler(service, event).await
    }))
    .await
}
