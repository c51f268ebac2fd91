use common::telemetry::{init_telemetry, TelemetryConfig};
use flattener_lambda::{
    function_handler, FirehoseTransformationEvent, FlatteningTransformer, ServiceConfig,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sensorflow_domain::RecordTransformService;
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_telemetry(&TelemetryConfig {
        service_name: "flattener_lambda".to_string(),
        log_level: config.log_level.clone(),
    }) {
        eprintln!("Failed to initialize telemetry: {}", e);
        std::process::exit(1);
    }

    info!(separator = %config.flatten_separator, "Starting flattener_lambda");
    debug!("Configuration: {:?}", config);

    let transformer = FlatteningTransformer::new(&config.flatten_separator)?;
    let service = RecordTransformService::new(Arc::new(transformer));
    let service = &service;

    run(service_fn(
        move |event: LambdaEvent<FirehoseTransformationEvent>| async move {
            function_handler(service, event).await
        },
    ))
    .await
}
