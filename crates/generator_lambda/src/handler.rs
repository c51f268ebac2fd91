use lambda_runtime::{Error, LambdaEvent};
use sensorflow_domain::ReadingPublishService;
use serde_json::Value;
use tracing::info;

/// Publish one reading per invocation. The triggering event is not inspected.
pub async fn function_handler(
    service: &ReadingPublishService,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    let reading = service.publish_reading().await?;

    info!(
        request_id = %event.context.request_id,
        measure_name = %reading.measure_name,
        measure_value = reading.measure_value,
        customer_id = %reading.metadata.customer_id,
        "Generator invocation complete"
    );

    Ok(())
}
