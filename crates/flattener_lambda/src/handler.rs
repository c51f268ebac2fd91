use crate::firehose::{
    FirehoseResponseRecord, FirehoseTransformationEvent, FirehoseTransformationResponse,
};
use lambda_runtime::{Error, LambdaEvent};
use sensorflow_domain::{RecordTransformService, TransformRecord};
use tracing::info;

/// Flatten every record of a Firehose transformation batch
///
/// Per-record failures are reported in the response; the invocation itself
/// only fails if the event cannot be deserialized.
pub async fn function_handler(
    service: &RecordTransformService,
    event: LambdaEvent<FirehoseTransformationEvent>,
) -> Result<FirehoseTransformationResponse, Error> {
    let (payload, context) = event.into_parts();

    info!(
        request_id = %context.request_id,
        invocation_id = payload.invocation_id.as_deref().unwrap_or(""),
        delivery_stream_arn = payload.delivery_stream_arn.as_deref().unwrap_or(""),
        record_count = payload.records.len(),
        "Received Firehose transformation batch"
    );

    let records: Vec<TransformRecord> = payload
        .records
        .into_iter()
        .map(TransformRecord::from)
        .collect();

    let records = service
        .transform_batch(records)
        .into_iter()
        .map(FirehoseResponseRecord::from)
        .collect();

    Ok(FirehoseTransformationResponse { records })
}
