//! Wire types of the Firehose data-transformation contract.
//!
//! `data` is kept as the raw base64 string so that a record with a broken
//! encoding fails on its own instead of failing deserialization of the batch.

use sensorflow_domain::{TransformRecord, TransformedRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseTransformationEvent {
    #[serde(default)]
    pub invocation_id: Option<String>,
    #[serde(default)]
    pub delivery_stream_arn: Option<String>,
    #[serde(default)]
    pub source_kinesis_stream_arn: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub records: Vec<FirehoseEventRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseEventRecord {
    pub record_id: String,
    pub data: String,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub approximate_arrival_timestamp: Option<i64>,
    /// Present when the delivery stream reads from a Kinesis data stream
    #[serde(default)]
    pub kinesis_record_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirehoseTransformationResponse {
    pub records: Vec<FirehoseResponseRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseResponseRecord {
    pub record_id: String,
    pub result: String,
    pub data: String,
}

impl From<FirehoseEventRecord> for TransformRecord {
    fn from(record: FirehoseEventRecord) -> Self {
        TransformRecord {
            record_id: record.record_id,
            data: record.data,
        }
    }
}

impl From<TransformedRecord> for FirehoseResponseRecord {
    fn from(record: TransformedRecord) -> Self {
        FirehoseResponseRecord {
            record_id: record.record_id,
            result: record.result.to_string(),
            data: record.data,
        }
    }
}
