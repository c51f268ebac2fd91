use crate::error::{DomainError, DomainResult};
use crate::payload_transformer::PayloadTransformer;
use crate::transform::{TransformRecord, TransformResult, TransformedRecord};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Domain service that transforms a delivery stream batch record by record
///
/// Flow per record:
/// 1. Decode base64 transport encoding
/// 2. Transform the raw payload
/// 3. Re-encode the result as base64
///
/// A failing record is reported as `ProcessingFailed` with its original data
/// and never aborts the rest of the batch.
pub struct RecordTransformService {
    transformer: Arc<dyn PayloadTransformer>,
}

impl RecordTransformService {
    pub fn new(transformer: Arc<dyn PayloadTransformer>) -> Self {
        Self { transformer }
    }

    /// Transform every record; output order and length match the input
    pub fn transform_batch(&self, records: Vec<TransformRecord>) -> Vec<TransformedRecord> {
        let record_count = records.len();
        debug!(record_count, "Transforming record batch");

        let transformed: Vec<TransformedRecord> = records
            .into_iter()
            .map(|record| self.transform_record(record))
            .collect();

        let failed_count = transformed
            .iter()
            .filter(|r| r.result == TransformResult::ProcessingFailed)
            .count();

        info!(record_count, failed_count, "Transformed record batch");

        transformed
    }

    pub fn transform_record(&self, record: TransformRecord) -> TransformedRecord {
        match self.encode_transformed(&record.data) {
            Ok(data) => TransformedRecord {
                record_id: record.record_id,
                result: TransformResult::Ok,
                data,
            },
            Err(e) => {
                warn!(
                    record_id = %record.record_id,
                    error = %e,
                    "Record transformation failed"
                );
                TransformedRecord {
                    record_id: record.record_id,
                    result: TransformResult::ProcessingFailed,
                    data: record.data,
                }
            }
        }
    }

    fn encode_transformed(&self, encoded: &str) -> DomainResult<String> {
        let payload = STANDARD
            .decode(encoded)
            .map_err(|e| DomainError::PayloadDecodeError(e.to_string()))?;

        let transformed = self.transformer.transform(&payload)?;

        Ok(STANDARD.encode(transformed))
    }
}
