use sensorflow_domain::{DomainError, DomainResult, PayloadTransformer};
use sensorflow_payload::{JsonFlattener, PayloadError};
use tracing::{debug, instrument};

/// Implementation of PayloadTransformer flattening nested JSON documents
pub struct FlatteningTransformer {
    flattener: JsonFlattener,
}

impl FlatteningTransformer {
    /// Create a transformer joining nested keys with `separator`
    pub fn new(separator: &str) -> Result<Self, PayloadError> {
        Ok(Self {
            flattener: JsonFlattener::with_separator(separator)?,
        })
    }
}

impl Default for FlatteningTransformer {
    fn default() -> Self {
        Self {
            flattener: JsonFlattener::new(),
        }
    }
}

impl PayloadTransformer for FlatteningTransformer {
    #[instrument(
        name = "payload_flatten",
        skip(self, payload),
        fields(payload_size = payload.len())
    )]
    fn transform(&self, payload: &[u8]) -> DomainResult<Vec<u8>> {
        debug!(separator = %self.flattener.separator(), "flattening payload");

        self.flattener
            .flatten_payload(payload)
            .map_err(|e| DomainError::PayloadTransformError(e.to_string()))
    }
}
