use crate::error::DomainResult;

/// Trait for transforming a decoded record payload
///
/// Implementations should:
/// - Parse the raw payload bytes
/// - Return the transformed payload bytes on success
/// - Return PayloadTransformError on failure
#[cfg_attr(test, mockall::automock)]
pub trait PayloadTransformer: Send + Sync {
    /// Transform raw payload bytes (already stripped of transport encoding)
    fn transform(&self, payload: &[u8]) -> DomainResult<Vec<u8>>;
}
