use crate::error::DomainResult;
use crate::reading::Reading;
use async_trait::async_trait;

/// Sink for generated readings
/// Infrastructure layer (e.g., sensorflow-kinesis) implements this trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadingProducer: Send + Sync {
    /// Submit a single reading to the stream
    async fn publish(&self, reading: &Reading) -> DomainResult<()>;
}
