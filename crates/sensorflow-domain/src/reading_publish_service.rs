use crate::error::DomainResult;
use crate::reading::Reading;
use crate::reading_generator::ReadingGenerator;
use crate::repository::ReadingProducer;
use std::sync::Arc;
use tracing::{debug, info};

/// Domain service that generates a reading and submits it to the stream
pub struct ReadingPublishService {
    generator: ReadingGenerator,
    producer: Arc<dyn ReadingProducer>,
}

impl ReadingPublishService {
    pub fn new(generator: ReadingGenerator, producer: Arc<dyn ReadingProducer>) -> Self {
        Self {
            generator,
            producer,
        }
    }

    /// Generate one reading and publish it. Publish failures are returned as-is.
    pub async fn publish_reading(&self) -> DomainResult<Reading> {
        let reading = self.generator.generate();

        debug!(
            measure_name = %reading.measure_name,
            measure_value = reading.measure_value,
            customer_id = %reading.metadata.customer_id,
            "Generated reading"
        );

        self.producer.publish(&reading).await?;

        info!(
            measure_name = %reading.measure_name,
            customer_id = %reading.metadata.customer_id,
            "Published reading"
        );

        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::repository::MockReadingProducer;

    #[tokio::test]
    async fn test_publish_reading_success() {
        // Arrange
        let mut mock_producer = MockReadingProducer::new();
        mock_producer
            .expect_publish()
            .withf(|reading: &Reading| {
                reading.measure_name.starts_with("measure_")
                    && (0.0..100.0).contains(&reading.measure_value)
            })
            .times(1)
            .return_once(|_| Ok(()));

        let service = ReadingPublishService::new(ReadingGenerator::default(), Arc::new(mock_producer));

        // Act
        let result = service.publish_reading().await;

        // Assert
        let reading = result.unwrap();
        assert!(ReadingGenerator::default()
            .catalog()
            .measures()
            .contains(&reading.measure_name));
    }

    #[tokio::test]
    async fn test_publish_reading_sink_error() {
        // Arrange
        let mut mock_producer = MockReadingProducer::new();
        mock_producer.expect_publish().times(1).return_once(|_| {
            Err(DomainError::SinkError(anyhow::anyhow!(
                "stream not found"
            )))
        });

        let service = ReadingPublishService::new(ReadingGenerator::default(), Arc::new(mock_producer));

        // Act
        let result = service.publish_reading().await;

        // Assert
        assert!(matches!(result, Err(DomainError::SinkError(_))));
    }
}
