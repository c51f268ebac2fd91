use crate::traits::StreamPublisher;
use anyhow::Context;
use async_trait::async_trait;
use sensorflow_domain::error::{DomainError, DomainResult};
use sensorflow_domain::{Reading, ReadingProducer};
use std::sync::Arc;
use tracing::{debug, info};

/// Partition key used for every reading. A constant key pins all readings to one shard.
pub const DEFAULT_PARTITION_KEY: &str = "1";

/// Kinesis producer publishing readings as JSON records
pub struct KinesisReadingProducer {
    publisher: Arc<dyn StreamPublisher>,
    stream_name: String,
    partition_key: String,
}

impl KinesisReadingProducer {
    pub fn new(
        publisher: Arc<dyn StreamPublisher>,
        stream_name: String,
        partition_key: String,
    ) -> Self {
        info!(
            stream = %stream_name,
            partition_key = %partition_key,
            "Created KinesisReadingProducer"
        );
        Self {
            publisher,
            stream_name,
            partition_key,
        }
    }
}

#[async_trait]
impl ReadingProducer for KinesisReadingProducer {
    async fn publish(&self, reading: &Reading) -> DomainResult<()> {
        let payload = serde_json::to_vec(reading).context("Failed to serialize reading")?;

        debug!(
            stream = %self.stream_name,
            measure_name = %reading.measure_name,
            size_bytes = payload.len(),
            "Publishing reading"
        );

        let receipt = self
            .publisher
            .put_record(
                self.stream_name.clone(),
                self.partition_key.clone(),
                payload.into(),
            )
            .await
            .map_err(DomainError::SinkError)?;

        info!(
            stream = %self.stream_name,
            shard_id = %receipt.shard_id,
            sequence_number = %receipt.sequence_number,
            "Successfully published reading"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockStreamPublisher, PutRecordReceipt};
    use bytes::Bytes;
    use sensorflow_domain::ReadingMetadata;
    use serde_json::{json, Map, Value};

    fn sample_reading() -> Reading {
        let mut extra = Map::new();
        extra.insert("something_else".to_string(), json!("value"));

        Reading {
            measure_name: "measure_3".to_string(),
            measure_value: 64.25,
            metadata: ReadingMetadata {
                customer_id: "2".to_string(),
                zip_code: "80808".to_string(),
                extra,
            },
        }
    }

    fn receipt() -> PutRecordReceipt {
        PutRecordReceipt {
            shard_id: "shardId-000000000000".to_string(),
            sequence_number: "49590338271490256608559692538361571095921575989136588898"
                .to_string(),
        }
    }

    #[tokio::test]
    async fn test_publish_success() {
        // Arrange
        let mut mock_publisher = MockStreamPublisher::new();

        mock_publisher
            .expect_put_record()
            .withf(|stream: &String, partition_key: &String, payload: &Bytes| {
                let body: Value = serde_json::from_slice(payload).unwrap();
                stream == "sensor-readings"
                    && partition_key == "1"
                    && body
                        == json!({
                            "measure_name": "measure_3",
                            "measure_value": 64.25,
                            "metadata": {
                                "customer_id": "2",
                                "zip_code": "80808",
                                "something_else": "value"
                            }
                        })
            })
            .times(1)
            .returning(|_, _, _| Ok(receipt()));

        let producer = KinesisReadingProducer::new(
            Arc::new(mock_publisher),
            "sensor-readings".to_string(),
            DEFAULT_PARTITION_KEY.to_string(),
        );

        // Act
        let result = producer.publish(&sample_reading()).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_publish_uses_configured_partition_key() {
        // Arrange
        let mut mock_publisher = MockStreamPublisher::new();

        mock_publisher
            .expect_put_record()
            .withf(|_stream: &String, partition_key: &String, _payload: &Bytes| {
                partition_key == "customer-shard"
            })
            .times(1)
            .returning(|_, _, _| Ok(receipt()));

        let producer = KinesisReadingProducer::new(
            Arc::new(mock_publisher),
            "sensor-readings".to_string(),
            "customer-shard".to_string(),
        );

        // Act
        let result = producer.publish(&sample_reading()).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_publish_failure() {
        // Arrange
        let mut mock_publisher = MockStreamPublisher::new();

        mock_publisher
            .expect_put_record()
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("ResourceNotFoundException")));

        let producer = KinesisReadingProducer::new(
            Arc::new(mock_publisher),
            "missing-stream".to_string(),
            DEFAULT_PARTITION_KEY.to_string(),
        );

        // Act
        let result = producer.publish(&sample_reading()).await;

        // Assert
        assert!(matches!(result, Err(DomainError::SinkError(_))));
    }
}
