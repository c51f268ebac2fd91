use crate::traits::{PutRecordReceipt, StreamPublisher};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kinesis::error::DisplayErrorContext;
use aws_sdk_kinesis::primitives::Blob;
use std::sync::Arc;
use tracing::{debug, info};

pub struct KinesisClient {
    client: aws_sdk_kinesis::Client,
}

impl KinesisClient {
    /// Build a Kinesis client from the ambient AWS configuration
    ///
    /// `endpoint_url` overrides the service endpoint, e.g. for a local stack.
    pub async fn connect(endpoint_url: Option<&str>) -> Self {
        info!(
            endpoint_url = endpoint_url.unwrap_or("default"),
            "Loading AWS configuration for Kinesis"
        );

        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let mut builder = aws_sdk_kinesis::config::Builder::from(&sdk_config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }

        let client = aws_sdk_kinesis::Client::from_conf(builder.build());

        info!(region = ?sdk_config.region(), "Kinesis client ready");
        Self { client }
    }

    /// Create a StreamPublisher trait object from this client
    pub fn create_publisher_client(&self) -> Arc<dyn StreamPublisher> {
        Arc::new(KinesisStreamPublisher::new(self.client.clone()))
    }
}

/// Concrete implementation of StreamPublisher using the AWS SDK
pub struct KinesisStreamPublisher {
    client: aws_sdk_kinesis::Client,
}

impl KinesisStreamPublisher {
    pub fn new(client: aws_sdk_kinesis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StreamPublisher for KinesisStreamPublisher {
    async fn put_record(
        &self,
        stream_name: String,
        partition_key: String,
        payload: bytes::Bytes,
    ) -> Result<PutRecordReceipt> {
        debug!(
            stream = %stream_name,
            partition_key = %partition_key,
            size_bytes = payload.len(),
            "Putting record on Kinesis stream"
        );

        let output = self
            .client
            .put_record()
            .stream_name(stream_name)
            .partition_key(partition_key)
            .data(Blob::new(payload.to_vec()))
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to put record on Kinesis stream: {}",
                    DisplayErrorContext(&e)
                )
            })?;

        Ok(PutRecordReceipt {
            shard_id: output.shard_id().to_string(),
            sequence_number: output.sequence_number().to_string(),
        })
    }
}
