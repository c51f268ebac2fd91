use anyhow::Result;
use async_trait::async_trait;

/// Acknowledgment returned by the stream for a stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecordReceipt {
    pub shard_id: String,
    pub sequence_number: String,
}

/// Trait for stream publisher operations
/// Abstracts putting a single record on a Kinesis data stream
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait StreamPublisher: Send + Sync {
    /// Put one record on `stream_name` and wait for the stream to accept it
    async fn put_record(
        &self,
        stream_name: String,
        partition_key: String,
        payload: bytes::Bytes,
    ) -> Result<PutRecordReceipt>;
}
