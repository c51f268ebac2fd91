mod client;
mod reading_producer;
mod traits;

pub use client::{KinesisClient, KinesisStreamPublisher};
pub use reading_producer::{KinesisReadingProducer, DEFAULT_PARTITION_KEY};
pub use traits::{PutRecordReceipt, StreamPublisher};

#[cfg(any(test, feature = "testing"))]
pub use traits::MockStreamPublisher;
