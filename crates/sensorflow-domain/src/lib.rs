pub mod catalog;
pub mod error;
pub mod payload_transformer;
pub mod reading;
pub mod reading_generator;
pub mod reading_publish_service;
pub mod record_transform_service;
pub mod repository;
pub mod transform;

pub use catalog::*;
pub use error::{DomainError, DomainResult};
pub use payload_transformer::PayloadTransformer;
pub use reading::*;
pub use reading_generator::{ReadingGenerator, MEASURE_VALUE_MAX};
pub use reading_publish_service::ReadingPublishService;
pub use record_transform_service::RecordTransformService;
pub use repository::ReadingProducer;
pub use transform::*;

#[cfg(test)]
pub use payload_transformer::MockPayloadTransformer;
#[cfg(test)]
pub use repository::MockReadingProducer;
