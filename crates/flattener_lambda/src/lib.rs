pub mod config;
pub mod firehose;
pub mod handler;
pub mod transformer;

pub use config::ServiceConfig;
pub use firehose::{
    FirehoseEventRecord, FirehoseResponseRecord, FirehoseTransformationEvent,
    FirehoseTransformationResponse,
};
pub use handler::function_handler;
pub use transformer::FlatteningTransformer;
