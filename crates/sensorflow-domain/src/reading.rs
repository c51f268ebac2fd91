use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One synthetic sensor reading, created fresh per generator invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub measure_name: String,
    pub measure_value: f64,
    pub metadata: ReadingMetadata,
}

/// Customer metadata nested under a reading
///
/// Extra fields are serialized inline next to `customer_id` and `zip_code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingMetadata {
    pub customer_id: String,
    pub zip_code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer the generator can attribute readings to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub zip: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            zip: zip.into(),
        }
    }
}
