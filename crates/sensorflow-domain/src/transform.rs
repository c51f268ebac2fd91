use std::fmt;

/// Per-record outcome reported back to the delivery stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformResult {
    Ok,
    ProcessingFailed,
}

impl TransformResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformResult::Ok => "Ok",
            TransformResult::ProcessingFailed => "ProcessingFailed",
        }
    }
}

impl fmt::Display for TransformResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record as received from the delivery stream, data still base64 encoded
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRecord {
    pub record_id: String,
    pub data: String,
}

/// Record handed back to the delivery stream, data base64 encoded
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedRecord {
    pub record_id: String,
    pub result: TransformResult,
    pub data: String,
}
