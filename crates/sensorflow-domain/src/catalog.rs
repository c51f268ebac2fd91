use crate::error::{DomainError, DomainResult};
use crate::reading::Customer;
use serde_json::{Map, Value};

const RESERVED_METADATA_KEYS: [&str; 2] = ["customer_id", "zip_code"];

/// Immutable data the reading generator picks from
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingCatalog {
    measures: Vec<String>,
    customers: Vec<Customer>,
    extra_metadata: Map<String, Value>,
}

impl ReadingCatalog {
    pub fn new(
        measures: Vec<String>,
        customers: Vec<Customer>,
        extra_metadata: Map<String, Value>,
    ) -> DomainResult<Self> {
        if measures.is_empty() {
            return Err(DomainError::InvalidCatalog(
                "at least one measure is required".to_string(),
            ));
        }

        if measures.iter().any(|m| m.trim().is_empty()) {
            return Err(DomainError::InvalidCatalog(
                "measure names cannot be empty".to_string(),
            ));
        }

        if customers.is_empty() {
            return Err(DomainError::InvalidCatalog(
                "at least one customer is required".to_string(),
            ));
        }

        if let Some(key) = extra_metadata
            .keys()
            .find(|k| RESERVED_METADATA_KEYS.contains(&k.as_str()))
        {
            return Err(DomainError::InvalidCatalog(format!(
                "extra metadata cannot override '{}'",
                key
            )));
        }

        Ok(Self {
            measures,
            customers,
            extra_metadata,
        })
    }

    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn extra_metadata(&self) -> &Map<String, Value> {
        &self.extra_metadata
    }
}

impl Default for ReadingCatalog {
    fn default() -> Self {
        let measures = (0..4).map(|i| format!("measure_{}", i)).collect();

        let customers = vec![
            Customer::new("0", "55111"),
            Customer::new("1", "59103"),
            Customer::new("2", "80808"),
            Customer::new("3", "19022"),
            Customer::new("4", "49494"),
        ];

        let mut extra_metadata = Map::new();
        extra_metadata.insert(
            "something_else".to_string(),
            Value::String("value".to_string()),
        );

        Self {
            measures,
            customers,
            extra_metadata,
        }
    }
}
