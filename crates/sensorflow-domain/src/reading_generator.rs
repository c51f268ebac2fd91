use crate::catalog::ReadingCatalog;
use crate::reading::{Reading, ReadingMetadata};
use rand::Rng;

/// Exclusive upper bound of generated measure values
pub const MEASURE_VALUE_MAX: f64 = 100.0;

/// Builds synthetic readings from a catalog
///
/// Each reading picks one customer and one measure uniformly at random and a
/// value uniformly from `[0, MEASURE_VALUE_MAX)`.
#[derive(Debug, Clone, Default)]
pub struct ReadingGenerator {
    catalog: ReadingCatalog,
}

impl ReadingGenerator {
    pub fn new(catalog: ReadingCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ReadingCatalog {
        &self.catalog
    }

    /// Generate a reading using the thread-local random source
    pub fn generate(&self) -> Reading {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a reading from an explicit random source
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Reading {
        let customers = self.catalog.customers();
        let measures = self.catalog.measures();

        let customer = &customers[rng.gen_range(0..customers.len())];
        let measure_name = measures[rng.gen_range(0..measures.len())].clone();
        let measure_value = rng.gen_range(0.0..MEASURE_VALUE_MAX);

        Reading {
            measure_name,
            measure_value,
            metadata: ReadingMetadata {
                customer_id: customer.id.clone(),
                zip_code: customer.zip.clone(),
                extra: self.catalog.extra_metadata().clone(),
            },
        }
    }
}
