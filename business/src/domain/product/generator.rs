use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::Product;
use chrono::Utc;
use uuid::Uuid;

const ADJECTIVES: [&str; 10] = [
    "Awesome",
    "Cool",
    "Smart",
    "Innovative",
    "Premium",
    "Classic",
    "Elegant",
    "Advanced",
    "Ultimate",
    "Pro",
];

const PRODUCT_TYPES: [&str; 10] = [
    "Gadget",
    "Device",
    "Tool",
    "Accessory",
    "Electronics",
    "Appliance",
    "Instrument",
    "Machine",
    "Equipment",
    "System",
];

pub const PRICE_MIN: f64 = 10.0;
pub const PRICE_MAX: f64 = 1000.0;

/// Synthesizes random products for bulk-load demonstrations.
///
/// Seeded explicitly so tests can pin the sequence; production callers use
/// `from_entropy`.
pub struct ProductGenerator {
    rng: StdRng,
}

impl ProductGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One product: uniform adjective + noun for the name, a lowercase
    /// sentence derived from it, and a price in [10.0, 1000.0).
    pub fn generate(&mut self) -> Product {
        let adjective = ADJECTIVES[self.rng.random_range(0..ADJECTIVES.len())];
        let product_type = PRODUCT_TYPES[self.rng.random_range(0..PRODUCT_TYPES.len())];

        let name = format!("{} {}", adjective, product_type);
        let description = format!("A {} designed for modern needs.", name.to_lowercase());
        let price = self.rng.random_range(PRICE_MIN..PRICE_MAX);

        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<Product> {
        (0..count).map(|_| self.generate()).collect()
    }
}
