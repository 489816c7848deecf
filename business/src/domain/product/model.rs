use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a product. The id and timestamps are
/// never client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<(), ProductError> {
        let len = self.name.chars().count();
        if len < NAME_MIN_LENGTH || len > NAME_MAX_LENGTH {
            return Err(ProductError::NameLength);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::PriceInvalid);
        }
        Ok(())
    }
}

impl Product {
    /// Builds a new product from a validated request, assigning a fresh id
    /// and setting both timestamps to now.
    pub fn new(request: &ProductRequest) -> Result<Self, ProductError> {
        request.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            description: request.description.clone(),
            price: request.price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: String::new(),
            price,
        }
    }

    #[test]
    fn should_create_product_with_equal_timestamps() {
        let product = Product::new(&request("Widget", 9.99)).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_name_shorter_than_three_chars() {
        let result = Product::new(&request("ab", 1.0));
        assert!(matches!(result.unwrap_err(), ProductError::NameLength));
    }

    #[test]
    fn should_reject_name_longer_than_255_chars() {
        let result = Product::new(&request(&"x".repeat(256), 1.0));
        assert!(matches!(result.unwrap_err(), ProductError::NameLength));
    }

    #[test]
    fn should_accept_zero_price() {
        assert!(Product::new(&request("Free Sample", 0.0)).is_ok());
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::new(&request("Widget", -0.01));
        assert!(matches!(result.unwrap_err(), ProductError::PriceInvalid));
    }

    #[test]
    fn should_reject_non_finite_price() {
        let result = Product::new(&request("Widget", f64::NAN));
        assert!(matches!(result.unwrap_err(), ProductError::PriceInvalid));
    }

    #[test]
    fn should_allow_empty_description() {
        let product = Product::new(&ProductRequest {
            name: "Widget".to_string(),
            description: String::new(),
            price: 9.99,
        })
        .unwrap();
        assert_eq!(product.description, "");
    }

    proptest! {
        #[test]
        fn validation_accepts_exactly_names_within_bounds(len in 0usize..400) {
            let req = request(&"a".repeat(len), 1.0);
            let expected_ok = (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len);
            prop_assert_eq!(req.validate().is_ok(), expected_ok);
        }

        #[test]
        fn validation_accepts_any_non_negative_finite_price(price in 0.0f64..1.0e12) {
            prop_assert!(request("Widget", price).validate().is_ok());
        }

        #[test]
        fn fresh_products_get_distinct_ids(_i in 0u8..10) {
            let a = Product::new(&request("Widget", 1.0)).unwrap();
            let b = Product::new(&request("Widget", 1.0)).unwrap();
            prop_assert_ne!(a.id, b.id);
        }
    }
}
