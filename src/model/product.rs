//! Product records and their scored representation.

use super::ProductId;
use crate::scoring::{EcoRating, EcoScore};
use serde::{Deserialize, Serialize};

/// A retail product as supplied by the catalog.
///
/// Field names serialize in camelCase to match the catalog's JSON documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id (`_id` is accepted on input)
    #[serde(alias = "_id")]
    pub id: ProductId,
    /// Display name
    pub product_name: String,
    /// Category used to group products for alternative search
    pub category: String,
    /// Carbon footprint in kg CO2 equivalent
    pub carbon_footprint: f64,
    /// Packaging waste in grams
    pub packaging_waste: f64,
    /// Curated sustainability flag (independent of the EcoScore)
    #[serde(default)]
    pub is_sustainable: bool,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Curated link to a sustainable alternative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainable_alternative: Option<ProductId>,
}

impl Product {
    /// Create a product with zero footprint, zero price and no sustainability flag.
    pub fn new(
        id: impl Into<ProductId>,
        product_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            category: category.into(),
            carbon_footprint: 0.0,
            packaging_waste: 0.0,
            is_sustainable: false,
            price: 0.0,
            description: None,
            sustainable_alternative: None,
        }
    }

    /// Set the environmental attributes.
    #[must_use]
    pub fn with_footprint(mut self, carbon_footprint: f64, packaging_waste: f64) -> Self {
        self.carbon_footprint = carbon_footprint;
        self.packaging_waste = packaging_waste;
        self
    }

    /// Set the curated sustainability flag.
    #[must_use]
    pub fn sustainable(mut self, is_sustainable: bool) -> Self {
        self.is_sustainable = is_sustainable;
        self
    }

    /// Set the unit price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Link a curated sustainable alternative.
    #[must_use]
    pub fn with_alternative(mut self, alternative: impl Into<ProductId>) -> Self {
        self.sustainable_alternative = Some(alternative.into());
        self
    }
}

/// A product together with its derived EcoScore.
///
/// This is the representation handed to consumers: stored attributes are
/// flattened alongside `ecoScore` and `rating`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Derived EcoScore (0-100)
    pub eco_score: EcoScore,
    /// Rating band of the EcoScore
    pub rating: EcoRating,
}

impl ScoredProduct {
    /// Attach a computed score to a product.
    #[must_use]
    pub fn new(product: Product, eco_score: EcoScore) -> Self {
        Self {
            product,
            eco_score,
            rating: EcoRating::from_score(eco_score),
        }
    }

    /// The product id
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_document() {
        let json = r#"{
            "_id": "bev-001",
            "productName": "Coca-Cola 12-pack Cans",
            "category": "Beverages",
            "carbonFootprint": 45,
            "packagingWaste": 180,
            "isSustainable": false,
            "price": 4.99,
            "sustainableAlternative": "bev-002"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::from("bev-001"));
        assert_eq!(product.category, "Beverages");
        assert!((product.carbon_footprint - 45.0).abs() < f64::EPSILON);
        assert!(!product.is_sustainable);
        assert_eq!(product.sustainable_alternative, Some(ProductId::from("bev-002")));
        assert!(product.description.is_none());
    }

    #[test]
    fn test_missing_sustainable_flag_defaults_to_false() {
        let json = r#"{"id":"x","productName":"X","category":"Snacks","carbonFootprint":1,"packagingWaste":2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_sustainable);
    }

    #[test]
    fn test_scored_product_flattens_attributes() {
        let product = Product::new("snk-002", "Veggie Chips", "Snacks")
            .with_footprint(18.0, 30.0)
            .sustainable(true);
        let scored = ScoredProduct::new(product, EcoScore::new(87).unwrap());

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "snk-002");
        assert_eq!(value["productName"], "Veggie Chips");
        assert_eq!(value["isSustainable"], true);
        assert_eq!(value["ecoScore"], 87);
        assert_eq!(value["rating"], "excellent");
    }
}
