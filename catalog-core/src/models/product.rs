/// The client-supplied description of a product.
///
/// On the wire the category field is spelled `categorie`; `category` is also
/// accepted when deserializing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductData {
    /// The category the product belongs to (e.g. "Shoes")
    #[cfg_attr(feature = "serde", serde(rename = "categorie", alias = "category"))]
    pub category: String,
    /// The price of a single unit, never negative
    pub unit_price: f64,
}

/// The reasons a [`ProductData`] can be refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidProduct {
    /// The category is empty or only whitespace
    #[error("categorie must not be empty")]
    EmptyCategory,
    /// The unit price is NaN or infinite
    #[error("unit_price must be a finite number")]
    NonFinitePrice,
    /// The unit price is below zero
    #[error("unit_price must not be negative, got {0}")]
    NegativePrice(f64),
}

impl ProductData {
    /// Check the invariants every persisted product must satisfy.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        if self.category.trim().is_empty() {
            return Err(InvalidProduct::EmptyCategory);
        }
        if !self.unit_price.is_finite() {
            return Err(InvalidProduct::NonFinitePrice);
        }
        if self.unit_price < 0.0 {
            return Err(InvalidProduct::NegativePrice(self.unit_price));
        }
        Ok(())
    }
}

/// A persisted product: its data plus the identifier storage assigned to it.
///
/// Product records are immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductRecord<ProductId> {
    /// Unique identifier for the product
    pub id: ProductId,
    /// The product's data
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub data: ProductData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(category: &str, unit_price: f64) -> ProductData {
        ProductData {
            category: category.to_owned(),
            unit_price,
        }
    }

    #[test]
    fn accepts_free_products() {
        assert_eq!(product("Shoes", 80.0).validate(), Ok(()));
        assert_eq!(product("Samples", 0.0).validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_category() {
        assert_eq!(product("", 1.0).validate(), Err(InvalidProduct::EmptyCategory));
        assert_eq!(
            product("  \t", 1.0).validate(),
            Err(InvalidProduct::EmptyCategory)
        );
    }

    #[test]
    fn rejects_bad_prices() {
        assert_eq!(
            product("Shoes", -0.01).validate(),
            Err(InvalidProduct::NegativePrice(-0.01))
        );
        assert_eq!(
            product("Shoes", f64::NAN).validate(),
            Err(InvalidProduct::NonFinitePrice)
        );
        assert_eq!(
            product("Shoes", f64::INFINITY).validate(),
            Err(InvalidProduct::NonFinitePrice)
        );
    }

    #[test]
    fn record_is_flat_on_the_wire() {
        let record = ProductRecord {
            id: 7u32,
            data: product("Shoes", 80.0),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "id": 7, "categorie": "Shoes", "unit_price": 80.0 })
        );
    }

    #[test]
    fn category_alias_is_accepted() {
        let data: ProductData =
            serde_json::from_value(json!({ "category": "Hats", "unit_price": 12 })).unwrap();
        assert_eq!(data, product("Hats", 12.0));
    }

    #[test]
    fn missing_price_does_not_deserialize() {
        let result = serde_json::from_value::<ProductData>(json!({ "categorie": "Hats" }));
        assert!(result.is_err());
    }
}
