//! Product records and validated product payloads

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::validation::{non_negative, optional_text, required_text, ValidationError};

const MAX_NAME_LEN: usize = 255;
const MAX_DESCRIPTION_LEN: usize = 1000;
const MAX_CATEGORY_LEN: usize = 100;

/// Longest decimal text accepted for a price or a price filter
pub const MAX_PRICE_LEN: usize = 64;

/// Non-negative plain decimal
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("invalid price regex"));

/// Product row. `price` is the exact decimal text (`"99.99"`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub category: Option<String>,
    pub stock: i32,
}

fn validate_price(price: &str) -> Result<String, ValidationError> {
    let price = price.trim();
    if price.is_empty() {
        return Err(ValidationError::Empty { field: "price" });
    }
    if price.len() > MAX_PRICE_LEN {
        return Err(ValidationError::TooLong {
            field: "price",
            max: MAX_PRICE_LEN,
        });
    }
    if !PRICE_RE.is_match(price) {
        return Err(ValidationError::InvalidFormat {
            field: "price",
            reason: "must be a non-negative decimal such as 99.99",
        });
    }
    Ok(price.to_owned())
}

fn validate_optional(
    value: Option<&str>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| optional_text(v, field, max)).transpose()
}

/// Validated product payload for inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    description: Option<String>,
    price: String,
    category: Option<String>,
    stock: i32,
}

impl NewProduct {
    pub fn new(
        name: &str,
        description: Option<&str>,
        price: &str,
        category: Option<&str>,
        stock: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text(name, "name", MAX_NAME_LEN)?,
            description: validate_optional(description, "description", MAX_DESCRIPTION_LEN)?,
            price: validate_price(price)?,
            category: validate_optional(category, "category", MAX_CATEGORY_LEN)?,
            stock: non_negative(stock, "stock")?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }
}

/// Blank text clears a nullable column (`Some(None)`).
fn nullable_update(
    value: Option<&str>,
    field: &'static str,
    max: usize,
) -> Result<Option<Option<String>>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(Some(None)),
        Some(v) => optional_text(v, field, max).map(|v| Some(Some(v))),
    }
}

/// Validated partial update; `None` leaves the column unchanged.
///
/// A blank `description` or `category` sets that column to NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<Option<String>>,
    pub(crate) price: Option<String>,
    pub(crate) category: Option<Option<String>>,
    pub(crate) stock: Option<i32>,
}

impl ProductUpdate {
    pub fn new(
        name: Option<&str>,
        description: Option<&str>,
        price: Option<&str>,
        category: Option<&str>,
        stock: Option<i32>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.map(|n| required_text(n, "name", MAX_NAME_LEN)).transpose()?,
            description: nullable_update(description, "description", MAX_DESCRIPTION_LEN)?,
            price: price.map(validate_price).transpose()?,
            category: nullable_update(category, "category", MAX_CATEGORY_LEN)?,
            stock: stock.map(|s| non_negative(s, "stock")).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Unvalidated product payload as received over the wire
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub category: Option<String>,
    #[serde(default)]
    pub stock: i32,
}

impl TryFrom<ProductInput> for NewProduct {
    type Error = ValidationError;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        Self::new(
            &input.name,
            input.description.as_deref(),
            &input.price,
            input.category.as_deref(),
            input.stock,
        )
    }
}

/// Unvalidated partial update as received over the wire.
/// `""` for `description` or `category` clears it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
}

impl TryFrom<ProductPatch> for ProductUpdate {
    type Error = ValidationError;

    fn try_from(patch: ProductPatch) -> Result<Self, Self::Error> {
        Self::new(
            patch.name.as_deref(),
            patch.description.as_deref(),
            patch.price.as_deref(),
            patch.category.as_deref(),
            patch.stock,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_product() {
        let product = NewProduct::new(
            "Test Product",
            Some("This is a test product"),
            "99.99",
            Some("Test Category"),
            10,
        )
        .unwrap();
        assert_eq!(product.price(), "99.99");
        assert_eq!(product.category(), Some("Test Category"));
    }

    #[test]
    fn rejects_bad_price() {
        for price in ["", "-1", "1e3", "abc", "1."] {
            assert!(
                NewProduct::new("p", None, price, None, 0).is_err(),
                "{price} accepted"
            );
        }
    }

    #[test]
    fn rejects_oversized_price() {
        let huge = "9".repeat(MAX_PRICE_LEN + 1);
        assert_eq!(
            NewProduct::new("p", None, &huge, None, 0).unwrap_err(),
            ValidationError::TooLong { field: "price", max: MAX_PRICE_LEN }
        );
        assert!(ProductUpdate::new(None, None, Some(&huge), None, None).is_err());
        assert!(NewProduct::new("p", None, &huge[1..], None, 0).is_ok());
    }

    #[test]
    fn rejects_negative_stock() {
        let err = NewProduct::new("p", None, "1", None, -1).unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange { field: "stock", min: 0 });
    }

    #[test]
    fn category_length_limit() {
        let long = "c".repeat(101);
        assert!(NewProduct::new("p", None, "1", Some(&long), 0).is_err());
    }

    #[test]
    fn empty_update() {
        assert!(ProductUpdate::default().is_empty());
        let update = ProductUpdate::new(None, None, Some("129.99"), None, Some(5)).unwrap();
        assert!(!update.is_empty());
        assert!(ProductUpdate::new(Some("  "), None, None, None, None).is_err());
    }

    #[test]
    fn blank_nullable_fields_clear() {
        let update = ProductUpdate::new(None, Some(""), None, Some("  "), None).unwrap();
        assert_eq!(update.description, Some(None));
        assert_eq!(update.category, Some(None));
        assert!(!update.is_empty());

        let update = ProductUpdate::new(None, None, None, Some("Lighting"), None).unwrap();
        assert_eq!(update.description, None);
        assert_eq!(update.category, Some(Some("Lighting".to_string())));

        let long = "c".repeat(MAX_CATEGORY_LEN + 1);
        assert!(ProductUpdate::new(None, None, None, Some(&long), None).is_err());
    }
}
