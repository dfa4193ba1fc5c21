//! Product filters

use super::{coerce, non_empty, warn_unknown_keys, FilterBag, FilterConditions};
use crate::error::Result;
use crate::predicate::{Condition, Predicate, Value};
use crate::schema::products;

/// Typed filter for the `products` table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    /// Inclusive lower price bound, exact decimal text
    pub min_price: Option<String>,
    /// Inclusive upper price bound, exact decimal text
    pub max_price: Option<String>,
    /// `true`: at least one unit in stock. `false`: none.
    pub in_stock: Option<bool>,
}

impl FilterConditions for ProductFilter {
    const ENTITY: &'static str = "products";
    const KEYS: &'static [&'static str] = &["name", "category", "minPrice", "maxPrice", "inStock"];

    fn from_bag(bag: &FilterBag) -> Result<Self> {
        warn_unknown_keys::<Self>(bag);
        Ok(Self {
            name: coerce::text(bag, "name")?,
            category: coerce::text(bag, "category")?,
            min_price: coerce::decimal(bag, "minPrice")?,
            max_price: coerce::decimal(bag, "maxPrice")?,
            in_stock: coerce::boolean(bag, "inStock")?,
        })
    }

    fn predicate(&self) -> Predicate {
        let mut predicate = Predicate::all();
        if let Some(name) = non_empty(&self.name) {
            predicate.push(Condition::contains(products::NAME, name));
        }
        if let Some(category) = non_empty(&self.category) {
            predicate.push(Condition::contains(products::CATEGORY, category));
        }
        if let Some(min) = non_empty(&self.min_price) {
            predicate.push(Condition::gte(products::PRICE, Value::Decimal(min.to_owned())));
        }
        if let Some(max) = non_empty(&self.max_price) {
            predicate.push(Condition::lte(products::PRICE, Value::Decimal(max.to_owned())));
        }
        match self.in_stock {
            Some(true) => predicate.push(Condition::gte(products::STOCK, Value::Integer(1))),
            Some(false) => predicate.push(Condition::eq(products::STOCK, Value::Integer(0))),
            None => {}
        }
        predicate
    }
}
