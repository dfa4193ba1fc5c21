//! Caller-facing pagination request

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use crate::error::{PageError, Result};
use crate::filters::FilterBag;
use crate::sort::SortOrder;

/// Everything needed to fetch one page of an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Registered entity name (`users`, `products`)
    pub entity: String,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub filters: FilterBag,
    /// Column to sort by; defaults to the entity's primary key
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl PaginationRequest {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key, value);
        self
    }

    pub fn filters(mut self, filters: FilterBag) -> Self {
        self.filters = filters;
        self
    }

    pub fn sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = order;
        self
    }

    /// Build a request from flat string pairs (an HTTP query string, CLI flags).
    ///
    /// `page`, `pageSize`, `sortBy` and `sortOrder` are reserved; every other
    /// key becomes a filter. Empty reserved values count as absent.
    pub fn from_params<I, K, V>(entity: impl Into<String>, params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut request = Self::new(entity);
        for (key, value) in params {
            let (key, value) = (key.into(), value.into());
            let raw = value.trim();
            match key.as_str() {
                "page" | "pageSize" | "sortBy" | "sortOrder" if raw.is_empty() => {}
                "page" => request.page = Some(parse_int("page", raw)?),
                "pageSize" => request.page_size = Some(parse_int("pageSize", raw)?),
                "sortBy" => request.sort_by = Some(raw.to_owned()),
                "sortOrder" => request.sort_order = raw.parse()?,
                _ => request.filters.insert(key, value),
            }
        }
        Ok(request)
    }

    /// Validated pagination, applying defaults (page 1, size 10).
    pub fn pagination(&self) -> Result<Pagination> {
        Pagination::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(i64::from(DEFAULT_PAGE_SIZE)),
        )
    }
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| PageError::MalformedParameter {
        field,
        value: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let request = PaginationRequest::new("users");
        let pagination = request.pagination().unwrap();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 10);
        assert_eq!(request.sort_order, SortOrder::Asc);
        assert!(request.sort_by.is_none());
        assert!(request.filters.is_empty());
    }

    #[test]
    fn deserializes_camel_case() {
        let request: PaginationRequest = serde_json::from_value(json!({
            "entity": "products",
            "page": 2,
            "pageSize": 5,
            "filters": {"inStock": true},
            "sortBy": "price",
            "sortOrder": "desc"
        }))
        .unwrap();

        assert_eq!(
            request,
            PaginationRequest::new("products")
                .page(2)
                .page_size(5)
                .filter("inStock", true)
                .sort("price", SortOrder::Desc)
        );
    }

    #[test]
    fn from_params_splits_reserved_keys() {
        let request = PaginationRequest::from_params(
            "products",
            [
                ("page", "3"),
                ("pageSize", "20"),
                ("sortBy", "price"),
                ("sortOrder", "DESC"),
                ("category", "garden"),
                ("inStock", "true"),
            ],
        )
        .unwrap();

        assert_eq!(request.page, Some(3));
        assert_eq!(request.page_size, Some(20));
        assert_eq!(request.sort_by.as_deref(), Some("price"));
        assert_eq!(request.sort_order, SortOrder::Desc);
        assert_eq!(request.filters.get("category"), Some(&json!("garden")));
        assert_eq!(request.filters.get("inStock"), Some(&json!("true")));
        assert!(request.filters.get("page").is_none());
    }

    #[test]
    fn from_params_treats_empty_reserved_values_as_absent() {
        let request =
            PaginationRequest::from_params("users", [("page", ""), ("sortOrder", " ")]).unwrap();
        assert_eq!(request, PaginationRequest::new("users"));
    }

    #[test]
    fn from_params_rejects_bad_reserved_values() {
        let err = PaginationRequest::from_params("users", [("page", "two")]).unwrap_err();
        assert!(matches!(err, PageError::MalformedParameter { field: "page", .. }));

        let err = PaginationRequest::from_params("users", [("sortOrder", "up")]).unwrap_err();
        assert!(matches!(err, PageError::InvalidSortOrder { .. }));
    }

    #[test]
    fn invalid_page_is_rejected() {
        assert!(PaginationRequest::new("users").page(0).pagination().is_err());
        assert!(PaginationRequest::new("users").page_size(0).pagination().is_err());
    }
}
