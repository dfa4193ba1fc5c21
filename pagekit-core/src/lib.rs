//! pagekit-core: typed filtering, sorting and offset pagination over PostgreSQL
//!
//! Two entities are registered, `users` and `products`. For each, a typed
//! filter compiles to a conjunctive predicate; the pagination engine renders
//! one immutable page query into a data query and a count query and runs
//! them together.
//!
//! ```ignore
//! use pagekit_core::{paginate_and_sort, PaginationRequest, SortOrder};
//!
//! let request = PaginationRequest::new("products")
//!     .filter("category", "garden")
//!     .filter("inStock", true)
//!     .sort("price", SortOrder::Desc)
//!     .page_size(20);
//! let page = paginate_and_sort(&pool, &request).await?;
//! println!("{} of {}", page.data.len(), page.pagination.total_count);
//! ```

pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod filters;
pub mod models;
pub mod predicate;
pub mod query;
pub mod schema;
pub mod sort;

pub use config::PagekitConfig;
pub use engine::{paginate, paginate_and_sort, Entity, Record};
pub use error::{PageError, Result};
pub use filters::{FilterBag, FilterConditions, ProductFilter, UserFilter};
pub use models::{Page, PageInfo, Pagination, PaginationRequest};
pub use schema::{EntityKind, EntityMeta};
pub use sort::SortOrder;
