//! Domain models
//!
//! Records mirror table rows. Write payloads are validated when they are
//! constructed; invalid input returns `ValidationError`, never a panic.

pub mod pagination;
pub mod product;
pub mod request;
pub mod seed;
pub mod user;
pub mod validation;

pub use pagination::{Page, PageInfo, Pagination, DEFAULT_PAGE_SIZE};
pub use product::{NewProduct, Product, ProductInput, ProductPatch, ProductUpdate};
pub use request::PaginationRequest;
pub use user::{NewUser, User, UserInput};
pub use validation::ValidationError;
