//! Pagination engine
//!
//! [`paginate`] is the typed entry point, generic over [`Entity`].
//! [`paginate_and_sort`] resolves an entity by name from a
//! [`PaginationRequest`] and dispatches to it.
//!
//! Both queries are reads with no shared state; they run concurrently on
//! separate pool connections. Dropping the returned future cancels both.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::filters::{FilterConditions, ProductFilter, UserFilter};
use crate::models::{Page, PageInfo, Pagination, PaginationRequest, Product, User};
use crate::query::PageQuery;
use crate::schema::{EntityKind, EntityMeta};
use crate::sort::{Sort, SortOrder};

/// A table row type that can be paginated
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Typed filter for this entity
    type Filter: FilterConditions;

    const KIND: EntityKind;

    fn meta() -> &'static EntityMeta {
        Self::KIND.meta()
    }
}

impl Entity for User {
    type Filter = UserFilter;
    const KIND: EntityKind = EntityKind::Users;
}

impl Entity for Product {
    type Filter = ProductFilter;
    const KIND: EntityKind = EntityKind::Products;
}

/// Row of any registered entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    User(User),
    Product(Product),
}

/// Fetch one page of `E` matching `filter`.
pub async fn paginate<E: Entity>(
    pool: &PgPool,
    filter: &E::Filter,
    sort_by: Option<&str>,
    sort_order: SortOrder,
    pagination: Pagination,
) -> Result<Page<E>> {
    let meta = E::meta();
    let query = PageQuery::new(
        meta,
        filter.predicate(),
        Sort::resolve(meta, sort_by, sort_order),
        pagination,
    );
    fetch_page(pool, &query).await
}

/// Execute the data and count queries of `query` and assemble the page.
pub async fn fetch_page<E: Entity>(pool: &PgPool, query: &PageQuery) -> Result<Page<E>> {
    let mut data_query = query.data_query();
    let mut count_query = query.count_query();
    tracing::debug!(
        entity = %query.meta().kind,
        data_sql = data_query.sql(),
        count_sql = count_query.sql(),
        "executing page queries"
    );

    let started = Instant::now();
    let (data, total) = tokio::try_join!(
        data_query.build_query_as::<E>().fetch_all(pool),
        count_query.build_query_scalar::<i64>().fetch_one(pool),
    )?;

    // COUNT(*) is a non-negative BIGINT
    let total_count = u64::try_from(total).unwrap_or_default();
    let pagination = PageInfo::new(query.pagination(), total_count);

    tracing::debug!(
        entity = %query.meta().kind,
        rows = data.len(),
        total_count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "page fetched"
    );

    Ok(Page { data, pagination })
}

async fn paginate_request<E: Entity>(
    pool: &PgPool,
    request: &PaginationRequest,
    pagination: Pagination,
) -> Result<Page<E>> {
    let filter = E::Filter::from_bag(&request.filters)?;
    paginate::<E>(
        pool,
        &filter,
        request.sort_by.as_deref(),
        request.sort_order,
        pagination,
    )
    .await
}

/// Fetch one page of the entity named in `request`.
///
/// Fails with `UnsupportedEntity` for unknown names, `InvalidPaginationParameter`
/// for `page`/`pageSize` below 1 and `InvalidFilterValue` for filter values
/// that do not coerce. Database errors are returned unchanged.
pub async fn paginate_and_sort(pool: &PgPool, request: &PaginationRequest) -> Result<Page<Record>> {
    let kind: EntityKind = request.entity.parse()?;
    let pagination = request.pagination()?;

    match kind {
        EntityKind::Users => Ok(paginate_request::<User>(pool, request, pagination)
            .await?
            .map(Record::User)),
        EntityKind::Products => Ok(paginate_request::<Product>(pool, request, pagination)
            .await?
            .map(Record::Product)),
    }
}
