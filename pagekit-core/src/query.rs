//! Immutable page query
//!
//! [`PageQuery`] is assembled from finished parts (predicate, sort,
//! pagination) and only then rendered. The data query and the count query
//! are both rendered from the same value, so they cannot disagree on the
//! predicate.

use sqlx::{Postgres, QueryBuilder};

use crate::models::Pagination;
use crate::predicate::Predicate;
use crate::schema::EntityMeta;
use crate::sort::Sort;

#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    meta: &'static EntityMeta,
    predicate: Predicate,
    sort: Sort,
    pagination: Pagination,
}

impl PageQuery {
    pub fn new(
        meta: &'static EntityMeta,
        predicate: Predicate,
        sort: Sort,
        pagination: Pagination,
    ) -> Self {
        Self {
            meta,
            predicate,
            sort,
            pagination,
        }
    }

    pub fn meta(&self) -> &'static EntityMeta {
        self.meta
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// `SELECT cols FROM t [WHERE ..] ORDER BY .. LIMIT $n OFFSET $m`
    pub fn data_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(self.meta.select_list());
        builder.push(" FROM ");
        builder.push(self.meta.table);
        self.predicate.push_where(&mut builder);
        self.sort.push_order_by(&mut builder);
        builder.push(" LIMIT ");
        builder.push_bind(self.pagination.limit());
        builder.push(" OFFSET ");
        builder.push_bind(self.pagination.offset());
        builder
    }

    /// `SELECT COUNT(*) FROM t [WHERE ..]`, unsorted and unpaginated
    pub fn count_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");
        builder.push(self.meta.table);
        self.predicate.push_where(&mut builder);
        builder
    }
}
