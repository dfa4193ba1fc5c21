//! Single-column sort resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};

use crate::error::{PageError, Result};
use crate::schema::{Column, EntityMeta};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PageError::InvalidSortOrder { value: s.to_owned() }),
        }
    }
}

/// Resolved sort: a real column of the entity plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub order: SortOrder,
    /// Primary key appended as a tiebreaker so pages never overlap
    pub tiebreaker: Option<Column>,
}

impl Sort {
    /// Resolve `sort_by` against the entity's columns.
    ///
    /// `None` selects the primary key. An unknown name also selects the
    /// primary key and emits a warning; it is never an error.
    pub fn resolve(meta: &EntityMeta, sort_by: Option<&str>, order: SortOrder) -> Self {
        let column = match sort_by {
            None => meta.primary_key,
            Some(name) => meta.column(name).unwrap_or_else(|| {
                tracing::warn!(
                    entity = %meta.kind,
                    sort_by = name,
                    fallback = meta.primary_key.name,
                    "unknown sort column, falling back to default"
                );
                meta.primary_key
            }),
        };
        let tiebreaker = (column != meta.primary_key).then_some(meta.primary_key);
        Self {
            column,
            order,
            tiebreaker,
        }
    }

    pub(crate) fn push_order_by(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" ORDER BY ");
        builder.push(self.column.name);
        builder.push(" ");
        builder.push(self.order.as_sql());
        if let Some(tiebreaker) = self.tiebreaker {
            builder.push(", ");
            builder.push(tiebreaker.name);
            builder.push(" ");
            builder.push(self.order.as_sql());
        }
    }
}
