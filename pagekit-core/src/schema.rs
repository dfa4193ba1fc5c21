//! Static entity metadata
//!
//! Each supported entity maps to one table and a fixed column set. The
//! registry is closed: new entities are added here, never at runtime. Table
//! and column names used in generated SQL come exclusively from this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Integer,
    Decimal,
    Boolean,
    Identifier,
}

/// Column descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }

    /// Expression used in SELECT lists.
    ///
    /// Decimals travel as their exact text form.
    pub fn select_expr(&self) -> String {
        match self.column_type {
            ColumnType::Decimal => format!("{name}::text AS {name}", name = self.name),
            _ => self.name.to_owned(),
        }
    }
}

/// `users` table columns
pub mod users {
    use super::{Column, ColumnType};

    pub const ID: Column = Column::new("id", ColumnType::Identifier);
    pub const NAME: Column = Column::new("name", ColumnType::String);
    pub const AGE: Column = Column::new("age", ColumnType::Integer);
    pub const EMAIL: Column = Column::new("email", ColumnType::String);

    pub const COLUMNS: &[Column] = &[ID, NAME, AGE, EMAIL];
}

/// `products` table columns
pub mod products {
    use super::{Column, ColumnType};

    pub const ID: Column = Column::new("id", ColumnType::Identifier);
    pub const NAME: Column = Column::new("name", ColumnType::String);
    pub const DESCRIPTION: Column = Column::new("description", ColumnType::String);
    pub const PRICE: Column = Column::new("price", ColumnType::Decimal);
    pub const CATEGORY: Column = Column::new("category", ColumnType::String);
    pub const STOCK: Column = Column::new("stock", ColumnType::Integer);

    pub const COLUMNS: &[Column] = &[ID, NAME, DESCRIPTION, PRICE, CATEGORY, STOCK];
}

/// Registered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Users,
    Products,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Users, EntityKind::Products];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
        }
    }

    pub fn meta(&self) -> &'static EntityMeta {
        match self {
            Self::Users => &USERS,
            Self::Products => &PRODUCTS,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PageError::unsupported_entity(s))
    }
}

/// Metadata for one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMeta {
    pub kind: EntityKind,
    pub table: &'static str,
    pub columns: &'static [Column],
    /// Identifier column; default sort and tiebreaker
    pub primary_key: Column,
}

pub static USERS: EntityMeta = EntityMeta {
    kind: EntityKind::Users,
    table: "users",
    columns: users::COLUMNS,
    primary_key: users::ID,
};

pub static PRODUCTS: EntityMeta = EntityMeta {
    kind: EntityKind::Products,
    table: "products",
    columns: products::COLUMNS,
    primary_key: products::ID,
};

impl EntityMeta {
    /// Resolve an entity by name.
    ///
    /// # Example
    /// ```
    /// use pagekit_core::schema::EntityMeta;
    ///
    /// assert_eq!(EntityMeta::lookup("users").unwrap().table, "users");
    /// assert!(EntityMeta::lookup("orders").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static EntityMeta> {
        name.parse::<EntityKind>().map(|kind| kind.meta())
    }

    /// Find a column by its exact name.
    pub fn column(&self, name: &str) -> Option<Column> {
        self.columns.iter().copied().find(|c| c.name == name)
    }

    /// Comma-separated SELECT list covering every column.
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(Column::select_expr)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
