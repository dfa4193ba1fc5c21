//! Composable WHERE predicates
//!
//! A [`Predicate`] is a conjunction of [`Condition`]s. It is built completely
//! before any SQL exists and then rendered into a `QueryBuilder`; every value
//! is pushed with `push_bind`, only static column names reach the SQL text.

use sqlx::{Postgres, QueryBuilder};

use crate::schema::Column;

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Case-insensitive LIKE against a prepared pattern
    ILike,
    Eq,
    Gte,
    Lte,
}

impl Op {
    fn as_sql(self) -> &'static str {
        match self {
            Self::ILike => " ILIKE ",
            Self::Eq => " = ",
            Self::Gte => " >= ",
            Self::Lte => " <= ",
        }
    }
}

/// Bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    /// Exact decimal text, cast to `numeric` on the server
    Decimal(String),
}

/// Single predicate fragment: `column op $n`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Column,
    pub op: Op,
    pub value: Value,
}

impl Condition {
    /// Case-insensitive substring match; LIKE wildcards in `term` match literally.
    pub fn contains(column: Column, term: &str) -> Self {
        Self {
            column,
            op: Op::ILike,
            value: Value::Text(format!("%{}%", escape_like(term))),
        }
    }

    pub fn eq(column: Column, value: Value) -> Self {
        Self { column, op: Op::Eq, value }
    }

    pub fn gte(column: Column, value: Value) -> Self {
        Self { column, op: Op::Gte, value }
    }

    pub fn lte(column: Column, value: Value) -> Self {
        Self { column, op: Op::Lte, value }
    }

    fn push_to(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(self.column.name);
        builder.push(self.op.as_sql());
        match &self.value {
            Value::Text(text) => {
                builder.push_bind(text.clone());
            }
            Value::Integer(n) => {
                builder.push_bind(*n);
            }
            Value::Decimal(text) => {
                builder.push_bind(text.clone());
                builder.push("::numeric");
            }
        }
    }
}

/// Escape `\`, `%` and `_` for a LIKE pattern (backslash is the default escape).
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Conjunction of conditions. Empty means "match every row".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Append ` WHERE a AND b ...`, or nothing when empty.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if self.conditions.is_empty() {
            return;
        }
        builder.push(" WHERE ");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                builder.push(" AND ");
            }
            condition.push_to(builder);
        }
    }
}

impl FromIterator<Condition> for Predicate {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}
