//! User filters

use super::{coerce, non_empty, warn_unknown_keys, FilterBag, FilterConditions};
use crate::error::Result;
use crate::predicate::{Condition, Predicate, Value};
use crate::schema::users;

/// Typed filter for the `users` table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Substring of the name, case-insensitive
    pub name: Option<String>,
    /// Substring of the email, case-insensitive
    pub email: Option<String>,
    /// Exact age
    pub age: Option<i32>,
    /// Inclusive lower age bound
    pub min_age: Option<i32>,
    /// Inclusive upper age bound
    pub max_age: Option<i32>,
}

impl FilterConditions for UserFilter {
    const ENTITY: &'static str = "users";
    const KEYS: &'static [&'static str] = &["name", "email", "age", "minAge", "maxAge"];

    fn from_bag(bag: &FilterBag) -> Result<Self> {
        warn_unknown_keys::<Self>(bag);
        Ok(Self {
            name: coerce::text(bag, "name")?,
            email: coerce::text(bag, "email")?,
            age: coerce::integer(bag, "age")?,
            min_age: coerce::integer(bag, "minAge")?,
            max_age: coerce::integer(bag, "maxAge")?,
        })
    }

    fn predicate(&self) -> Predicate {
        let mut predicate = Predicate::all();
        if let Some(name) = non_empty(&self.name) {
            predicate.push(Condition::contains(users::NAME, name));
        }
        if let Some(email) = non_empty(&self.email) {
            predicate.push(Condition::contains(users::EMAIL, email));
        }
        if let Some(age) = self.age {
            predicate.push(Condition::eq(users::AGE, Value::Integer(age.into())));
        }
        if let Some(min) = self.min_age {
            predicate.push(Condition::gte(users::AGE, Value::Integer(min.into())));
        }
        if let Some(max) = self.max_age {
            predicate.push(Condition::lte(users::AGE, Value::Integer(max.into())));
        }
        predicate
    }
}
