use serde::{Deserialize, Serialize};

use crate::constants::BRAND_SEPARATOR;

/// One stored laptop-repair request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,

    pub username: String,

    /// Selected brands joined by `", "`.
    pub laptop_brands: String,

    pub submit_date: String,
}

impl Order {
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.laptop_brands.split(BRAND_SEPARATOR).map(str::trim)
    }
}

/// Raw order-form input, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSubmission {
    pub username: String,

    pub brands: Vec<String>,
}

impl OrderSubmission {
    pub fn new<I, S>(username: impl Into<String>, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            brands: brands.into_iter().map(Into::into).collect(),
        }
    }
}

/// A validated order ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub username: String,

    pub brands: Vec<String>,
}

impl NewOrder {
    #[must_use]
    pub fn laptop_brands(&self) -> String {
        self.brands.join(BRAND_SEPARATOR)
    }
}
