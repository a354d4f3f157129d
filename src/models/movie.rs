use serde::{Deserialize, Serialize};

/// A single catalog entry. The name is its identity within a [`Catalog`].
///
/// [`Catalog`]: crate::core::catalog::Catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    pub year: i32,
    pub category: String,
    pub score: f64, // roughly 0.0 - 10.0, not enforced
}

impl Movie {
    pub fn new(name: impl Into<String>, year: i32, category: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            year,
            category: category.into(),
            score,
        }
    }
}
