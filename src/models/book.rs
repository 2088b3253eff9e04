//! Book and category models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalogued book title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    /// Number of physical copies owned
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
