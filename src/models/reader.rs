//! Reader model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered reader (only the identifier matters for reporting)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reader {
    pub id: i32,
}
