//! Repository layer: read-only access to lending records

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{BookLoanGroup, CategoryGroup},
};

pub use memory::InMemoryLoanRepository;
pub use postgres::PgLoanRepository;

/// Read-only queries the report aggregator needs.
///
/// Implementations return pre-aggregated counts and must tolerate
/// concurrent calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Unreturned loan slips due on or after `date`
    async fn count_unreturned_due_on_or_after(&self, date: NaiveDate) -> AppResult<i64>;

    /// Unreturned loan slips due strictly before `date`
    async fn count_unreturned_due_before(&self, date: NaiveDate) -> AppResult<i64>;

    async fn count_books(&self) -> AppResult<i64>;

    async fn count_readers(&self) -> AppResult<i64>;

    /// Loan detail rows grouped by book, in no particular order.
    /// Books never loaned are absent.
    async fn loan_counts_by_book(&self) -> AppResult<Vec<BookLoanGroup>>;

    /// Books grouped by category, in no particular order.
    /// Books without a category form a single group with `None` id and name.
    async fn book_counts_by_category(&self) -> AppResult<Vec<CategoryGroup>>;
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub loans: PgLoanRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            loans: PgLoanRepository::new(pool.clone()),
            pool,
        }
    }
}
