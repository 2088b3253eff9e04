//! PostgreSQL lending records

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{BookLoanGroup, CategoryGroup},
};

use super::LoanRepository;

#[derive(Clone)]
pub struct PgLoanRepository {
    pool: Pool<Postgres>,
}

impl PgLoanRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for PgLoanRepository {
    async fn count_unreturned_due_on_or_after(&self, date: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loan_slips WHERE return_date IS NULL AND expired_date >= $1",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_unreturned_due_before(&self, date: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loan_slips WHERE return_date IS NULL AND expired_date < $1",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_books(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_readers(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM readers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn loan_counts_by_book(&self) -> AppResult<Vec<BookLoanGroup>> {
        let rows = sqlx::query_as::<_, BookLoanGroup>(
            r#"
            SELECT b.id AS book_id, b.name AS book_name, COUNT(*) AS loan_count
            FROM loan_details ld
            JOIN books b ON ld.book_id = b.id
            GROUP BY b.id, b.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn book_counts_by_category(&self) -> AppResult<Vec<CategoryGroup>> {
        // LEFT JOIN keeps books without a category as a NULL group
        let rows = sqlx::query_as::<_, CategoryGroup>(
            r#"
            SELECT c.id AS category_id, c.name AS category_name, COUNT(*) AS book_count
            FROM books b
            LEFT JOIN categories c ON b.category_id = c.id
            GROUP BY c.id, c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
