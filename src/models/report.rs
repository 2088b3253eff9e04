//! Report snapshot and the aggregated rows it is built from

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lending activity snapshot as of a reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportSnapshot {
    /// Date against which current/overdue loans were classified
    pub reference_date: NaiveDate,
    /// Number of book titles
    pub total_books: i64,
    /// Number of registered readers
    pub total_readers: i64,
    /// Unreturned loans not yet past their due date
    pub current_loans: i64,
    /// Unreturned loans past their due date
    pub overdue_loans: i64,
    /// Most borrowed books, most loans first (at most 10)
    pub top_loaned_books: Vec<BookLoanCount>,
    /// Number of book titles per category
    pub books_by_category: Vec<CategoryBookCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookLoanCount {
    pub book_name: String,
    pub loan_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryBookCount {
    pub category_name: String,
    pub book_count: i64,
}

/// Loan detail rows grouped by book, as returned by a repository
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookLoanGroup {
    pub book_id: i32,
    pub book_name: String,
    pub loan_count: i64,
}

/// Books grouped by category, as returned by a repository.
///
/// `category_id` and `category_name` are `None` for books without a category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CategoryGroup {
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub book_count: i64,
}
