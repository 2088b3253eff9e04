//! In-memory lending records
//!
//! Groups materialized records explicitly instead of pushing the
//! aggregation down to a database.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{
        Book, BookLoanGroup, Category, CategoryGroup, LoanDetail, LoanSlip, LoanStatus, Reader,
    },
};

use super::LoanRepository;

/// Immutable snapshot of lending records held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoanRepository {
    loan_slips: Vec<LoanSlip>,
    loan_details: Vec<LoanDetail>,
    books: Vec<Book>,
    categories: Vec<Category>,
    readers: Vec<Reader>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loan_slips(mut self, loan_slips: impl IntoIterator<Item = LoanSlip>) -> Self {
        self.loan_slips.extend(loan_slips);
        self
    }

    pub fn with_loan_details(mut self, details: impl IntoIterator<Item = LoanDetail>) -> Self {
        self.loan_details.extend(details);
        self
    }

    pub fn with_books(mut self, books: impl IntoIterator<Item = Book>) -> Self {
        self.books.extend(books);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_readers(mut self, readers: impl IntoIterator<Item = Reader>) -> Self {
        self.readers.extend(readers);
        self
    }

    fn count_loans_with_status(&self, date: NaiveDate, status: LoanStatus) -> i64 {
        self.loan_slips
            .iter()
            .filter(|slip| slip.status(date) == status)
            .count() as i64
    }

    fn count_distinct<I: Iterator<Item = i32>>(ids: I) -> i64 {
        ids.collect::<HashSet<_>>().len() as i64
    }
}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
    async fn count_unreturned_due_on_or_after(&self, date: NaiveDate) -> AppResult<i64> {
        Ok(self.count_loans_with_status(date, LoanStatus::Current))
    }

    async fn count_unreturned_due_before(&self, date: NaiveDate) -> AppResult<i64> {
        Ok(self.count_loans_with_status(date, LoanStatus::Overdue))
    }

    async fn count_books(&self) -> AppResult<i64> {
        Ok(Self::count_distinct(self.books.iter().map(|b| b.id)))
    }

    async fn count_readers(&self) -> AppResult<i64> {
        Ok(Self::count_distinct(self.readers.iter().map(|r| r.id)))
    }

    async fn loan_counts_by_book(&self) -> AppResult<Vec<BookLoanGroup>> {
        let names: HashMap<i32, &str> = self
            .books
            .iter()
            .map(|b| (b.id, b.name.as_str()))
            .collect();

        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for detail in &self.loan_details {
            if !names.contains_key(&detail.book_id) {
                return Err(AppError::DataAccess(format!(
                    "Loan detail {} references unknown book {}",
                    detail.id, detail.book_id
                )));
            }
            *counts.entry(detail.book_id).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(book_id, loan_count)| BookLoanGroup {
                book_id,
                book_name: names[&book_id].to_string(),
                loan_count,
            })
            .collect())
    }

    async fn book_counts_by_category(&self) -> AppResult<Vec<CategoryGroup>> {
        let names: HashMap<i32, &str> = self
            .categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let mut counts: BTreeMap<Option<i32>, i64> = BTreeMap::new();
        let mut seen = HashSet::new();
        for book in self.books.iter().filter(|b| seen.insert(b.id)) {
            if let Some(category_id) = book.category_id {
                if !names.contains_key(&category_id) {
                    return Err(AppError::DataAccess(format!(
                        "Book {} references unknown category {}",
                        book.id, category_id
                    )));
                }
            }
            *counts.entry(book.category_id).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(category_id, book_count)| CategoryGroup {
                category_id,
                category_name: category_id.map(|id| names[&id].to_string()),
                book_count,
            })
            .collect())
    }
}
