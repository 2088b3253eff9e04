//! Lending report aggregation

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    config::ReportConfig,
    error::AppResult,
    models::{BookLoanCount, BookLoanGroup, CategoryBookCount, CategoryGroup, ReportSnapshot},
    repository::LoanRepository,
};

/// Maximum number of entries in `ReportSnapshot::top_loaned_books`
pub const TOP_LOANED_BOOKS_LIMIT: usize = 10;

/// Builds lending report snapshots from a read-only repository.
///
/// Holds no state between calls: every snapshot is recomputed from the
/// repository contents.
#[derive(Clone)]
pub struct ReportAggregator {
    repository: Arc<dyn LoanRepository>,
    config: ReportConfig,
}

impl ReportAggregator {
    pub fn new(repository: Arc<dyn LoanRepository>, config: ReportConfig) -> Self {
        Self { repository, config }
    }

    /// Compute the full snapshot as of `reference_date`.
    ///
    /// The sub-queries run concurrently. If any of them fails the whole
    /// computation fails and the pending ones are dropped.
    pub async fn compute_snapshot(&self, reference_date: NaiveDate) -> AppResult<ReportSnapshot> {
        tracing::debug!(%reference_date, "Computing lending report");

        let (
            current_loans,
            overdue_loans,
            total_books,
            total_readers,
            top_loaned_books,
            books_by_category,
        ) = tokio::try_join!(
            self.count_current_loans(reference_date),
            self.count_overdue_loans(reference_date),
            self.count_total_books(),
            self.count_total_readers(),
            self.top_loaned_books(),
            self.books_by_category(),
        )
        .map_err(|e| {
            tracing::warn!(%reference_date, "Lending report aborted: {}", e);
            e
        })?;

        tracing::debug!(
            %reference_date,
            current_loans,
            overdue_loans,
            total_books,
            total_readers,
            "Lending report computed"
        );

        Ok(ReportSnapshot {
            reference_date,
            total_books,
            total_readers,
            current_loans,
            overdue_loans,
            top_loaned_books,
            books_by_category,
        })
    }

    /// Unreturned loans due on or after the reference date
    pub async fn count_current_loans(&self, reference_date: NaiveDate) -> AppResult<i64> {
        self.repository
            .count_unreturned_due_on_or_after(reference_date)
            .await
    }

    /// Unreturned loans due before the reference date
    pub async fn count_overdue_loans(&self, reference_date: NaiveDate) -> AppResult<i64> {
        self.repository.count_unreturned_due_before(reference_date).await
    }

    /// Number of book titles (not copies)
    pub async fn count_total_books(&self) -> AppResult<i64> {
        self.repository.count_books().await
    }

    pub async fn count_total_readers(&self) -> AppResult<i64> {
        self.repository.count_readers().await
    }

    /// Most borrowed books, most loans first
    pub async fn top_loaned_books(&self) -> AppResult<Vec<BookLoanCount>> {
        let groups = self.repository.loan_counts_by_book().await?;
        Ok(rank_top_loaned_books(groups))
    }

    /// Book titles per category, largest category first
    pub async fn books_by_category(&self) -> AppResult<Vec<CategoryBookCount>> {
        let groups = self.repository.book_counts_by_category().await?;
        Ok(label_categories(groups, &self.config.uncategorized_label))
    }
}

/// Sort by loan count descending, then book name and id ascending, and keep
/// the first [`TOP_LOANED_BOOKS_LIMIT`] books that were loaned at least once.
fn rank_top_loaned_books(mut groups: Vec<BookLoanGroup>) -> Vec<BookLoanCount> {
    groups.retain(|g| g.loan_count > 0);
    groups.sort_by(|a, b| {
        b.loan_count
            .cmp(&a.loan_count)
            .then_with(|| a.book_name.cmp(&b.book_name))
            .then_with(|| a.book_id.cmp(&b.book_id))
    });
    groups.truncate(TOP_LOANED_BOOKS_LIMIT);

    groups
        .into_iter()
        .map(|g| BookLoanCount {
            book_name: g.book_name,
            loan_count: g.loan_count,
        })
        .collect()
}

/// Merge every group without a category into one bucket named
/// `uncategorized_label`, then order by book count descending. Among equal
/// counts, named categories come first in name order.
fn label_categories(groups: Vec<CategoryGroup>, uncategorized_label: &str) -> Vec<CategoryBookCount> {
    let mut uncategorized = 0;
    let mut named: Vec<(i32, String, i64)> = Vec::with_capacity(groups.len());

    for group in groups.into_iter().filter(|g| g.book_count > 0) {
        match (group.category_id, group.category_name) {
            (Some(id), Some(name)) => named.push((id, name, group.book_count)),
            _ => uncategorized += group.book_count,
        }
    }

    named.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)).then_with(|| a.0.cmp(&b.0)));

    let mut result: Vec<CategoryBookCount> = named
        .into_iter()
        .map(|(_, category_name, book_count)| CategoryBookCount {
            category_name,
            book_count,
        })
        .collect();

    if uncategorized > 0 {
        let position = result
            .iter()
            .position(|c| c.book_count < uncategorized)
            .unwrap_or(result.len());
        result.insert(
            position,
            CategoryBookCount {
                category_name: uncategorized_label.to_string(),
                book_count: uncategorized,
            },
        );
    }

    result
}
