//! Loan slip model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan slip as stored by the lending desk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LoanSlip {
    pub id: i32,
    pub book_id: i32,
    pub reader_id: i32,
    pub issue_date: NaiveDate,
    /// Due date, set when the slip is created
    pub expired_date: NaiveDate,
    /// `None` while the loan is outstanding
    pub return_date: Option<NaiveDate>,
}

/// Association between a loan slip and one of the books it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LoanDetail {
    pub id: i32,
    pub loan_slip_id: i32,
    pub book_id: i32,
}

/// Status of a loan slip relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Not returned, due date not yet passed
    Current,
    /// Not returned, due date passed
    Overdue,
    /// Returned
    Closed,
}

impl LoanSlip {
    /// Classify this loan as of `reference_date`.
    ///
    /// A loan due exactly on the reference date is still current.
    pub fn status(&self, reference_date: NaiveDate) -> LoanStatus {
        match self.return_date {
            Some(_) => LoanStatus::Closed,
            None if self.expired_date >= reference_date => LoanStatus::Current,
            None => LoanStatus::Overdue,
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }
}
