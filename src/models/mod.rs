//! Data models for library reporting

pub mod book;
pub mod loan;
pub mod reader;
pub mod report;

// Re-export commonly used types
pub use book::{Book, Category};
pub use loan::{LoanDetail, LoanSlip, LoanStatus};
pub use reader::Reader;
pub use report::{BookLoanCount, BookLoanGroup, CategoryBookCount, CategoryGroup, ReportSnapshot};
