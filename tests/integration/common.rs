//! Fixtures shared by the integration tests

use chrono::NaiveDate;
use library_report::models::{Book, Category, LoanDetail, LoanSlip, Reader};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn slip(id: i32, expired_date: NaiveDate, return_date: Option<NaiveDate>) -> LoanSlip {
    LoanSlip {
        id,
        book_id: 1,
        reader_id: 1,
        issue_date: date(2024, 5, 1),
        expired_date,
        return_date,
    }
}

pub fn book(id: i32, name: &str, category_id: Option<i32>) -> Book {
    Book {
        id,
        name: name.to_string(),
        category_id,
        quantity: 3,
    }
}

pub fn category(id: i32, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
    }
}

pub fn reader(id: i32) -> Reader {
    Reader { id }
}

/// One loan detail row per entry of `book_ids`, all on slip 1
pub fn details(book_ids: &[i32]) -> Vec<LoanDetail> {
    book_ids
        .iter()
        .enumerate()
        .map(|(i, &book_id)| LoanDetail {
            id: i as i32 + 1,
            loan_slip_id: 1,
            book_id,
        })
        .collect()
}
