//! HTTP routes served over the in-memory repository

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use library_report::{
    api,
    config::AppConfig,
    repository::InMemoryLoanRepository,
    services::Services,
    AppState,
};

use crate::common::{book, category, date, details, reader, slip};

fn app() -> Router {
    let repository = InMemoryLoanRepository::new()
        .with_categories([category(1, "Novels")])
        .with_books([book(1, "A", Some(1)), book(2, "B", None)])
        .with_readers([reader(1), reader(2), reader(3)])
        .with_loan_slips([
            slip(1, date(2024, 6, 5), None),
            slip(2, date(2024, 5, 20), None),
            slip(3, date(2024, 5, 20), Some(date(2024, 5, 25))),
        ])
        .with_loan_details(details(&[1, 1, 1, 2]));

    let config = AppConfig::default();
    let services = Services::new(Arc::new(repository), config.report.clone());

    api::create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_report_for_reference_date() {
    let (status, body) = get("/api/v1/reports?date=2024-06-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reference_date"], "2024-06-01");
    assert_eq!(body["total_books"], 2);
    assert_eq!(body["total_readers"], 3);
    assert_eq!(body["current_loans"], 1);
    assert_eq!(body["overdue_loans"], 1);
    assert_eq!(body["top_loaned_books"][0]["book_name"], "A");
    assert_eq!(body["top_loaned_books"][0]["loan_count"], 3);
    assert_eq!(body["top_loaned_books"][1]["book_name"], "B");
    assert_eq!(body["books_by_category"][0]["category_name"], "Novels");
    assert_eq!(body["books_by_category"][1]["category_name"], "Uncategorized");
}

#[tokio::test]
async fn test_get_report_defaults_to_today() {
    let (status, body) = get("/api/v1/reports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["reference_date"],
        chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[tokio::test]
async fn test_get_report_rejects_malformed_date() {
    let (status, body) = get("/api/v1/reports?date=June%201st").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_openapi_document_lists_report_route() {
    let (status, body) = get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/reports"]["get"].is_object());
}
