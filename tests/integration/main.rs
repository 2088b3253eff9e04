//! Integration tests against the in-memory lending repository

mod api_tests;
mod common;
