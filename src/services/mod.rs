//! Business logic services

pub mod reports;

use std::sync::Arc;

use crate::{config::ReportConfig, repository::LoanRepository};

pub use reports::ReportAggregator;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub reports: ReportAggregator,
}

impl Services {
    /// Create all services on top of the given lending repository
    pub fn new(repository: Arc<dyn LoanRepository>, report_config: ReportConfig) -> Self {
        Self {
            reports: ReportAggregator::new(repository, report_config),
        }
    }
}
