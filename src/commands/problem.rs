//! Problem Commands
//!
//! Reads of the problem list and statistics.

use super::request;
use super::{ApiClient, ApiError};
use crate::models::{Problem, ProblemStats};

impl ApiClient {
    pub async fn filter_problems(&self, search: &str, category: &str, status: &str) -> Result<Vec<Problem>, ApiError> {
        self.fetch_json(&request::filter_problems(search, category, status)).await
    }

    pub async fn problem_stats(&self) -> Result<ProblemStats, ApiError> {
        self.fetch_json(&request::problem_stats()).await
    }
}
