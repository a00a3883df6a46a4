//! Feed Commands
//!
//! Notification feed and tag suggestions.

use super::request;
use super::{ApiClient, ApiError};
use crate::models::FeedNotification;

impl ApiClient {
    pub async fn notifications(&self) -> Result<Vec<FeedNotification>, ApiError> {
        self.fetch_json(&request::notifications()).await
    }

    pub async fn suggest_tags(&self, text: &str) -> Result<Vec<String>, ApiError> {
        self.fetch_json(&request::suggest_tags(text)).await
    }
}
