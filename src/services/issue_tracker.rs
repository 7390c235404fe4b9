use async_trait::async_trait;

use crate::domain::query::JqlQuery;
use crate::domain::search::SearchResult;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn search(&self, query: &JqlQuery, max_results: u32) -> AppResult<SearchResult>;
}
