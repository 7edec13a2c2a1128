use async_trait::async_trait;

use crate::domain::QueryIdentifier;

use super::FetchError;

/// Fully rendered HTML of one snapshot page.
pub type RawDocument = String;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Checks that a browser session can be started at all.
    async fn ensure_ready(&self) -> Result<(), FetchError>;

    /// Renders the snapshot page for `query` in a fresh, isolated session.
    async fn fetch(&self, query: QueryIdentifier) -> Result<RawDocument, FetchError>;
}
