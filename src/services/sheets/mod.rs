pub mod google;

use async_trait::async_trait;

/// An append-only tabular log. One call adds exactly one row.
#[async_trait]
pub trait SheetsProvider: Send + Sync {
    async fn append_row(&self, values: &[String]) -> anyhow::Result<()>;
}
