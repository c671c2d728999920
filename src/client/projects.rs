//! Project listing endpoint

use crate::batch::{BatchInfo, BatchPage};
use crate::error::Result;

use super::client::SpaceClient;
use super::types::RawProject;

impl SpaceClient {
    /// List projects in which the user may view documents
    ///
    /// # Arguments
    /// * `batch` - Pagination parameters for this page
    ///
    /// # Returns
    /// A Result containing one page of project entries
    pub async fn list_document_projects(
        &self,
        batch: BatchInfo,
    ) -> Result<BatchPage<RawProject>> {
        let endpoint = format!(
            "/projects?right=Documents.View&$skip={}&$top={}",
            batch.offset, batch.batch_size
        );
        self.get_json(&endpoint).await
    }
}
