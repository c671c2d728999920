//! Document folder endpoints and file-drive downloads

use std::path::Path;

use crate::batch::{BatchInfo, BatchPage};
use crate::error::Result;
use crate::types::{DocumentScope, FolderId};

use super::client::SpaceClient;
use super::types::{RawDocument, RawSubfolder};

/// Endpoint prefix addressing a folder within a scope
fn folder_endpoint(scope: &DocumentScope, folder: &FolderId) -> String {
    match scope {
        DocumentScope::Personal => format!(
            "/team-directory/profiles/me/documents/folders/{}",
            folder.segment()
        ),
        DocumentScope::Project(key) => format!(
            "/projects/key:{key}/documents/folders/{}",
            folder.segment()
        ),
    }
}

impl SpaceClient {
    /// List the documents directly inside a folder
    ///
    /// # Arguments
    /// * `scope` - Personal or project document tree
    /// * `folder` - Folder to list
    /// * `batch` - Pagination parameters for this page
    ///
    /// # Returns
    /// A Result containing one page of documents with id, title and body
    pub async fn list_folder_documents(
        &self,
        scope: &DocumentScope,
        folder: &FolderId,
        batch: BatchInfo,
    ) -> Result<BatchPage<RawDocument>> {
        let endpoint = format!(
            "{}/documents?$skip={}&$top={}",
            folder_endpoint(scope, folder),
            batch.offset,
            batch.batch_size
        );
        self.get_json(&endpoint).await
    }

    /// List the subfolders directly inside a folder
    pub async fn list_subfolders(
        &self,
        scope: &DocumentScope,
        folder: &FolderId,
        batch: BatchInfo,
    ) -> Result<BatchPage<RawSubfolder>> {
        let endpoint = format!(
            "{}/subfolders?$skip={}&$top={}",
            folder_endpoint(scope, folder),
            batch.offset,
            batch.batch_size
        );
        self.get_json(&endpoint).await
    }

    /// File-drive address of a document's binary body
    pub fn drive_file_url(&self, document_id: &str) -> String {
        format!("{}/drive/files/{document_id}", self.server_url())
    }

    /// Download a file-drive document to `dest`, authenticated with the
    /// session token
    pub async fn download_drive_file(&self, document_id: &str, dest: &Path) -> Result<()> {
        let url = self.drive_file_url(document_id);
        self.download_to_file(&url, dest, true).await
    }
}
