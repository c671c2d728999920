//! Channel listing endpoints

use crate::batch::{BatchInfo, BatchPage};
use crate::error::Result;

use super::client::SpaceClient;
use super::types::{AllChannelsEntry, DirectChannelEntry};

impl SpaceClient {
    /// List all named group channels visible to the user
    ///
    /// # Arguments
    /// * `batch` - Pagination parameters for this page
    ///
    /// # Returns
    /// A Result containing one page of channel listing entries
    pub async fn list_all_channels(
        &self,
        batch: BatchInfo,
    ) -> Result<BatchPage<AllChannelsEntry>> {
        let endpoint = format!(
            "/chats/channels/all-channels?query=&$skip={}&$top={}",
            batch.offset, batch.batch_size
        );
        self.get_json(&endpoint).await
    }

    /// List direct-message and conversation channels, with contact details
    ///
    /// # Arguments
    /// * `batch` - Pagination parameters for this page
    ///
    /// # Returns
    /// A Result containing one page of direct channel entries
    pub async fn list_direct_channels(
        &self,
        batch: BatchInfo,
    ) -> Result<BatchPage<DirectChannelEntry>> {
        let endpoint = format!(
            "/chats/channels/direct?$skip={}&$top={}",
            batch.offset, batch.batch_size
        );
        self.get_json(&endpoint).await
    }
}
