//! Attachment URL resolution

use crate::error::Result;

use super::client::SpaceClient;

impl SpaceClient {
    /// Resolve a chat attachment to a directly fetchable public URL
    ///
    /// The returned address embeds its own signed access; downloading it
    /// does not require the API token.
    ///
    /// # Arguments
    /// * `channel_id` - Channel the message belongs to
    /// * `message_id` - Message carrying the attachment
    /// * `attachment_id` - The attachment to resolve
    ///
    /// # Returns
    /// A Result containing the download URL
    pub async fn chat_attachment_url(
        &self,
        channel_id: &str,
        message_id: &str,
        attachment_id: &str,
    ) -> Result<String> {
        let endpoint = format!(
            "/chats/public-url?channel=id:{channel_id}&message=id:{message_id}&attachment={attachment_id}"
        );
        self.get_json(&endpoint).await
    }
}
