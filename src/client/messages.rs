//! Message history endpoint

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;

use super::client::SpaceClient;
use super::types::MessagePage;

impl SpaceClient {
    /// Fetch one page of a channel's message history, newest to oldest
    ///
    /// # Arguments
    /// * `channel_id` - The channel (or thread) to read from
    /// * `start_from` - Only messages strictly older than this instant
    /// * `batch_size` - Maximum number of messages to return
    ///
    /// # Returns
    /// A Result containing the page together with the next cursor and the
    /// organization limit flag
    pub async fn channel_messages(
        &self,
        channel_id: &str,
        start_from: DateTime<Utc>,
        batch_size: u32,
    ) -> Result<MessagePage> {
        let endpoint = format!(
            "/chats/messages?channel=id:{}&sorting=FromNewestToOldest&startFromDate={}&batchSize={}",
            channel_id,
            start_from.to_rfc3339_opts(SecondsFormat::Millis, true),
            batch_size
        );
        self.get_json(&endpoint).await
    }
}
