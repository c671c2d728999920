//! Message tree traversal
//!
//! Walks a channel's history backward from the current instant with a
//! moving date cursor, resolving threaded replies into nested message
//! trees and attachment references into downloadable URLs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::client::types::{AttachmentDetails, MessagePage, RawMessage};
use crate::client::SpaceClient;
use crate::error::{Error, Result};
use crate::types::{ExportedAttachment, ExportedChannel, ExportedMessage};

/// Page size for message history requests, the platform maximum
pub const MESSAGE_BATCH_SIZE: u32 = 50;

/// Defensive bound on thread recursion. The platform keeps threads one
/// level deep; anything past this indicates malformed data.
pub const MAX_THREAD_DEPTH: u32 = 8;

/// Query capability the fetcher traverses: message pages plus attachment
/// URL resolution
#[async_trait]
pub trait ChatSource: Sync {
    /// Fetch up to `batch_size` messages older than `start_from`, newest
    /// to oldest
    async fn message_page(
        &self,
        channel_id: &str,
        start_from: DateTime<Utc>,
        batch_size: u32,
    ) -> Result<MessagePage>;

    /// Resolve an attachment to a directly fetchable URL
    async fn attachment_url(
        &self,
        channel_id: &str,
        message_id: &str,
        attachment_id: &str,
    ) -> Result<String>;
}

#[async_trait]
impl ChatSource for SpaceClient {
    async fn message_page(
        &self,
        channel_id: &str,
        start_from: DateTime<Utc>,
        batch_size: u32,
    ) -> Result<MessagePage> {
        self.channel_messages(channel_id, start_from, batch_size).await
    }

    async fn attachment_url(
        &self,
        channel_id: &str,
        message_id: &str,
        attachment_id: &str,
    ) -> Result<String> {
        self.chat_attachment_url(channel_id, message_id, attachment_id)
            .await
    }
}

/// Fetches the full message tree of a channel
pub struct MessageFetcher<'a, S: ChatSource> {
    source: &'a S,
}

impl<'a, S: ChatSource> MessageFetcher<'a, S> {
    pub fn new(source: &'a S) -> Self {
        MessageFetcher { source }
    }

    /// Fetch every message of a channel, newest first, with threads fully
    /// resolved.
    ///
    /// The result keeps API page order: pages are newest-to-oldest and are
    /// concatenated without reordering.
    pub async fn fetch_channel(&self, channel: &ExportedChannel) -> Result<Vec<ExportedMessage>> {
        self.fetch(channel.id.clone(), 0).await
    }

    fn fetch(&self, channel_id: String, depth: u32) -> BoxFuture<'_, Result<Vec<ExportedMessage>>> {
        async move {
            if depth > MAX_THREAD_DEPTH {
                return Err(Error::ThreadDepthExceeded {
                    channel: channel_id,
                    max: MAX_THREAD_DEPTH,
                });
            }

            // Anchor the traversal at the current instant: everything up
            // to now, walking backward.
            let mut cursor = Some(Utc::now());
            let mut messages = Vec::new();

            while let Some(start_from) = cursor {
                let page = self
                    .source
                    .message_page(&channel_id, start_from, MESSAGE_BATCH_SIZE)
                    .await?;

                // A cursor that does not advance means history is
                // exhausted; treating it as a stop also guards against a
                // server that repeats itself forever.
                cursor = match page.next_start_from_date {
                    Some(next) if next != start_from => Some(next),
                    _ => None,
                };

                for raw in page.messages {
                    let message = self.convert_message(&channel_id, raw, depth).await?;
                    messages.push(message);
                }

                if page.org_limit_reached {
                    return Err(Error::OrgLimitReached);
                }
            }

            Ok(messages)
        }
        .boxed()
    }

    /// Map one raw message, resolving attachment URLs and recursing into
    /// its thread
    async fn convert_message(
        &self,
        channel_id: &str,
        raw: RawMessage,
        depth: u32,
    ) -> Result<ExportedMessage> {
        let mut unfurls = Vec::new();
        let mut attachments = Vec::new();

        for info in raw.attachments.unwrap_or_default() {
            match info.details {
                Some(AttachmentDetails::UnfurlAttachment { unfurl }) => {
                    unfurls.push(unfurl.into());
                }
                Some(AttachmentDetails::ImageAttachment { id, name })
                | Some(AttachmentDetails::VideoAttachment { id, name }) => {
                    let url = self.source.attachment_url(channel_id, &raw.id, &id).await?;
                    attachments.push(ExportedAttachment {
                        url,
                        name: name.unwrap_or_else(|| id.clone()),
                    });
                }
                Some(AttachmentDetails::FileAttachment { id, filename }) => {
                    let url = self.source.attachment_url(channel_id, &raw.id, &id).await?;
                    attachments.push(ExportedAttachment {
                        url,
                        name: filename,
                    });
                }
                // Other attachment kinds have no export representation
                Some(AttachmentDetails::Unknown) | None => {}
            }
        }

        let reactions = raw
            .reactions
            .map(|reactions| {
                reactions
                    .emoji_reactions
                    .into_iter()
                    .map(Into::into)
                    .collect()
            })
            .unwrap_or_default();

        let thread = match raw.thread {
            Some(thread) => self.fetch(thread.id, depth + 1).await?,
            None => Vec::new(),
        };

        Ok(ExportedMessage {
            id: raw.id,
            author: raw.author.name,
            timestamp: raw.time,
            text: raw.text,
            unfurls,
            attachments,
            reactions,
            thread,
        })
    }
}
