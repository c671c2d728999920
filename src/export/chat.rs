//! Chat history serialization and attachment materialization

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info};

use crate::client::SpaceClient;
use crate::error::{Error, Result};
use crate::types::{ChannelKind, ExportedAttachment, ExportedChannel, ExportedMessage};

/// File download capability consumed by the exporter
#[async_trait]
pub trait Downloader: Sync {
    /// Stream the resource at `url` to `dest`, overwriting an existing file
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

#[async_trait]
impl Downloader for SpaceClient {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        // Resolved attachment URLs embed their own access, no token needed
        self.download_to_file(url, dest, false).await
    }
}

/// Serializes a channel's resolved message tree and materializes its
/// attachments
#[async_trait]
pub trait ChatExporter {
    async fn dump(
        &self,
        channel: &ExportedChannel,
        messages: &[ExportedMessage],
    ) -> Result<()>;
}

/// Writes `history.json` per channel under `base_path/{dm,group}/<name>/`
pub struct JsonExporter<'a, D: Downloader> {
    base_path: PathBuf,
    downloader: &'a D,
}

impl<'a, D: Downloader> JsonExporter<'a, D> {
    pub fn new(base_path: impl Into<PathBuf>, downloader: &'a D) -> Self {
        JsonExporter {
            base_path: base_path.into(),
            downloader,
        }
    }
}

/// Destination subdirectory per channel kind. Threads are nested inside
/// their parent message and must never reach the export stage on their own.
fn subdirectory(kind: ChannelKind) -> Result<&'static str> {
    match kind {
        ChannelKind::DirectMessage => Ok("dm"),
        ChannelKind::GroupChannel => Ok("group"),
        ChannelKind::Thread => Err(Error::UnsupportedChannelKind { kind }),
    }
}

/// Every attachment across the message tree, nested threads included
fn collect_attachments(messages: &[ExportedMessage]) -> Vec<&ExportedAttachment> {
    let mut attachments = Vec::new();
    let mut stack: Vec<&[ExportedMessage]> = vec![messages];
    while let Some(level) = stack.pop() {
        for message in level {
            attachments.extend(message.attachments.iter());
            if !message.thread.is_empty() {
                stack.push(&message.thread);
            }
        }
    }
    attachments
}

#[async_trait]
impl<'a, D: Downloader> ChatExporter for JsonExporter<'a, D> {
    async fn dump(
        &self,
        channel: &ExportedChannel,
        messages: &[ExportedMessage],
    ) -> Result<()> {
        // The classifier guarantees a non-empty name; an empty one here is
        // a logic defect, not a recoverable condition.
        if channel.name.is_empty() {
            return Err(Error::EmptyChannelName(channel.id.clone()));
        }
        let subdir = subdirectory(channel.kind)?;

        let channel_dir = self.base_path.join(subdir).join(&channel.name);
        tokio::fs::create_dir_all(&channel_dir)
            .await
            .map_err(|e| Error::io(&channel_dir, e))?;

        let history_path = channel_dir.join("history.json");
        let json = serde_json::to_vec_pretty(messages)?;
        tokio::fs::write(&history_path, json)
            .await
            .map_err(|e| Error::io(&history_path, e))?;

        let attachments = collect_attachments(messages);
        info!(
            channel = %channel.name,
            messages = messages.len(),
            attachments = attachments.len(),
            "exported channel history"
        );

        let downloads = attachments.into_iter().map(|attachment| {
            let dest = channel_dir.join(&attachment.name);
            async move {
                debug!(name = %attachment.name, "downloading attachment");
                self.downloader.download(&attachment.url, &dest).await
            }
        });

        // Wait for every download before surfacing the first failure, so a
        // failed peer cannot leave the others half-written.
        for result in join_all(downloads).await {
            result?;
        }

        Ok(())
    }
}
