//! Export drivers
//!
//! Glue between enumeration, fetching and materialization. Channels and
//! folder trees are processed one at a time in enumeration order; only the
//! attachment downloads within a channel run concurrently.

pub mod channels;
pub mod chat;
pub mod documents;
pub mod messages;

use tracing::info;

use crate::client::SpaceClient;
use crate::config::{DocumentsScope, ExportConfig, ExportFormat};
use crate::error::Result;
use crate::types::DocumentScope;

use chat::{ChatExporter, JsonExporter};
use documents::DocumentWalker;
use messages::MessageFetcher;

/// Export every chat channel available to the user: group channels first,
/// then direct messages, each serialized with its attachments.
pub async fn run_chat_export(client: &SpaceClient, config: &ExportConfig) -> Result<()> {
    let exporter = match config.format {
        ExportFormat::Json => JsonExporter::new(config.base_path.join("json"), client),
    };
    let fetcher = MessageFetcher::new(client);

    let mut channels = channels::fetch_group_channels(client).await?;
    channels.extend(channels::fetch_direct_channels(client).await?);
    info!(channels = channels.len(), "starting chat export");

    for channel in &channels {
        let messages = fetcher.fetch_channel(channel).await?;
        exporter.dump(channel, &messages).await?;
    }

    Ok(())
}

/// Export document folder trees according to the configured scope
pub async fn run_document_export(client: &SpaceClient, config: &ExportConfig) -> Result<()> {
    let base_path = config.base_path.join("documents");
    let walker = DocumentWalker::new(client);

    if config.scope != DocumentsScope::Project {
        info!("exporting personal documents");
        walker
            .export_scope(&DocumentScope::Personal, &base_path.join("personal"))
            .await?;
    }

    if config.scope != DocumentsScope::Personal {
        let keys = documents::project_keys(client, config.project_key.as_deref()).await?;
        info!(projects = keys.len(), "exporting project documents");
        for key in keys {
            walker
                .export_scope(
                    &DocumentScope::Project(key.clone()),
                    &base_path.join("project").join(&key),
                )
                .await?;
        }
    }

    Ok(())
}
