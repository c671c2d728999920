//! Message types for the chat export
//!
//! [`ExportedMessage`] is the unit of the `history.json` schema: field names
//! and nesting here are the on-disk contract and must stay parseable on
//! their own. List fields default to empty so a message serialized without
//! them round-trips to structurally identical data.

use serde::{Deserialize, Serialize};

/// A single chat message with its resolved attachments and nested thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedMessage {
    /// Platform identifier of the message
    pub id: String,
    /// Display name of the author
    pub author: String,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Message text
    pub text: String,
    /// Link previews attached to the message
    #[serde(default)]
    pub unfurls: Vec<ExportedUnfurl>,
    /// Downloadable attachments with resolved URLs
    #[serde(default)]
    pub attachments: Vec<ExportedAttachment>,
    /// Emoji reaction summaries
    #[serde(default)]
    pub reactions: Vec<ExportedReaction>,
    /// Replies in the thread anchored to this message, newest first.
    /// Recursively nested; the platform keeps threads flat in practice but
    /// the model does not assume it.
    #[serde(default)]
    pub thread: Vec<ExportedMessage>,
}

/// An attachment with its resolved download URL and destination file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedAttachment {
    /// Directly fetchable address
    pub url: String,
    /// Destination file name on disk
    pub name: String,
}

/// Emoji reaction summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedReaction {
    pub emoji: String,
    pub count: u32,
}

/// Link-preview metadata; serialized as-is, no side effects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedUnfurl {
    pub text: String,
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
}
