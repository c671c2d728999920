//! Raw wire types for the workspace API
//!
//! Mirrors the JSON shapes the server returns. Platform polymorphism
//! (contact details, attachment details, document bodies) arrives as
//! `className`-tagged objects and is modeled as internally tagged enums,
//! each with an `Unknown` catch-all so new server-side kinds deserialize
//! instead of failing the page.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Listing entry for a named group channel
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllChannelsEntry {
    pub channel_id: String,
    pub name: String,
}

/// Listing entry for a direct-message or conversation channel
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectChannelEntry {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub channel_type: Option<String>,
    pub details: ContactDetails,
}

/// Contact details variant of a direct channel
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "className")]
pub enum ContactDetails {
    /// 1:1 conversation with a single user
    Profile { user: ChatUser },
    /// Group conversation, optionally with an explicit subject
    Conversation {
        #[serde(default)]
        subject: Option<String>,
        #[serde(default)]
        users: Vec<ChatUser>,
    },
    /// Any variant this client does not understand
    #[serde(other)]
    Unknown,
}

/// Minimal user record carried in channel contact details
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUser {
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// One page of a channel's message history
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePage {
    #[serde(default)]
    pub messages: Vec<RawMessage>,
    /// Cursor for the next (older) page; `None` means history is exhausted
    #[serde(default)]
    pub next_start_from_date: Option<DateTime<Utc>>,
    /// Set when the organization hit its message volume limit and older
    /// history is withheld
    #[serde(default)]
    pub org_limit_reached: bool,
}

/// A message as returned by the history endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    pub id: String,
    pub author: MessageAuthor,
    /// Creation time, milliseconds since the Unix epoch
    pub time: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attachments: Option<Vec<AttachmentInfo>>,
    #[serde(default)]
    pub reactions: Option<MessageReactions>,
    #[serde(default)]
    pub thread: Option<ThreadPreview>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReactions {
    #[serde(default)]
    pub emoji_reactions: Vec<EmojiReaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmojiReaction {
    pub emoji: String,
    pub count: u32,
}

/// Reference to the thread channel anchored to a message
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadPreview {
    pub id: String,
}

/// Envelope around one attachment of a message
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentInfo {
    #[serde(default)]
    pub details: Option<AttachmentDetails>,
}

/// Attachment payload variant
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "className")]
pub enum AttachmentDetails {
    ImageAttachment {
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    VideoAttachment {
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    FileAttachment {
        id: String,
        filename: String,
    },
    UnfurlAttachment {
        unfurl: UnfurlDetails,
    },
    /// Attachment kinds without an export representation; dropped silently
    #[serde(other)]
    Unknown,
}

/// Link-preview payload of an unfurl attachment
#[derive(Debug, Clone, Deserialize)]
pub struct UnfurlDetails {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A document as returned by the folder listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body_type: Option<RawBodyType>,
    #[serde(default)]
    pub document_body: Option<RawDocumentBody>,
}

/// Declared body type of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RawBodyType {
    File,
    Text,
    Checklist,
}

/// Inline document body payload
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "className")]
pub enum RawDocumentBody {
    TextDocument { text: String },
    #[serde(other)]
    Unknown,
}

/// A subfolder listing entry
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubfolder {
    pub id: String,
    pub name: String,
}

/// A project listing entry; only the key matters for the export
#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    pub key: ProjectKey,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectKey {
    pub key: String,
}
