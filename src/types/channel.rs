//! Channel types for the chat export

use serde::{Deserialize, Serialize};

/// A channel as seen by the export engine
///
/// `name` is derived by the classifier and is guaranteed non-empty for any
/// channel that reaches the export stage; the invariant is enforced at
/// export time so malformed listing entries can be filtered out upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedChannel {
    /// Platform identifier of the channel
    pub id: String,
    /// Export name, used verbatim as a directory name
    pub name: String,
    /// What kind of conversation stream this is
    pub kind: ChannelKind,
}

/// Kind of conversation stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Named group channel
    GroupChannel,
    /// Direct message or group conversation
    DirectMessage,
    /// Nested sub-conversation anchored to a parent message; never exported
    /// standalone
    Thread,
}

impl ExportedChannel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ChannelKind) -> Self {
        ExportedChannel {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Synthetic channel used to fetch a thread's messages
    pub fn thread(id: impl Into<String>) -> Self {
        ExportedChannel::new(id, "thread", ChannelKind::Thread)
    }
}
