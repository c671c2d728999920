//! Domain types produced by the export engine
//!
//! Everything here is a transient, single-pass snapshot: created during
//! traversal, serialized or written to disk, then discarded. No state
//! survives across runs.

pub mod channel;
pub mod document;
pub mod message;

pub use channel::{ChannelKind, ExportedChannel};
pub use document::{Document, DocumentBody, DocumentScope, Folder, FolderId};
pub use message::{ExportedAttachment, ExportedMessage, ExportedReaction, ExportedUnfurl};
