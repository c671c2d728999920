//! Error handling for space-export
//!
//! All fallible operations in the crate return [`Result`]. Errors are fatal
//! for the unit that produced them; the export drivers decide whether a unit
//! failure aborts the whole run.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ChannelKind;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided (bad server URL, malformed identifier)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport-level failure from the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// A file download answered with a non-success status
    #[error("failed to download {url}: status {status}")]
    Download { url: String, status: u16 },

    /// Local filesystem failure
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server reported the organization-wide message volume limit.
    /// Continuing would silently truncate history, so the run aborts.
    #[error("organization message limit reached, history past the limit is unavailable")]
    OrgLimitReached,

    /// A channel reached the export stage without a name. The classifier
    /// guarantees a non-empty name, so this signals a logic defect.
    #[error("channel {0} has an empty name at export time")]
    EmptyChannelName(String),

    /// A channel kind that cannot be exported standalone (threads are
    /// nested inside their parent message)
    #[error("{kind:?} channels cannot be exported standalone")]
    UnsupportedChannelKind { kind: ChannelKind },

    /// Thread nesting exceeded the defensive recursion bound
    #[error("thread nesting in channel {channel} exceeds depth {max}")]
    ThreadDepthExceeded { channel: String, max: u32 },

    /// A text document arrived without its text body payload
    #[error("document {title} declares a text body but none was returned")]
    MissingDocumentBody { title: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
