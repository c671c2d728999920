//! Document and folder types for the documents export

use serde::{Deserialize, Serialize};

/// A document snapshot, read-only for the duration of one export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Platform identifier, also the file-drive key for binary bodies
    pub id: String,
    /// Title, used verbatim as the destination file name
    pub title: String,
    /// Declared content kind together with its payload
    pub body: DocumentBody,
}

/// Content kind of a document
///
/// Each variant maps to exactly one materialization behavior; adding a new
/// kind forces every dispatch site to handle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentBody {
    /// Binary file stored in the platform file drive
    File,
    /// Plain/rich text, written out as Markdown
    Text { text: String },
    /// Checklist documents have no exportable representation
    Checklist,
    /// No body declared
    None,
}

/// Scope of a document folder tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentScope {
    /// The current user's personal documents
    Personal,
    /// A project's documents, addressed by project key
    Project(String),
}

/// Folder identifier within a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderId {
    /// The root folder of the scope
    Root,
    /// An explicit folder id
    Id(String),
}

impl FolderId {
    /// Path segment used when addressing the folder in an endpoint
    pub fn segment(&self) -> &str {
        match self {
            FolderId::Root => "root",
            FolderId::Id(id) => id,
        }
    }
}

/// A subfolder listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    /// Name used verbatim as a path segment under the parent folder
    pub name: String,
}
