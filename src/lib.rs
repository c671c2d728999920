//! Export engine for a Space workspace
//!
//! Walks everything the authenticated user can see (named group channels,
//! direct messages with fully resolved threads, personal and project
//! document folders) through the platform's paginated REST API and
//! materializes it as a local file tree:
//!
//! ```text
//! export/json/{dm,group}/<channel>/history.json   (+ attachment files)
//! export/documents/{personal,project/<key>}/<folder...>/<title>[.md]
//! ```
//!
//! Every run is a full traversal of the current remote state; there is no
//! incremental sync and no write-back to the platform.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod types;

pub use client::SpaceClient;
pub use config::{DocumentsScope, ExportConfig, ExportFormat};
pub use error::{Error, Result};
pub use export::{run_chat_export, run_document_export};
