//! Run configuration
//!
//! All paths and scope choices are resolved up front and threaded through
//! the export drivers explicitly; nothing reads ambient global state.

use std::path::PathBuf;

use clap::ValueEnum;

/// On-disk format for chat history files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
}

/// Which document trees to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DocumentsScope {
    /// Personal and all project documents
    #[default]
    All,
    /// Only the current user's personal documents
    Personal,
    /// Only project documents
    Project,
}

/// Resolved configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Root of the output file tree
    pub base_path: PathBuf,
    /// Chat history serialization format
    pub format: ExportFormat,
    /// Document scope selection
    pub scope: DocumentsScope,
    /// Restrict project document export to a single project key
    pub project_key: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            base_path: PathBuf::from("export"),
            format: ExportFormat::Json,
            scope: DocumentsScope::All,
            project_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.base_path, PathBuf::from("export"));
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.scope, DocumentsScope::All);
        assert!(config.project_key.is_none());
    }

    #[test]
    fn test_scope_value_enum_names() {
        // CLI/env values for the scope option
        assert_eq!(
            DocumentsScope::from_str("personal", true).unwrap(),
            DocumentsScope::Personal
        );
        assert_eq!(
            DocumentsScope::from_str("all", true).unwrap(),
            DocumentsScope::All
        );
    }
}
