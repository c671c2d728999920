//! Document folder traversal and materialization
//!
//! Walks a folder tree depth-first (documents before subfolders at each
//! node, subfolders in listing order) and writes every document according
//! to its body kind. Directory layout mirrors the remote folder names; a
//! re-run overwrites files in place.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, info};

use crate::batch::load_batch;
use crate::client::convert::document_from_raw;
use crate::client::SpaceClient;
use crate::error::{Error, Result};
use crate::types::{Document, DocumentBody, DocumentScope, Folder, FolderId};

/// Query capability the walker traverses: folder listings plus file-drive
/// downloads
#[async_trait]
pub trait DocumentSource: Sync {
    /// Documents directly inside a folder, fully paginated
    async fn folder_documents(
        &self,
        scope: &DocumentScope,
        folder: &FolderId,
    ) -> Result<Vec<Document>>;

    /// Subfolders directly inside a folder, fully paginated
    async fn folder_subfolders(
        &self,
        scope: &DocumentScope,
        folder: &FolderId,
    ) -> Result<Vec<Folder>>;

    /// Download a file-drive document body to `dest`
    async fn download_document(&self, document_id: &str, dest: &Path) -> Result<()>;
}

#[async_trait]
impl DocumentSource for SpaceClient {
    async fn folder_documents(
        &self,
        scope: &DocumentScope,
        folder: &FolderId,
    ) -> Result<Vec<Document>> {
        let raw = load_batch(|batch| self.list_folder_documents(scope, folder, batch)).await?;
        raw.into_iter().map(document_from_raw).collect()
    }

    async fn folder_subfolders(
        &self,
        scope: &DocumentScope,
        folder: &FolderId,
    ) -> Result<Vec<Folder>> {
        let raw = load_batch(|batch| self.list_subfolders(scope, folder, batch)).await?;
        Ok(raw.into_iter().map(Into::into).collect())
    }

    async fn download_document(&self, document_id: &str, dest: &Path) -> Result<()> {
        self.download_drive_file(document_id, dest).await
    }
}

/// Exports a scope's folder tree to disk
pub struct DocumentWalker<'a, S: DocumentSource> {
    source: &'a S,
}

impl<'a, S: DocumentSource> DocumentWalker<'a, S> {
    pub fn new(source: &'a S) -> Self {
        DocumentWalker { source }
    }

    /// Walk the whole tree of `scope`, materializing under `base_path`
    pub async fn export_scope(&self, scope: &DocumentScope, base_path: &Path) -> Result<()> {
        self.walk(scope, FolderId::Root, base_path.to_path_buf())
            .await
    }

    fn walk<'b>(
        &'b self,
        scope: &'b DocumentScope,
        folder: FolderId,
        folder_path: PathBuf,
    ) -> BoxFuture<'b, Result<()>> {
        async move {
            debug!(folder = folder.segment(), path = %folder_path.display(), "exporting folder");

            let documents = self.source.folder_documents(scope, &folder).await?;

            // Only folders that hold documents materialize on disk; empty
            // intermediate folders appear when a descendant needs them.
            if !documents.is_empty() {
                tokio::fs::create_dir_all(&folder_path)
                    .await
                    .map_err(|e| Error::io(&folder_path, e))?;
            }

            for document in &documents {
                self.materialize(document, &folder_path).await?;
            }

            let subfolders = self.source.folder_subfolders(scope, &folder).await?;
            for subfolder in subfolders {
                self.walk(
                    scope,
                    FolderId::Id(subfolder.id),
                    folder_path.join(&subfolder.name),
                )
                .await?;
            }

            Ok(())
        }
        .boxed()
    }

    /// Write one document according to its body kind
    async fn materialize(&self, document: &Document, folder_path: &Path) -> Result<()> {
        debug!(title = %document.title, "exporting document");

        match &document.body {
            DocumentBody::File => {
                let dest = folder_path.join(&document.title);
                self.source.download_document(&document.id, &dest).await
            }
            DocumentBody::Text { text } => {
                let dest = folder_path.join(format!("{}.md", document.title));
                tokio::fs::write(&dest, text)
                    .await
                    .map_err(|e| Error::io(&dest, e))
            }
            DocumentBody::Checklist => {
                info!(title = %document.title, "skipping checklist document");
                Ok(())
            }
            DocumentBody::None => Ok(()),
        }
    }
}

/// Resolve which projects to export documents from.
///
/// An explicitly configured key wins; otherwise every project in which the
/// user may view documents is exported, keys lowercased for the directory
/// layout.
pub async fn project_keys(client: &SpaceClient, configured: Option<&str>) -> Result<Vec<String>> {
    match configured {
        Some(key) if !key.is_empty() => Ok(vec![key.to_string()]),
        _ => {
            let projects = load_batch(|batch| client.list_document_projects(batch)).await?;
            Ok(projects
                .into_iter()
                .map(|project| project.key.key.to_lowercase())
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use tempfile::tempdir;

    fn text_document(id: &str, title: &str, text: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            body: DocumentBody::Text {
                text: text.to_string(),
            },
        }
    }

    fn folder(id: &str, name: &str) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// Serves a canned folder tree keyed by folder segment and records
    /// every visit and download
    struct FakeTree {
        documents: HashMap<String, Vec<Document>>,
        subfolders: HashMap<String, Vec<Folder>>,
        visited: Mutex<Vec<String>>,
        downloads: Mutex<Vec<(String, PathBuf)>>,
    }

    impl FakeTree {
        fn new(
            documents: Vec<(&str, Vec<Document>)>,
            subfolders: Vec<(&str, Vec<Folder>)>,
        ) -> Self {
            FakeTree {
                documents: documents
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                subfolders: subfolders
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                visited: Mutex::new(Vec::new()),
                downloads: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DocumentSource for FakeTree {
        async fn folder_documents(
            &self,
            _scope: &DocumentScope,
            folder: &FolderId,
        ) -> Result<Vec<Document>> {
            self.visited.lock().unwrap().push(folder.segment().to_string());
            Ok(self
                .documents
                .get(folder.segment())
                .cloned()
                .unwrap_or_default())
        }

        async fn folder_subfolders(
            &self,
            _scope: &DocumentScope,
            folder: &FolderId,
        ) -> Result<Vec<Folder>> {
            Ok(self
                .subfolders
                .get(folder.segment())
                .cloned()
                .unwrap_or_default())
        }

        async fn download_document(&self, document_id: &str, dest: &Path) -> Result<()> {
            self.downloads
                .lock()
                .unwrap()
                .push((document_id.to_string(), dest.to_path_buf()));
            std::fs::write(dest, b"binary").unwrap();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_traversal_visits_every_folder_once() {
        let tree = FakeTree::new(
            vec![
                ("root", vec![text_document("d1", "Readme", "root doc")]),
                ("f-a", vec![text_document("d2", "Guide", "in a")]),
                ("f-c", vec![text_document("d3", "Deep", "in c")]),
            ],
            vec![
                ("root", vec![folder("f-a", "alpha"), folder("f-b", "beta")]),
                ("f-b", vec![folder("f-c", "gamma")]),
            ],
        );

        let dir = tempdir().unwrap();
        let walker = DocumentWalker::new(&tree);
        walker
            .export_scope(&DocumentScope::Personal, dir.path())
            .await
            .unwrap();

        // Parent before children, documents before subfolders, listing order
        assert_eq!(
            *tree.visited.lock().unwrap(),
            vec!["root", "f-a", "f-b", "f-c"]
        );

        // Destination paths concatenate ancestor folder names
        assert_eq!(
            std::fs::read_to_string(dir.path().join("Readme.md")).unwrap(),
            "root doc"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("alpha/Guide.md")).unwrap(),
            "in a"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("beta/gamma/Deep.md")).unwrap(),
            "in c"
        );
    }

    #[tokio::test]
    async fn test_empty_folder_creates_no_directory() {
        let tree = FakeTree::new(
            vec![("root", vec![text_document("d1", "Readme", "x")])],
            vec![("root", vec![folder("f-a", "empty")])],
        );

        let dir = tempdir().unwrap();
        let walker = DocumentWalker::new(&tree);
        walker
            .export_scope(&DocumentScope::Personal, dir.path())
            .await
            .unwrap();

        assert!(!dir.path().join("empty").exists());
    }

    #[tokio::test]
    async fn test_file_document_downloads_without_extension() {
        let tree = FakeTree::new(
            vec![(
                "root",
                vec![Document {
                    id: "d-file".to_string(),
                    title: "logo".to_string(),
                    body: DocumentBody::File,
                }],
            )],
            vec![],
        );

        let dir = tempdir().unwrap();
        let walker = DocumentWalker::new(&tree);
        walker
            .export_scope(&DocumentScope::Personal, dir.path())
            .await
            .unwrap();

        let downloads = tree.downloads.lock().unwrap();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].0, "d-file");
        assert_eq!(downloads[0].1, dir.path().join("logo"));
        assert!(dir.path().join("logo").exists());
    }

    #[tokio::test]
    async fn test_checklist_and_untyped_produce_no_files() {
        let tree = FakeTree::new(
            vec![(
                "root",
                vec![
                    Document {
                        id: "d-check".to_string(),
                        title: "Todo".to_string(),
                        body: DocumentBody::Checklist,
                    },
                    Document {
                        id: "d-none".to_string(),
                        title: "Mystery".to_string(),
                        body: DocumentBody::None,
                    },
                ],
            )],
            vec![],
        );

        let dir = tempdir().unwrap();
        let walker = DocumentWalker::new(&tree);
        walker
            .export_scope(&DocumentScope::Personal, dir.path())
            .await
            .unwrap();

        // The folder itself is created (it holds documents), but neither
        // body kind materializes a file.
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(entries.is_empty());
        assert!(tree.downloads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_text_body_written_verbatim() {
        let tree = FakeTree::new(
            vec![(
                "root",
                vec![text_document("d1", "Notes", "# Heading\n\nbody text\n")],
            )],
            vec![],
        );

        let dir = tempdir().unwrap();
        let walker = DocumentWalker::new(&tree);
        walker
            .export_scope(&DocumentScope::Personal, dir.path())
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("Notes.md")).unwrap(),
            "# Heading\n\nbody text\n"
        );
    }
}
