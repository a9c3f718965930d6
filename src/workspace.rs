//! Workspace directories.
//!
//! A workspace mirrors the three buffers as plain files so they can be edited
//! with any editor:
//! - `index.html` for markup
//! - `style.css` for the stylesheet
//! - `tailwind.config.js` for the framework configuration

use std::path::{Path, PathBuf};

use crate::core::{BufferId, BufferStore};
use crate::error::{PlaygroundError, Result};
use crate::project::ProjectRecord;

/// A directory holding one source file per buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name used for a buffer
    pub fn file_name(id: BufferId) -> &'static str {
        match id {
            BufferId::Markup => "index.html",
            BufferId::Stylesheet => "style.css",
            BufferId::FrameworkConfig => "tailwind.config.js",
        }
    }

    pub fn path_for(&self, id: BufferId) -> PathBuf {
        self.dir.join(Self::file_name(id))
    }

    /// Which buffer a path belongs to, if any
    pub fn buffer_for_path(&self, path: &Path) -> Option<BufferId> {
        let name = path.file_name()?.to_str()?;
        BufferId::ALL
            .into_iter()
            .find(|id| Self::file_name(*id) == name)
    }

    /// Write seed files that do not exist yet. Existing files are left alone.
    pub async fn init(&self) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PlaygroundError::io(&self.dir, e))?;

        let mut created = Vec::new();
        for id in BufferId::ALL {
            let path = self.path_for(id);
            if tokio::fs::try_exists(&path)
                .await
                .map_err(|e| PlaygroundError::io(&path, e))?
            {
                log::debug!("Keeping existing {}", path.display());
                continue;
            }
            tokio::fs::write(&path, id.seed())
                .await
                .map_err(|e| PlaygroundError::io(&path, e))?;
            log::info!("Created {}", path.display());
            created.push(path);
        }

        Ok(created)
    }

    /// Read one buffer's file
    pub async fn read_buffer(&self, id: BufferId) -> Result<String> {
        let path = self.path_for(id);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PlaygroundError::io(&path, e))
    }

    /// Read all three files. Fails if any one of them cannot be read.
    pub async fn read(&self) -> Result<ProjectRecord> {
        Ok(ProjectRecord::new(
            self.read_buffer(BufferId::Markup).await?,
            self.read_buffer(BufferId::Stylesheet).await?,
            self.read_buffer(BufferId::FrameworkConfig).await?,
        ))
    }

    /// Load all three files into a store, or leave it untouched on failure
    pub async fn read_into(&self, store: &mut BufferStore) -> Result<()> {
        let (markup, stylesheet, framework_config) = self.read().await?.into_parts();
        store.replace_all(markup, stylesheet, framework_config);
        Ok(())
    }

    /// Staging file a buffer is written to before it replaces the real one
    fn staging_path_for(&self, id: BufferId) -> PathBuf {
        self.dir.join(format!(".{}.twp-tmp", Self::file_name(id)))
    }

    /// Write every buffer of a store to its file.
    ///
    /// All three texts are staged next to their targets first. If any staging
    /// write fails, the staged files are removed and the existing sources are
    /// left as they were. Only then is each one renamed into place.
    pub async fn write_from(&self, store: &BufferStore) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PlaygroundError::io(&self.dir, e))?;

        let mut staged = Vec::with_capacity(BufferId::ALL.len());
        for id in BufferId::ALL {
            let staging = self.staging_path_for(id);
            if let Err(e) = tokio::fs::write(&staging, store.get_buffer(id)).await {
                self.discard(&staged).await;
                return Err(PlaygroundError::io(&staging, e));
            }
            staged.push((staging, self.path_for(id)));
        }

        for (index, (staging, path)) in staged.iter().enumerate() {
            if let Err(e) = tokio::fs::rename(staging, path).await {
                self.discard(&staged[index..]).await;
                return Err(PlaygroundError::io(path, e));
            }
        }
        Ok(())
    }

    async fn discard(&self, staged: &[(PathBuf, PathBuf)]) {
        for (staging, _) in staged {
            if let Err(e) = tokio::fs::remove_file(staging).await {
                log::warn!("Failed to remove {}: {}", staging.display(), e);
            }
        }
    }
}
