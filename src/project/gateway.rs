//! Persistence Gateway
//!
//! Abstracts "pick a location" and "read/write text" so the save and load
//! flows do not care whether paths come from flags, a prompt or a dialog.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{PlaygroundError, Result};

/// File type filter offered to a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    /// Filter used for project records
    pub const PROJECT: FileFilter = FileFilter {
        name: "JSON",
        extensions: &["json"],
    };

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

/// Storage facility used by the save and load flows.
///
/// Picker methods return `Ok(None)` when the user cancels; that is never an
/// error.
#[allow(async_fn_in_trait)]
pub trait PersistenceGateway {
    async fn request_save_target(&mut self, filter: &FileFilter) -> Result<Option<PathBuf>>;

    async fn write_text(&mut self, location: &Path, text: &str) -> Result<()>;

    async fn request_open_source(&mut self, filter: &FileFilter) -> Result<Option<PathBuf>>;

    async fn read_text(&mut self, location: &Path) -> Result<String>;
}

/// Answers pickers from paths chosen up front, e.g. from command-line flags.
/// A missing path behaves like a cancelled picker.
#[derive(Debug, Clone, Default)]
pub struct PresetGateway {
    save_target: Option<PathBuf>,
    open_source: Option<PathBuf>,
}

impl PresetGateway {
    pub fn new(save_target: Option<PathBuf>, open_source: Option<PathBuf>) -> Self {
        Self {
            save_target,
            open_source,
        }
    }

    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self::new(Some(path.into()), None)
    }

    pub fn opening(path: impl Into<PathBuf>) -> Self {
        Self::new(None, Some(path.into()))
    }
}

impl PersistenceGateway for PresetGateway {
    async fn request_save_target(&mut self, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        Ok(self.save_target.clone())
    }

    async fn write_text(&mut self, location: &Path, text: &str) -> Result<()> {
        write_file(location, text).await
    }

    async fn request_open_source(&mut self, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        Ok(self.open_source.clone())
    }

    async fn read_text(&mut self, location: &Path) -> Result<String> {
        read_file(location).await
    }
}

/// Asks for paths on a text stream. An empty answer or end of input cancels.
#[derive(Debug)]
pub struct PromptGateway<R, W> {
    input: R,
    output: W,
}

impl<R, W> PromptGateway<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    async fn ask(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        let stdio = |e: std::io::Error| PlaygroundError::io("<prompt>", e);

        self.output
            .write_all(prompt.as_bytes())
            .await
            .map_err(stdio)?;
        self.output.flush().await.map_err(stdio)?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).await.map_err(stdio)?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}

impl<R, W> PersistenceGateway for PromptGateway<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn request_save_target(&mut self, filter: &FileFilter) -> Result<Option<PathBuf>> {
        let prompt = format!(
            "Save project as ({} *.{}, empty to cancel): ",
            filter.name,
            filter.extensions.join(", *.")
        );
        let target = self.ask(&prompt).await?;

        // Mirror native save dialogs, which add the filter extension
        Ok(target.map(|path| match filter.extensions.first() {
            Some(ext) if path.extension().is_none() => path.with_extension(ext),
            _ => path,
        }))
    }

    async fn write_text(&mut self, location: &Path, text: &str) -> Result<()> {
        write_file(location, text).await
    }

    async fn request_open_source(&mut self, filter: &FileFilter) -> Result<Option<PathBuf>> {
        let prompt = format!(
            "Open project ({} *.{}, empty to cancel): ",
            filter.name,
            filter.extensions.join(", *.")
        );
        let source = self.ask(&prompt).await?;
        if let Some(path) = &source {
            if !filter.matches(path) {
                log::warn!(
                    "{} does not match the {} filter, opening anyway",
                    path.display(),
                    filter.name
                );
            }
        }
        Ok(source)
    }

    async fn read_text(&mut self, location: &Path) -> Result<String> {
        read_file(location).await
    }
}

async fn write_file(location: &Path, text: &str) -> Result<()> {
    tokio::fs::write(location, text)
        .await
        .map_err(|e| PlaygroundError::io(location, e))
}

async fn read_file(location: &Path) -> Result<String> {
    tokio::fs::read_to_string(location)
        .await
        .map_err(|e| PlaygroundError::io(location, e))
}
