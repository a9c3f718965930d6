//! Save and Load flows.
//!
//! Each flow catches its own failures and reports them as an `Outcome`, so
//! the playground stays usable whatever happens.

use std::path::PathBuf;

use crate::core::{BufferStore, Playground};
use crate::error::PlaygroundError;
use crate::preview::PreviewSink;
use crate::project::codec::{self, ProjectRecord};
use crate::project::gateway::{FileFilter, PersistenceGateway};

/// Result of a save or load
#[derive(Debug)]
pub enum Outcome {
    /// The operation finished against this file
    Completed(PathBuf),
    /// The user dismissed the picker; nothing happened
    Cancelled,
    /// The operation failed and was reported; buffers are unchanged
    Failed(PlaygroundError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn error(&self) -> Option<&PlaygroundError> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Encode the current buffers and write them where the user chooses.
///
/// Buffers are only read, never modified.
pub async fn save_project<G: PersistenceGateway>(store: &BufferStore, gateway: &mut G) -> Outcome {
    let target = match gateway.request_save_target(&FileFilter::PROJECT).await {
        Ok(Some(target)) => target,
        Ok(None) => {
            log::debug!("Save cancelled");
            return Outcome::Cancelled;
        }
        Err(e) => return failed("save", e),
    };

    let text = match codec::encode_record(&ProjectRecord::from_store(store)) {
        Ok(text) => text,
        Err(e) => return failed("save", e),
    };
    match gateway.write_text(&target, &text).await {
        Ok(()) => {
            log::info!("Project saved successfully to {}", target.display());
            Outcome::Completed(target)
        }
        Err(e) => failed("save", e),
    }
}

/// Read a project the user chooses and replace all three buffers with it.
///
/// Buffers are only touched once the file has been read and decoded.
pub async fn load_project<S, G>(playground: &mut Playground<S>, gateway: &mut G) -> Outcome
where
    S: PreviewSink,
    G: PersistenceGateway,
{
    let source = match gateway.request_open_source(&FileFilter::PROJECT).await {
        Ok(Some(source)) => source,
        Ok(None) => {
            log::debug!("Load cancelled");
            return Outcome::Cancelled;
        }
        Err(e) => return failed("load", e),
    };

    let record = match gateway.read_text(&source).await.and_then(|text| codec::decode(&text)) {
        Ok(record) => record,
        Err(e) => return failed("load", e),
    };

    let (markup, stylesheet, framework_config) = record.into_parts();
    playground.replace_all(markup, stylesheet, framework_config);
    log::info!("Project loaded successfully from {}", source.display());
    Outcome::Completed(source)
}

fn failed(operation: &str, error: PlaygroundError) -> Outcome {
    log::error!("Failed to {} project: {}", operation, error);
    Outcome::Failed(error)
}
