//! Live preview by watching a workspace directory.
//!
//! File system events for the three source files are forwarded over a channel
//! and each one refreshes the matching buffer, which re-renders the preview.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::core::{BufferId, Playground};
use crate::preview::PreviewSink;
use crate::workspace::Workspace;

/// Events from the file watcher
#[derive(Debug)]
pub enum WatchEvent {
    SourceChanged(BufferId),
    WatcherError(notify::Error),
}

/// Watches a workspace and yields events for its source files
pub struct SourceWatcher {
    _watcher: RecommendedWatcher,
    events: mpsc::UnboundedReceiver<WatchEvent>,
}

impl SourceWatcher {
    /// Start watching the workspace directory (non-recursively)
    pub fn start(workspace: &Workspace) -> Result<Self> {
        let (tx, events) = mpsc::unbounded_channel();
        let filter = workspace.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if let EventKind::Create(_) | EventKind::Modify(_) = event.kind {
                        for path in event.paths {
                            if let Some(id) = filter.buffer_for_path(&path) {
                                let _ = tx.send(WatchEvent::SourceChanged(id));
                            }
                        }
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::WatcherError(e));
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )
        .context("Failed to create file watcher")?;

        watcher
            .watch(workspace.dir(), RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", workspace.dir().display()))?;

        log::info!("Watching {}", workspace.dir().display());

        Ok(Self {
            _watcher: watcher,
            events,
        })
    }

    pub fn events(&mut self) -> &mut mpsc::UnboundedReceiver<WatchEvent> {
        &mut self.events
    }
}

/// Apply watcher events to the playground until `shutdown` resolves or the
/// event channel closes
pub async fn run<S, F>(
    playground: &mut Playground<S>,
    workspace: &Workspace,
    events: &mut mpsc::UnboundedReceiver<WatchEvent>,
    shutdown: F,
) where
    S: PreviewSink,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                log::info!("Stopping watch");
                break;
            }
            event = events.recv() => match event {
                Some(event) => handle_event(playground, workspace, event).await,
                None => break,
            },
        }
    }
}

/// Refresh a single buffer from disk in response to an event
pub async fn handle_event<S: PreviewSink>(
    playground: &mut Playground<S>,
    workspace: &Workspace,
    event: WatchEvent,
) {
    match event {
        WatchEvent::SourceChanged(id) => match workspace.read_buffer(id).await {
            // Editors often emit several events per save
            Ok(text) if text == playground.get_buffer(id) => {}
            Ok(text) => {
                log::info!("{} changed, refreshing preview", Workspace::file_name(id));
                playground.set_buffer(id, text);
            }
            Err(e) => log::error!("Failed to reload {}: {}", id, e),
        },
        WatchEvent::WatcherError(e) => {
            log::error!("Workspace watcher error: {}", e);
        }
    }
}
