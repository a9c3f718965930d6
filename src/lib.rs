//! Tailwind Playground
//!
//! A live-preview playground for markup, stylesheets and Tailwind configuration.
//!
//! This library provides:
//! - Three-buffer store with an active selection
//! - Document composition for the sandboxed preview
//! - Project save/load through a swappable persistence gateway
//! - Workspace directories with live reload
//! - Configuration management

pub mod app;
pub mod compose;
pub mod config;
pub mod core;
pub mod error;
pub mod preview;
pub mod project;
pub mod watch;
pub mod workspace;

// Re-exports for clean public API
pub use compose::{DocumentTemplate, compose};
pub use config::Config;
pub use crate::core::{BufferId, BufferStore, Playground};
pub use error::PlaygroundError;
pub use preview::PreviewSink;
pub use project::{Outcome, PersistenceGateway, ProjectRecord, decode, encode};
pub use workspace::Workspace;
