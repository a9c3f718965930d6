//! Core Business Logic
//!
//! Buffer storage and the reactive playground that keeps the preview in sync.

pub mod buffers;
pub mod playground;

pub use buffers::{BufferId, BufferStore};
pub use playground::Playground;
