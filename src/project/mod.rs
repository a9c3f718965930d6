//! Project persistence
//!
//! The JSON record format, the storage gateway it travels through, and the
//! save/load flows that tie both to a playground.

pub mod codec;
pub mod gateway;
pub mod session;

pub use codec::{ProjectRecord, decode, encode};
pub use gateway::{FileFilter, PersistenceGateway, PresetGateway, PromptGateway};
pub use session::{Outcome, load_project, save_project};
