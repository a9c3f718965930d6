//! Document Composer
//!
//! Turns the three buffer texts into one self-contained preview document.
//! Substitution is purely textual: nothing is parsed, escaped or validated, so
//! mistakes in any buffer show up as-is in the preview.

pub mod template;

pub use template::{DEFAULT_RUNTIME_URL, DocumentTemplate};

/// Compose a preview document using the default framework runtime.
///
/// This is the main entry point for composition. The result is a pure
/// function of the three inputs.
pub fn compose(markup: &str, stylesheet: &str, framework_config: &str) -> String {
    DocumentTemplate::default().compose(markup, stylesheet, framework_config)
}
