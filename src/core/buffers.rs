//! Buffer Store
//!
//! Three independent text buffers plus the active-selection indicator.

use std::fmt;
use std::str::FromStr;

/// Seed markup shown when the playground starts.
pub const SEED_MARKUP: &str = r#"<div class="bg-black text-white p-4">XD</div>"#;

/// Seed stylesheet shown when the playground starts.
pub const SEED_STYLESHEET: &str = "/* Add custom styles here */";

/// Seed framework configuration shown when the playground starts.
pub const SEED_FRAMEWORK_CONFIG: &str = "module.exports = {
  theme: {
    extend: {},
  },
  variants: {},
  plugins: [],
}";

/// Identifies one of the three buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferId {
    Markup,
    Stylesheet,
    FrameworkConfig,
}

impl BufferId {
    /// All buffers, in tab order.
    pub const ALL: [BufferId; 3] = [
        BufferId::Markup,
        BufferId::Stylesheet,
        BufferId::FrameworkConfig,
    ];

    /// Text a buffer holds before any edit or load
    pub fn seed(self) -> &'static str {
        match self {
            BufferId::Markup => SEED_MARKUP,
            BufferId::Stylesheet => SEED_STYLESHEET,
            BufferId::FrameworkConfig => SEED_FRAMEWORK_CONFIG,
        }
    }

    /// Short tab label, also accepted by `FromStr`
    pub fn label(self) -> &'static str {
        match self {
            BufferId::Markup => "html",
            BufferId::Stylesheet => "css",
            BufferId::FrameworkConfig => "config",
        }
    }

    fn index(self) -> usize {
        match self {
            BufferId::Markup => 0,
            BufferId::Stylesheet => 1,
            BufferId::FrameworkConfig => 2,
        }
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BufferId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "markup" => Ok(BufferId::Markup),
            "css" | "stylesheet" => Ok(BufferId::Stylesheet),
            "config" | "tailwind" => Ok(BufferId::FrameworkConfig),
            other => Err(format!(
                "unknown buffer '{}' (expected html, css or config)",
                other
            )),
        }
    }
}

/// Holds the three buffer texts and which one is presented for editing.
///
/// Buffers are never destroyed, only overwritten. Any text is accepted,
/// including invalid markup or styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferStore {
    texts: [String; 3],
    active: BufferId,
}

impl Default for BufferStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferStore {
    /// Create a store with every buffer set to its seed text
    pub fn new() -> Self {
        Self {
            texts: BufferId::ALL.map(|id| id.seed().to_string()),
            active: BufferId::Markup,
        }
    }

    /// Replace a buffer's text unconditionally
    pub fn set_buffer(&mut self, id: BufferId, text: impl Into<String>) {
        self.texts[id.index()] = text.into();
    }

    /// Overwrite all three buffers at once
    pub fn replace_all(
        &mut self,
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
        framework_config: impl Into<String>,
    ) {
        self.set_buffer(BufferId::Markup, markup);
        self.set_buffer(BufferId::Stylesheet, stylesheet);
        self.set_buffer(BufferId::FrameworkConfig, framework_config);
    }

    pub fn get_buffer(&self, id: BufferId) -> &str {
        &self.texts[id.index()]
    }

    /// Change which buffer is presented for editing
    pub fn set_active(&mut self, id: BufferId) {
        self.active = id;
    }

    pub fn active(&self) -> BufferId {
        self.active
    }

    pub fn active_text(&self) -> &str {
        self.get_buffer(self.active)
    }

    pub fn markup(&self) -> &str {
        self.get_buffer(BufferId::Markup)
    }

    pub fn stylesheet(&self) -> &str {
        self.get_buffer(BufferId::Stylesheet)
    }

    pub fn framework_config(&self) -> &str {
        self.get_buffer(BufferId::FrameworkConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_with_seeds() {
        let store = BufferStore::new();
        assert_eq!(store.markup(), SEED_MARKUP);
        assert_eq!(store.stylesheet(), SEED_STYLESHEET);
        assert_eq!(store.framework_config(), SEED_FRAMEWORK_CONFIG);
        assert_eq!(store.active(), BufferId::Markup);
    }

    #[test]
    fn test_set_buffer_replaces_only_that_buffer() {
        let mut store = BufferStore::new();
        store.set_buffer(BufferId::Stylesheet, "p { color: red }");

        assert_eq!(store.stylesheet(), "p { color: red }");
        assert_eq!(store.markup(), SEED_MARKUP);
        assert_eq!(store.framework_config(), SEED_FRAMEWORK_CONFIG);
    }

    #[test]
    fn test_invalid_text_is_accepted() {
        let mut store = BufferStore::new();
        store.set_buffer(BufferId::Markup, "<div><span>");
        store.set_buffer(BufferId::FrameworkConfig, "}{ not javascript");
        assert_eq!(store.markup(), "<div><span>");
        assert_eq!(store.framework_config(), "}{ not javascript");
    }

    #[test]
    fn test_active_selection() {
        let mut store = BufferStore::new();
        store.set_active(BufferId::FrameworkConfig);
        assert_eq!(store.active(), BufferId::FrameworkConfig);
        assert_eq!(store.active_text(), SEED_FRAMEWORK_CONFIG);
    }

    #[test]
    fn test_buffer_id_from_str() {
        assert_eq!("HTML".parse::<BufferId>(), Ok(BufferId::Markup));
        assert_eq!("css".parse::<BufferId>(), Ok(BufferId::Stylesheet));
        assert_eq!("config".parse::<BufferId>(), Ok(BufferId::FrameworkConfig));
        assert!("js".parse::<BufferId>().is_err());
    }
}
