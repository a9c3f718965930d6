//! Playground
//!
//! Wires the buffer store to the composer and a preview sink. Every mutator
//! recomposes synchronously, so the sink always sees the latest three buffers.

use crate::compose::DocumentTemplate;
use crate::core::buffers::{BufferId, BufferStore};
use crate::preview::PreviewSink;

/// The live playground: buffers in, rendered preview out
pub struct Playground<S: PreviewSink> {
    store: BufferStore,
    template: DocumentTemplate,
    sink: S,
}

impl<S: PreviewSink> Playground<S> {
    /// Create a playground with seeded buffers. Nothing is rendered until the
    /// first edit or an explicit `refresh`.
    pub fn new(template: DocumentTemplate, sink: S) -> Self {
        Self::with_store(BufferStore::new(), template, sink)
    }

    pub fn with_store(store: BufferStore, template: DocumentTemplate, sink: S) -> Self {
        Self {
            store,
            template,
            sink,
        }
    }

    pub fn store(&self) -> &BufferStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn get_buffer(&self, id: BufferId) -> &str {
        self.store.get_buffer(id)
    }

    /// Replace one buffer and re-render the preview
    pub fn set_buffer(&mut self, id: BufferId, text: impl Into<String>) {
        self.store.set_buffer(id, text);
        log::debug!("Buffer '{}' updated", id);
        self.refresh();
    }

    /// Replace all three buffers, then re-render once
    pub fn replace_all(
        &mut self,
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
        framework_config: impl Into<String>,
    ) {
        self.store.replace_all(markup, stylesheet, framework_config);
        self.refresh();
    }

    /// Change the buffer presented for editing. Composition is unaffected.
    pub fn set_active(&mut self, id: BufferId) {
        self.store.set_active(id);
    }

    pub fn active(&self) -> BufferId {
        self.store.active()
    }

    pub fn active_text(&self) -> &str {
        self.store.active_text()
    }

    /// Current composite document
    pub fn compose(&self) -> String {
        self.template.compose(
            self.store.markup(),
            self.store.stylesheet(),
            self.store.framework_config(),
        )
    }

    /// Recompose and hand the document to the sink
    pub fn refresh(&mut self) {
        let document = self.compose();
        self.sink.render(&document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffers::{SEED_FRAMEWORK_CONFIG, SEED_STYLESHEET};

    #[derive(Default)]
    struct Recorder {
        documents: Vec<String>,
    }

    impl PreviewSink for Recorder {
        fn render(&mut self, document: &str) {
            self.documents.push(document.to_string());
        }
    }

    fn playground() -> Playground<Recorder> {
        Playground::new(DocumentTemplate::default(), Recorder::default())
    }

    #[test]
    fn test_edit_renders_immediately() {
        let mut pg = playground();
        pg.set_buffer(BufferId::Markup, "<p>hi</p>");

        let docs = &pg.sink().documents;
        assert_eq!(docs.len(), 1);
        assert!(docs[0].contains("<p>hi</p>"));
        assert!(docs[0].contains(SEED_STYLESHEET));
        assert!(docs[0].contains(&format!("tailwind.config = {}", SEED_FRAMEWORK_CONFIG)));
    }

    #[test]
    fn test_every_edit_sees_latest_buffers() {
        let mut pg = playground();
        pg.set_buffer(BufferId::Stylesheet, "a {}");
        pg.set_buffer(BufferId::FrameworkConfig, "{ plugins: [] }");

        let last = pg.sink().documents.last().unwrap();
        assert!(last.contains("<style>a {}</style>"));
        assert!(last.contains("tailwind.config = { plugins: [] }"));
        assert_eq!(*last, pg.compose());
    }

    #[test]
    fn test_active_selection_does_not_render_or_change_document() {
        let mut pg = playground();
        let before = pg.compose();
        pg.set_active(BufferId::Stylesheet);

        assert_eq!(pg.active(), BufferId::Stylesheet);
        assert_eq!(pg.active_text(), SEED_STYLESHEET);
        assert!(pg.sink().documents.is_empty());
        assert_eq!(pg.compose(), before);
    }

    #[test]
    fn test_replace_all_renders_once() {
        let mut pg = playground();
        pg.replace_all("m", "s", "c");

        assert_eq!(pg.sink().documents.len(), 1);
        assert_eq!(pg.get_buffer(BufferId::Markup), "m");
        assert_eq!(pg.get_buffer(BufferId::Stylesheet), "s");
        assert_eq!(pg.get_buffer(BufferId::FrameworkConfig), "c");
    }
}
