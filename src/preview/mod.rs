//! Preview Sinks
//!
//! Rendering surfaces that receive the composite document.

pub mod sinks;

pub use sinks::{HostPageSink, RawFileSink, WriterSink, escape_attribute};

/// A rendering surface for composite documents.
///
/// Implementations must keep the document isolated from whatever hosts it:
/// scripts inside the document may run but must not reach the host.
///
/// `render` is synchronous and may block on file I/O. The file sinks write
/// the whole preview with `std::fs` before returning, and the watch loop
/// calls it from async context after every buffer change. Sinks should stay
/// small and local; anything slow belongs behind `tokio::task::spawn_blocking`.
pub trait PreviewSink {
    fn render(&mut self, document: &str);
}

impl<S: PreviewSink + ?Sized> PreviewSink for &mut S {
    fn render(&mut self, document: &str) {
        (**self).render(document);
    }
}

impl<S: PreviewSink + ?Sized> PreviewSink for Box<S> {
    fn render(&mut self, document: &str) {
        (**self).render(document);
    }
}
