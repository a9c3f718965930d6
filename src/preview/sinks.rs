//! Concrete preview sinks.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::PreviewSink;

/// Writes a host page that embeds the document in a sandboxed iframe.
///
/// The iframe only gets `allow-scripts`, so the document can execute the
/// framework runtime but cannot navigate or script the host page.
#[derive(Debug, Clone)]
pub struct HostPageSink {
    path: PathBuf,
}

impl HostPageSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the host page around a document
    pub fn host_page(document: &str) -> String {
        let mut page = String::with_capacity(document.len() + 512);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("  <meta charset=\"UTF-8\">\n  <title>Preview</title>\n");
        page.push_str(
            "  <style>html, body { margin: 0; height: 100%; } \
             iframe { border: none; width: 100%; height: 100%; background: white; }</style>\n",
        );
        page.push_str("</head>\n<body>\n");
        page.push_str("  <iframe title=\"preview\" sandbox=\"allow-scripts\" srcdoc=\"");
        page.push_str(&escape_attribute(document));
        page.push_str("\"></iframe>\n</body>\n</html>\n");
        page
    }
}

impl PreviewSink for HostPageSink {
    fn render(&mut self, document: &str) {
        write_preview(&self.path, &Self::host_page(document));
    }
}

/// Writes the bare document to a file, with no isolation wrapper.
#[derive(Debug, Clone)]
pub struct RawFileSink {
    path: PathBuf,
}

impl RawFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewSink for RawFileSink {
    fn render(&mut self, document: &str) {
        write_preview(&self.path, document);
    }
}

/// Streams each rendered document to a writer (stdout in the CLI)
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PreviewSink for WriterSink<W> {
    fn render(&mut self, document: &str) {
        let result = self
            .writer
            .write_all(document.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            log::warn!("Failed to write preview: {}", e);
        }
    }
}

fn write_preview(path: &Path, contents: &str) {
    match fs::write(path, contents) {
        Ok(()) => log::debug!("Preview written to {}", path.display()),
        Err(e) => log::warn!("Failed to write preview {}: {}", path.display(), e),
    }
}

/// Escape text for use inside a double-quoted HTML attribute
pub fn escape_attribute(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(escape_attribute("plain"), "plain");
    }

    #[test]
    fn test_host_page_sandboxes_document() {
        let page = HostPageSink::host_page("<p class=\"x\">hi</p>");
        assert!(page.contains("sandbox=\"allow-scripts\""));
        assert!(!page.contains("allow-same-origin"));
        assert!(page.contains("srcdoc=\"&lt;p class=&quot;x&quot;&gt;hi&lt;/p&gt;\""));
    }

    #[test]
    fn test_writer_sink_receives_document() {
        let mut sink = WriterSink::new(Vec::new());
        sink.render("<html></html>");
        assert_eq!(sink.into_inner(), b"<html></html>");
    }

    #[test]
    fn test_file_sinks_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();

        let mut raw = RawFileSink::new(dir.path().join("raw.html"));
        raw.render("<p>raw</p>");
        assert_eq!(fs::read_to_string(raw.path()).unwrap(), "<p>raw</p>");

        let mut host = HostPageSink::new(dir.path().join("host.html"));
        host.render("<p>host</p>");
        let page = fs::read_to_string(host.path()).unwrap();
        assert!(page.contains("&lt;p&gt;host&lt;/p&gt;"));
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RawFileSink::new(dir.path().join("missing").join("out.html"));
        sink.render("<p>lost</p>");
        assert!(!sink.path().exists());
    }
}
