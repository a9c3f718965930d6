//! Fixed document layout the composer fills in.

/// Framework runtime loaded by the preview when no other URL is configured
pub const DEFAULT_RUNTIME_URL: &str = "https://cdn.tailwindcss.com";

const PREAMBLE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
";

/// Document skeleton parameterised by the framework runtime location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    runtime_url: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_URL)
    }
}

impl DocumentTemplate {
    pub fn new(runtime_url: impl Into<String>) -> Self {
        Self {
            runtime_url: runtime_url.into(),
        }
    }

    pub fn runtime_url(&self) -> &str {
        &self.runtime_url
    }

    /// Build the full document. The whole string is rebuilt on every call.
    pub fn compose(&self, markup: &str, stylesheet: &str, framework_config: &str) -> String {
        let mut doc = String::with_capacity(
            PREAMBLE.len()
                + self.runtime_url.len()
                + markup.len()
                + stylesheet.len()
                + framework_config.len()
                + 128,
        );

        doc.push_str(PREAMBLE);

        doc.push_str("  <script src=\"");
        doc.push_str(&self.runtime_url);
        doc.push_str("\"></script>\n");

        doc.push_str("  <script>\n    tailwind.config = ");
        doc.push_str(framework_config);
        doc.push_str("\n  </script>\n");

        doc.push_str("  <style>");
        doc.push_str(stylesheet);
        doc.push_str("</style>\n</head>\n");

        doc.push_str("<body>\n  ");
        doc.push_str(markup);
        doc.push_str("\n</body>\n</html>\n");

        doc
    }
}
