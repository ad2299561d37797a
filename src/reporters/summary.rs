//! Step summary document builder.
//!
//! Mirrors the block layout of the GitHub Actions toolkit summary: every block
//! helper emits one HTML element followed by a newline, and raw text is
//! appended as-is. Callers escape untrusted text with [`escape_html`].

const EOL: &str = "\n";

/// Heading level used for the failure report.
pub const HEADING_LEVEL_2: u8 = 2;

/// Buffered summary document, drained by [`Summary::take`] on every write.
#[derive(Debug, Default)]
pub struct Summary {
    buffer: String,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text without any wrapping.
    pub fn add_raw(&mut self, text: &str, add_eol: bool) -> &mut Self {
        self.buffer.push_str(text);
        if add_eol {
            self.add_eol();
        }
        self
    }

    fn add_eol(&mut self) -> &mut Self {
        self.buffer.push_str(EOL);
        self
    }

    /// Append an `<hN>` heading. `level` is clamped to 1..=6.
    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Self {
        let tag = format!("h{}", level.clamp(1, 6));
        let element = wrap(&tag, Some(text), &[]);
        self.add_raw(&element, true)
    }

    pub fn add_separator(&mut self) -> &mut Self {
        let element = wrap("hr", None, &[]);
        self.add_raw(&element, true)
    }

    /// Append a collapsible section. `content` is inserted verbatim.
    pub fn add_details(&mut self, label: &str, content: &str) -> &mut Self {
        let summary = wrap("summary", Some(label), &[]);
        let element = wrap("details", Some(&format!("{}{}", summary, content)), &[]);
        self.add_raw(&element, true)
    }

    /// Append a preformatted code block. `code` is inserted verbatim.
    pub fn add_code_block(&mut self, code: &str, lang: &str) -> &mut Self {
        let code = wrap("code", Some(code), &[]);
        let element = wrap("pre", Some(&code), &[("lang", lang)]);
        self.add_raw(&element, true)
    }

    /// Drain the buffered document.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

fn wrap(tag: &str, content: Option<&str>, attrs: &[(&str, &str)]) -> String {
    let attrs: String = attrs
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, value))
        .collect();

    match content {
        Some(content) => format!("<{tag}{attrs}>{content}</{tag}>"),
        None => format!("<{tag}{attrs}>"),
    }
}

/// Escape the five HTML special characters.
///
/// ```
/// use po_lint::reporters::summary::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
