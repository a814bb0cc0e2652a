//! Fenced code-block extraction and HTML escaping for message content.

use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy so consecutive fences pair up left to right.
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence pattern is valid"));

/// Label on the copy control.
pub const COPY_LABEL: &str = "COPY";

/// Label shown for a moment after a successful copy.
pub const COPIED_LABEL: &str = "COPIED!";

/// A piece of message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Code(CodeBlock),
}

/// The body of one fenced block, already escaped for HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: Option<String>,
    escaped: String,
}

impl CodeBlock {
    /// Build from the raw text between two fences.
    pub fn from_fence(inner: &str) -> Self {
        let (language, body) = split_language(inner);
        Self {
            language,
            escaped: escape_html(body.trim()),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Escaped body as it sits inside the `<code>` element.
    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    /// Plain text for the clipboard: line breaks and entities restored.
    pub fn text(&self) -> String {
        unescape_html(&self.escaped)
    }

    /// The code container with its copy control.
    pub fn to_html(&self) -> String {
        format!(
            "<pre><code>{}</code><button class=\"copy-btn pixel-button\">{COPY_LABEL}</button></pre>",
            self.escaped
        )
    }
}

/// Drop the first line when it is a bare language tag (`js`, `rust`, or
/// nothing at all). A fence without a newline has no tag line.
fn split_language(inner: &str) -> (Option<String>, &str) {
    let Some((first, rest)) = inner.split_once('\n') else {
        return (None, inner);
    };
    let tag = first.trim();
    if tag.chars().all(|c| c.is_alphanumeric() || c == '_') {
        let language = (!tag.is_empty()).then(|| tag.to_string());
        (language, rest)
    } else {
        (None, inner)
    }
}

/// Split content into plain text and code segments, in order.
pub fn parse(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCE.captures_iter(content) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(content[last..whole.start()].to_string()));
        }
        segments.push(Segment::Code(CodeBlock::from_fence(inner.as_str())));
        last = whole.end();
    }

    if last < content.len() {
        segments.push(Segment::Text(content[last..].to_string()));
    }
    segments
}

/// Code blocks in `content`, in order.
pub fn code_blocks(content: &str) -> Vec<CodeBlock> {
    parse(content)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Code(block) => Some(block),
            Segment::Text(_) => None,
        })
        .collect()
}

/// Replace every fenced block with its HTML code container. Text outside
/// fences passes through untouched.
pub fn render_html(content: &str) -> String {
    parse(content)
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone(),
            Segment::Code(block) => block.to_html(),
        })
        .collect()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '\n' => out.push_str("<br>"),
            other => out.push(other),
        }
    }
    out
}

/// Inverse of [`escape_html`]. `&amp;` goes last so `&amp;lt;` stays `&lt;`.
pub fn unescape_html(escaped: &str) -> String {
    escaped
        .replace("<br>", "\n")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
