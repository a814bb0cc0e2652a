//! Chat transcript: messages, the typing placeholder, and code-block lookup.

pub mod markup;

use std::fmt;

use markup::CodeBlock;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            content: content.into(),
        }
    }

    /// Content with fenced blocks rendered as code containers.
    pub fn content_html(&self) -> String {
        markup::render_html(&self.content)
    }

    /// The whole message as an HTML fragment.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"message {}-message\"><div class=\"message-content\">{}</div></div>",
            self.sender,
            self.content_html()
        )
    }
}

/// Everything shown in the chat pane. Lives only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    typing: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Whether the typing placeholder is showing.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Show the placeholder. An existing one is replaced, never duplicated.
    pub fn show_typing(&mut self) {
        self.typing = true;
    }

    pub fn hide_typing(&mut self) {
        self.typing = false;
    }

    /// Drop all messages and leave a single bot greeting.
    pub fn reset(&mut self, greeting: &str) {
        self.messages.clear();
        self.typing = false;
        self.messages.push(Message::bot(greeting));
    }

    /// Code blocks across all messages, oldest first. `/copy N` counts from 1
    /// in this order.
    pub fn code_blocks(&self) -> Vec<CodeBlock> {
        self.messages
            .iter()
            .flat_map(|m| markup::code_blocks(&m.content))
            .collect()
    }

    /// Number of code blocks that precede message `index`.
    pub fn code_blocks_before(&self, index: usize) -> usize {
        self.messages
            .iter()
            .take(index)
            .map(|m| markup::code_blocks(&m.content).len())
            .sum()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<div id=\"chat-messages\">\n");
        for message in &self.messages {
            out.push_str(&message.to_html());
            out.push('\n');
        }
        if self.typing {
            out.push_str(
                "<div class=\"message bot-message typing-indicator\"><span></span><span></span><span></span></div>\n",
            );
        }
        out.push_str("</div>\n");
        out
    }

    /// Plain-text dump, one `sender: content` line per message.
    pub fn to_plain(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.sender, m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
