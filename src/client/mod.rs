//! The remote text generator behind the chat.

pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

/// What came back from a request that reached the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Usable reply text.
    Text(String),
    /// The API answered, but not with a usable result.
    Unprocessable,
}

/// Turns a user query into an answer. Could be the HTTP API or a test script.
///
/// `Err` means the request never produced an answer (transport failure);
/// anything the API said, however malformed, is an `Ok`.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn ask(&self, query: &str) -> Result<Answer>;
}
