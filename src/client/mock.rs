use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Answer, Responder};

/// A scripted reply for [`MockResponder`].
#[derive(Debug, Clone)]
pub enum Scripted {
    Answer(Answer),
    /// Fail as if the network were down.
    Fail(String),
}

/// A scripted responder for tests. Returns pre-defined replies in order and
/// records every query it was asked.
pub struct MockResponder {
    replies: Vec<Scripted>,
    index: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockResponder {
    pub fn new(replies: Vec<Scripted>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Shorthand for a responder that always has one text reply ready.
    pub fn text(reply: &str) -> Self {
        Self::new(vec![Scripted::Answer(Answer::Text(reply.to_string()))])
    }

    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn ask(&self, query: &str) -> Result<Answer> {
        self.queries.lock().unwrap().push(query.to_string());
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Scripted::Answer(answer)) => Ok(answer.clone()),
            Some(Scripted::Fail(reason)) => bail!("{reason}"),
            None => bail!("MockResponder: no more replies (called {} times)", i + 1),
        }
    }
}
