//! Confirm dialogs with a typed follow-up action.

/// What happens when the user confirms an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Wipe the transcript down to a greeting.
    ClearChat,
    /// Leave the puzzle after solving it.
    ClosePuzzle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub action: Option<PendingAction>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: PendingAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn clear_chat() -> Self {
        Self::new(
            "CLEAR CHAT",
            "Are you sure you want to clear the chat history?",
        )
        .with_action(PendingAction::ClearChat)
    }

    pub fn puzzle_solved(moves: u32) -> Self {
        Self::new(
            "PUZZLE SOLVED!",
            format!("Congratulations! You solved it in {moves} moves!"),
        )
        .with_action(PendingAction::ClosePuzzle)
    }
}
