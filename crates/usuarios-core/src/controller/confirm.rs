//! Delete confirmation protocol.

use async_trait::async_trait;

use crate::types::UserId;

/// Where the delete confirmation currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    /// No deletion is waiting for an answer.
    #[default]
    Idle,
    /// A prompt has been shown for `id` and the user has not answered yet.
    AwaitingConfirmation { id: UserId },
}

/// What to show the user before deleting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub id: UserId,
    pub header: String,
    pub message: String,
    pub accept_label: String,
    pub reject_label: String,
}

impl ConfirmationPrompt {
    pub(crate) fn for_delete(id: UserId) -> Self {
        Self {
            id,
            header: "Danger zone".to_string(),
            message: "Do you want to delete this user?".to_string(),
            accept_label: "Delete".to_string(),
            reject_label: "Cancel".to_string(),
        }
    }
}

/// Answers a confirmation prompt.
///
/// There is no timeout: the controller waits for as long as the
/// implementation takes to answer.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Returns `true` to accept, `false` to reject.
    async fn confirm(&self, prompt: &ConfirmationPrompt) -> bool;
}

/// A fixed answer, for non-interactive callers.
#[async_trait]
impl Confirm for bool {
    async fn confirm(&self, _prompt: &ConfirmationPrompt) -> bool {
        *self
    }
}
