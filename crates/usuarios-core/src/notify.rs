//! User-visible notifications.
//!
//! The controller reports every terminal outcome of a user action through a
//! [`Notifier`]. What happens to a notification (toast, terminal line, log)
//! is up to the front end.

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Which outcome a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Created,
    Updated,
    Deleted,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    LoadFailed,
    DeleteCancelled,
}

impl NotificationKind {
    pub fn severity(self) -> Severity {
        match self {
            NotificationKind::Created | NotificationKind::Updated | NotificationKind::Deleted => {
                Severity::Success
            }
            // Cancellation is styled as an error, like the other non-success paths.
            _ => Severity::Error,
        }
    }

    fn summary(self) -> &'static str {
        match self {
            NotificationKind::Created => "User created",
            NotificationKind::Updated => "User updated",
            NotificationKind::Deleted => "User deleted",
            NotificationKind::CreateFailed => "Could not create user",
            NotificationKind::UpdateFailed => "Could not update user",
            NotificationKind::DeleteFailed => "Could not delete user",
            NotificationKind::LoadFailed => "Could not load users",
            NotificationKind::DeleteCancelled => "Action cancelled",
        }
    }

    fn detail(self) -> &'static str {
        match self {
            NotificationKind::Created => "The user has been registered.",
            NotificationKind::Updated => "The user has been updated.",
            NotificationKind::Deleted => "The user has been deleted.",
            NotificationKind::CreateFailed => {
                "The user could not be registered. Check the connection to the server."
            }
            NotificationKind::UpdateFailed => {
                "The user could not be updated. Check the connection to the server."
            }
            NotificationKind::DeleteFailed => {
                "The user could not be deleted. Check the connection to the server."
            }
            NotificationKind::LoadFailed => {
                "The data could not be fetched. Check the connection to the server."
            }
            NotificationKind::DeleteCancelled => "The deletion has been cancelled.",
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            summary: kind.summary().to_string(),
            detail: kind.detail().to_string(),
        }
    }
}

/// Receiver of user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl Notifier for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        // A closed channel means nobody is displaying notifications anymore.
        let _ = self.send(notification);
    }
}

impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
