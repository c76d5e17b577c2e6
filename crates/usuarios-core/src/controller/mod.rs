//! List-and-edit controller.
//!
//! The [`Controller`] owns the list of users shown to the operator, the
//! per-row edit buffer, the create dialog and the delete confirmation. It
//! talks to a [`UserStore`] and reports the outcome of every user action
//! through a [`Notifier`].
//!
//! Server state is the source of truth: after every successful write the
//! whole list is reloaded instead of being patched locally.
//!
//! All operations take `&mut self`, so a single owner drives the controller
//! and in-flight requests cannot interleave. Embedders that share it between
//! tasks wrap it in a `tokio::sync::Mutex`; whichever reload finishes last
//! wins.

mod confirm;

use std::collections::HashMap;

use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::notify::{Notification, NotificationKind, Notifier};
use crate::store::UserStore;
use crate::types::{FieldErrors, User, UserForm, UserId};

pub use confirm::{Confirm, ConfirmationPrompt, DeleteState};

/// Why a load was started.
///
/// Only a reload the operator asked for reports failure to them. The initial
/// load and the refresh after a write only log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// First load when the screen opens.
    Init,
    /// Explicit reload requested by the operator.
    User,
    /// Refresh after a successful create, update or delete.
    AfterMutation,
}

/// Whether the create dialog is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Result of a controller operation.
///
/// The operator already learned about it through the notifier; this is for
/// front ends that need to act on it too (exit codes, focus, ...).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded.
    Completed,
    /// The request was sent and failed.
    Failed,
    /// The operator backed out; nothing was sent.
    Cancelled,
    /// The form did not validate; nothing was sent.
    Invalid(FieldErrors),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Keeps a local list of users in step with a [`UserStore`].
pub struct Controller<S, N> {
    store: S,
    notifier: N,
    users: watch::Sender<Vec<User>>,
    edit_buffer: HashMap<UserId, User>,
    dialog: DialogState,
    form: UserForm,
    last_created: Option<User>,
    delete_state: DeleteState,
}

impl<S, N> Controller<S, N>
where
    S: UserStore,
    N: Notifier,
{
    /// Create a controller with an empty list.
    ///
    /// Nothing is fetched until [`init`](Self::init) or a load is called.
    pub fn new(store: S, notifier: N) -> Self {
        let (users, _) = watch::channel(Vec::new());
        Self {
            store,
            notifier,
            users,
            edit_buffer: HashMap::new(),
            dialog: DialogState::Closed,
            form: UserForm::default(),
            last_created: None,
            delete_state: DeleteState::Idle,
        }
    }

    /// Observe the list. The receiver sees a new value after every change.
    pub fn subscribe(&self) -> watch::Receiver<Vec<User>> {
        self.users.subscribe()
    }

    /// A copy of the current list.
    pub fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    /// The row at `index`, if any.
    pub fn user(&self, index: usize) -> Option<User> {
        self.users.borrow().get(index).cloned()
    }

    /// Position of the user with `id` in the current list.
    pub fn position(&self, id: UserId) -> Option<usize> {
        self.users.borrow().iter().position(|u| u.id == id)
    }

    /// The saved pre-edit copy for `id`, if that row is being edited.
    pub fn buffered(&self, id: UserId) -> Option<&User> {
        self.edit_buffer.get(&id)
    }

    pub fn is_editing(&self, id: UserId) -> bool {
        self.edit_buffer.contains_key(&id)
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    /// The values last submitted to [`create`](Self::create).
    pub fn form(&self) -> &UserForm {
        &self.form
    }

    /// The record the backend returned for the last successful
    /// [`create`](Self::create).
    ///
    /// `None` if the last create failed or was rejected, or if the backend
    /// answered without a body.
    pub fn last_created(&self) -> Option<&User> {
        self.last_created.as_ref()
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Replace the list with the store's collection.
    ///
    /// On failure the list is left as it was.
    #[instrument(skip(self))]
    pub async fn load(&mut self, trigger: LoadTrigger) -> Outcome {
        match self.store.list().await {
            Ok(users) => {
                debug!(count = users.len(), "Loaded users");
                self.users.send_replace(users);
                Outcome::Completed
            }
            Err(err) => {
                match trigger {
                    LoadTrigger::Init => warn!(error = %err, "Initial load failed"),
                    LoadTrigger::User => {
                        warn!(error = %err, "Reload failed");
                        self.notify(NotificationKind::LoadFailed);
                    }
                    LoadTrigger::AfterMutation => {
                        warn!(error = %err, "Refresh after write failed")
                    }
                }
                Outcome::Failed
            }
        }
    }

    /// Initial load. Failure is logged, not shown.
    pub async fn init(&mut self) -> Outcome {
        self.load(LoadTrigger::Init).await
    }

    /// Reload requested by the operator. Failure is shown.
    pub async fn reload(&mut self) -> Outcome {
        self.load(LoadTrigger::User).await
    }

    // ------------------------------------------------------------------
    // Inline editing
    // ------------------------------------------------------------------

    /// Put a row into edit mode, keeping a copy of its current values.
    ///
    /// Calling this again for the same id replaces the saved copy.
    pub fn begin_edit(&mut self, user: &User) {
        debug!(id = %user.id, "Begin edit");
        self.edit_buffer.insert(user.id, user.clone());
    }

    /// Change the row at `index` in place, as an inline editor would.
    ///
    /// The id cannot be changed. Returns `false` if there is no such row.
    pub fn edit_row(&mut self, index: usize, f: impl FnOnce(&mut User)) -> bool {
        self.users.send_if_modified(|users| match users.get_mut(index) {
            Some(row) => {
                let id = row.id;
                f(row);
                row.id = id;
                true
            }
            None => false,
        })
    }

    /// Send the edited row to the store, replacing every field.
    ///
    /// The edit buffer is left alone either way: on success the reload
    /// overwrites the row, on failure the row keeps its unsaved values until
    /// the edit is cancelled.
    #[instrument(skip(self, user), fields(id = %user.id))]
    pub async fn save_edit(&mut self, user: User) -> Outcome {
        match self.store.update(&user).await {
            Ok(_) => {
                self.notify(NotificationKind::Updated);
                let _ = self.load(LoadTrigger::AfterMutation).await;
                Outcome::Completed
            }
            Err(err) => {
                warn!(error = %err, "Update failed");
                self.notify(NotificationKind::UpdateFailed);
                Outcome::Failed
            }
        }
    }

    /// Leave edit mode, restoring the row at `index` to its saved copy.
    ///
    /// Without a saved copy the row is overwritten with empty values.
    pub fn cancel_edit(&mut self, user: &User, index: usize) {
        let restored = match self.edit_buffer.remove(&user.id) {
            Some(saved) => saved,
            None => {
                warn!(id = %user.id, index, "Cancelled edit with no saved copy; row cleared");
                User::blank(user.id)
            }
        };

        let written = self.users.send_if_modified(|users| match users.get_mut(index) {
            Some(row) => {
                *row = restored;
                true
            }
            None => false,
        });

        if !written {
            warn!(id = %user.id, index, "Cancelled edit for a row that is no longer listed");
        }
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    pub fn open_create_dialog(&mut self) {
        self.dialog = DialogState::Open;
    }

    pub fn close_create_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Validate `form` and create a user from it.
    ///
    /// Invalid values are rejected without a request. On failure the dialog
    /// stays open and the values are kept for correction.
    #[instrument(skip(self, form))]
    pub async fn create(&mut self, form: UserForm) -> Outcome {
        self.form = form;
        self.last_created = None;

        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                debug!(%errors, "Create form rejected");
                return Outcome::Invalid(errors);
            }
        };

        match self.store.create(&payload).await {
            Ok(created) => {
                if let Some(user) = &created {
                    debug!(id = %user.id, "Created user");
                }
                self.last_created = created;
                self.dialog = DialogState::Closed;
                self.notify(NotificationKind::Created);
                let _ = self.load(LoadTrigger::AfterMutation).await;
                Outcome::Completed
            }
            Err(err) => {
                warn!(error = %err, "Create failed");
                self.notify(NotificationKind::CreateFailed);
                Outcome::Failed
            }
        }
    }

    // ------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------

    /// Ask `confirmer` and delete `id` if it accepts.
    pub async fn delete<C>(&mut self, id: UserId, confirmer: &C) -> Outcome
    where
        C: Confirm + ?Sized,
    {
        let prompt = self.request_delete(id);
        if confirmer.confirm(&prompt).await {
            self.accept_delete().await
        } else {
            self.reject_delete()
        }
    }

    /// Start a deletion and return the prompt to show.
    ///
    /// A request made while another is pending replaces it.
    pub fn request_delete(&mut self, id: UserId) -> ConfirmationPrompt {
        if let DeleteState::AwaitingConfirmation { id: pending } = self.delete_state {
            debug!(%pending, %id, "Replacing pending delete confirmation");
        }
        self.delete_state = DeleteState::AwaitingConfirmation { id };
        ConfirmationPrompt::for_delete(id)
    }

    /// The operator accepted: send the deletion.
    ///
    /// Does nothing if no deletion is pending.
    #[instrument(skip(self))]
    pub async fn accept_delete(&mut self) -> Outcome {
        let DeleteState::AwaitingConfirmation { id } = std::mem::take(&mut self.delete_state)
        else {
            debug!("No pending deletion to accept");
            return Outcome::Cancelled;
        };

        match self.store.delete(id).await {
            Ok(()) => {
                self.notify(NotificationKind::Deleted);
                let _ = self.load(LoadTrigger::AfterMutation).await;
                Outcome::Completed
            }
            Err(err) => {
                warn!(%id, error = %err, "Delete failed");
                self.notify(NotificationKind::DeleteFailed);
                Outcome::Failed
            }
        }
    }

    /// The operator rejected: nothing is sent.
    ///
    /// Does nothing if no deletion is pending.
    pub fn reject_delete(&mut self) -> Outcome {
        match std::mem::take(&mut self.delete_state) {
            DeleteState::AwaitingConfirmation { id } => {
                debug!(%id, "Deletion cancelled");
                self.notify(NotificationKind::DeleteCancelled);
            }
            DeleteState::Idle => debug!("No pending deletion to reject"),
        }
        Outcome::Cancelled
    }

    fn notify(&self, kind: NotificationKind) {
        self.notifier.notify(Notification::from(kind));
    }
}

impl<S, N> std::fmt::Debug for Controller<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("users", &self.users.borrow().len())
            .field("editing", &self.edit_buffer.len())
            .field("dialog", &self.dialog)
            .field("delete_state", &self.delete_state)
            .finish()
    }
}
