//! usuarios-core - User types, store trait and list-and-edit controller.
//!
//! The [`Controller`] keeps an in-memory list of users in step with a remote
//! [`UserStore`], manages inline edits and the delete confirmation, and
//! reports every outcome through a [`Notifier`].
//!
//! # Example
//!
//! ```no_run
//! use usuarios_core::{Controller, UserForm, UserStore};
//!
//! # async fn example(store: impl UserStore) {
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut controller = Controller::new(store, tx);
//! let _ = controller.init().await;
//!
//! controller.open_create_dialog();
//! let _ = controller.create(UserForm::new("Ana", "Operations")).await;
//!
//! while let Ok(notification) = rx.try_recv() {
//!     println!("{}: {}", notification.summary, notification.detail);
//! }
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod notify;
pub mod store;
pub mod types;

pub use controller::{
    Confirm, ConfirmationPrompt, Controller, DeleteState, DialogState, LoadTrigger, Outcome,
};
pub use error::{Error, InvalidInputError, RequestFailed};
pub use notify::{Notification, NotificationKind, Notifier, Severity};
pub use store::UserStore;
pub use types::{Field, FieldError, FieldErrorKind, FieldErrors, NewUser, User, UserForm, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
