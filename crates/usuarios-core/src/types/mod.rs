//! User types.
//!
//! Ids and creation payloads are validated at construction time, so a
//! [`NewUser`] can always be sent to the store as-is.

mod form;
mod user;
mod user_id;

pub use form::{
    DESCRIPTION_MAX_LEN, Field, FieldError, FieldErrorKind, FieldErrors, NAME_MAX_LEN, UserForm,
};
pub use user::{NewUser, User};
pub use user_id::UserId;
