//! Create-dialog form values and their validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::NewUser;
use crate::error::{Error, InvalidInputError};

/// Maximum length of a user name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a user description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 400;

/// Raw values typed into the create dialog.
///
/// Nothing is checked until [`validate`](Self::validate) is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub description: String,
}

impl UserForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check both fields and produce a creation payload.
    ///
    /// Both fields are required and limited to [`NAME_MAX_LEN`] and
    /// [`DESCRIPTION_MAX_LEN`] characters respectively. All failing fields are
    /// reported, not just the first.
    ///
    /// # Example
    ///
    /// ```
    /// use usuarios_core::{Field, UserForm};
    ///
    /// let errors = UserForm::new("", "x").validate().unwrap_err();
    /// assert!(errors.has(Field::Name));
    /// assert!(!errors.has(Field::Description));
    /// ```
    pub fn validate(&self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::default();
        check(Field::Name, &self.name, NAME_MAX_LEN, &mut errors);
        check(
            Field::Description,
            &self.description,
            DESCRIPTION_MAX_LEN,
            &mut errors,
        );

        if errors.is_empty() {
            Ok(NewUser::new_unchecked(
                self.name.clone(),
                self.description.clone(),
            ))
        } else {
            Err(errors)
        }
    }
}

impl TryFrom<UserForm> for NewUser {
    type Error = Error;

    fn try_from(form: UserForm) -> Result<Self, Self::Error> {
        form.validate()
            .map_err(|errors| InvalidInputError::Form(errors).into())
    }
}

fn check(field: Field, value: &str, max: usize, errors: &mut FieldErrors) {
    if value.is_empty() {
        errors.push(field, FieldErrorKind::Required);
    } else if value.chars().count() > max {
        errors.push(field, FieldErrorKind::TooLong { max });
    }
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field was left empty.
    Required,
    /// The field exceeds its maximum length.
    TooLong { max: usize },
}

/// A single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::TooLong { max } => {
                write!(f, "{} must be at most {} characters", self.field, max)
            }
        }
    }
}

/// Every field error found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: Field, kind: FieldErrorKind) {
        self.0.push(FieldError { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `field` has at least one error.
    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
