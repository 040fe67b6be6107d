use thiserror::Error;

use super::record::{UserField, ValueKind};

/// Reasons a candidate user is rejected by `UserStore::add`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be greater than 0, got {0}")]
    NonPositiveAge(i64),

    #[error("age must be a whole number, got '{0}'")]
    AgeNotANumber(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("Wrong data! {0}")]
    Validation(#[from] ValidationError),

    #[error("User id is wrong! No user with id '{0}'")]
    IdNotFound(String),

    #[error("User not found! No user named '{0}'")]
    NameNotFound(String),

    #[error("Wrong data type! Field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        field: UserField,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Could not generate a unique user id after {0} attempts")]
    IdGeneration(usize),
}

impl UserStoreError {
    /// Stable event code used when the error is reported.
    pub fn code(&self) -> &'static str {
        match self {
            UserStoreError::Validation(_) => "users.add.invalid",
            UserStoreError::IdNotFound(_) => "users.update.not_found",
            UserStoreError::NameNotFound(_) => "users.remove.not_found",
            UserStoreError::TypeMismatch { .. } => "users.update.type_mismatch",
            UserStoreError::IdGeneration(_) => "users.add.id_generation",
        }
    }
}
