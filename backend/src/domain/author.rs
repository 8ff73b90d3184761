//! Author entity and its validated write payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned author identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(i32);

impl AuthorId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation failures for author payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorValidationError {
    /// `nome` was empty or only whitespace.
    #[error("nome must not be empty")]
    BlankName,
}

/// Complete, validated state of an author as written by create and update.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `birth_date` is free-form text; its format is not checked.
///
/// # Examples
/// ```
/// use biblioteca::domain::AuthorDraft;
///
/// let draft = AuthorDraft::new("Machado de Assis", None, Some("brasileira".into()))
///     .expect("valid author");
/// assert_eq!(draft.name(), "Machado de Assis");
/// assert!(AuthorDraft::new("  ", None, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDraft {
    name: String,
    birth_date: Option<String>,
    nationality: Option<String>,
}

impl AuthorDraft {
    /// Validate and build a draft.
    pub fn new(
        name: impl Into<String>,
        birth_date: Option<String>,
        nationality: Option<String>,
    ) -> Result<Self, AuthorValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AuthorValidationError::BlankName);
        }
        Ok(Self {
            name,
            birth_date,
            nationality,
        })
    }

    /// Author name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form birth date.
    #[must_use]
    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    /// Nationality.
    #[must_use]
    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    /// Attach an identifier, producing the persisted shape.
    #[must_use]
    pub fn into_author(self, id: AuthorId) -> Author {
        Author {
            id,
            name: self.name,
            birth_date: self.birth_date,
            nationality: self.nationality,
        }
    }
}

/// A persisted author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Storage-assigned identifier.
    pub id: AuthorId,
    /// Author name; never blank.
    pub name: String,
    /// Free-form birth date.
    pub birth_date: Option<String>,
    /// Nationality.
    pub nationality: Option<String>,
}
