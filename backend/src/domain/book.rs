//! Book entity and its validated write payload.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AuthorId;

/// Storage-assigned book identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i32);

impl BookId {
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

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation failures for book payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    /// `titulo` was empty or only whitespace.
    #[error("titulo must not be empty")]
    BlankTitle,
}

/// Complete, validated state of a book as written by create and update.
///
/// Shape checks happen here. Whether `author_id` resolves is a storage
/// question answered inside the write transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    title: String,
    author_id: AuthorId,
    publication_year: i32,
    genre: Option<String>,
}

impl BookDraft {
    /// Validate and build a draft.
    ///
    /// # Examples
    /// ```
    /// use biblioteca::domain::{AuthorId, BookDraft};
    ///
    /// let draft = BookDraft::new("Dom Casmurro", AuthorId::new(1), 1899, None)
    ///     .expect("valid book");
    /// assert_eq!(draft.publication_year(), 1899);
    /// ```
    pub fn new(
        title: impl Into<String>,
        author_id: AuthorId,
        publication_year: i32,
        genre: Option<String>,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookValidationError::BlankTitle);
        }
        Ok(Self {
            title,
            author_id,
            publication_year,
            genre,
        })
    }

    /// Book title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Referenced author.
    #[must_use]
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    /// Year of publication.
    #[must_use]
    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    /// Genre.
    #[must_use]
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Attach an identifier, producing the persisted shape.
    #[must_use]
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author_id: self.author_id,
            publication_year: self.publication_year,
            genre: self.genre,
        }
    }
}

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Storage-assigned identifier.
    pub id: BookId,
    /// Title; never blank.
    pub title: String,
    /// Author reference. May dangle once the author is deleted.
    pub author_id: AuthorId,
    /// Year of publication.
    pub publication_year: i32,
    /// Genre.
    pub genre: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn rejects_blank_titles(#[case] title: &str) {
        assert_eq!(
            BookDraft::new(title, AuthorId::new(1), 2001, None),
            Err(BookValidationError::BlankTitle)
        );
    }

    #[rstest]
    fn into_book_carries_reference_and_year() {
        let book = BookDraft::new("Vidas Secas", AuthorId::new(3), 1938, Some("romance".into()))
            .expect("valid book")
            .into_book(BookId::new(11));

        assert_eq!(book.id, BookId::new(11));
        assert_eq!(book.author_id, AuthorId::new(3));
        assert_eq!(book.publication_year, 1938);
        assert_eq!(book.genre.as_deref(), Some("romance"));
    }
}
