//! In-process library implementing both repository ports.
//!
//! Used by handler and end-to-end tests in place of PostgreSQL. Identifiers
//! are assigned sequentially from 1 like a `SERIAL` column, listing returns
//! rows in id order, and book writes check the author map under the same
//! lock as the write.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    AuthorRepository, AuthorRepositoryError, BookRepository, BookRepositoryError,
};
use crate::domain::{Author, AuthorDraft, AuthorId, Book, BookDraft, BookId};

#[derive(Debug, Default)]
struct Shelves {
    authors: BTreeMap<AuthorId, Author>,
    books: BTreeMap<BookId, Book>,
    last_author_id: i32,
    last_book_id: i32,
}

/// Shared in-memory storage for authors and books.
///
/// Clones share the same shelves.
///
/// # Examples
/// ```
/// use biblioteca::domain::AuthorDraft;
/// use biblioteca::domain::ports::AuthorRepository;
/// use biblioteca::outbound::memory::InMemoryLibrary;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let library = InMemoryLibrary::new();
/// let draft = AuthorDraft::new("Jorge Amado", None, None).expect("valid author");
/// let author = library.create(&draft).await.expect("stored");
/// assert_eq!(author.id.get(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLibrary {
    shelves: Arc<Mutex<Shelves>>,
    unavailable: bool,
}

impl InMemoryLibrary {
    /// Empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Library whose every operation fails as if the store were unreachable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of stored books.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.shelves().books.len()
    }

    fn shelves(&self) -> MutexGuard<'_, Shelves> {
        self.shelves
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn authors(&self) -> Result<MutexGuard<'_, Shelves>, AuthorRepositoryError> {
        if self.unavailable {
            return Err(AuthorRepositoryError::connection("store unavailable"));
        }
        Ok(self.shelves())
    }

    fn books(&self) -> Result<MutexGuard<'_, Shelves>, BookRepositoryError> {
        if self.unavailable {
            return Err(BookRepositoryError::connection("store unavailable"));
        }
        Ok(self.shelves())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryLibrary {
    async fn create(&self, draft: &AuthorDraft) -> Result<Author, AuthorRepositoryError> {
        let mut shelves = self.authors()?;
        shelves.last_author_id += 1;
        let author = draft
            .clone()
            .into_author(AuthorId::new(shelves.last_author_id));
        shelves.authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn list(&self) -> Result<Vec<Author>, AuthorRepositoryError> {
        Ok(self.authors()?.authors.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, AuthorRepositoryError> {
        Ok(self.authors()?.authors.get(&id).cloned())
    }

    async fn update(
        &self,
        id: AuthorId,
        draft: &AuthorDraft,
    ) -> Result<bool, AuthorRepositoryError> {
        let mut shelves = self.authors()?;
        match shelves.authors.get_mut(&id) {
            Some(slot) => {
                *slot = draft.clone().into_author(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AuthorId) -> Result<bool, AuthorRepositoryError> {
        Ok(self.authors()?.authors.remove(&id).is_some())
    }
}

#[async_trait]
impl BookRepository for InMemoryLibrary {
    async fn create(&self, draft: &BookDraft) -> Result<Book, BookRepositoryError> {
        let mut shelves = self.books()?;
        if !shelves.authors.contains_key(&draft.author_id()) {
            return Err(BookRepositoryError::missing_author(draft.author_id()));
        }
        shelves.last_book_id += 1;
        let book = draft.clone().into_book(BookId::new(shelves.last_book_id));
        shelves.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.books()?.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        Ok(self.books()?.books.get(&id).cloned())
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<bool, BookRepositoryError> {
        let mut shelves = self.books()?;
        if !shelves.authors.contains_key(&draft.author_id()) {
            return Err(BookRepositoryError::missing_author(draft.author_id()));
        }
        match shelves.books.get_mut(&id) {
            Some(slot) => {
                *slot = draft.clone().into_book(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BookId) -> Result<bool, BookRepositoryError> {
        Ok(self.books()?.books.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn library() -> InMemoryLibrary {
        InMemoryLibrary::new()
    }

    fn author_draft(name: &str) -> AuthorDraft {
        AuthorDraft::new(name, None, None).expect("valid author")
    }

    #[rstest]
    #[tokio::test]
    async fn identifiers_are_sequential(library: InMemoryLibrary) {
        let first = AuthorRepository::create(&library, &author_draft("Graciliano Ramos"))
            .await
            .expect("first");
        let second = AuthorRepository::create(&library, &author_draft("Rachel de Queiroz"))
            .await
            .expect("second");

        assert_eq!((first.id.get(), second.id.get()), (1, 2));
    }

    #[rstest]
    #[tokio::test]
    async fn book_for_unknown_author_is_not_stored(library: InMemoryLibrary) {
        let draft = BookDraft::new("O Quinze", AuthorId::new(99), 1930, None).expect("valid book");

        let error = BookRepository::create(&library, &draft)
            .await
            .expect_err("missing author");

        assert_eq!(error, BookRepositoryError::missing_author(AuthorId::new(99)));
        assert_eq!(library.book_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_author_leaves_books_dangling(library: InMemoryLibrary) {
        let author = AuthorRepository::create(&library, &author_draft("Lima Barreto"))
            .await
            .expect("author");
        let draft = BookDraft::new("Triste Fim de Policarpo Quaresma", author.id, 1915, None)
            .expect("valid book");
        let book = BookRepository::create(&library, &draft).await.expect("book");

        assert!(AuthorRepository::delete(&library, author.id).await.expect("delete"));
        let stored = BookRepository::find_by_id(&library, book.id)
            .await
            .expect("lookup")
            .expect("book still present");

        assert_eq!(stored.author_id, author.id);
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_library_fails_every_call() {
        let library = InMemoryLibrary::unavailable();

        let error = AuthorRepository::list(&library).await.expect_err("down");

        assert!(matches!(error, AuthorRepositoryError::Connection { .. }));
    }
}
