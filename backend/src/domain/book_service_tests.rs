//! Tests for the book service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::Value;

use super::*;
use crate::domain::ports::MockBookRepository;
use crate::domain::{AuthorId, ErrorCode};

fn make_service(repo: MockBookRepository) -> BookService<MockBookRepository> {
    BookService::new(Arc::new(repo))
}

#[fixture]
fn draft() -> BookDraft {
    BookDraft::new("Memórias Póstumas de Brás Cubas", AuthorId::new(1), 1881, None)
        .expect("valid book")
}

#[rstest]
#[tokio::test]
async fn create_keeps_author_reference(draft: BookDraft) {
    let mut repo = MockBookRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|draft| Ok(draft.clone().into_book(BookId::new(4))));

    let book = make_service(repo).create(draft).await.expect("created");

    assert_eq!(book.id, BookId::new(4));
    assert_eq!(book.author_id, AuthorId::new(1));
}

#[rstest]
#[tokio::test]
async fn create_with_unknown_author_is_not_found(draft: BookDraft) {
    let mut repo = MockBookRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|draft| Err(BookRepositoryError::missing_author(draft.author_id())));

    let error = make_service(repo).create(draft).await.expect_err("missing author");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), AUTHOR_NOT_FOUND);
    let details = error.details().and_then(Value::as_object).expect("details");
    assert_eq!(details.get("value").and_then(Value::as_i64), Some(1));
}

#[rstest]
#[tokio::test]
async fn query_failures_are_internal(draft: BookDraft) {
    let mut repo = MockBookRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(BookRepositoryError::query("database error")));

    let error = make_service(repo).create(draft).await.expect_err("failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn get_missing_book_is_not_found() {
    let mut repo = MockBookRepository::new();
    repo.expect_find_by_id()
        .with(eq(BookId::new(2)))
        .times(1)
        .return_once(|_| Ok(None));

    let error = make_service(repo)
        .get(BookId::new(2))
        .await
        .expect_err("missing");

    assert_eq!(error.message(), BOOK_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn update_rechecks_author_reference(draft: BookDraft) {
    let mut repo = MockBookRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(|_, draft| Err(BookRepositoryError::missing_author(draft.author_id())));

    let error = make_service(repo)
        .update(BookId::new(2), draft)
        .await
        .expect_err("missing author");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), AUTHOR_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn update_without_matching_row_is_not_found(draft: BookDraft) {
    let mut repo = MockBookRepository::new();
    repo.expect_update().times(1).return_once(|_, _| Ok(false));

    let error = make_service(repo)
        .update(BookId::new(2), draft)
        .await
        .expect_err("missing");

    assert_eq!(error.message(), BOOK_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn second_delete_is_not_found() {
    let mut repo = MockBookRepository::new();
    let mut removed = true;
    repo.expect_delete().times(2).returning(move |_| {
        let outcome = removed;
        removed = false;
        Ok(outcome)
    });
    let service = make_service(repo);

    service.delete(BookId::new(8)).await.expect("first delete");
    let error = service.delete(BookId::new(8)).await.expect_err("second delete");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
