use super::*;

/// Tests that the author can edit and delete a post.
///
/// Expected: Edited values returned; post gone after delete
#[tokio::test]
async fn author_updates_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let service = BoardService::new(db);

    let updated = service
        .update(
            author.id,
            BoardType::Free,
            post.id,
            UpdatePostParams {
                title: "Edited".to_string(),
                content: "Edited body".to_string(),
            },
        )
        .await?;
    assert_eq!(updated.post.title, "Edited");

    service.delete(author.id, BoardType::Free, post.id).await?;

    let result = service.get_detail(BoardType::Free, post.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that other members cannot edit or delete a post.
///
/// Expected: Err(AppError::Forbidden) for both
#[tokio::test]
async fn rejects_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let stranger = factory::create_member(db).await?;
    let service = BoardService::new(db);

    let update = service
        .update(
            stranger.id,
            BoardType::Free,
            post.id,
            UpdatePostParams {
                title: "Hijacked".to_string(),
                content: "x".to_string(),
            },
        )
        .await;
    assert!(matches!(update, Err(AppError::Forbidden(_))));

    let delete = service.delete(stranger.id, BoardType::Free, post.id).await;
    assert!(matches!(delete, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests deleting a post twice.
///
/// Expected: Second delete fails with Err(AppError::NotFound)
#[tokio::test]
async fn deleting_removed_post_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let service = BoardService::new(db);

    service.delete(author.id, BoardType::Free, post.id).await?;
    let again = service.delete(author.id, BoardType::Free, post.id).await;

    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
