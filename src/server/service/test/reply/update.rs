use super::*;

/// Tests editing and deleting one's own reply.
///
/// Expected: Content changed, then deleted reply can no longer be edited
#[tokio::test]
async fn author_updates_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let reply = factory::create_reply(db, post.id, author.id).await?;
    let service = ReplyService::new(db);

    service
        .update(
            author.id,
            reply.id,
            UpdateReplyParams {
                content: "Edited".to_string(),
            },
        )
        .await?;

    service.delete(author.id, reply.id).await?;

    let after_delete = service
        .update(
            author.id,
            reply.id,
            UpdateReplyParams {
                content: "Again".to_string(),
            },
        )
        .await;
    assert!(matches!(after_delete, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only the author may change a reply.
///
/// Expected: Err(AppError::Forbidden) for update and delete
#[tokio::test]
async fn rejects_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let reply = factory::create_reply(db, post.id, author.id).await?;
    let stranger = factory::create_member(db).await?;
    let service = ReplyService::new(db);

    let update = service
        .update(
            stranger.id,
            reply.id,
            UpdateReplyParams {
                content: "Mine now".to_string(),
            },
        )
        .await;
    assert!(matches!(update, Err(AppError::Forbidden(_))));

    let delete = service.delete(stranger.id, reply.id).await;
    assert!(matches!(delete, Err(AppError::Forbidden(_))));

    Ok(())
}
