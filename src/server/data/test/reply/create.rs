use super::*;

/// Tests creating a child reply under an existing reply.
///
/// Expected: Ok with the parent id stored
#[tokio::test]
async fn creates_child_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let parent = factory::create_reply(db, post.id, author.id).await?;

    let repo = ReplyRepository::new(db);
    let reply = repo
        .create(CreateReplyParams {
            post_id: post.id,
            author_id: author.id,
            parent_id: Some(parent.id),
            content: "Agreed".to_string(),
        })
        .await?;

    assert_eq!(reply.parent_id, Some(parent.id));
    assert_eq!(reply.content, "Agreed");
    assert!(!reply.removed);

    Ok(())
}
