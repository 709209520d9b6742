use super::*;

/// Tests replacing title and content.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn updates_title_and_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.update(
        post.id,
        UpdatePostParams {
            title: "Edited".to_string(),
            content: "New body".to_string(),
        },
    )
    .await?;

    let stored = entity::prelude::Post::find_by_id(post.id).one(db).await?.unwrap();
    assert_eq!(stored.title, "Edited");
    assert_eq!(stored.content, "New body");

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .update(
            999,
            UpdatePostParams {
                title: "x".to_string(),
                content: "y".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
