use super::*;

/// Tests creating a post on a board.
///
/// Expected: Ok with flags cleared and the row stored under the board type
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            author_id: author.id,
            board_type: BoardType::Question,
            title: "How do lifetimes work?".to_string(),
            content: "Asking for a friend".to_string(),
        })
        .await?;

    assert_eq!(post.board_type, BoardType::Question);
    assert!(!post.removed);
    assert!(!post.reported);

    let stored = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
