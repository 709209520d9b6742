use super::*;

/// Tests that replies of a post are returned in id order, removed ones included.
///
/// Expected: All replies of the post with authors, none from other posts
#[tokio::test]
async fn returns_all_replies_of_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::create_post(db, author.id).await?;

    let first = factory::create_reply(db, post.id, author.id).await?;
    let removed = factory::reply::ReplyFactory::new(db, post.id, author.id)
        .removed(true)
        .build()
        .await?;
    let child = factory::create_child_reply(db, post.id, author.id, first.id).await?;
    factory::create_reply(db, other_post.id, author.id).await?;

    let repo = ReplyRepository::new(db);
    let replies = repo.find_by_post(post.id).await?;

    let ids: Vec<i32> = replies.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, removed.id, child.id]);
    assert!(replies[1].removed);
    assert_eq!(replies[0].author.nickname, author.nickname);

    Ok(())
}
