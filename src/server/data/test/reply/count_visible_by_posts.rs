use super::*;

/// Tests per-post counts of non-removed replies.
///
/// Expected: Removed replies excluded; posts without replies map to 0
#[tokio::test]
async fn counts_visible_replies_per_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let quiet_post = factory::create_post(db, author.id).await?;

    factory::create_reply(db, post.id, author.id).await?;
    factory::create_reply(db, post.id, author.id).await?;
    factory::reply::ReplyFactory::new(db, post.id, author.id)
        .removed(true)
        .build()
        .await?;

    let repo = ReplyRepository::new(db);
    let counts = repo.count_visible_by_posts(&[post.id, quiet_post.id]).await?;

    assert_eq!(counts.get(&post.id), Some(&2));
    assert_eq!(counts.get(&quiet_post.id), Some(&0));

    Ok(())
}

/// Tests that only the requested posts are counted, and that an empty id list
/// is answered without a query.
///
/// Expected: Unrequested posts absent from the map; empty input gives an empty map
#[tokio::test]
async fn counts_only_requested_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::create_post(db, author.id).await?;

    factory::create_reply(db, post.id, author.id).await?;
    factory::create_reply(db, other_post.id, author.id).await?;
    factory::create_reply(db, other_post.id, author.id).await?;

    let repo = ReplyRepository::new(db);
    let counts = repo.count_visible_by_posts(&[post.id]).await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get(&post.id), Some(&1));
    assert!(repo.count_visible_by_posts(&[]).await?.is_empty());

    Ok(())
}
