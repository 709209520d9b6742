use super::*;

/// Tests that only non-removed, non-closed votes count as open.
///
/// Expected: false while all votes are closed or removed, true once an open vote exists
#[tokio::test]
async fn ignores_closed_and_removed_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    factory::vote::VoteFactory::new(db, post.id)
        .mode(VoteMode::Closed)
        .build()
        .await?;
    factory::vote::VoteFactory::new(db, post.id)
        .removed(true)
        .build()
        .await?;

    let repo = VoteRepository::new(db);
    assert!(!repo.open_exists_for_post(post.id).await?);

    factory::vote::VoteFactory::new(db, post.id)
        .mode(VoteMode::Multiple)
        .build()
        .await?;
    assert!(repo.open_exists_for_post(post.id).await?);

    Ok(())
}
