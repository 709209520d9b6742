use super::*;

/// Tests that votes of a post are listed newest first without removed ones.
///
/// Expected: Ok with the two active votes in descending id order
#[tokio::test]
async fn lists_active_votes_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let older = factory::create_vote(db, post.id).await?;
    factory::vote::VoteFactory::new(db, post.id)
        .removed(true)
        .build()
        .await?;
    let newer = factory::create_vote(db, post.id).await?;

    let repo = VoteRepository::new(db);
    let votes = repo.find_by_post(post.id).await?;

    let ids: Vec<i32> = votes.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
