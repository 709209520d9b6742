use super::*;

/// Tests tally visibility per viewer on an open single-choice vote.
///
/// A member who voted sees counts; a member who did not and an anonymous caller
/// see options without counts.
///
/// Expected: Voter sees A=1, B=0; others see no counts
#[tokio::test]
async fn shows_tallies_only_after_voting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let voter = factory::create_member(db).await?;
    let bystander = factory::create_member(db).await?;
    let service = VoteService::new(db);

    let vote_id = service
        .create(author.id, create_params(post.id, VoteMode::Single, &["A", "B"]))
        .await?;
    let options = service.list_for_post(Some(voter.id), post.id).await?.options;

    service
        .cast(voter.id, ballot(vote_id, voter.id, vec![options[0].id]))
        .await?;

    let as_voter = service.list_for_post(Some(voter.id), post.id).await?;
    assert!(as_voter.has_voted);
    let counts: Vec<Option<u64>> = as_voter.options.iter().map(|o| o.count).collect();
    assert_eq!(counts, vec![Some(1), Some(0)]);

    let as_bystander = service.list_for_post(Some(bystander.id), post.id).await?;
    assert!(!as_bystander.has_voted);
    assert!(as_bystander.options.iter().all(|o| o.count.is_none()));

    let anonymous = service.list_for_post(None, post.id).await?;
    assert!(anonymous.options.iter().all(|o| o.count.is_none()));

    Ok(())
}

/// Tests that closed votes show counts to everyone.
///
/// Expected: Counts visible to an anonymous caller
#[tokio::test]
async fn closed_vote_shows_tallies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    factory::helpers::create_vote_with_mode(db, post.id, VoteMode::Closed, &["A"]).await?;

    let view = VoteService::new(db).list_for_post(None, post.id).await?;

    assert_eq!(view.options[0].count, Some(0));

    Ok(())
}

/// Tests a post whose only vote was removed.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn removed_vote_is_not_listed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let service = VoteService::new(db);

    let vote_id = service
        .create(author.id, create_params(post.id, VoteMode::Single, &["A"]))
        .await?;
    service.delete(author.id, vote_id, vec![]).await?;

    let result = service.list_for_post(Some(author.id), post.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
