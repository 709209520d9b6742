use super::*;

/// Tests tallying ballots per option.
///
/// Expected: Counts per option; ballots on removed options ignored
#[tokio::test]
async fn tallies_active_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let (vote, options) =
        factory::helpers::create_vote_with_mode(db, post.id, VoteMode::Multiple, &["A", "B", "C"])
            .await?;
    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;

    factory::create_ballot(db, first.id, vote.id, options[0].id).await?;
    factory::create_ballot(db, first.id, vote.id, options[2].id).await?;
    factory::create_ballot(db, second.id, vote.id, options[0].id).await?;

    VoteOptionRepository::new(db)
        .mark_removed(vote.id, &[options[2].id])
        .await?;
    let active = VoteOptionRepository::new(db)
        .find_active_by_vote(vote.id)
        .await?;

    let tallies = VoteBallotRepository::new(db).tally(vote.id, active).await?;

    let counts: Vec<(i32, u64)> = tallies.iter().map(|t| (t.option_id, t.count)).collect();
    assert_eq!(counts, vec![(options[0].id, 2), (options[1].id, 0)]);

    Ok(())
}

/// Tests recording a multi-option ballot and detecting it.
///
/// Expected: has_voted false before and true after create_many
#[tokio::test]
async fn records_ballot_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let (vote, options) =
        factory::helpers::create_vote_with_mode(db, post.id, VoteMode::Multiple, &["A", "B"])
            .await?;
    let voter = factory::create_member(db).await?;

    let repo = VoteBallotRepository::new(db);
    assert!(!repo.has_voted(vote.id, voter.id).await?);

    repo.create_many(voter.id, vote.id, &[options[0].id, options[1].id])
        .await?;

    assert!(repo.has_voted(vote.id, voter.id).await?);
    let tallies = repo
        .tally(
            vote.id,
            VoteOptionRepository::new(db).find_active_by_vote(vote.id).await?,
        )
        .await?;
    assert!(tallies.iter().all(|t| t.count == 1));

    Ok(())
}

/// Tests that ballots of another vote never leak into a tally.
///
/// Expected: Counts only from this vote, in the order options were given
#[tokio::test]
async fn tally_ignores_other_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let (_, other_post) = factory::helpers::create_post_with_author(db).await?;
    let (vote, options) =
        factory::helpers::create_vote_with_options(db, post.id, &["A", "B"]).await?;
    let (other_vote, other_options) =
        factory::helpers::create_vote_with_options(db, other_post.id, &["X"]).await?;
    let voter = factory::create_member(db).await?;

    factory::create_ballot(db, voter.id, vote.id, options[1].id).await?;
    factory::create_ballot(db, voter.id, other_vote.id, other_options[0].id).await?;

    let tallies = VoteBallotRepository::new(db)
        .tally(
            vote.id,
            options
                .into_iter()
                .rev()
                .map(crate::server::model::vote::VoteOption::from_entity)
                .collect(),
        )
        .await?;

    let counts: Vec<(String, u64)> = tallies.into_iter().map(|t| (t.name, t.count)).collect();
    assert_eq!(counts, vec![("B".to_string(), 1), ("A".to_string(), 0)]);

    Ok(())
}
