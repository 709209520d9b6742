use super::*;

/// Tests creating a vote with options on the caller's post.
///
/// Expected: Ok with the vote id; one option row per name
#[tokio::test]
async fn creates_vote_with_options() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;

    let vote_id = VoteService::new(db)
        .create(author.id, create_params(post.id, VoteMode::Single, &["A", "B"]))
        .await?;

    let vote = entity::prelude::Vote::find_by_id(vote_id).one(db).await?.unwrap();
    assert_eq!(vote.mode, VoteMode::Single);
    assert_eq!(vote.post_id, post.id);
    assert_eq!(entity::prelude::VoteOption::find().count(db).await?, 2);

    Ok(())
}

/// Tests that only the post author may attach a vote.
///
/// Expected: Err(AppError::Forbidden) and nothing stored
#[tokio::test]
async fn rejects_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let stranger = factory::create_member(db).await?;

    let result = VoteService::new(db)
        .create(stranger.id, create_params(post.id, VoteMode::Single, &["A"]))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a post carries at most one open vote.
///
/// Expected: Err(VoteError::ActiveVoteExists) while open; Ok once the first is closed
#[tokio::test]
async fn allows_one_open_vote_per_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let service = VoteService::new(db);

    let first = service
        .create(author.id, create_params(post.id, VoteMode::Single, &["A"]))
        .await?;

    let second = service
        .create(author.id, create_params(post.id, VoteMode::Multiple, &["B"]))
        .await;
    assert!(matches!(
        second,
        Err(AppError::VoteErr(VoteError::ActiveVoteExists(_)))
    ));

    service.close(author.id, first).await?;
    service
        .create(author.id, create_params(post.id, VoteMode::Multiple, &["B"]))
        .await?;

    Ok(())
}

/// Tests validation of the creation request.
///
/// Expected: Err(AppError::BadRequest) for no options and for a closed initial mode
#[tokio::test]
async fn rejects_invalid_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let service = VoteService::new(db);

    let no_options = service
        .create(author.id, create_params(post.id, VoteMode::Single, &[]))
        .await;
    assert!(matches!(no_options, Err(AppError::BadRequest(_))));

    let closed = service
        .create(author.id, create_params(post.id, VoteMode::Closed, &["A"]))
        .await;
    assert!(matches!(closed, Err(AppError::BadRequest(_))));

    Ok(())
}
