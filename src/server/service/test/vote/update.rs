use super::*;

/// Tests renaming the vote and one of its options.
///
/// Expected: New names stored
#[tokio::test]
async fn renames_vote_and_option() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let (vote, options) = factory::helpers::create_vote_with_options(db, post.id, &["A"]).await?;

    VoteService::new(db)
        .update(
            author.id,
            vote.id,
            UpdateVoteParams {
                name: Some("Dinner".to_string()),
                options: vec![OptionRename {
                    id: options[0].id,
                    name: "Sushi".to_string(),
                }],
                ..Default::default()
            },
        )
        .await?;

    let stored_vote = entity::prelude::Vote::find_by_id(vote.id).one(db).await?.unwrap();
    assert_eq!(stored_vote.name, "Dinner");
    let stored_option = entity::prelude::VoteOption::find_by_id(options[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_option.name, "Sushi");

    Ok(())
}

/// Tests that renaming an option of another vote rolls the whole update back.
///
/// Expected: Err DATA_NOT_FOUND and the vote name unchanged
#[tokio::test]
async fn foreign_option_rolls_back_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::create_post(db, author.id).await?;
    let (vote, _) = factory::helpers::create_vote_with_options(db, post.id, &["A"]).await?;
    let (_, foreign) =
        factory::helpers::create_vote_with_options(db, other_post.id, &["X"]).await?;

    let result = VoteService::new(db)
        .update(
            author.id,
            vote.id,
            UpdateVoteParams {
                name: Some("Renamed".to_string()),
                options: vec![OptionRename {
                    id: foreign[0].id,
                    name: "Hijack".to_string(),
                }],
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(sea_orm::DbErr::RecordNotFound(_)))
    ));

    let stored_vote = entity::prelude::Vote::find_by_id(vote.id).one(db).await?.unwrap();
    assert_eq!(stored_vote.name, vote.name);

    Ok(())
}

/// Tests an inverted time window.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_vote_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let (vote, _) = factory::helpers::create_vote_with_options(db, post.id, &["A"]).await?;

    let result = VoteService::new(db)
        .update(
            author.id,
            vote.id,
            UpdateVoteParams {
                end_time: Some(vote.start_time - Duration::hours(1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
