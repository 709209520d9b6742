use super::*;

/// Tests counting reports and detecting an existing report by a member.
///
/// Expected: One report per reporter counted; exists true only for reporters
#[tokio::test]
async fn counts_reports_of_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;
    let bystander = factory::create_member(db).await?;

    let repo = PostReportRepository::new(db);
    repo.create(post.id, first.id, Some("spam".to_string())).await?;
    repo.create(post.id, second.id, None).await?;

    assert_eq!(repo.count_by_post(post.id).await?, 2);
    assert!(repo.exists(post.id, first.id).await?);
    assert!(!repo.exists(post.id, bystander.id).await?);

    Ok(())
}
