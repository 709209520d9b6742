use super::*;

/// Tests email and nickname existence checks against a stored member.
///
/// Expected: true for the stored values, false for unknown ones
#[tokio::test]
async fn detects_taken_email_and_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::create_member_with_nickname(db, "lee").await?;

    let repo = MemberRepository::new(db);
    assert!(repo.email_exists(&member.email).await?);
    assert!(repo.nickname_exists("lee").await?);
    assert!(!repo.email_exists("nobody@example.com").await?);
    assert!(!repo.nickname_exists("Lee").await?);

    Ok(())
}
