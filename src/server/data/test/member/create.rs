use super::*;

/// Tests inserting a member with a pre-hashed password.
///
/// Expected: Ok with the member returned and the hash stored unchanged
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(
            "kim@example.com".to_string(),
            "kim".to_string(),
            "$argon2id$hash".to_string(),
        )
        .await?;

    assert_eq!(member.email, "kim@example.com");
    assert_eq!(member.nickname, "kim");

    let stored = repo.find_by_id(member.id).await?.unwrap();
    assert_eq!(stored.password_hash, "$argon2id$hash");

    Ok(())
}

/// Tests that the unique email index rejects a second member with the same email.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_email_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .create(existing.email.clone(), "someone-else".to_string(), "h".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
