use super::*;

/// Tests loading the stored hash for login.
///
/// Expected: Some with the member and hash; None for an unknown email
#[tokio::test]
async fn returns_hash_for_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .email("park@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let credentials = repo.find_credentials_by_email("park@example.com").await?.unwrap();
    assert_eq!(credentials.member.id, member.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    assert!(repo.find_credentials_by_email("other@example.com").await?.is_none());

    Ok(())
}
