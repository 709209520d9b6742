use super::*;
use sea_orm::EntityTrait;

/// Tests registering a new member.
///
/// Expected: Ok with the member stored and the password not stored in plain text
#[tokio::test]
async fn signs_up_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let member = service.signup(signup_params("a@example.com", "alpha")).await?;

    assert_eq!(member.nickname, "alpha");

    let stored = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "correct horse");
    assert!(stored.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests that taken emails and nicknames are rejected.
///
/// Expected: Err(AppError::Duplicate) for both
#[tokio::test]
async fn rejects_taken_email_and_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::member::create_member_with_nickname(db, "taken").await?;

    let service = MemberService::new(db);

    let same_email = service.signup(signup_params(&existing.email, "fresh")).await;
    assert!(matches!(same_email, Err(AppError::Duplicate(_))));

    let same_nickname = service.signup(signup_params("new@example.com", "taken")).await;
    assert!(matches!(same_nickname, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests that blank fields are rejected before touching the database.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let result = service.signup(signup_params("b@example.com", "")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
