use super::*;

/// Tests a signed-in member passes the guard.
///
/// Expected: Ok(member) matching the session
#[tokio::test]
async fn returns_member_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::member::MemberFactory::new(db)
        .nickname("alice")
        .build()
        .await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(result.is_ok());
    let returned = result.unwrap();
    assert_eq!(returned.id, member.id);
    assert_eq!(returned.nickname, "alice");

    Ok(())
}

/// Tests an anonymous caller is rejected.
///
/// Expected: Err(AuthError::MemberNotInSession)
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a missing member is rejected.
///
/// Expected: Err(AuthError::MemberNotInDatabase)
#[tokio::test]
async fn rejects_member_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_member_id(999).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotInDatabase(999)))
    ));

    Ok(())
}
