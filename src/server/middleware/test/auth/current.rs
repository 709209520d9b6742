use super::*;

/// Tests anonymous callers resolve to no member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_anonymous_caller() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).current().await?;

    assert_eq!(result, None);

    Ok(())
}

/// Tests a signed-in member resolves to their id.
///
/// Expected: Ok(Some(member.id))
#[tokio::test]
async fn returns_member_id_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::create_member(db).await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let result = AuthGuard::new(db, session).current().await?;

    assert_eq!(result, Some(member.id));

    Ok(())
}

/// Tests logout clears the member from the session.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn returns_none_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::create_member(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_member_id(member.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).current().await?;

    assert_eq!(result, None);

    Ok(())
}
