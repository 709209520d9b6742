use super::*;

/// Tests that the creator becomes the joined leader.
///
/// Expected: Ok with one joined leader membership
#[tokio::test]
async fn creator_becomes_leader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_member(db).await?;

    let detail = StudyService::new(db).create(creator.id, study_params(3)).await?;

    assert_eq!(detail.joined_count, 1);
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.members[0].member_id, creator.id);
    assert!(detail.members[0].is_leader());

    Ok(())
}

/// Tests lowering capacity below the joined count.
///
/// Expected: Err(StudyError::CapacityBelowJoined)
#[tokio::test]
async fn rejects_capacity_below_joined() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let member = factory::create_member(db).await?;
    factory::create_study_member(
        db,
        study.id,
        member.id,
        StudyMemberStatus::Joined,
        StudyMemberRole::Member,
    )
    .await?;

    let result = StudyService::new(db)
        .update(leader.id, study.id, study_params(1))
        .await;

    assert!(matches!(
        result,
        Err(AppError::StudyErr(StudyError::CapacityBelowJoined { joined: 2, .. }))
    ));

    Ok(())
}

/// Tests that only the leader may update or delete the study.
///
/// Expected: Err(AppError::Forbidden) for a joined member
#[tokio::test]
async fn rejects_non_leader_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let member = factory::create_member(db).await?;
    factory::create_study_member(
        db,
        study.id,
        member.id,
        StudyMemberStatus::Joined,
        StudyMemberRole::Member,
    )
    .await?;
    let service = StudyService::new(db);

    let update = service.update(member.id, study.id, study_params(10)).await;
    assert!(matches!(update, Err(AppError::Forbidden(_))));

    let delete = service.delete(member.id, study.id).await;
    assert!(matches!(delete, Err(AppError::Forbidden(_))));

    Ok(())
}
