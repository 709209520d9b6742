use super::*;
use crate::server::data::study::member::StudyMemberRepository;

/// Walks a member through join, accept and kick.
///
/// Expected: Waiting after join, joined after accept, gone after kick
#[tokio::test]
async fn join_accept_kick() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let applicant = factory::create_member(db).await?;
    let service = StudyService::new(db);

    let request = service
        .join(applicant.id, study.id, Some("Hi!".to_string()))
        .await?;
    assert_eq!(request.status, StudyMemberStatus::Waiting);
    assert_eq!(request.join_intro.as_deref(), Some("Hi!"));

    // Waiting requests are visible to the leader only.
    let as_leader = service.get(Some(leader.id), study.id).await?;
    assert_eq!(as_leader.members.len(), 2);
    let as_applicant = service.get(Some(applicant.id), study.id).await?;
    assert_eq!(as_applicant.members.len(), 1);

    service.accept(leader.id, study.id, applicant.id).await?;
    let detail = service.get(None, study.id).await?;
    assert_eq!(detail.joined_count, 2);

    service.kick(leader.id, study.id, applicant.id).await?;
    let detail = service.get(None, study.id).await?;
    assert_eq!(detail.joined_count, 1);

    Ok(())
}

/// Tests requesting to join twice.
///
/// Expected: Err(StudyError::AlreadyMember)
#[tokio::test]
async fn rejects_second_join_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let applicant = factory::create_member(db).await?;
    let service = StudyService::new(db);

    service.join(applicant.id, study.id, None).await?;
    let again = service.join(applicant.id, study.id, None).await;

    assert!(matches!(
        again,
        Err(AppError::StudyErr(StudyError::AlreadyMember { .. }))
    ));

    Ok(())
}

/// Tests that a rejected second join leaves the first request untouched.
///
/// Expected: exactly one waiting membership for the applicant
#[tokio::test]
async fn second_join_keeps_single_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let applicant = factory::create_member(db).await?;
    let service = StudyService::new(db);

    let first = service.join(applicant.id, study.id, Some("hi".to_string())).await?;
    let _ = service.join(applicant.id, study.id, None).await;

    let requests: Vec<_> = StudyMemberRepository::new(db)
        .list(study.id, true)
        .await?
        .into_iter()
        .filter(|m| m.member_id != leader.id)
        .collect();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, first.id);
    assert_eq!(requests[0].status, StudyMemberStatus::Waiting);

    Ok(())
}

/// Tests accepting into a full study.
///
/// Expected: Err(StudyError::Full) and the request still waiting
#[tokio::test]
async fn rejects_accept_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::create_member(db).await?;
    let study = factory::study::StudyFactory::new(db)
        .max_members(1)
        .build()
        .await?;
    factory::create_study_member(
        db,
        study.id,
        leader.id,
        StudyMemberStatus::Joined,
        StudyMemberRole::Leader,
    )
    .await?;
    let applicant = factory::create_member(db).await?;
    let service = StudyService::new(db);

    service.join(applicant.id, study.id, None).await?;
    let result = service.accept(leader.id, study.id, applicant.id).await;

    assert!(matches!(result, Err(AppError::StudyErr(StudyError::Full(_)))));

    let as_leader = service.get(Some(leader.id), study.id).await?;
    let request = as_leader
        .members
        .iter()
        .find(|m| m.member_id == applicant.id)
        .unwrap();
    assert_eq!(request.status, StudyMemberStatus::Waiting);

    Ok(())
}

/// Tests rejecting a join request.
///
/// Expected: Request removed; applicant may ask again
#[tokio::test]
async fn disapproves_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let applicant = factory::create_member(db).await?;
    let service = StudyService::new(db);

    service.join(applicant.id, study.id, None).await?;
    service.disapprove(leader.id, study.id, applicant.id).await?;

    let as_leader = service.get(Some(leader.id), study.id).await?;
    assert_eq!(as_leader.members.len(), 1);

    service.join(applicant.id, study.id, None).await?;

    Ok(())
}

/// Tests leaving as a member and as the leader.
///
/// Expected: Member leaves; leader gets Err(StudyError::LeaderCannotLeave)
#[tokio::test]
async fn member_leaves_but_leader_cannot() -> Result<(), AppError> {
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
    let service = StudyService::new(db);

    service.leave(member.id, study.id).await?;
    assert_eq!(service.get(None, study.id).await?.joined_count, 1);

    let result = service.leave(leader.id, study.id).await;
    assert!(matches!(
        result,
        Err(AppError::StudyErr(StudyError::LeaderCannotLeave))
    ));

    Ok(())
}

/// Tests that kicking requires leadership and a joined target.
///
/// Expected: Forbidden for a member kicking; NotJoinedMember for a waiting target
#[tokio::test]
async fn kick_requires_leader_and_joined_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let member = factory::create_member(db).await?;
    let applicant = factory::create_member(db).await?;
    factory::create_study_member(
        db,
        study.id,
        member.id,
        StudyMemberStatus::Joined,
        StudyMemberRole::Member,
    )
    .await?;
    let service = StudyService::new(db);
    service.join(applicant.id, study.id, None).await?;

    let by_member = service.kick(member.id, study.id, leader.id).await;
    assert!(matches!(by_member, Err(AppError::Forbidden(_))));

    let waiting_target = service.kick(leader.id, study.id, applicant.id).await;
    assert!(matches!(
        waiting_target,
        Err(AppError::StudyErr(StudyError::NotJoinedMember { .. }))
    ));

    Ok(())
}
