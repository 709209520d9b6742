use super::*;

/// Tests that listing hides waiting requests unless asked for.
///
/// Expected: Joined members only by default; waiting included on request; removed never
#[tokio::test]
async fn lists_members_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let applicant = factory::create_member(db).await?;
    let departed = factory::create_member(db).await?;

    factory::create_study_member(
        db,
        study.id,
        applicant.id,
        StudyMemberStatus::Waiting,
        StudyMemberRole::Member,
    )
    .await?;
    factory::study::StudyMemberFactory::new(db, study.id, departed.id)
        .status(StudyMemberStatus::Joined)
        .removed(true)
        .build()
        .await?;

    let repo = StudyMemberRepository::new(db);

    let joined = repo.list(study.id, false).await?;
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].member_id, leader.id);
    assert!(joined[0].is_leader());
    assert_eq!(joined[0].nickname, leader.nickname);

    let all = repo.list(study.id, true).await?;
    let ids: Vec<i32> = all.iter().map(|m| m.member_id).collect();
    assert_eq!(ids, vec![leader.id, applicant.id]);

    Ok(())
}

/// Tests counting joined members across status changes and removal.
///
/// Expected: Count follows accepted and removed memberships
#[tokio::test]
async fn counts_joined_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, study, _) = factory::helpers::create_study_with_leader(db).await?;
    let applicant = factory::create_member(db).await?;

    let repo = StudyMemberRepository::new(db);
    let request = repo
        .create(
            study.id,
            applicant.id,
            StudyMemberStatus::Waiting,
            StudyMemberRole::Member,
            Some("I'd like to join".to_string()),
        )
        .await?;
    assert_eq!(repo.count_joined(study.id).await?, 1);

    repo.set_status(request.id, StudyMemberStatus::Joined).await?;
    assert_eq!(repo.count_joined(study.id).await?, 2);

    repo.mark_removed(request.id).await?;
    assert_eq!(repo.count_joined(study.id).await?, 1);
    assert!(repo.find_active(study.id, applicant.id).await?.is_none());

    Ok(())
}

/// Tests changing roles of memberships.
///
/// Expected: The new role is visible through find_active
#[tokio::test]
async fn changes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, study, membership) = factory::helpers::create_study_with_leader(db).await?;

    let repo = StudyMemberRepository::new(db);
    repo.set_role(membership.id, StudyMemberRole::Member).await?;

    let found = repo.find_active(study.id, leader.id).await?.unwrap();
    assert_eq!(found.role, StudyMemberRole::Member);
    assert!(!found.is_leader());

    Ok(())
}
