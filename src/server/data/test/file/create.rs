use super::*;

/// Tests recording file metadata and reading it back.
///
/// Expected: Ok with the relative storage path preserved
#[tokio::test]
async fn records_and_finds_file() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_member(db).await?;

    let repo = UploadedFileRepository::new(db);
    let file = repo
        .create(NewUploadedFile {
            uploader_id: uploader.id,
            original_name: "diagram.png".to_string(),
            stored_name: "0b7c.png".to_string(),
            storage_path: PathBuf::from("images/2026/10/0b7c.png"),
            content_type: Some("image/png".to_string()),
            size: 42,
        })
        .await?;

    let found = repo.find_by_id(file.id).await?.unwrap();
    assert_eq!(found.original_name, "diagram.png");
    assert_eq!(found.storage_path, PathBuf::from("images/2026/10/0b7c.png"));
    assert_eq!(found.size, 42);

    assert!(repo.find_by_id(file.id + 1).await?.is_none());

    Ok(())
}
