use super::*;

/// Tests reading back an uploaded file.
///
/// Expected: Same bytes and original name
#[tokio::test]
async fn returns_stored_bytes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = temp_store();

    let uploader = factory::create_member(db).await?;
    let service = FileService::new(db, &store);

    let uploaded = service
        .upload(uploader.id, vec![incoming("slides.pdf", None, b"%PDF")])
        .await?;

    let (file, bytes) = service.download(uploaded[0].id).await?;
    assert_eq!(file.original_name, "slides.pdf");
    assert_eq!(bytes, b"%PDF");

    let _ = std::fs::remove_dir_all(store.root());
    Ok(())
}

/// Tests an unknown file id.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_file_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = temp_store();

    let result = FileService::new(db, &store).download(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
