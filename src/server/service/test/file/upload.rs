use super::*;

/// Tests uploading an image and a document in one request.
///
/// Expected: Both recorded and written under their partitions; empty parts skipped
#[tokio::test]
async fn stores_every_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = temp_store();

    let uploader = factory::create_member(db).await?;

    let files = FileService::new(db, &store)
        .upload(
            uploader.id,
            vec![
                incoming("cat.png", Some("image/png"), b"png-bytes"),
                incoming("empty.txt", None, b""),
                incoming("notes.txt", None, b"text"),
            ],
        )
        .await?;

    assert_eq!(files.len(), 2);
    assert!(files[0].storage_path.starts_with("images"));
    assert!(files[1].storage_path.starts_with("files"));
    assert!(files[0].stored_name.ends_with(".png"));
    assert_eq!(files[1].size, 4);
    assert!(store.root().join(&files[1].storage_path).exists());

    let _ = std::fs::remove_dir_all(store.root());
    Ok(())
}

/// Tests that a failing write removes files already written and records nothing.
///
/// The root is a regular file, so creating the partition directories fails.
///
/// Expected: Err(AppError::FileUploadFail) and no metadata rows
#[tokio::test]
async fn failed_upload_keeps_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let blocker = std::env::temp_dir().join(format!("spinner-blocker-{}", uuid::Uuid::new_v4()));
    std::fs::write(&blocker, b"not a directory")?;
    let store = LocalFileStore::new(blocker.clone());

    let uploader = factory::create_member(db).await?;

    let result = FileService::new(db, &store)
        .upload(uploader.id, vec![incoming("a.txt", None, b"a")])
        .await;

    assert!(matches!(result, Err(AppError::FileUploadFail(_))));
    assert_eq!(entity::prelude::UploadedFile::find().count(db).await?, 0);

    let _ = std::fs::remove_file(&blocker);
    Ok(())
}

/// Tests a request without any non-empty file.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = temp_store();

    let uploader = factory::create_member(db).await?;

    let result = FileService::new(db, &store)
        .upload(uploader.id, vec![incoming("empty.bin", None, b"")])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a metadata failure removes the bytes written for the request.
///
/// The uploader does not exist, so inserting the metadata row violates its
/// foreign key after the first file reached the disk.
///
/// Expected: Err(AppError::FileUploadFail) and the partition left empty
#[tokio::test]
async fn metadata_failure_removes_written_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_file_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = temp_store();

    let result = FileService::new(db, &store)
        .upload(9999, vec![incoming("orphan.txt", None, b"data")])
        .await;

    assert!(matches!(result, Err(AppError::FileUploadFail(_))));

    let leftovers = walk(store.root());
    assert!(leftovers.is_empty(), "leftover files: {:?}", leftovers);

    let _ = std::fs::remove_dir_all(store.root());
    Ok(())
}

fn walk(dir: &std::path::Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walk(&path));
            } else {
                files.push(path);
            }
        }
    }
    files
}
