use super::*;

#[test]
fn mime_follows_extension() {
    assert_eq!(guess_mime("cat.png"), "image/png");
    assert_eq!(guess_mime("cat.JPG"), "image/jpeg");
    assert_eq!(guess_mime("cat.jpeg"), "image/jpeg");
    assert_eq!(guess_mime("anim.gif"), "image/gif");
}

#[test]
fn unknown_extension_is_octet_stream() {
    assert_eq!(guess_mime("notes.txt"), "application/octet-stream");
    assert_eq!(guess_mime("README"), "application/octet-stream");
}

#[tokio::test]
async fn load_names_file_after_path() {
    let dir = std::env::temp_dir().join(format!("filter-studio-load-{}", std::process::id()));
    let path = save(&dir, "pixel.png", &[1, 2, 3]).await.unwrap();
    let file = load(&path).await.unwrap();
    assert_eq!(file.name, "pixel.png");
    assert_eq!(file.mime, "image/png");
    assert_eq!(file.bytes, vec![1, 2, 3]);
    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn load_missing_file_is_io_error() {
    let result = load(Path::new("/definitely/not/here.png")).await;
    assert!(matches!(result, Err(CliError::Io(_))));
}
