//! Loading local files as upload sources.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::path::Path;

use client::net::types::SourceFile;

use crate::CliError;

/// MIME type for a file name, by extension. Unknown extensions get
/// `application/octet-stream`, which upload validation then rejects.
#[must_use]
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Read `path` into a [`SourceFile`] named after its final component.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read.
pub async fn load(path: &Path) -> Result<SourceFile, CliError> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mime = guess_mime(&name);
    Ok(SourceFile::new(name, mime, bytes))
}

/// Write downloaded bytes into `dir`, returning the full path.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the directory cannot be created or the file written.
pub async fn save(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<std::path::PathBuf, CliError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
