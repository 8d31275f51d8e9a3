//! Media storage for uploaded images.
//!
//! Image columns hold a path relative to the media root, e.g.
//! `portfolio/images/projects/facade.gif`. [`FileStorage`] is the seam for
//! where those bytes live; [`LocalStorage`] keeps them on the local
//! filesystem under `MEDIA_ROOT`.

use std::io::{Cursor, ErrorKind};
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upload subpath for blog post images.
pub const BLOG_IMAGES: &str = "portfolio/images/blogs";

/// Upload subpath for project gallery images.
pub const PROJECT_IMAGES: &str = "portfolio/images/projects";

/// Upload subpath for the author's portrait.
pub const INFO_IMAGES: &str = "portfolio/images/info";

/// File extensions accepted for image uploads.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Length of the random suffix appended when a file name is already taken.
const SUFFIX_LEN: usize = 7;

/// Give up after this many name collisions in a row.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Longest relative path the image columns hold (`VARCHAR(255)`).
pub const MAX_PATH_LENGTH: usize = 255;

/// Longest single file name, in bytes, on common filesystems.
const MAX_FILE_NAME_BYTES: usize = 255;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path '{0}'")]
    InvalidPath(String),

    #[error("Unsupported image extension '.{0}'")]
    UnsupportedExtension(String),

    #[error("Upload '{0}' is not a valid image")]
    NotAnImage(String),
}

// ---------------------------------------------------------------------------
// Naming helpers
// ---------------------------------------------------------------------------

/// Reduce a client-supplied file name to a safe single path component.
///
/// Directory parts are dropped, whitespace becomes `_`, and anything other
/// than alphanumerics, `-`, `_` and `.` is removed.
pub fn sanitize_file_name(name: &str) -> Result<String, StorageError> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') => Some(c),
            _ => None,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return Err(StorageError::InvalidPath(name.to_string()));
    }
    Ok(cleaned)
}

/// Lower-cased extension of `name`, checked against [`SUPPORTED_IMAGE_EXTENSIONS`].
pub fn image_extension(name: &str) -> Result<String, StorageError> {
    let ext = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => return Err(StorageError::UnsupportedExtension(String::new())),
    };
    if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(StorageError::UnsupportedExtension(ext))
    }
}

/// Insert `suffix` between the stem and the extension: `a.gif` → `a_xyz.gif`.
pub fn suffixed_name(name: &str, suffix: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{suffix}.{ext}"),
        _ => format!("{name}_{suffix}"),
    }
}

/// Shorten the stem of `name` to at most `max_chars` characters and
/// `max_bytes` bytes, keeping the extension. `None` if nothing of the stem
/// would remain.
pub fn truncate_file_name(name: &str, max_chars: usize, max_bytes: usize) -> Option<String> {
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, format!(".{ext}")),
        _ => (name, String::new()),
    };
    let ext_chars = ext.chars().count();

    let mut stem = stem.to_string();
    while !stem.is_empty()
        && (stem.chars().count() + ext_chars > max_chars || stem.len() + ext.len() > max_bytes)
    {
        stem.pop();
    }

    if stem.is_empty() {
        None
    } else {
        Some(format!("{stem}{ext}"))
    }
}

/// Reject upload subpaths that are absolute or climb out of the media root.
pub fn validate_upload_to(upload_to: &str) -> Result<(), StorageError> {
    let path = Path::new(upload_to);
    let only_normal = path
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if upload_to.is_empty() || !only_normal {
        return Err(StorageError::InvalidPath(upload_to.to_string()));
    }
    Ok(())
}

/// Check that `bytes` decode as one of the supported image formats.
pub fn verify_image(name: &str, bytes: &[u8]) -> Result<image::ImageFormat, StorageError> {
    let not_an_image = || StorageError::NotAnImage(name.to_string());

    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|_| not_an_image())?;
    let format = reader.format().ok_or_else(not_an_image)?;
    reader.into_dimensions().map_err(|_| not_an_image())?;
    Ok(format)
}

fn random_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..SUFFIX_LEN].to_string()
}

// ---------------------------------------------------------------------------
// Storage backends
// ---------------------------------------------------------------------------

/// Destination for uploaded files.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store `bytes` under `upload_to` and return the path relative to the
    /// media root. Never overwrites an existing file.
    async fn save(
        &self,
        upload_to: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError>;
}

/// Stores uploads on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory that relative media paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileStorage for LocalStorage {
    async fn save(
        &self,
        upload_to: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        validate_upload_to(upload_to)?;
        let upload_to = upload_to.trim_end_matches('/');
        let name = sanitize_file_name(file_name)?;
        image_extension(&name)?;

        // Room for `upload_to/` and a collision suffix.
        let reserved = SUFFIX_LEN + 1;
        let max_chars = MAX_PATH_LENGTH.saturating_sub(upload_to.chars().count() + 1 + reserved);
        let name = truncate_file_name(&name, max_chars, MAX_FILE_NAME_BYTES - reserved)
            .ok_or_else(|| StorageError::InvalidPath(file_name.to_string()))?;
        verify_image(&name, bytes)?;

        let dir = self.root.join(upload_to);
        tokio::fs::create_dir_all(&dir).await?;

        let mut candidate = name.clone();
        for _ in 0..MAX_NAME_ATTEMPTS {
            let open = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(dir.join(&candidate))
                .await;
            match open {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    let relative = format!("{upload_to}/{candidate}");
                    tracing::debug!(path = %relative, size = bytes.len(), "Stored media file");
                    return Ok(relative);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    candidate = suffixed_name(&name, &random_suffix());
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StorageError::Io(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name for '{name}' in {upload_to}"),
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// A 2x1 GIF.
    const SMALL_GIF: &[u8] = b"\x47\x49\x46\x38\x39\x61\x02\x00\
        \x01\x00\x80\x00\x00\x00\x00\x00\
        \xFF\xFF\xFF\x21\xF9\x04\x00\x00\
        \x00\x00\x00\x2C\x00\x00\x00\x00\
        \x02\x00\x01\x00\x00\x02\x02\x0C\
        \x0A\x00\x3B";

    #[test]
    fn sanitize_drops_directories_and_odd_characters() {
        assert_eq!(sanitize_file_name("../../etc/my photo!.gif").unwrap(), "my_photo.gif");
        assert_eq!(sanitize_file_name("C:\\pics\\fasad.png").unwrap(), "fasad.png");
        assert_eq!(sanitize_file_name("дом.jpg").unwrap(), "дом.jpg");
    }

    #[test]
    fn sanitize_rejects_empty_names() {
        assert_matches!(sanitize_file_name("///"), Err(StorageError::InvalidPath(_)));
        assert_matches!(sanitize_file_name(".."), Err(StorageError::InvalidPath(_)));
    }

    #[test]
    fn extension_is_checked_case_insensitively() {
        assert_eq!(image_extension("A.GIF").unwrap(), "gif");
        assert_matches!(
            image_extension("notes.txt"),
            Err(StorageError::UnsupportedExtension(ext)) if ext == "txt"
        );
        assert_matches!(image_extension("noext"), Err(StorageError::UnsupportedExtension(_)));
    }

    #[test]
    fn suffix_goes_before_extension() {
        assert_eq!(suffixed_name("small.gif", "abc1234"), "small_abc1234.gif");
        assert_eq!(suffixed_name("small", "abc1234"), "small_abc1234");
    }

    #[test]
    fn truncation_keeps_the_extension() {
        let long = format!("{}.gif", "a".repeat(300));
        assert_eq!(
            truncate_file_name(&long, 20, 255).unwrap(),
            format!("{}.gif", "a".repeat(16))
        );
        assert_eq!(truncate_file_name("small.gif", 20, 255).unwrap(), "small.gif");

        let cyrillic = format!("{}.gif", "д".repeat(200));
        let cut = truncate_file_name(&cyrillic, 255, 100).unwrap();
        assert!(cut.len() <= 100);
        assert!(cut.ends_with(".gif"));

        assert_eq!(truncate_file_name("a.gif", 4, 255), None);
    }

    #[test]
    fn upload_to_must_stay_inside_root() {
        assert!(validate_upload_to(PROJECT_IMAGES).is_ok());
        assert!(validate_upload_to("../outside").is_err());
        assert!(validate_upload_to("/abs/path").is_err());
        assert!(validate_upload_to("").is_err());
    }

    #[test]
    fn gif_bytes_verify() {
        assert_eq!(verify_image("small.gif", SMALL_GIF).unwrap(), image::ImageFormat::Gif);
        assert_matches!(
            verify_image("fake.gif", b"definitely not an image"),
            Err(StorageError::NotAnImage(_))
        );
    }

    #[tokio::test]
    async fn local_storage_saves_under_upload_path() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        let path = storage.save(PROJECT_IMAGES, "small.gif", SMALL_GIF).await.unwrap();

        assert_eq!(path, "portfolio/images/projects/small.gif");
        assert_eq!(storage.root(), dir.path());
        let written = std::fs::read(dir.path().join(&path)).unwrap();
        assert_eq!(written, SMALL_GIF);
    }

    #[tokio::test]
    async fn local_storage_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        let first = storage.save(BLOG_IMAGES, "small.gif", SMALL_GIF).await.unwrap();
        let second = storage.save(BLOG_IMAGES, "small.gif", SMALL_GIF).await.unwrap();

        assert_ne!(first, second);
        assert!(second.starts_with("portfolio/images/blogs/small_"));
        assert!(second.ends_with(".gif"));
    }

    #[tokio::test]
    async fn long_names_fit_the_image_column() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let long = format!("{}.gif", "фасад".repeat(80));

        let first = storage.save(PROJECT_IMAGES, &long, SMALL_GIF).await.unwrap();
        let second = storage.save(PROJECT_IMAGES, &long, SMALL_GIF).await.unwrap();

        for path in [&first, &second] {
            assert!(path.chars().count() <= MAX_PATH_LENGTH);
            assert!(path.starts_with("portfolio/images/projects/"));
            assert!(path.ends_with(".gif"));
            assert!(dir.path().join(path).exists());
        }
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn local_storage_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        let result = storage.save(INFO_IMAGES, "evil.gif", b"<script>").await;

        assert_matches!(result, Err(StorageError::NotAnImage(_)));
        assert!(!dir.path().join(INFO_IMAGES).join("evil.gif").exists());
    }
}
