//! Gallery thumbnails
//!
//! Full-size portfolio images are far larger than a gallery card, so image
//! cards show a downscaled copy generated on first use and kept in the
//! cache directory. The cache name carries the source's folder and file
//! stem next to the media id, and a source modified after its thumbnail
//! was written is resized again.

use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tokio::task;

use crate::state::data::MediaId;

/// Longest edge of generated thumbnails
const THUMBNAIL_SIZE: u32 = 350;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("task join error: {0}")]
    Join(String),
}

/// Expected thumbnail location: `<folder>-<id>-<stem>.jpg`
pub fn thumbnail_path(cache_dir: &Path, media_id: MediaId, source: &Path) -> PathBuf {
    let folder = source
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = source
        .file_stem()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    cache_dir.join(format!(
        "{}-{}-{}.jpg",
        file_safe(&folder),
        media_id,
        file_safe(&stem)
    ))
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// A cached file is stale only when the source is known to be newer
fn is_fresh(target: &Path, source: &Path) -> bool {
    match (modified(target), modified(source)) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(cached), Some(original)) => cached >= original,
    }
}

/// Return the cached thumbnail, generating it first if needed
pub fn generate_thumbnail(
    source: &Path,
    cache_dir: &Path,
    media_id: MediaId,
) -> Result<PathBuf, ThumbnailError> {
    let target = thumbnail_path(cache_dir, media_id, source);
    if is_fresh(&target, source) {
        return Ok(target);
    }

    fs::create_dir_all(cache_dir)?;

    let img = image::open(source)?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    // JPEG has no alpha channel
    thumbnail.to_rgb8().save(&target)?;

    log::debug!("📸 Generated thumbnail: {}", target.display());
    Ok(target)
}

/// Generate a thumbnail on the blocking pool
///
/// Always answers with the media id so the caller can match the result to
/// its card; `None` means the card should fall back to the full-size source.
pub async fn load_thumbnail(
    source: PathBuf,
    cache_dir: PathBuf,
    media_id: MediaId,
) -> (MediaId, Option<PathBuf>) {
    let result = task::spawn_blocking(move || generate_thumbnail(&source, &cache_dir, media_id))
        .await
        .map_err(|e| ThumbnailError::Join(e.to_string()))
        .and_then(|r| r);

    match result {
        Ok(path) => (media_id, Some(path)),
        Err(e) => {
            log::warn!("⚠️  Thumbnail for media {} failed: {}", media_id, e);
            (media_id, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage};

    fn write_source(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("source.png");
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_generate_fits_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 1400, 700);
        let cache = dir.path().join("cache");

        let path = generate_thumbnail(&source, &cache, 42).unwrap();
        assert_eq!(path, thumbnail_path(&cache, 42, &source));
        assert!(path.to_string_lossy().ends_with("-42-source.jpg"));

        let (width, height) = image::open(&path).unwrap().dimensions();
        assert_eq!(width, THUMBNAIL_SIZE);
        assert_eq!(height, THUMBNAIL_SIZE / 2);
    }

    #[test]
    fn test_existing_thumbnail_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("cache");
        fs::create_dir_all(&cache).unwrap();
        let missing = dir.path().join("missing.jpg");
        fs::write(thumbnail_path(&cache, 7, &missing), b"cached").unwrap();

        // The source doesn't even exist: the cache hit short-circuits
        let path = generate_thumbnail(&missing, &cache, 7).unwrap();
        assert_eq!(fs::read(path).unwrap(), b"cached");
    }

    #[test]
    fn test_cache_name_tracks_source_file() {
        let cache = Path::new("/tmp/thumbs");

        let first = thumbnail_path(cache, 5, Path::new("assets/medias/82/Sport_Next_Hold.jpg"));
        assert_eq!(first, cache.join("82-5-Sport_Next_Hold.jpg"));

        // Same id, different photographer folder or file: different entry
        let moved = thumbnail_path(cache, 5, Path::new("assets/medias/925/Sport_Next_Hold.jpg"));
        let renamed = thumbnail_path(cache, 5, Path::new("assets/medias/82/Portrait Wednesday.jpg"));
        assert_ne!(first, moved);
        assert_ne!(first, renamed);
        assert_eq!(renamed, cache.join("82-5-Portrait_Wednesday.jpg"));
    }

    #[test]
    fn test_newer_source_regenerates() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 700, 700);
        let cache = dir.path().join("cache");
        fs::create_dir_all(&cache).unwrap();

        let target = thumbnail_path(&cache, 3, &source);
        fs::write(&target, b"stale").unwrap();
        let an_hour_ago = SystemTime::now() - std::time::Duration::from_secs(3600);
        fs::File::options()
            .write(true)
            .open(&target)
            .unwrap()
            .set_modified(an_hour_ago)
            .unwrap();

        let path = generate_thumbnail(&source, &cache, 3).unwrap();
        assert_eq!(path, target);
        let (width, height) = image::open(&path).unwrap().dimensions();
        assert_eq!((width, height), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
    }

    #[tokio::test]
    async fn test_load_missing_source_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_thumbnail(
            dir.path().join("missing.jpg"),
            dir.path().join("cache"),
            9,
        )
        .await;

        assert_eq!(result, (9, None));
    }
}
