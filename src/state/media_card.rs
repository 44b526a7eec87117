//! Media card factory
//!
//! Turns a [`Media`] record into the view-model of one gallery card: the
//! thumbnail, the caption and the like button. The like button is rendered
//! as its own widget next to the card's activation area, so liking never
//! opens the lightbox.

use std::path::{Path, PathBuf};

use super::data::{AssetPaths, Media, MediaId, MediaKind, PhotographerId};
use super::likes::{LikeChanged, LikeSession};

/// Upper bound of the poster frame offset for video thumbnails, in seconds
const VIDEO_PREVIEW_TIME: f64 = 0.12;
/// Fraction of the video duration used for the poster frame
const VIDEO_PREVIEW_RATIO: f64 = 0.02;

/// Offset of the frame shown as a video thumbnail
///
/// Seeking a little past zero avoids the black first frame many clips start
/// with. Unknown durations count as one second.
pub fn video_preview_time(duration: Option<f64>) -> f64 {
    let duration = duration.filter(|d| d.is_finite() && *d > 0.0).unwrap_or(1.0);
    VIDEO_PREVIEW_TIME.min(duration * VIDEO_PREVIEW_RATIO)
}

/// What the card shows above its caption
#[derive(Debug, Clone, PartialEq)]
pub enum Thumbnail {
    /// Lazily loaded image; `cached` is the downscaled copy once generated
    Image { cached: Option<PathBuf> },
    /// Video poster with a play icon overlay. `preview_at` is the seek
    /// offset in seconds of the poster frame; no decoder is wired in, so the
    /// view draws a placeholder and the offset stays a model value.
    Video { preview_at: f64 },
}

/// One card of the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct MediaCard {
    pub media_id: MediaId,
    pub photographer_id: PhotographerId,
    pub kind: MediaKind,
    /// Full-size source used by the lightbox
    pub src: PathBuf,
    pub title: String,
    /// Accessible label of the card itself
    pub label: String,
    /// Accessible label of the like button
    pub like_label: String,
    pub thumbnail: Thumbnail,
    base_likes: u32,
    likes: u32,
    liked: bool,
    /// Position in the lightbox sequence, stamped when the lightbox is wired
    pub index: Option<usize>,
}

impl MediaCard {
    /// Build the card for a media record
    pub fn build(media: &Media, assets: &AssetPaths, session: &LikeSession) -> Self {
        let thumbnail = match media.kind {
            MediaKind::Image => Thumbnail::Image { cached: None },
            MediaKind::Video => Thumbnail::Video {
                preview_at: video_preview_time(None),
            },
        };

        MediaCard {
            media_id: media.id,
            photographer_id: media.photographer_id,
            kind: media.kind,
            src: assets.media(media),
            title: media.title.clone(),
            label: format!("{}, preview", media.title),
            like_label: format!("Like {}", media.title),
            thumbnail,
            base_likes: media.likes,
            likes: session.displayed_likes(media),
            liked: session.is_liked(media.id),
            index: None,
        }
    }

    /// Count shown on the like button (base + session delta)
    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Pressed state of the like button
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Flip the like, refresh the visible count and report the change
    pub fn toggle_like(&mut self, session: &mut LikeSession) -> LikeChanged {
        let change = session.toggle(self.media_id);
        self.liked = session.is_liked(self.media_id);
        self.likes = self.base_likes + session.delta(self.media_id);
        change
    }

    /// Attach a generated thumbnail to an image card
    pub fn set_thumbnail(&mut self, path: PathBuf) {
        if let Thumbnail::Image { cached } = &mut self.thumbnail {
            *cached = Some(path);
        }
    }

    /// Path the card should display: the cached thumbnail if any, else the source
    pub fn display_path(&self) -> Option<&Path> {
        match &self.thumbnail {
            Thumbnail::Image { cached: Some(path) } => Some(path),
            Thumbnail::Image { cached: None } => None,
            Thumbnail::Video { .. } => None,
        }
    }
}
