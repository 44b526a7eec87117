//! Per-session like overrides
//!
//! The data file carries a base like count for every media record. The
//! session keeps a separate delta per media id so the base record is never
//! mutated: displayed count = base + delta. The session lives as long as the
//! application and is shared by reference with every page that renders likes.

use std::collections::HashMap;

use super::data::{Media, MediaId};

/// Notification emitted whenever a like button is toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeChanged {
    pub media_id: MediaId,
    /// +1 when the media became liked, -1 when the like was withdrawn
    pub likes_delta: i32,
}

/// In-memory like state for the current session
#[derive(Debug, Default, Clone)]
pub struct LikeSession {
    /// Only ever 0 or 1
    deltas: HashMap<MediaId, u32>,
}

impl LikeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current delta for a media id (0 if never toggled)
    pub fn delta(&self, media_id: MediaId) -> u32 {
        self.deltas.get(&media_id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, media_id: MediaId) -> bool {
        self.delta(media_id) > 0
    }

    /// Count shown on the like button
    pub fn displayed_likes(&self, media: &Media) -> u32 {
        media.likes + self.delta(media.id)
    }

    /// Flip the like state of a media and report the change
    pub fn toggle(&mut self, media_id: MediaId) -> LikeChanged {
        let liked = self.is_liked(media_id);
        let (delta, likes_delta) = if liked { (0, -1) } else { (1, 1) };
        self.deltas.insert(media_id, delta);

        log::debug!("❤ media {} like delta now {}", media_id, delta);

        LikeChanged {
            media_id,
            likes_delta,
        }
    }
}

/// Aggregate total-likes counter shown in the photographer stats badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeTally {
    total: i64,
}

impl LikeTally {
    /// Start from the displayed counts of a photographer's media
    pub fn from_media<'a>(media: impl IntoIterator<Item = &'a Media>, session: &LikeSession) -> Self {
        let total = media
            .into_iter()
            .map(|m| i64::from(session.displayed_likes(m)))
            .sum();
        Self { total }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Listener for [`LikeChanged`] notifications
    pub fn apply(&mut self, change: &LikeChanged) {
        self.total += i64::from(change.likes_delta);
    }
}
