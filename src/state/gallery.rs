//! Render target for the media gallery
//!
//! The gallery and the lightbox never talk to widgets directly. They build
//! into, and read back from, a [`RenderTarget`]; the iced view renders
//! whatever the target holds.

use super::data::{AssetPaths, Media, MediaId};
use super::likes::LikeSession;
use super::media_card::MediaCard;

/// Container the gallery renders its cards into
pub trait RenderTarget {
    /// Remove every card
    fn clear(&mut self);

    /// Add a card after the existing ones
    fn append(&mut self, card: MediaCard);

    /// Cards in display order
    fn cards(&self) -> &[MediaCard];

    fn cards_mut(&mut self) -> &mut [MediaCard];
}

/// The gallery grid shown on a photographer page
#[derive(Debug, Default, Clone)]
pub struct GalleryGrid {
    cards: Vec<MediaCard>,
}

impl GalleryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn get(&self, index: usize) -> Option<&MediaCard> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MediaCard> {
        self.cards.get_mut(index)
    }

    /// Card of a given media, wherever it currently sits
    pub fn find_mut(&mut self, media_id: MediaId) -> Option<&mut MediaCard> {
        self.cards.iter_mut().find(|c| c.media_id == media_id)
    }
}

impl RenderTarget for GalleryGrid {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: MediaCard) {
        self.cards.push(card);
    }

    fn cards(&self) -> &[MediaCard] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut [MediaCard] {
        &mut self.cards
    }
}

/// Clear the target and fill it with one card per media, in list order
pub fn build_gallery<T: RenderTarget>(
    target: &mut T,
    media: &[Media],
    assets: &AssetPaths,
    session: &LikeSession,
) {
    target.clear();
    for item in media {
        target.append(MediaCard::build(item, assets, session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaKind;

    /// Target that remembers how often it was cleared
    #[derive(Default)]
    struct RecordingTarget {
        cards: Vec<MediaCard>,
        clears: usize,
    }

    impl RenderTarget for RecordingTarget {
        fn clear(&mut self) {
            self.clears += 1;
            self.cards.clear();
        }

        fn append(&mut self, card: MediaCard) {
            self.cards.push(card);
        }

        fn cards(&self) -> &[MediaCard] {
            &self.cards
        }

        fn cards_mut(&mut self) -> &mut [MediaCard] {
            &mut self.cards
        }
    }

    fn media(id: MediaId) -> Media {
        Media {
            id,
            photographer_id: 1,
            title: format!("Media {}", id),
            kind: MediaKind::Image,
            file: format!("{}.jpg", id),
            likes: id,
            date: "2020-01-01".to_string(),
            price: None,
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let items = vec![media(1), media(2), media(3)];
        let assets = AssetPaths::new("assets");
        let session = LikeSession::new();
        let mut target = RecordingTarget::default();

        build_gallery(&mut target, &items, &assets, &session);
        let first: Vec<_> = target.cards().to_vec();
        build_gallery(&mut target, &items, &assets, &session);

        assert_eq!(target.clears, 2);
        assert_eq!(target.cards(), first.as_slice());
    }

    #[test]
    fn test_build_follows_list_order() {
        let items = vec![media(3), media(1), media(2)];
        let mut grid = GalleryGrid::new();
        build_gallery(&mut grid, &items, &AssetPaths::new("assets"), &LikeSession::new());

        let ids: Vec<_> = grid.cards().iter().map(|c| c.media_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(grid.find_mut(1).is_some());
        assert!(grid.find_mut(9).is_none());
    }
}
