//! Photographer page: profile header, sortable gallery, lightbox and contact modal
//!
//! The page is one explicit instance holding every component it mounts. The
//! like session is not owned here: it outlives page navigation and is passed
//! in by the shell wherever likes are read or toggled.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

use crate::route::Route;
use crate::state::contact::{ContactField, ContactKeyOutcome, ContactModal, SubmitOutcome};
use crate::state::data::{AssetPaths, Database, Media, MediaId, MediaKind, PhotographerId};
use crate::state::focus::{cycle, FocusChange, FocusTarget, KeyPress, NavKey};
use crate::state::gallery::{build_gallery, GalleryGrid, RenderTarget};
use crate::state::lightbox::{Lightbox, LightboxOutcome};
use crate::state::likes::{LikeChanged, LikeSession, LikeTally};
use crate::state::profile::ProfileHeader;
use crate::state::sort::{sort_items, SortControl, SortKey, SortOutcome};

use super::{Effect, ThumbnailJob};

#[derive(Debug, Clone)]
pub struct PhotographerPage {
    header: ProfileHeader,
    assets: AssetPaths,
    cache_dir: PathBuf,
    /// Media in the current sort order
    items: Vec<Media>,
    grid: GalleryGrid,
    sort: SortControl,
    lightbox: Lightbox,
    contact: ContactModal,
    tally: LikeTally,
    /// Thumbnails already resolved, reapplied on every rebuild
    thumbnails: HashMap<MediaId, PathBuf>,
    requested: HashSet<MediaId>,
    focus: Option<FocusTarget>,
}

impl PhotographerPage {
    /// Mount the page for the photographer selected by `id`
    ///
    /// Falls back to the first photographer when `id` doesn't match; returns
    /// `None` only when the database has no photographers at all.
    pub fn mount(
        db: &Database,
        id: Option<PhotographerId>,
        assets: AssetPaths,
        cache_dir: PathBuf,
        session: &LikeSession,
    ) -> Option<(Self, Vec<Effect>)> {
        let photographer = db.find_photographer(id)?;
        let sort = SortControl::new(SortKey::Popularity);
        let items = sort_items(&db.media_for(photographer.id), sort.selected());
        let tally = LikeTally::from_media(&items, session);

        let mut page = PhotographerPage {
            header: ProfileHeader::build(photographer, &assets),
            assets,
            cache_dir,
            items,
            grid: GalleryGrid::new(),
            sort,
            lightbox: Lightbox::new(),
            contact: ContactModal::new(photographer.name.clone()),
            tally,
            thumbnails: HashMap::new(),
            requested: HashSet::new(),
            focus: None,
        };
        page.rebuild(session);

        log::info!(
            "📷 Mounted {} with {} media ({} likes)",
            page.header.name,
            page.items.len(),
            page.tally.total()
        );

        let effects = page.pending_thumbnails();
        Some((page, effects))
    }

    pub fn header(&self) -> &ProfileHeader {
        &self.header
    }

    pub fn grid(&self) -> &GalleryGrid {
        &self.grid
    }

    pub fn sort(&self) -> &SortControl {
        &self.sort
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn contact(&self) -> &ContactModal {
        &self.contact
    }

    pub fn total_likes(&self) -> i64 {
        self.tally.total()
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    /// Background is frozen while either modal is up
    pub fn scroll_locked(&self) -> bool {
        self.lightbox.suspends_scroll() || self.contact.is_open()
    }

    /// Rebuild the gallery from `items` and rewire the lightbox against it
    fn rebuild(&mut self, session: &LikeSession) {
        build_gallery(&mut self.grid, &self.items, &self.assets, session);
        for card in self.grid.cards_mut() {
            if let Some(path) = self.thumbnails.get(&card.media_id) {
                card.set_thumbnail(path.clone());
            }
        }
        self.lightbox.rewire(&mut self.grid);
    }

    /// Image cards whose thumbnail hasn't been requested yet
    fn pending_thumbnails(&mut self) -> Vec<Effect> {
        let jobs: Vec<ThumbnailJob> = self
            .grid
            .cards()
            .iter()
            .filter(|card| card.kind == MediaKind::Image)
            .filter(|card| self.requested.insert(card.media_id))
            .map(|card| ThumbnailJob {
                media_id: card.media_id,
                source: card.src.clone(),
                cache_dir: self.cache_dir.clone(),
            })
            .collect();

        if jobs.is_empty() {
            Vec::new()
        } else {
            vec![Effect::LoadThumbnails(jobs)]
        }
    }

    /// A thumbnail finished (or failed, in which case the full source is shown)
    pub fn thumbnail_ready(&mut self, media_id: MediaId, path: Option<PathBuf>) {
        let Some(card) = self.grid.find_mut(media_id) else {
            return;
        };
        let path = path.unwrap_or_else(|| card.src.clone());
        card.set_thumbnail(path.clone());
        self.thumbnails.insert(media_id, path);
    }

    /// Move focus, blurring a contact field that loses it
    fn set_focus(&mut self, change: FocusChange) -> Vec<Effect> {
        let previous = self.focus;
        self.focus = change.apply(previous);

        if previous == self.focus {
            return Vec::new();
        }
        if let Some(FocusTarget::ContactField(field)) = previous {
            self.contact.blur(field);
        }
        match (previous, self.focus) {
            (_, Some(FocusTarget::ContactField(field))) => vec![Effect::FocusInput(field)],
            (Some(FocusTarget::ContactField(_)), _) => vec![Effect::ReleaseInput],
            _ => Vec::new(),
        }
    }

    fn apply_lightbox(&mut self, outcome: LightboxOutcome) -> Vec<Effect> {
        let mut effects = self.set_focus(outcome.focus);
        if let Some(probe) = outcome.probe {
            effects.push(Effect::ProbeVideo(probe));
        }
        effects
    }

    fn apply_sort(&mut self, outcome: SortOutcome, session: &LikeSession) -> Vec<Effect> {
        let mut effects = self.set_focus(outcome.focus);
        if let Some(key) = outcome.commit {
            self.items = sort_items(&self.items, key);
            self.rebuild(session);
            log::info!("↕️  Gallery sorted by {}", key);
            effects.extend(self.pending_thumbnails());
        }
        effects
    }

    // ========== Lightbox ==========

    /// Card activation: the card takes focus, then the lightbox opens on it
    pub fn open_media(&mut self, index: usize) -> Vec<Effect> {
        if self.grid.get(index).is_none() {
            return Vec::new();
        }
        self.collapse_sort();
        self.set_focus(FocusChange::Move(FocusTarget::MediaCard(index)));
        let outcome = self.lightbox.open(index, self.focus);
        self.apply_lightbox(outcome)
    }

    pub fn close_lightbox(&mut self) -> Vec<Effect> {
        let outcome = self.lightbox.close();
        self.apply_lightbox(outcome)
    }

    pub fn next_media(&mut self) -> Vec<Effect> {
        let outcome = self.lightbox.next();
        self.apply_lightbox(outcome)
    }

    pub fn prev_media(&mut self) -> Vec<Effect> {
        let outcome = self.lightbox.prev();
        self.apply_lightbox(outcome)
    }

    pub fn video_can_play(&mut self, generation: u64) {
        self.lightbox.can_play(generation);
    }

    pub fn playback_tick(&mut self, elapsed: Duration) {
        self.lightbox.tick(elapsed);
    }

    /// Play/pause button of the staged video
    pub fn toggle_playback(&mut self) -> Vec<Effect> {
        self.lightbox.toggle_playback();
        self.set_focus(FocusChange::Move(FocusTarget::LightboxPlay))
    }

    // ========== Likes ==========

    /// Like button of the card at `index`
    pub fn toggle_like(&mut self, index: usize, session: &mut LikeSession) -> Vec<Effect> {
        if self.grid.get(index).is_none() {
            return Vec::new();
        }
        self.collapse_sort();
        let Some(card) = self.grid.get_mut(index) else {
            return Vec::new();
        };
        let change = card.toggle_like(session);
        self.on_like_changed(&change);
        self.set_focus(FocusChange::Move(FocusTarget::LikeButton(index)))
    }

    /// Listener for like notifications: keeps the total in the stats badge current
    fn on_like_changed(&mut self, change: &LikeChanged) {
        self.tally.apply(change);
        log::info!(
            "❤ media {} {:+} (total {})",
            change.media_id,
            change.likes_delta,
            self.tally.total()
        );
    }

    // ========== Sort control ==========

    pub fn toggle_sort(&mut self, session: &LikeSession) -> Vec<Effect> {
        let outcome = self.sort.toggle();
        self.apply_sort(outcome, session)
    }

    pub fn select_sort(&mut self, key: SortKey, session: &LikeSession) -> Vec<Effect> {
        let outcome = self.sort.commit(key);
        self.apply_sort(outcome, session)
    }

    /// Another page control took the click; the activated control keeps focus
    fn collapse_sort(&mut self) {
        if self.sort.outside_click().is_some() {
            log::debug!("Sort list collapsed by page activation");
        }
    }

    /// A click that no widget handled
    pub fn outside_click(&mut self, session: &LikeSession) -> Vec<Effect> {
        match self.sort.outside_click() {
            Some(outcome) => self.apply_sort(outcome, session),
            None => Vec::new(),
        }
    }

    // ========== Contact modal ==========

    pub fn open_contact(&mut self) -> Vec<Effect> {
        self.collapse_sort();
        self.set_focus(FocusChange::Move(FocusTarget::ContactButton));
        let change = self.contact.open(self.focus);
        self.set_focus(change)
    }

    pub fn close_contact(&mut self) -> Vec<Effect> {
        let change = self.contact.close();
        self.set_focus(change)
    }

    /// Typing into a field also means it holds focus
    pub fn contact_input(&mut self, field: ContactField, value: String) {
        self.contact.input(field, value);
        let previous = self.focus;
        if previous != Some(FocusTarget::ContactField(field)) {
            if let Some(FocusTarget::ContactField(left)) = previous {
                self.contact.blur(left);
            }
            self.focus = Some(FocusTarget::ContactField(field));
        }
    }

    pub fn submit_contact(&mut self) -> Vec<Effect> {
        let outcome = self.contact.submit();
        self.after_submit(outcome)
    }

    fn after_submit(&mut self, outcome: SubmitOutcome) -> Vec<Effect> {
        match outcome {
            SubmitOutcome::Sent { payload, focus } => {
                log::info!("📧 Contact form submitted to {}", self.header.name);
                log::info!("   First name: {}", payload.first_name);
                log::info!("   Last name:  {}", payload.last_name);
                log::info!("   Email:      {}", payload.email);
                log::info!("   Message:    {}", payload.message);
                self.set_focus(focus)
            }
            SubmitOutcome::Invalid { focus } => self.set_focus(focus),
        }
    }

    // ========== Keyboard ==========

    /// Tab order of the page when no modal is open
    fn page_ring(&self) -> Vec<FocusTarget> {
        let mut ring = vec![
            FocusTarget::HomeLink,
            FocusTarget::ContactButton,
            FocusTarget::SortButton,
        ];
        if self.sort.is_expanded() {
            ring.extend(SortKey::ALL.iter().map(|k| FocusTarget::SortOption(*k)));
        }
        for index in 0..self.grid.len() {
            ring.push(FocusTarget::MediaCard(index));
            ring.push(FocusTarget::LikeButton(index));
        }
        ring
    }

    /// Route a key press to the component that owns it
    pub fn handle_key(&mut self, press: KeyPress, session: &mut LikeSession) -> Vec<Effect> {
        if self.lightbox.is_open() {
            let outcome = self.lightbox.handle_key(press, self.focus);
            return self.apply_lightbox(outcome);
        }

        if self.contact.is_open() {
            return match self.contact.handle_key(press, self.focus) {
                Some(ContactKeyOutcome::Focus(change)) => self.set_focus(change),
                Some(ContactKeyOutcome::Submitted(outcome)) => self.after_submit(outcome),
                None => Vec::new(),
            };
        }

        if let Some(FocusTarget::SortOption(_)) = self.focus {
            if let Some(outcome) = self.sort.on_list_key(press, self.focus) {
                return self.apply_sort(outcome, session);
            }
        }

        match (press.key, self.focus) {
            (NavKey::Tab, current) => {
                let next = cycle(&self.page_ring(), current, press.shift);
                self.set_focus(next.map(FocusChange::Move).unwrap_or(FocusChange::Keep))
            }
            (_, Some(FocusTarget::SortButton)) => match self.sort.on_trigger_key(press) {
                Some(outcome) => self.apply_sort(outcome, session),
                None => Vec::new(),
            },
            (key, Some(target)) if key.is_activation() => self.activate(target, session),
            _ => Vec::new(),
        }
    }

    /// Enter/Space on a focused control
    fn activate(&mut self, target: FocusTarget, session: &mut LikeSession) -> Vec<Effect> {
        match target {
            FocusTarget::HomeLink => vec![Effect::Navigate(Route::Index)],
            FocusTarget::ContactButton => self.open_contact(),
            FocusTarget::SortButton => self.toggle_sort(session),
            FocusTarget::SortOption(key) => self.select_sort(key, session),
            FocusTarget::MediaCard(index) => self.open_media(index),
            FocusTarget::LikeButton(index) => self.toggle_like(index, session),
            _ => Vec::new(),
        }
    }
}

/// Resolves once a staged video file is readable, the desktop stand-in for
/// the element's can-play signal
pub async fn probe_video(src: PathBuf) -> bool {
    match tokio::fs::metadata(&src).await {
        Ok(meta) => meta.is_file(),
        Err(e) => {
            log::warn!("⚠️  Video {} unavailable: {}", src.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::state::data::Photographer;
    use crate::state::lightbox::Stage;

    fn media(id: MediaId, title: &str, likes: u32, kind: MediaKind) -> Media {
        Media {
            id,
            photographer_id: 82,
            title: title.to_string(),
            kind,
            file: format!("{}.{}", id, if kind == MediaKind::Video { "mp4" } else { "jpg" }),
            likes,
            date: format!("2020-01-{:02}", id % 28 + 1),
            price: None,
        }
    }

    fn db() -> Database {
        Database {
            photographers: vec![Photographer {
                id: 82,
                name: "Tracy Galindo".to_string(),
                city: "Montreal".to_string(),
                country: "Canada".to_string(),
                tagline: "Photographe freelance".to_string(),
                price: 500,
                portrait: "TracyGalindo.jpg".to_string(),
            }],
            media: vec![
                media(1, "Banana", 5, MediaKind::Image),
                media(2, "Apple", 10, MediaKind::Image),
                media(3, "Cherry", 7, MediaKind::Video),
                Media {
                    photographer_id: 999,
                    ..media(4, "Elsewhere", 100, MediaKind::Image)
                },
            ],
        }
    }

    fn mount(session: &LikeSession) -> (PhotographerPage, Vec<Effect>) {
        PhotographerPage::mount(&db(), Some(82), AssetPaths::new("assets"), PathBuf::from("/tmp/thumbs"), session)
            .expect("photographer exists")
    }

    fn card_ids(page: &PhotographerPage) -> Vec<MediaId> {
        page.grid().cards().iter().map(|c| c.media_id).collect()
    }

    #[test]
    fn test_mount_sorts_by_popularity_and_totals_likes() {
        let (page, effects) = mount(&LikeSession::new());

        assert_eq!(card_ids(&page), vec![2, 3, 1]);
        assert_eq!(page.total_likes(), 22);
        assert_eq!(page.sort().label(), "Popularity");
        assert_eq!(page.header().daily_rate, "500€ / day");

        match &effects[..] {
            [Effect::LoadThumbnails(jobs)] => {
                let ids: Vec<_> = jobs.iter().map(|j| j.media_id).collect();
                assert_eq!(ids, vec![2, 1], "videos get no thumbnail job");
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_mount_without_photographers() {
        let empty = Database::default();
        assert!(PhotographerPage::mount(&empty, Some(1), AssetPaths::new("assets"), PathBuf::new(), &LikeSession::new()).is_none());
    }

    #[test]
    fn test_session_likes_count_toward_total() {
        let mut session = LikeSession::new();
        session.toggle(1);
        let (page, _) = mount(&session);

        assert_eq!(page.total_likes(), 23);
        assert!(page.grid().cards()[2].is_liked());
    }

    #[test]
    fn test_like_updates_card_and_total() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.toggle_like(0, &mut session);
        assert_eq!(page.grid().cards()[0].likes(), 11);
        assert_eq!(page.total_likes(), 23);
        assert!(!page.lightbox().is_open(), "liking never opens the lightbox");

        page.toggle_like(0, &mut session);
        assert_eq!(page.grid().cards()[0].likes(), 10);
        assert_eq!(page.total_likes(), 22);
    }

    #[test]
    fn test_sort_rebuilds_gallery_and_lightbox() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.toggle_sort(&session);
        assert!(page.sort().is_expanded());
        assert!(page.is_focused(FocusTarget::SortOption(SortKey::Popularity)));

        page.handle_key(KeyPress::new(NavKey::End), &mut session);
        assert!(page.is_focused(FocusTarget::SortOption(SortKey::Title)));
        let effects = page.handle_key(KeyPress::new(NavKey::Enter), &mut session);

        assert!(effects.is_empty(), "thumbnails were already requested");
        assert!(!page.sort().is_expanded());
        assert!(page.is_focused(FocusTarget::SortButton));
        assert_eq!(card_ids(&page), vec![2, 1, 3]);

        let titles: Vec<_> = page.lightbox().items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(page.grid().cards()[2].index, Some(2));
    }

    #[test]
    fn test_thumbnails_survive_rebuild() {
        let session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.thumbnail_ready(2, Some(PathBuf::from("/tmp/thumbs/2.jpg")));
        page.thumbnail_ready(1, None);
        page.select_sort(SortKey::Date, &session);

        let card = |id| page.grid().cards().iter().find(|c| c.media_id == id).unwrap().clone();
        assert_eq!(card(2).display_path(), Some(Path::new("/tmp/thumbs/2.jpg")));
        assert_eq!(card(1).display_path(), Some(Path::new("assets/medias/82/1.jpg")));
    }

    #[test]
    fn test_keyboard_open_and_close_restores_focus() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);

        // home, contact, sort, card 0, like 0, card 1
        for _ in 0..6 {
            page.handle_key(KeyPress::new(NavKey::Tab), &mut session);
        }
        assert!(page.is_focused(FocusTarget::MediaCard(1)));

        let effects = page.handle_key(KeyPress::new(NavKey::Enter), &mut session);
        assert!(page.lightbox().is_open());
        assert!(page.scroll_locked());
        assert!(page.is_focused(FocusTarget::LightboxClose));
        // Card 1 is the video
        assert!(matches!(&effects[..], [Effect::ProbeVideo(_)]));

        page.handle_key(KeyPress::new(NavKey::Escape), &mut session);
        assert!(!page.lightbox().is_open());
        assert!(page.is_focused(FocusTarget::MediaCard(1)));
    }

    #[test]
    fn test_lightbox_swallows_page_keys() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);
        page.open_media(0);

        page.handle_key(KeyPress::new(NavKey::Tab), &mut session);
        assert!(page.is_focused(FocusTarget::LightboxPrev));
        page.handle_key(KeyPress::new(NavKey::Space), &mut session);
        assert_eq!(page.lightbox().current(), Some(2));
        assert!(matches!(page.lightbox().stage(), Stage::Image { .. }));
    }

    #[test]
    fn test_page_tab_wraps() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.handle_key(KeyPress::shifted(NavKey::Tab), &mut session);
        assert!(page.is_focused(FocusTarget::LikeButton(2)));
        page.handle_key(KeyPress::new(NavKey::Tab), &mut session);
        assert!(page.is_focused(FocusTarget::HomeLink));

        let effects = page.handle_key(KeyPress::new(NavKey::Enter), &mut session);
        assert_eq!(effects, vec![Effect::Navigate(Route::Index)]);
    }

    #[test]
    fn test_contact_flow() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);

        let effects = page.open_contact();
        assert_eq!(effects, vec![Effect::FocusInput(ContactField::FirstName)]);
        assert!(page.scroll_locked());
        assert_eq!(page.contact().recipient(), "Tracy Galindo");

        // Invalid submit focuses the first invalid field
        page.submit_contact();
        assert!(page.is_focused(FocusTarget::ContactField(ContactField::FirstName)));
        assert!(page.contact().error(ContactField::FirstName).is_some());

        // Typing then tabbing away clears the error on blur
        page.contact_input(ContactField::FirstName, "Ada".to_string());
        let effects = page.handle_key(KeyPress::new(NavKey::Tab), &mut session);
        assert_eq!(effects, vec![Effect::FocusInput(ContactField::LastName)]);
        assert!(page.contact().error(ContactField::FirstName).is_none());

        page.contact_input(ContactField::LastName, "Lovelace".to_string());
        page.contact_input(ContactField::Email, "ada@example.com".to_string());
        page.contact_input(ContactField::Message, "Available next spring?".to_string());
        let effects = page.submit_contact();

        assert_eq!(effects, vec![Effect::ReleaseInput]);
        assert!(!page.contact().is_open());
        assert!(page.is_focused(FocusTarget::ContactButton));
    }

    #[test]
    fn test_outside_click_collapses_sort() {
        let session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.toggle_sort(&session);
        page.outside_click(&session);
        assert!(!page.sort().is_expanded());
        assert!(page.is_focused(FocusTarget::SortButton));
    }

    #[test]
    fn test_like_click_collapses_sort() {
        let mut session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.toggle_sort(&session);
        page.toggle_like(0, &mut session);
        assert!(!page.sort().is_expanded());
        assert!(page.is_focused(FocusTarget::LikeButton(0)));
        assert_eq!(page.grid().cards()[0].likes(), 11);
    }

    #[test]
    fn test_contact_click_collapses_sort() {
        let session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.toggle_sort(&session);
        page.open_contact();
        assert!(!page.sort().is_expanded());
        assert!(page.contact().is_open());

        page.close_contact();
        assert!(!page.sort().is_expanded());
        assert!(page.is_focused(FocusTarget::ContactButton));
    }

    #[test]
    fn test_card_click_collapses_sort() {
        let session = LikeSession::new();
        let (mut page, _) = mount(&session);

        page.toggle_sort(&session);
        page.open_media(0);
        assert!(!page.sort().is_expanded());
        assert!(page.lightbox().is_open());

        page.close_lightbox();
        assert!(!page.sort().is_expanded());
        assert!(page.is_focused(FocusTarget::MediaCard(0)));
    }

    #[test]
    fn test_play_button_pauses_video() {
        let session = LikeSession::new();
        let (mut page, _) = mount(&session);

        let generation = match &page.open_media(1)[..] {
            [Effect::ProbeVideo(request)] => request.generation,
            other => panic!("unexpected effects {:?}", other),
        };
        page.video_can_play(generation);
        assert!(page.lightbox().is_playing());

        page.toggle_playback();
        assert!(!page.lightbox().is_playing());
        assert!(page.is_focused(FocusTarget::LightboxPlay));

        page.playback_tick(Duration::from_secs(120));
        page.toggle_playback();
        assert!(page.lightbox().is_playing());
    }

    #[tokio::test]
    async fn test_probe_video() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"not really a video").unwrap();

        assert!(probe_video(video).await);
        assert!(!probe_video(dir.path().join("missing.mp4")).await);
    }
}
