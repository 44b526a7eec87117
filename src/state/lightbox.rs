//! Lightbox: full-screen viewer over the gallery's media
//!
//! The item list is derived from the cards of the render target, never from
//! the raw media records, so the lightbox always follows the current sort
//! order. Call [`Lightbox::rewire`] after every gallery rebuild.

use std::path::PathBuf;
use std::time::Duration;

use super::data::MediaKind;
use super::focus::{cycle, FocusChange, FocusTarget, KeyPress, NavKey};
use super::gallery::RenderTarget;

/// Controls the focus trap cycles through while the lightbox is open
const CONTROLS: [FocusTarget; 3] = [
    FocusTarget::LightboxClose,
    FocusTarget::LightboxPrev,
    FocusTarget::LightboxNext,
];

/// Running time assumed for every clip; no decoder reports the real one
pub const CLIP_LENGTH: Duration = Duration::from_secs(30);

/// One entry of the lightbox sequence
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxItem {
    pub kind: MediaKind,
    pub src: PathBuf,
    pub title: String,
}

/// Playback state of the video on stage
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub muted: bool,
    pub autoplay: bool,
    /// Set once the can-play signal arrived
    ready: bool,
    playing: bool,
    position: Duration,
    length: Duration,
}

impl Playback {
    fn autoplay_muted() -> Self {
        Self {
            muted: true,
            autoplay: true,
            ready: false,
            playing: false,
            position: Duration::ZERO,
            length: CLIP_LENGTH,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn length(&self) -> Duration {
        self.length
    }

    pub fn has_ended(&self) -> bool {
        self.position >= self.length
    }

    /// Position never passes the clip length; reaching it ends playback
    fn advance(&mut self, elapsed: Duration) {
        if !self.playing {
            return;
        }
        self.position = (self.position + elapsed).min(self.length);
        if self.has_ended() {
            self.playing = false;
        }
    }

    /// Play/pause button. Before the can-play signal it only arms or
    /// disarms autoplay; an ended clip restarts from zero.
    fn toggle(&mut self) {
        if self.playing {
            self.playing = false;
            self.autoplay = false;
        } else if self.ready {
            if self.has_ended() {
                self.position = Duration::ZERO;
            }
            self.playing = true;
        } else {
            self.autoplay = !self.autoplay;
        }
    }

    /// Pause and rewind to the start
    fn stop(&mut self) {
        self.playing = false;
        self.position = Duration::ZERO;
    }
}

/// What the display area currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Empty,
    Image {
        src: PathBuf,
        alt: String,
    },
    Video {
        src: PathBuf,
        label: String,
        playback: Playback,
    },
}

/// Request to find out when a freshly staged video can start playing
#[derive(Debug, Clone, PartialEq)]
pub struct CanPlayProbe {
    pub generation: u64,
    pub src: PathBuf,
}

/// Result of a lightbox interaction
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxOutcome {
    pub focus: FocusChange,
    /// Set when a video was staged and is waiting for its can-play signal
    pub probe: Option<CanPlayProbe>,
}

impl LightboxOutcome {
    fn none() -> Self {
        Self {
            focus: FocusChange::Keep,
            probe: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LightboxState {
    Closed,
    Open { current: usize },
}

/// The modal media viewer
#[derive(Debug, Clone)]
pub struct Lightbox {
    items: Vec<LightboxItem>,
    state: LightboxState,
    stage: Stage,
    /// Focus to hand back on close
    return_focus: Option<FocusTarget>,
    /// Bumped on every render so stale can-play signals are ignored
    generation: u64,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: LightboxState::Closed,
            stage: Stage::Empty,
            return_focus: None,
            generation: 0,
        }
    }
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the sequence from the rendered cards and stamp their indices
    pub fn rewire<T: RenderTarget>(&mut self, target: &mut T) {
        self.items = target
            .cards_mut()
            .iter_mut()
            .enumerate()
            .map(|(index, card)| {
                card.index = Some(index);
                LightboxItem {
                    kind: card.kind,
                    src: card.src.clone(),
                    title: card.title.trim().to_string(),
                }
            })
            .collect();

        if let LightboxState::Open { current } = self.state {
            if current >= self.items.len() {
                self.close();
            }
        }
    }

    pub fn items(&self) -> &[LightboxItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Index of the item on stage, if open
    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { current } => Some(current),
            LightboxState::Closed => None,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Background scrolling is suspended while the viewer is up
    pub fn suspends_scroll(&self) -> bool {
        self.is_open()
    }

    /// Controls in tab order; a staged video adds its play/pause button
    fn controls(&self) -> Vec<FocusTarget> {
        let mut controls = CONTROLS.to_vec();
        if matches!(self.stage, Stage::Video { .. }) {
            controls.push(FocusTarget::LightboxPlay);
        }
        controls
    }

    /// Whether a video is currently playing on stage
    pub fn is_playing(&self) -> bool {
        matches!(&self.stage, Stage::Video { playback, .. } if playback.is_playing())
    }

    /// Open on `index`, remembering who had focus; out-of-range is a no-op
    pub fn open(&mut self, index: usize, focused: Option<FocusTarget>) -> LightboxOutcome {
        if index >= self.items.len() {
            return LightboxOutcome::none();
        }

        self.return_focus = focused;
        self.state = LightboxState::Open { current: index };
        let probe = self.render(index);

        log::debug!("🔍 Lightbox opened on item {}", index);

        LightboxOutcome {
            focus: FocusChange::Move(FocusTarget::LightboxClose),
            probe,
        }
    }

    /// Close and hand focus back to whoever had it before opening
    pub fn close(&mut self) -> LightboxOutcome {
        if !self.is_open() {
            return LightboxOutcome::none();
        }

        self.stop_current_video();
        self.state = LightboxState::Closed;
        self.stage = Stage::Empty;

        log::debug!("🔍 Lightbox closed");

        LightboxOutcome {
            focus: FocusChange::restore(self.return_focus.take()),
            probe: None,
        }
    }

    pub fn next(&mut self) -> LightboxOutcome {
        self.step(|current, len| (current + 1) % len)
    }

    pub fn prev(&mut self) -> LightboxOutcome {
        self.step(|current, len| (current + len - 1) % len)
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> LightboxOutcome {
        let LightboxState::Open { current } = self.state else {
            return LightboxOutcome::none();
        };
        let len = self.items.len();
        if len == 0 {
            return LightboxOutcome::none();
        }

        self.stop_current_video();
        let next = advance(current, len);
        self.state = LightboxState::Open { current: next };

        LightboxOutcome {
            focus: FocusChange::Keep,
            probe: self.render(next),
        }
    }

    /// Replace the stage with a fresh element for `index`
    fn render(&mut self, index: usize) -> Option<CanPlayProbe> {
        let item = self.items.get(index)?.clone();
        self.generation = self.generation.wrapping_add(1);

        match item.kind {
            MediaKind::Image => {
                self.stage = Stage::Image {
                    src: item.src,
                    alt: item.title,
                };
                None
            }
            MediaKind::Video => {
                let label = if item.title.is_empty() {
                    "Video".to_string()
                } else {
                    item.title
                };
                self.stage = Stage::Video {
                    src: item.src.clone(),
                    label,
                    playback: Playback::autoplay_muted(),
                };
                Some(CanPlayProbe {
                    generation: self.generation,
                    src: item.src,
                })
            }
        }
    }

    /// Pause the staged video and rewind it
    fn stop_current_video(&mut self) {
        if let Stage::Video { playback, .. } = &mut self.stage {
            playback.stop();
        }
    }

    /// The staged video signalled it can play; stale generations are ignored
    pub fn can_play(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        if let Stage::Video { playback, .. } = &mut self.stage {
            playback.ready = true;
            if playback.autoplay {
                playback.playing = true;
            }
        }
    }

    /// Advance the playing video by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) {
        if let Stage::Video { playback, .. } = &mut self.stage {
            playback.advance(elapsed);
        }
    }

    /// Play/pause the staged video; no-op for images
    pub fn toggle_playback(&mut self) {
        if let Stage::Video { playback, .. } = &mut self.stage {
            playback.toggle();
            log::debug!(
                "🎬 Video {} at {:?}",
                if playback.playing { "playing" } else { "paused" },
                playback.position
            );
        }
    }

    /// Keyboard policy while open: Escape closes, arrows navigate, Tab is
    /// trapped in the viewer's controls, Enter/Space activate the focused
    /// control and everything else is swallowed.
    pub fn handle_key(&mut self, press: KeyPress, focused: Option<FocusTarget>) -> LightboxOutcome {
        if !self.is_open() {
            return LightboxOutcome::none();
        }

        match press.key {
            NavKey::Escape => self.close(),
            NavKey::ArrowRight => self.next(),
            NavKey::ArrowLeft => self.prev(),
            NavKey::Tab => LightboxOutcome {
                focus: cycle(&self.controls(), focused, press.shift)
                    .map(FocusChange::Move)
                    .unwrap_or(FocusChange::Keep),
                probe: None,
            },
            NavKey::Enter | NavKey::Space => match focused {
                Some(FocusTarget::LightboxClose) => self.close(),
                Some(FocusTarget::LightboxNext) => self.next(),
                Some(FocusTarget::LightboxPrev) => self.prev(),
                Some(FocusTarget::LightboxPlay) => {
                    self.toggle_playback();
                    LightboxOutcome::none()
                }
                _ => LightboxOutcome::none(),
            },
            _ => LightboxOutcome::none(),
        }
    }
}
