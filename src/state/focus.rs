//! Keyboard focus model
//!
//! iced buttons don't take keyboard focus, so the application keeps its own
//! notion of which control is focused. Every focusable control has a
//! [`FocusTarget`]; components answer key presses with a [`FocusChange`].

use super::contact::ContactField;
use super::sort::SortKey;

/// Every control that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Card on the index page, by position
    PhotographerCard(usize),
    /// Logo link back to the index
    HomeLink,
    ContactButton,
    SortButton,
    SortOption(SortKey),
    /// Media card in the gallery, by position
    MediaCard(usize),
    /// Like button of the media card at that position
    LikeButton(usize),
    LightboxClose,
    LightboxPrev,
    LightboxNext,
    /// Play/pause of a staged video
    LightboxPlay,
    ContactClose,
    ContactField(ContactField),
    ContactSubmit,
}

/// What a component wants to happen to focus after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Keep,
    Move(FocusTarget),
    Clear,
}

impl FocusChange {
    /// Restore a previously recorded focus
    pub fn restore(previous: Option<FocusTarget>) -> Self {
        match previous {
            Some(target) => FocusChange::Move(target),
            None => FocusChange::Clear,
        }
    }

    /// Apply the change to the current focus
    pub fn apply(self, current: Option<FocusTarget>) -> Option<FocusTarget> {
        match self {
            FocusChange::Keep => current,
            FocusChange::Move(target) => Some(target),
            FocusChange::Clear => None,
        }
    }
}

/// Keys the interaction logic cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Tab,
    Enter,
    Space,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

impl NavKey {
    /// Enter and Space activate the focused control
    pub fn is_activation(self) -> bool {
        matches!(self, NavKey::Enter | NavKey::Space)
    }
}

/// A key press, with Shift tracked for reverse tab traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NavKey,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: NavKey) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: NavKey) -> Self {
        Self { key, shift: true }
    }
}

/// Next element of a focus ring, wrapping at both ends
///
/// When `current` is outside the ring, forward traversal enters at the
/// first element and backward traversal at the last one.
pub fn cycle(
    ring: &[FocusTarget],
    current: Option<FocusTarget>,
    backwards: bool,
) -> Option<FocusTarget> {
    let first = *ring.first()?;
    let last = *ring.last()?;

    let Some(index) = current.and_then(|c| ring.iter().position(|t| *t == c)) else {
        return Some(if backwards { last } else { first });
    };

    let next = if backwards {
        if index == 0 {
            ring.len() - 1
        } else {
            index - 1
        }
    } else if index + 1 >= ring.len() {
        0
    } else {
        index + 1
    };

    ring.get(next).copied()
}
