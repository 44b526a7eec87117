//! Gallery sort orders and the listbox-style sort control

use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::data::Media;
use super::focus::{FocusChange, FocusTarget, KeyPress, NavKey};

/// The three orders the gallery can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Most liked first
    #[default]
    Popularity,
    /// Newest first
    Date,
    /// Alphabetical
    Title,
}

impl SortKey {
    /// Options in the order they appear in the dropdown
    pub const ALL: [SortKey; 3] = [SortKey::Popularity, SortKey::Date, SortKey::Title];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popularity => "Popularity",
            SortKey::Date => "Date",
            SortKey::Title => "Title",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Date => "date",
            SortKey::Title => "title",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case- and accent-insensitive collation key
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn compare(a: &Media, b: &Media, key: SortKey) -> Ordering {
    match key {
        SortKey::Popularity => b.likes.cmp(&a.likes),
        // Unparseable dates are `None` and therefore end up last
        SortKey::Date => b.parsed_date().cmp(&a.parsed_date()),
        SortKey::Title => collation_key(&a.title).cmp(&collation_key(&b.title)),
    }
}

/// Return a sorted copy of `list`; the input is left untouched
pub fn sort_items(list: &[Media], key: SortKey) -> Vec<Media> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

/// Result of a sort control interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    pub focus: FocusChange,
    /// Set when a new order was committed and the gallery must be rebuilt
    pub commit: Option<SortKey>,
}

impl SortOutcome {
    fn focus(focus: FocusChange) -> Self {
        Self { focus, commit: None }
    }
}

/// Dropdown state: collapsed or expanded, plus the selected order
#[derive(Debug, Clone, Default)]
pub struct SortControl {
    expanded: bool,
    selected: SortKey,
    /// Option that keyboard navigation is on while expanded
    active: usize,
}

impl SortControl {
    pub fn new(selected: SortKey) -> Self {
        Self {
            expanded: false,
            selected,
            active: selected.position(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn selected(&self) -> SortKey {
        self.selected
    }

    /// Label shown on the trigger button
    pub fn label(&self) -> &'static str {
        self.selected.label()
    }

    /// `aria-selected` of an option
    pub fn is_selected(&self, key: SortKey) -> bool {
        self.selected == key
    }

    /// Expand and move focus to the selected option
    pub fn open(&mut self) -> SortOutcome {
        self.expanded = true;
        self.active = self.selected.position();
        SortOutcome::focus(FocusChange::Move(FocusTarget::SortOption(self.selected)))
    }

    /// Collapse and hand focus back to the trigger
    pub fn close(&mut self) -> SortOutcome {
        self.expanded = false;
        SortOutcome::focus(FocusChange::Move(FocusTarget::SortButton))
    }

    /// Trigger click
    pub fn toggle(&mut self) -> SortOutcome {
        if self.expanded {
            self.close()
        } else {
            self.open()
        }
    }

    /// Pick an order (option click or keyboard activation) and collapse
    pub fn commit(&mut self, key: SortKey) -> SortOutcome {
        self.selected = key;
        self.active = key.position();
        let closed = self.close();
        SortOutcome {
            focus: closed.focus,
            commit: Some(key),
        }
    }

    /// A click landed outside the control
    pub fn outside_click(&mut self) -> Option<SortOutcome> {
        if self.expanded {
            Some(self.close())
        } else {
            None
        }
    }

    /// Key pressed while the trigger is focused
    pub fn on_trigger_key(&mut self, press: KeyPress) -> Option<SortOutcome> {
        match press.key {
            NavKey::ArrowDown | NavKey::Enter | NavKey::Space => Some(self.open()),
            _ => None,
        }
    }

    /// Key pressed while an option is focused; `None` leaves the key to the page
    pub fn on_list_key(&mut self, press: KeyPress, focused: Option<FocusTarget>) -> Option<SortOutcome> {
        if !self.expanded {
            return None;
        }
        if let Some(FocusTarget::SortOption(key)) = focused {
            self.active = key.position();
        }

        let last = SortKey::ALL.len() - 1;
        let moved_to = |index: usize| {
            SortOutcome::focus(FocusChange::Move(FocusTarget::SortOption(SortKey::ALL[index])))
        };

        match press.key {
            NavKey::Escape => Some(self.close()),
            NavKey::Enter | NavKey::Space => Some(self.commit(SortKey::ALL[self.active])),
            NavKey::ArrowDown => {
                self.active = (self.active + 1).min(last);
                Some(moved_to(self.active))
            }
            NavKey::ArrowUp => {
                self.active = self.active.saturating_sub(1);
                Some(moved_to(self.active))
            }
            NavKey::Home => {
                self.active = 0;
                Some(moved_to(self.active))
            }
            NavKey::End => {
                self.active = last;
                Some(moved_to(self.active))
            }
            _ => None,
        }
    }
}
