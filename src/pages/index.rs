//! Index page: one card per photographer

use crate::state::data::{AssetPaths, Database};
use crate::state::focus::{cycle, FocusChange, FocusTarget, KeyPress, NavKey};
use crate::state::profile::PhotographerCard;

use super::Effect;

#[derive(Debug, Clone)]
pub struct IndexPage {
    cards: Vec<PhotographerCard>,
    focus: Option<FocusTarget>,
}

impl IndexPage {
    pub fn new(db: &Database, assets: &AssetPaths) -> Self {
        let cards = db
            .photographers
            .iter()
            .map(|p| PhotographerCard::build(p, assets))
            .collect();

        Self { cards, focus: None }
    }

    pub fn cards(&self) -> &[PhotographerCard] {
        &self.cards
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focus == Some(FocusTarget::PhotographerCard(index))
    }

    /// Follow a card's link
    pub fn activate(&mut self, index: usize) -> Vec<Effect> {
        let Some(card) = self.cards.get(index) else {
            return Vec::new();
        };
        self.focus = Some(FocusTarget::PhotographerCard(index));
        vec![Effect::Navigate(card.route())]
    }

    pub fn handle_key(&mut self, press: KeyPress) -> Vec<Effect> {
        match (press.key, self.focus) {
            (NavKey::Tab, current) => {
                let ring: Vec<_> = (0..self.cards.len())
                    .map(FocusTarget::PhotographerCard)
                    .collect();
                let change = cycle(&ring, current, press.shift)
                    .map(FocusChange::Move)
                    .unwrap_or(FocusChange::Keep);
                self.focus = change.apply(self.focus);
                Vec::new()
            }
            (key, Some(FocusTarget::PhotographerCard(index))) if key.is_activation() => {
                self.activate(index)
            }
            _ => Vec::new(),
        }
    }
}
