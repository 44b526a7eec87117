//! iced views
//!
//! Views are pure functions of the page controllers in [`crate::pages`];
//! they read view-models and emit [`crate::Message`]s, nothing else.

pub mod contact_modal;
pub mod index;
pub mod lightbox;
pub mod media_card;
pub mod photographer;
pub mod sort_menu;
pub mod style;
