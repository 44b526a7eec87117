//! State management module
//!
//! Everything here is plain data and state machines, independent of iced:
//! - Data file records and asset paths (data.rs)
//! - Session likes and the total-likes tally (likes.rs)
//! - Keyboard focus model (focus.rs)
//! - Card view-models (profile.rs, media_card.rs)
//! - The gallery render target (gallery.rs)
//! - Lightbox, sort control and contact modal (lightbox.rs, sort.rs, contact.rs)

pub mod contact;
pub mod data;
pub mod focus;
pub mod gallery;
pub mod lightbox;
pub mod likes;
pub mod media_card;
pub mod profile;
pub mod sort;
