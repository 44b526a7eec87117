//! Page controllers
//!
//! Each page owns its component instances and routes user input to them.
//! Controllers never touch iced directly; work that has to leave the update
//! loop is returned as [`Effect`]s and turned into tasks by the shell.

use std::path::PathBuf;

use crate::route::Route;
use crate::state::contact::ContactField;
use crate::state::data::MediaId;
use crate::state::lightbox::CanPlayProbe;

pub mod index;
pub mod photographer;

pub use index::IndexPage;
pub use photographer::PhotographerPage;

/// A thumbnail the page wants generated
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailJob {
    pub media_id: MediaId,
    pub source: PathBuf,
    pub cache_dir: PathBuf,
}

/// Side effects requested by a page controller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Switch to another page
    Navigate(Route),
    /// Give widget focus to a contact form input
    FocusInput(ContactField),
    /// Take widget focus away from the contact form inputs
    ReleaseInput,
    /// Find out when a staged video can start playing
    ProbeVideo(CanPlayProbe),
    LoadThumbnails(Vec<ThumbnailJob>),
}
