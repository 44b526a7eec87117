//! Shared data structures for the application state
//!
//! These structs mirror the records of `photographers.json` and flow
//! from the data access layer into the page controllers.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Identifier of a photographer (`id` / `photographerId` in the data file)
pub type PhotographerId = u32;

/// Identifier of a media record
pub type MediaId = u32;

/// A photographer profile, immutable after load
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photographer {
    pub id: PhotographerId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    /// Daily rate in euros
    pub price: u32,
    /// Portrait filename, relative to `<assets>/photographers/`
    pub portrait: String,
}

/// Whether a media record is a still image or a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A single photo or video in a photographer's portfolio
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "MediaRecord")]
pub struct Media {
    pub id: MediaId,
    pub photographer_id: PhotographerId,
    pub title: String,
    pub kind: MediaKind,
    /// Filename, relative to `<assets>/medias/<photographerId>/`
    pub file: String,
    /// Base like count from the data file
    pub likes: u32,
    /// Publication date as written in the data file (`YYYY-MM-DD`)
    pub date: String,
    pub price: Option<u32>,
}

impl Media {
    /// Parse the publication date, `None` if it isn't a valid `YYYY-MM-DD`
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// Wire shape of a media record: exactly one of `image` / `video` is set
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaRecord {
    id: MediaId,
    photographer_id: PhotographerId,
    title: String,
    image: Option<String>,
    video: Option<String>,
    #[serde(default)]
    likes: u32,
    #[serde(default)]
    date: String,
    price: Option<u32>,
}

impl TryFrom<MediaRecord> for Media {
    type Error = String;

    fn try_from(record: MediaRecord) -> Result<Self, Self::Error> {
        let (kind, file) = match (record.image, record.video) {
            (Some(image), None) => (MediaKind::Image, image),
            (None, Some(video)) => (MediaKind::Video, video),
            (Some(_), Some(_)) => {
                return Err(format!("media {} has both an image and a video", record.id))
            }
            (None, None) => {
                return Err(format!("media {} has neither an image nor a video", record.id))
            }
        };

        Ok(Media {
            id: record.id,
            photographer_id: record.photographer_id,
            title: record.title,
            kind,
            file,
            likes: record.likes,
            date: record.date,
            price: record.price,
        })
    }
}

/// The whole data file: photographers plus every media record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub photographers: Vec<Photographer>,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Database {
    /// Find the photographer selected by the route, falling back to the first one
    pub fn find_photographer(&self, id: Option<PhotographerId>) -> Option<&Photographer> {
        id.and_then(|id| self.photographers.iter().find(|p| p.id == id))
            .or_else(|| self.photographers.first())
    }

    /// All media belonging to a photographer, in file order
    pub fn media_for(&self, photographer_id: PhotographerId) -> Vec<Media> {
        self.media
            .iter()
            .filter(|m| m.photographer_id == photographer_id)
            .cloned()
            .collect()
    }
}

/// Resolves asset filenames from the data file to paths on disk
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<assets>/photographers/<portrait>`
    pub fn portrait(&self, photographer: &Photographer) -> PathBuf {
        self.root.join("photographers").join(&photographer.portrait)
    }

    /// `<assets>/medias/<photographerId>/<file>`
    pub fn media(&self, media: &Media) -> PathBuf {
        self.root
            .join("medias")
            .join(media.photographer_id.to_string())
            .join(&media.file)
    }
}
