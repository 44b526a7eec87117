//! Page routes
//!
//! Cards link with the same relative locations the web front end used
//! (`photographer.html?id=243`), so a route can come from a card, the
//! command line or the environment.

use url::Url;

use crate::state::data::PhotographerId;

/// Base every relative location is resolved against
const BASE: &str = "fisheye://app/";

const PHOTOGRAPHER_PAGE: &str = "photographer.html";

/// The two pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Index,
    /// `id` is `None` when the query parameter is missing or not a number;
    /// the page then falls back to the first photographer
    Photographer { id: Option<PhotographerId> },
}

impl Route {
    /// Parse a relative location such as `photographer.html?id=82`
    ///
    /// Anything that isn't the photographer page resolves to the index.
    pub fn parse(location: &str) -> Route {
        let Ok(url) = Url::parse(BASE).and_then(|base| base.join(location.trim())) else {
            return Route::Index;
        };

        let is_photographer_page = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(|last| last == PHOTOGRAPHER_PAGE)
            .unwrap_or(false);

        if !is_photographer_page {
            return Route::Index;
        }

        let id = url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .and_then(|(_, value)| value.trim().parse().ok());

        Route::Photographer { id }
    }

    /// Relative location of this route
    pub fn href(&self) -> String {
        match self {
            Route::Index => "index.html".to_string(),
            Route::Photographer { id: Some(id) } => format!("{}?id={}", PHOTOGRAPHER_PAGE, id),
            Route::Photographer { id: None } => PHOTOGRAPHER_PAGE.to_string(),
        }
    }
}
