//! Runtime configuration
//!
//! Everything is read from the environment, with the first command-line
//! argument as an optional start location:
//!
//! - `FISHEYE_DATA`: path or `http(s)://` URL of the data file
//!   (default `data/photographers.json`)
//! - `FISHEYE_ASSETS`: directory holding `photographers/` and `medias/`
//!   (default `assets`)
//! - `FISHEYE_CACHE_DIR`: thumbnail cache
//!   (default `<user cache dir>/fisheye/thumbnails`)
//! - `FISHEYE_ROUTE`: start location such as `photographer.html?id=243`

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::route::Route;

const DEFAULT_DATA: &str = "data/photographers.json";
const DEFAULT_ASSETS: &str = "assets";

/// Where the photographers database comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Http(Url),
}

impl DataSource {
    /// URLs with an http(s) scheme are fetched, anything else is a path
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Http(url),
            _ => DataSource::File(PathBuf::from(value)),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Http(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data: DataSource,
    pub assets_dir: PathBuf,
    pub cache_dir: PathBuf,
    /// Page shown at startup
    pub start: Route,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let arg = std::env::args().nth(1);
        Self::from_lookup(arg.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build from an explicit start argument and variable lookup
    pub fn from_lookup(arg: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data = non_empty("FISHEYE_DATA")
            .map(|v| DataSource::parse(&v))
            .unwrap_or_else(|| DataSource::File(PathBuf::from(DEFAULT_DATA)));

        let assets_dir = non_empty("FISHEYE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS));

        let cache_dir = non_empty("FISHEYE_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_dir);

        let start = arg
            .map(str::to_string)
            .or_else(|| non_empty("FISHEYE_ROUTE"))
            .map(|location| Route::parse(&location))
            .unwrap_or_default();

        AppConfig {
            data,
            assets_dir,
            cache_dir,
            start,
        }
    }
}

/// `~/.cache/fisheye/thumbnails` on Linux, falling back to the temp dir
fn default_cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push("fisheye");
    path.push("thumbnails");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(None, lookup(&[]));

        assert_eq!(config.data, DataSource::File(PathBuf::from("data/photographers.json")));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.cache_dir.ends_with("fisheye/thumbnails"));
        assert_eq!(config.start, Route::Index);
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(
            None,
            lookup(&[
                ("FISHEYE_DATA", "https://example.com/data/photographers.json"),
                ("FISHEYE_ASSETS", "/srv/fisheye/assets"),
                ("FISHEYE_CACHE_DIR", "/tmp/fisheye"),
                ("FISHEYE_ROUTE", "photographer.html?id=82"),
            ]),
        );

        assert!(matches!(config.data, DataSource::Http(ref url) if url.host_str() == Some("example.com")));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/fisheye/assets"));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/fisheye"));
        assert_eq!(config.start, Route::Photographer { id: Some(82) });
    }

    #[test]
    fn test_argument_wins_over_route_variable() {
        let config = AppConfig::from_lookup(
            Some("photographer.html?id=243"),
            lookup(&[("FISHEYE_ROUTE", "photographer.html?id=82")]),
        );
        assert_eq!(config.start, Route::Photographer { id: Some(243) });
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(None, lookup(&[("FISHEYE_ASSETS", "  ")]));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            DataSource::parse("data/photographers.json"),
            DataSource::File(PathBuf::from("data/photographers.json"))
        );
        assert!(matches!(DataSource::parse("http://localhost:8080/db.json"), DataSource::Http(_)));
        // Windows drive letters parse as a URL scheme but are still paths
        assert!(matches!(DataSource::parse("C:\\data\\db.json"), DataSource::File(_)));
    }
}
