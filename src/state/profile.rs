//! Photographer card template and profile header

use std::path::PathBuf;

use super::data::{AssetPaths, Photographer, PhotographerId};
use crate::route::Route;

/// Clickable card on the index page, linking to the photographer's page
#[derive(Debug, Clone, PartialEq)]
pub struct PhotographerCard {
    pub id: PhotographerId,
    pub href: String,
    pub label: String,
    pub portrait: PathBuf,
    pub name: String,
    pub location: String,
    pub tagline: String,
    pub price: String,
}

impl PhotographerCard {
    pub fn build(photographer: &Photographer, assets: &AssetPaths) -> Self {
        let location = format!("{}, {}", photographer.city, photographer.country);

        PhotographerCard {
            id: photographer.id,
            href: Route::Photographer {
                id: Some(photographer.id),
            }
            .href(),
            label: format!("{}, {}", photographer.name, location),
            portrait: assets.portrait(photographer),
            name: photographer.name.clone(),
            location,
            tagline: photographer.tagline.clone(),
            price: format!("{}€/day", photographer.price),
        }
    }

    /// Where activating the card leads
    pub fn route(&self) -> Route {
        Route::parse(&self.href)
    }
}

/// Header block of a photographer page, plus the daily rate for the stats badge
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    pub name: String,
    pub location: String,
    pub tagline: String,
    pub portrait: PathBuf,
    pub daily_rate: String,
}

impl ProfileHeader {
    pub fn build(photographer: &Photographer, assets: &AssetPaths) -> Self {
        ProfileHeader {
            name: photographer.name.clone(),
            location: format!("{}, {}", photographer.city, photographer.country),
            tagline: photographer.tagline.clone(),
            portrait: assets.portrait(photographer),
            daily_rate: format!("{}€ / day", photographer.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mimi() -> Photographer {
        Photographer {
            id: 243,
            name: "Mimi Keel".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            tagline: "Voir le beau dans le quotidien".to_string(),
            price: 400,
            portrait: "MimiKeel.jpg".to_string(),
        }
    }

    #[test]
    fn test_card_template() {
        let card = PhotographerCard::build(&mimi(), &AssetPaths::new("assets"));

        assert_eq!(card.href, "photographer.html?id=243");
        assert_eq!(card.label, "Mimi Keel, London, UK");
        assert_eq!(card.portrait, PathBuf::from("assets/photographers/MimiKeel.jpg"));
        assert_eq!(card.location, "London, UK");
        assert_eq!(card.price, "400€/day");
        assert_eq!(card.route(), Route::Photographer { id: Some(243) });
    }

    #[test]
    fn test_profile_header() {
        let header = ProfileHeader::build(&mimi(), &AssetPaths::new("assets"));
        assert_eq!(header.name, "Mimi Keel");
        assert_eq!(header.daily_rate, "400€ / day");
    }
}
