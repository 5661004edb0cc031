use crate::{id::*, price::Price, review::RatingAggregate, time::*, venue_status::VenueStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Court {
    pub name: String,
    pub sport: String,
    /// Price per slot
    pub price: Price,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id             : Id,
    pub owner          : Id,
    pub created_at     : Timestamp,
    pub name           : String,
    pub location       : String,
    pub price          : Price,
    pub image_url      : Option<String>,
    pub sport          : String,
    pub amenities      : Vec<String>,
    pub courts         : Vec<Court>,
    pub status         : VenueStatus,
    pub rating         : RatingAggregate,
    pub pending_update : Option<VenueUpdate>,
}

impl Venue {
    pub fn court(&self, name: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.name == name)
    }

    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Overwrites exactly the fields that are staged in the update.
    pub fn apply_update(&mut self, update: VenueUpdate) {
        let VenueUpdate {
            name,
            location,
            price,
            image_url,
            sport,
            amenities,
            courts,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(image_url) = image_url {
            self.image_url = Some(image_url);
        }
        if let Some(sport) = sport {
            self.sport = sport;
        }
        if let Some(amenities) = amenities {
            self.amenities = amenities;
        }
        if let Some(courts) = courts {
            self.courts = courts;
        }
    }
}

/// A change of a live venue that is staged until an admin accepts it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VenueUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
    pub sport: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub courts: Option<Vec<Court>>,
}

impl VenueUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
