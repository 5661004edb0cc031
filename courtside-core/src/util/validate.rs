use std::collections::HashSet;

use courtside_entities::{
    booking::PlayerContact,
    venue::{Court, Venue, VenueUpdate},
};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourtInvalidation {
    #[error("A court needs a name")]
    EmptyName,
    #[error("Duplicate court name: {0}")]
    DuplicateName(String),
    #[error("Negative court price")]
    Price,
}

pub fn validate_courts(courts: &[Court]) -> Result<(), CourtInvalidation> {
    let mut names = HashSet::with_capacity(courts.len());
    for court in courts {
        if court.name.trim().is_empty() {
            return Err(CourtInvalidation::EmptyName);
        }
        if !court.price.is_valid() {
            return Err(CourtInvalidation::Price);
        }
        if !names.insert(court.name.as_str()) {
            return Err(CourtInvalidation::DuplicateName(court.name.clone()));
        }
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VenueInvalidation {
    #[error("The name is invalid")]
    Name,
    #[error("The location is invalid")]
    Location,
    #[error("The sport is invalid")]
    Sport,
    #[error("Negative price")]
    Price,
    #[error("A venue needs at least one court")]
    NoCourts,
    #[error(transparent)]
    Court(#[from] CourtInvalidation),
}

impl Validate for Venue {
    type Error = VenueInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.location.trim().is_empty() {
            return Err(Self::Error::Location);
        }
        if self.sport.trim().is_empty() {
            return Err(Self::Error::Sport);
        }
        if !self.price.is_valid() {
            return Err(Self::Error::Price);
        }
        if self.courts.is_empty() {
            return Err(Self::Error::NoCourts);
        }
        validate_courts(&self.courts)?;
        Ok(())
    }
}

impl Validate for VenueUpdate {
    type Error = VenueInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let blank = |s: &Option<String>| s.as_ref().map(|s| s.trim().is_empty()).unwrap_or(false);
        if blank(&self.name) {
            return Err(Self::Error::Name);
        }
        if blank(&self.location) {
            return Err(Self::Error::Location);
        }
        if blank(&self.sport) {
            return Err(Self::Error::Sport);
        }
        if self.price.map(|p| !p.is_valid()).unwrap_or(false) {
            return Err(Self::Error::Price);
        }
        if let Some(courts) = &self.courts {
            if courts.is_empty() {
                return Err(Self::Error::NoCourts);
            }
            validate_courts(courts)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerInvalidation {
    #[error("Missing player name")]
    Name,
    #[error("Invalid player email")]
    Email,
    #[error("Missing player phone")]
    Phone,
}

impl Validate for PlayerContact {
    type Error = PlayerInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_email(self.email.as_str()) {
            return Err(Self::Error::Email);
        }
        if self.phone.trim().is_empty() {
            return Err(Self::Error::Phone);
        }
        Ok(())
    }
}
