// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait VerificationRepo {
    // Replaces any previous code of the same email address
    fn replace_verification(&self, verification: &EmailVerification) -> Result<()>;

    // Removes the verification and returns it. Each code
    // can only be consumed once.
    fn consume_verification(
        &self,
        email: &EmailAddress,
        code: &VerificationCode,
    ) -> Result<EmailVerification>;

    fn delete_expired_verifications(&self, expired_before: Timestamp) -> Result<usize>;
}

pub trait VenueRepo {
    fn create_venue(&self, venue: &Venue) -> Result<()>;

    // Updates everything except for the rating aggregate.
    fn update_venue(&self, venue: &Venue) -> Result<()>;

    // Removes the venue together with all its bookings and reviews.
    fn delete_venue(&self, id: &str) -> Result<()>;

    fn get_venue(&self, id: &str) -> Result<Venue>;
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn venues_by_status(&self, status: &[VenueStatus]) -> Result<Vec<Venue>>;
    fn venues_of_owner(&self, owner_id: &str) -> Result<Vec<Venue>>;

    fn set_rating_aggregate(&self, id: &str, rating: RatingAggregate) -> Result<()>;
}

pub trait BookingRepo {
    // Stores the booking and occupies all of its slots.
    // Fails with `AlreadyExists` if any of the slots is
    // already occupied by another booking.
    fn create_booking(&self, booking: &Booking) -> Result<()>;

    fn get_booking(&self, id: &str) -> Result<Booking>;
    fn set_booking_status(&self, id: &str, status: BookingStatus) -> Result<()>;

    // Frees all slots occupied by the booking.
    fn release_booking_slots(&self, id: &str) -> Result<usize>;

    // Slots that are occupied by active bookings
    fn booked_slots(&self, venue_id: &str, court: &str, date: Date) -> Result<Vec<Slot>>;

    // Newest first
    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>>;
    // Newest first
    fn bookings_of_venue(&self, venue_id: &str) -> Result<Vec<Booking>>;
    fn all_bookings(&self) -> Result<Vec<Booking>>;

    // Marks confirmed bookings before the given day as completed.
    fn complete_bookings_before(&self, date: Date) -> Result<usize>;
}

pub trait ReviewRepo {
    // Fails with `AlreadyExists` if the user has already
    // reviewed the venue.
    fn create_review(&self, review: &Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn try_get_review_of_user(&self, venue_id: &str, user_id: &str) -> Result<Option<Review>>;

    // Newest first
    fn reviews_of_venue(&self, venue_id: &str) -> Result<Vec<Review>>;
}
