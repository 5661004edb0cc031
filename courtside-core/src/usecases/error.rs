use crate::{
    authorization, repositories,
    util::validate::{PlayerInvalidation, VenueInvalidation},
};
use courtside_entities::{
    booking::BookingStatus, email::EmailAddressParseError, password, slot::SlotParseError,
    venue_status::InvalidTransition,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid time slot")]
    InvalidSlot,
    #[error("At least one time slot is required")]
    NoSlots,
    #[error("The requested time slot lies in the past")]
    SlotInPast,
    #[error("The court does not exist in this venue")]
    UnknownCourt,
    #[error("The venue is not available for booking")]
    VenueNotBookable,
    #[error("The total price is out of range")]
    PriceOutOfRange,
    #[error("The booking is {0}")]
    BookingStatus(BookingStatus),
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Nothing to update")]
    EmptyUpdate,
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    #[error(transparent)]
    Venue(#[from] VenueInvalidation),
    #[error(transparent)]
    Player(#[from] PlayerInvalidation),
    #[error("Invalid name")]
    Name,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Invalid role")]
    Role,
    #[error("The email address has already been confirmed")]
    EmailAlreadyConfirmed,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("Your account has been banned")]
    Banned,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error("The selected time slot is already booked, please pick a different slot")]
    SlotConflict,
    #[error("You have already reviewed this venue")]
    ReviewExists,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<password::ParseError> for Error {
    fn from(_: password::ParseError) -> Self {
        Self::Password
    }
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<SlotParseError> for Error {
    fn from(_: SlotParseError) -> Self {
        Self::InvalidSlot
    }
}

impl From<authorization::user::Error> for Error {
    fn from(err: authorization::user::Error) -> Self {
        match err {
            authorization::user::Error::UnauthorizedRole => Self::Forbidden,
            authorization::user::Error::Banned => Self::Banned,
        }
    }
}
