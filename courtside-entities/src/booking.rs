use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{email::EmailAddress, id::Id, price::Price, slot::Slot, time::*};

pub type BookingStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BookingStatus {
    #[default]
    Pending   = 0,
    Confirmed = 1,
    Cancelled = 2,
    Completed = 3,
}

impl BookingStatus {
    /// Live bookings occupy their slots.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Bookings that count towards revenue.
    pub fn is_paid(self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed)
    }
}

#[derive(Debug, Error)]
#[error("Invalid booking status primitive: {0}")]
pub struct InvalidBookingStatusPrimitive(BookingStatusPrimitive);

impl TryFrom<BookingStatusPrimitive> for BookingStatus {
    type Error = InvalidBookingStatusPrimitive;
    fn try_from(from: BookingStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidBookingStatusPrimitive(from))
    }
}

impl From<BookingStatus> for BookingStatusPrimitive {
    fn from(from: BookingStatus) -> Self {
        from.to_i16().expect("booking status primitive")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerContact {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id          : Id,
    pub venue_id    : Id,
    pub court       : String,
    pub user_id     : Id,
    pub date        : Date,
    pub slots       : Vec<Slot>,
    pub total_price : Price,
    pub status      : BookingStatus,
    pub player      : PlayerContact,
    pub created_at  : Timestamp,
}

impl Booking {
    pub fn earliest_slot(&self) -> Option<Slot> {
        self.slots.iter().min().copied()
    }
}
