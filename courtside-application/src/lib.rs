#[macro_use]
extern crate log;

mod bookings;
mod create_booking;
mod reconcile;
mod register_user;
mod reviews;
mod users;
mod venues;

pub mod prelude {
    pub use super::{
        bookings::*, create_booking::*, reconcile::*, register_user::*, reviews::*, users::*,
        venues::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use courtside_core::{
    entities::*, gateways::notify::NotificationGateway, repositories::*, usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use courtside_db_sqlite::Connections;
}
