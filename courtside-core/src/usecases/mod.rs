mod authorize;
mod bookings;
mod change_user_status;
mod create_booking;
mod dashboards;
mod error;
mod login;
mod query_venues;
mod rate_venue;
mod register;
mod reviews;
mod venue_workflow;
mod verification;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, bookings::*, change_user_status::*, create_booking::*, dashboards::*,
    error::Error, login::*, query_venues::*, rate_venue::*, register::*, reviews::*,
    venue_workflow::*, verification::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
