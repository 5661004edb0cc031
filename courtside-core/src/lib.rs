pub mod authorization;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use courtside_entities::{
        booking::*, email::*, id::*, password::*, price::*, review::*, slot::*, time::*, user::*,
        venue::*, venue_status::*, verification::*,
    };
}

pub use self::repositories::Error as RepoError;
