use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use courtside_core::{
    entities::*, gateways::notify::NotificationGateway, repositories::UserRepo,
};
use courtside_entities::builders::*;

use crate::web::{sqlite, Cfg};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{create_user, setup, DummyNotifyGW};
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = courtside_db_sqlite::Connections::init(":memory:", 1).unwrap();
    courtside_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: Cfg::default(),
    };
    let rocket = super::rocket_instance(options, db.clone(), Box::new(DummyNotifyGW));
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

/// Creates an active user with a confirmed email address
/// `<name>@example.com` and the password `secret123`.
pub fn create_user(db: &sqlite::Connections, name: &str, role: Role) -> Id {
    let user = User::build()
        .id(Id::new().as_str())
        .name(name)
        .email(&format!("{name}@example.com"))
        .email_confirmed(true)
        .password("secret123")
        .role(role)
        .finish();
    db.exclusive().unwrap().create_user(&user).unwrap();
    user.id
}

pub struct DummyNotifyGW;

impl NotificationGateway for DummyNotifyGW {
    fn user_registered(&self, _: &User, _: &EmailVerification) {}
    fn verification_code_refreshed(&self, _: &EmailVerification) {}
    fn booking_created(&self, _: &Booking, _: &Venue) {}
    fn booking_cancelled(&self, _: &Booking) {}
    fn venue_status_changed(&self, _: &Venue, _: VenueStatus) {}
    fn venue_removed(&self, _: &Venue) {}
}
