pub mod prelude {

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    pub use courtside_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };
    pub use courtside_entities::builders::*;

    /// Records the names of all notified events.
    #[derive(Debug, Default)]
    pub struct DummyNotifyGW {
        events: Mutex<Vec<&'static str>>,
        last_code: Mutex<Option<String>>,
    }

    impl DummyNotifyGW {
        fn record(&self, event: &'static str) {
            self.events.lock().unwrap().push(event);
        }

        pub fn count(&self, event: &str) -> usize {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| **e == event)
                .count()
        }

        pub fn last_code(&self) -> Option<String> {
            self.last_code.lock().unwrap().clone()
        }
    }

    impl courtside_core::gateways::notify::NotificationGateway for DummyNotifyGW {
        fn user_registered(&self, _: &User, verification: &EmailVerification) {
            *self.last_code.lock().unwrap() = Some(verification.code.as_str().to_string());
            self.record("user_registered");
        }
        fn verification_code_refreshed(&self, verification: &EmailVerification) {
            *self.last_code.lock().unwrap() = Some(verification.code.as_str().to_string());
            self.record("verification_code_refreshed");
        }
        fn booking_created(&self, _: &Booking, _: &Venue) {
            self.record("booking_created");
        }
        fn booking_cancelled(&self, _: &Booking) {
            self.record("booking_cancelled");
        }
        fn venue_status_changed(&self, _: &Venue, _: VenueStatus) {
            self.record("venue_status_changed");
        }
        fn venue_removed(&self, _: &Venue) {
            self.record("venue_removed");
        }
    }

    /// A day that is always bookable.
    pub fn upcoming_day() -> Date {
        Timestamp::now().date() + Duration::days(30)
    }

    pub fn new_booking(venue_id: &Id, slots: &[&str]) -> usecases::NewBooking {
        usecases::NewBooking {
            venue_id: venue_id.clone(),
            court: "A".into(),
            date: upcoming_day(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
            player_name: "Alice".into(),
            player_email: "alice@example.com".into(),
            player_phone: "+49 123 456".into(),
        }
    }

    pub fn new_venue(name: &str) -> usecases::NewVenue {
        usecases::NewVenue {
            name: name.into(),
            location: "Main Street 1".into(),
            price: Price::from(500),
            image_url: None,
            sport: "tennis".into(),
            amenities: vec!["showers".into()],
            courts: vec![Court {
                name: "A".into(),
                sport: "tennis".into(),
                price: Price::from(500),
            }],
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
        generated_users: AtomicUsize,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            courtside_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                notify: DummyNotifyGW::default(),
                generated_users: AtomicUsize::new(0),
            }
        }

        /// Creates an active user with a confirmed email address
        /// `<name>@example.com`.
        pub fn create_user(&self, name: &str, role: Role) -> Id {
            let user = User::build()
                .id(Id::new().as_str())
                .name(name)
                .email(&format!("{name}@example.com"))
                .email_confirmed(true)
                .password("secret123")
                .role(role)
                .finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user.id
        }

        fn create_generated_user(&self, prefix: &str, role: Role) -> Id {
            let n = self.generated_users.fetch_add(1, Ordering::Relaxed);
            self.create_user(&format!("{prefix}-{n}"), role)
        }

        /// Creates a pending venue with a single tennis court "A".
        pub fn create_venue(&self, owner_id: &Id, name: &str) -> Id {
            flows::create_venue(&self.db_connections, owner_id.as_str(), new_venue(name))
                .unwrap()
                .id
        }

        /// Creates an approved venue of a new owner.
        pub fn create_live_venue(&self, name: &str) -> Id {
            let owner = self.create_generated_user("owner", Role::Owner);
            let admin = self.create_generated_user("admin", Role::Admin);
            let venue_id = self.create_venue(&owner, name);
            flows::change_venue_status(
                &self.db_connections,
                &self.notify,
                admin.as_str(),
                venue_id.as_str(),
                VenueAction::Approve,
                None,
            )
            .unwrap();
            venue_id
        }

        pub fn try_venue(&self, id: &Id) -> Option<Venue> {
            match self.db_connections.shared().unwrap().get_venue(id.as_str()) {
                Ok(venue) => Some(venue),
                Err(RepoError::NotFound) => None,
                Err(err) => panic!("{err}"),
            }
        }

        pub fn venue(&self, id: &Id) -> Venue {
            self.try_venue(id).unwrap()
        }

        pub fn book(&self, user_id: &Id, venue_id: &Id, slots: &[&str]) -> crate::Result<Booking> {
            flows::create_booking(
                &self.db_connections,
                &self.notify,
                user_id.as_str(),
                new_booking(venue_id, slots),
                TaxRate::default(),
            )
        }

        pub fn booked_slots(&self, venue_id: &Id, court: &str, date: Date) -> Vec<Slot> {
            let db = self.db_connections.shared().unwrap();
            usecases::list_booked_slots(&db, venue_id.as_str(), court, date).unwrap()
        }

        pub fn bookings_of_user(&self, user_id: &Id) -> Vec<Booking> {
            let db = self.db_connections.shared().unwrap();
            usecases::bookings_of_user(&db, user_id.as_str()).unwrap()
        }
    }
}
