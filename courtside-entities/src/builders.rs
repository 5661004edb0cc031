pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, user_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{id::*, price::*, review::*, time::*, venue::*, venue_status::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.venue.owner = owner.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.venue.location = location.into();
            self
        }
        pub fn price(mut self, price: i64) -> Self {
            self.venue.price = price.into();
            self
        }
        pub fn sport(mut self, sport: &str) -> Self {
            self.venue.sport = sport.into();
            self
        }
        pub fn image_url(mut self, image_url: Option<&str>) -> Self {
            self.venue.image_url = image_url.map(Into::into);
            self
        }
        pub fn amenities(mut self, amenities: Vec<impl Into<String>>) -> Self {
            self.venue.amenities = amenities.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn court(mut self, name: &str, sport: &str, price: i64) -> Self {
            self.venue.courts.push(Court {
                name: name.into(),
                sport: sport.into(),
                price: Price::from(price),
            });
            self
        }
        pub fn status(mut self, status: VenueStatus) -> Self {
            self.venue.status = status;
            self
        }
        pub fn rating(mut self, average: f64, count: u64) -> Self {
            self.venue.rating = RatingAggregate { average, count };
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    owner: Id::new(),
                    created_at: Timestamp::now(),
                    name: "".into(),
                    location: "".into(),
                    price: Price::zero(),
                    image_url: None,
                    sport: "".into(),
                    amenities: vec![],
                    courts: vec![],
                    status: VenueStatus::Pending,
                    rating: RatingAggregate::default(),
                    pending_update: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn email_confirmed(mut self, confirmed: bool) -> Self {
            self.user.email_confirmed = confirmed;
            self
        }
        pub fn password(mut self, pw: &str) -> Self {
            self.user.password = pw.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn status(mut self, status: UserStatus) -> Self {
            self.user.status = status;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    email_confirmed: true,
                    password: Password::from(String::new()),
                    role: Role::default(),
                    status: UserStatus::default(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, email::*, id::*, price::*, slot::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn venue(mut self, venue_id: &str) -> Self {
            self.booking.venue_id = venue_id.into();
            self
        }
        pub fn court(mut self, court: &str) -> Self {
            self.booking.court = court.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.booking.user_id = user_id.into();
            self
        }
        pub fn date(mut self, date: Date) -> Self {
            self.booking.date = date;
            self
        }
        pub fn slots(mut self, labels: &[&str]) -> Self {
            self.booking.slots = parse_slots(labels).unwrap();
            self
        }
        pub fn total_price(mut self, price: i64) -> Self {
            self.booking.total_price = Price::from(price);
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            let created_at = Timestamp::now();
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    venue_id: Id::new(),
                    court: "".into(),
                    user_id: Id::new(),
                    date: created_at.date(),
                    slots: vec![],
                    total_price: Price::zero(),
                    status: BookingStatus::default(),
                    player: PlayerContact {
                        name: "Player".into(),
                        email: EmailAddress::new_unchecked("player@example.com".into()),
                        phone: "0123".into(),
                    },
                    created_at,
                },
            }
        }
    }

    #[test]
    fn build_booking() {
        let b = Booking::build()
            .court("A")
            .slots(&["11:00", "10:00"])
            .finish();
        assert_eq!(b.earliest_slot().unwrap().to_string(), "10:00");
        assert_eq!(b.status, BookingStatus::Pending);
    }
}
