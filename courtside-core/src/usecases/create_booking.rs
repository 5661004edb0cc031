use super::{load_user_with_role, prelude::*};
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub venue_id     : Id,
    pub court        : String,
    pub date         : Date,
    pub slots        : Vec<String>,
    pub player_name  : String,
    pub player_email : String,
    pub player_phone : String,
}

pub fn create_booking<R>(
    repo: &R,
    user_id: &str,
    new_booking: NewBooking,
    tax: TaxRate,
    now: Timestamp,
) -> Result<Booking>
where
    R: UserRepo + VenueRepo + BookingRepo,
{
    let user = load_user_with_role(repo, user_id, Role::Customer)?;

    let NewBooking {
        venue_id,
        court,
        date,
        slots,
        player_name,
        player_email,
        player_phone,
    } = new_booking;

    let slots = parse_slots(slots.as_slice())?;
    let Some(earliest_slot) = slots.first().copied() else {
        return Err(Error::NoSlots);
    };
    let player = PlayerContact {
        name: player_name.trim().to_string(),
        email: player_email.parse()?,
        phone: player_phone.trim().to_string(),
    };
    player.validate()?;

    let venue = repo.get_venue(venue_id.as_str())?;
    if !venue.is_live() {
        return Err(Error::VenueNotBookable);
    }
    let court_price = venue.court(&court).ok_or(Error::UnknownCourt)?.price;

    // Only the earliest slot is checked, later slots on
    // the same day are accepted as they are.
    let start = Timestamp::from(earliest_slot.start_hour_on(date));
    if start < now {
        return Err(Error::SlotInPast);
    }

    let total_price = slots
        .iter()
        .try_fold(Price::zero(), |sum, _| sum.checked_add(court_price))
        .and_then(|subtotal| subtotal.with_tax(tax))
        .ok_or(Error::PriceOutOfRange)?;
    let booking = Booking {
        id: Id::new(),
        venue_id,
        court,
        user_id: user.id,
        date,
        slots,
        total_price,
        status: BookingStatus::Pending,
        player,
        created_at: now,
    };
    repo.create_booking(&booking).map_err(|err| match err {
        RepoError::AlreadyExists => Error::SlotConflict,
        err => Error::Repo(err),
    })?;
    log::info!(
        "Created booking {} of court '{}' at venue {} on {}",
        booking.id,
        booking.court,
        booking.venue_id,
        format_date(booking.date)
    );
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use courtside_entities::builders::*;
    use time::macros::datetime;

    fn new_booking(venue_id: &str, slots: &[&str]) -> NewBooking {
        NewBooking {
            venue_id: venue_id.into(),
            court: "Court 1".into(),
            date: time::macros::date!(2024 - 06 - 01),
            slots: slots.iter().map(ToString::to_string).collect(),
            player_name: "Jane".into(),
            player_email: "jane@example.com".into(),
            player_phone: "+123".into(),
        }
    }

    fn now() -> Timestamp {
        Timestamp::from(datetime!(2024 - 06 - 01 08:30))
    }

    fn setup() -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .id("customer")
                .role(Role::Customer)
                .finish(),
        );
        db.users
            .borrow_mut()
            .push(User::build().id("owner").role(Role::Owner).finish());
        db.venues.borrow_mut().push(
            Venue::build()
                .id("x")
                .owner("owner")
                .status(VenueStatus::Approved)
                .court("Court 1", "tennis", 50_000)
                .finish(),
        );
        db
    }

    #[test]
    fn create_pending_booking_with_tax() {
        let db = setup();
        let booking = create_booking(
            &db,
            "customer",
            new_booking("x", &["11:00", "10:00", "10:00"]),
            TaxRate::new(0.18),
            now(),
        )
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, Price::from(118_000));
        let labels: Vec<_> = booking.slots.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["10:00", "11:00"]);
        assert_eq!(db.bookings.borrow().len(), 1);
    }

    #[test]
    fn reject_double_booking_with_conflict() {
        let db = setup();
        let tax = TaxRate::default();
        create_booking(&db, "customer", new_booking("x", &["10:00"]), tax, now()).unwrap();
        let err = create_booking(
            &db,
            "customer",
            new_booking("x", &["11:00", "10:00"]),
            tax,
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::SlotConflict));
        assert_eq!(db.bookings.borrow().len(), 1);
        assert!(create_booking(&db, "customer", new_booking("x", &["11:00"]), tax, now()).is_ok());
    }

    #[test]
    fn reject_past_slots_with_validation_error() {
        let db = setup();
        let err = create_booking(
            &db,
            "customer",
            new_booking("x", &["07:00"]),
            TaxRate::default(),
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::SlotInPast));
    }

    #[test]
    fn only_the_earliest_slot_is_checked_against_now() {
        let db = setup();
        // 08:00 started before 08:30, but 09:00 has not
        let err = create_booking(
            &db,
            "customer",
            new_booking("x", &["08:00", "09:00"]),
            TaxRate::default(),
            now(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::SlotInPast));
        assert!(create_booking(
            &db,
            "customer",
            new_booking("x", &["09:00", "23:00"]),
            TaxRate::default(),
            now(),
        )
        .is_ok());
    }

    #[test]
    fn validate_input() {
        let db = setup();
        let tax = TaxRate::default();
        assert!(matches!(
            create_booking(&db, "customer", new_booking("x", &[]), tax, now()),
            Err(Error::NoSlots)
        ));
        assert!(matches!(
            create_booking(&db, "customer", new_booking("x", &["25:00"]), tax, now()),
            Err(Error::InvalidSlot)
        ));
        let mut unknown_court = new_booking("x", &["10:00"]);
        unknown_court.court = "Court 9".into();
        assert!(matches!(
            create_booking(&db, "customer", unknown_court, tax, now()),
            Err(Error::UnknownCourt)
        ));
        let mut no_phone = new_booking("x", &["10:00"]);
        no_phone.player_phone = " ".into();
        assert!(matches!(
            create_booking(&db, "customer", no_phone, tax, now()),
            Err(Error::Player(_))
        ));
        assert!(matches!(
            create_booking(&db, "customer", new_booking("y", &["10:00"]), tax, now()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn reject_unrepresentable_total_price() {
        let db = setup();
        db.venues.borrow_mut()[0].courts[0].price = Price::from(i64::MAX / 2 + 1);
        assert!(matches!(
            create_booking(
                &db,
                "customer",
                new_booking("x", &["10:00", "11:00"]),
                TaxRate::default(),
                now(),
            ),
            Err(Error::PriceOutOfRange)
        ));
        assert!(matches!(
            create_booking(
                &db,
                "customer",
                new_booking("x", &["10:00"]),
                TaxRate::new(1.0),
                now(),
            ),
            Err(Error::PriceOutOfRange)
        ));
        assert!(db.bookings.borrow().is_empty());
    }

    #[test]
    fn only_active_customers_can_book() {
        let db = setup();
        let tax = TaxRate::default();
        assert!(matches!(
            create_booking(&db, "owner", new_booking("x", &["10:00"]), tax, now()),
            Err(Error::Forbidden)
        ));
        db.users.borrow_mut()[0].status = UserStatus::Banned;
        assert!(matches!(
            create_booking(&db, "customer", new_booking("x", &["10:00"]), tax, now()),
            Err(Error::Banned)
        ));
    }

    #[test]
    fn venue_must_be_live() {
        let db = setup();
        let tax = TaxRate::default();
        db.venues.borrow_mut()[0].status = VenueStatus::Pending;
        assert!(matches!(
            create_booking(&db, "customer", new_booking("x", &["10:00"]), tax, now()),
            Err(Error::VenueNotBookable)
        ));
        db.venues.borrow_mut()[0].status = VenueStatus::PendingDeletion;
        assert!(create_booking(&db, "customer", new_booking("x", &["10:00"]), tax, now()).is_ok());
    }
}
