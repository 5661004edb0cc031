use super::*;

pub fn create_booking(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user_id: &str,
    new_booking: usecases::NewBooking,
    tax: TaxRate,
) -> Result<Booking> {
    let (booking, venue) = connections.exclusive()?.transaction(|conn| {
        let booking =
            usecases::create_booking(conn, user_id, new_booking, tax, Timestamp::now())
                .map_err(|err| {
                    match err {
                        usecases::Error::SlotConflict => {
                            debug!("Rejected booking of user {user_id}: {err}")
                        }
                        _ => warn!("Failed to create booking for user {user_id}: {err}"),
                    }
                    err
                })?;
        let venue = conn.get_venue(booking.venue_id.as_str())?;
        Ok::<_, usecases::Error>((booking, venue))
    })?;
    notify.booking_created(&booking, &venue);
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use std::{sync::Barrier, thread};

    #[test]
    fn create_a_pending_booking_with_tax() {
        let fixture = BackendFixture::new();
        let customer = fixture.create_user("alice", Role::Customer);
        let venue = fixture.create_live_venue("Arena");
        let booking = flows::create_booking(
            &fixture.db_connections,
            &fixture.notify,
            customer.as_str(),
            new_booking(&venue, &["10:00", "11:00"]),
            TaxRate::new(0.18),
        )
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        // 2 x 5.00 + 18 %
        assert_eq!(booking.total_price, Price::from(1_180));
        assert_eq!(fixture.notify.count("booking_created"), 1);
        assert_eq!(
            fixture
                .booked_slots(&venue, "A", upcoming_day())
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["10:00", "11:00"]
        );
    }

    #[test]
    fn reject_overlapping_booking() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice", Role::Customer);
        let bob = fixture.create_user("bob", Role::Customer);
        let venue = fixture.create_live_venue("Arena");
        fixture.book(&alice, &venue, &["10:00", "11:00"]).unwrap();
        let err = fixture.book(&bob, &venue, &["11:00", "12:00"]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Usecase(usecases::Error::SlotConflict))
        ));
        // The whole booking has been rolled back
        assert!(fixture.bookings_of_user(&bob).is_empty());
        assert_eq!(fixture.notify.count("booking_created"), 1);
    }

    #[test]
    fn slots_must_start_on_the_full_hour() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice", Role::Customer);
        let bob = fixture.create_user("bob", Role::Customer);
        let venue = fixture.create_live_venue("Arena");
        fixture.book(&alice, &venue, &["10:00"]).unwrap();
        let err = fixture.book(&bob, &venue, &["10:30"]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Usecase(usecases::Error::InvalidSlot))
        ));
        assert!(fixture.bookings_of_user(&bob).is_empty());
        assert_eq!(
            fixture
                .booked_slots(&venue, "A", upcoming_day())
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["10:00"]
        );
    }

    #[test]
    fn concurrent_bookings_of_the_same_slot_yield_a_single_winner() {
        let _ = env_logger::builder().is_test(true).try_init();
        const N: usize = 8;
        let fixture = BackendFixture::new();
        let venue = fixture.create_live_venue("Arena");
        let customers: Vec<_> = (0..N)
            .map(|i| fixture.create_user(&format!("customer{i}"), Role::Customer))
            .collect();
        let barrier = Barrier::new(N);
        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = customers
                .iter()
                .map(|customer| {
                    let connections = fixture.db_connections.clone();
                    let barrier = &barrier;
                    let venue = &venue;
                    scope.spawn(move || {
                        barrier.wait();
                        flows::create_booking(
                            &connections,
                            &DummyNotifyGW::default(),
                            customer.as_str(),
                            new_booking(venue, &["18:00"]),
                            TaxRate::default(),
                        )
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(
                    r,
                    Err(AppError::Business(BError::Usecase(
                        usecases::Error::SlotConflict
                    )))
                ))
                .count(),
            N - 1
        );
        assert_eq!(fixture.booked_slots(&venue, "A", upcoming_day()).len(), 1);
    }
}
