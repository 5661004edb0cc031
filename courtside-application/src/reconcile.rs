use super::*;

/// Outcome of a single reconciliation run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub completed_bookings: usize,
    pub fixed_ratings: usize,
    pub deleted_verifications: usize,
}

pub fn complete_past_bookings(connections: &sqlite::Connections, today: Date) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::complete_past_bookings(conn, today))?)
}

pub fn recompute_all_venue_ratings(connections: &sqlite::Connections) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::recompute_all_venue_ratings(conn))?)
}

pub fn delete_expired_verifications(connections: &sqlite::Connections) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_expired_verifications(conn))?)
}

/// Runs all maintenance steps one after another.
///
/// Each step is executed in its own transaction and a failing
/// step does not prevent the others from running.
pub fn reconcile(connections: &sqlite::Connections, now: Timestamp) -> Reconciliation {
    let mut outcome = Reconciliation::default();
    match complete_past_bookings(connections, now.date()) {
        Ok(count) => outcome.completed_bookings = count,
        Err(err) => error!("Failed to complete past bookings: {err}"),
    }
    match recompute_all_venue_ratings(connections) {
        Ok(count) => outcome.fixed_ratings = count,
        Err(err) => error!("Failed to recompute venue ratings: {err}"),
    }
    match delete_expired_verifications(connections) {
        Ok(count) => outcome.deleted_verifications = count,
        Err(err) => error!("Failed to delete expired verification codes: {err}"),
    }
    debug!("Reconciliation finished: {outcome:?}");
    outcome
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn complete_confirmed_bookings_after_their_day() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice", Role::Customer);
        let venue = fixture.create_live_venue("Arena");
        let booking = fixture.book(&alice, &venue, &["10:00"]).unwrap();
        let pending = fixture.book(&alice, &venue, &["11:00"]).unwrap();
        flows::confirm_booking(&fixture.db_connections, alice.as_str(), booking.id.as_str())
            .unwrap();

        let outcome = flows::reconcile(&fixture.db_connections, Timestamp::now());
        assert_eq!(outcome.completed_bookings, 0);

        let later = Timestamp::from(
            (upcoming_day() + Duration::days(1)).midnight(),
        );
        let outcome = flows::reconcile(&fixture.db_connections, later);
        assert_eq!(outcome.completed_bookings, 1);
        let bookings = fixture.bookings_of_user(&alice);
        let status_of = |id: &Id| bookings.iter().find(|b| &b.id == id).unwrap().status;
        assert_eq!(status_of(&booking.id), BookingStatus::Completed);
        assert_eq!(status_of(&pending.id), BookingStatus::Pending);
    }

    #[test]
    fn fix_stale_rating_aggregates() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_user("alice", Role::Customer);
        let venue = fixture.create_live_venue("Arena");
        flows::create_review(
            &fixture.db_connections,
            alice.as_str(),
            venue.as_str(),
            usecases::NewReview {
                rating: 4,
                comment: "Good".into(),
            },
        )
        .unwrap();
        fixture
            .db_connections
            .exclusive()
            .unwrap()
            .set_rating_aggregate(venue.as_str(), RatingAggregate::default())
            .unwrap();

        let outcome = flows::reconcile(&fixture.db_connections, Timestamp::now());
        assert_eq!(outcome.fixed_ratings, 1);
        assert_eq!(fixture.venue(&venue).rating.count, 1);
        // Reconciliation is idempotent
        let outcome = flows::reconcile(&fixture.db_connections, Timestamp::now());
        assert_eq!(outcome.fixed_ratings, 0);
    }
}
