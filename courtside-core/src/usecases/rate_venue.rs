use super::prelude::*;
use crate::rating::Rated;

/// Recalculates the rating aggregate of a venue from all of its reviews.
pub fn recompute_venue_rating<R>(repo: &R, venue_id: &str) -> Result<RatingAggregate>
where
    R: VenueRepo + ReviewRepo,
{
    let venue = repo.get_venue(venue_id)?;
    let reviews = repo.reviews_of_venue(venue_id)?;
    let rating = venue.rating_aggregate(&reviews);
    repo.set_rating_aggregate(venue_id, rating)?;
    log::debug!(
        "Recomputed rating of venue {venue_id}: {:.2} ({} reviews)",
        rating.average,
        rating.count
    );
    Ok(rating)
}

/// Recalculates the rating aggregates of all venues.
///
/// Returns the number of venues whose stored aggregate was stale.
pub fn recompute_all_venue_ratings<R>(repo: &R) -> Result<usize>
where
    R: VenueRepo + ReviewRepo,
{
    let mut stale = 0;
    for venue in repo.all_venues()? {
        let reviews = repo.reviews_of_venue(venue.id.as_str())?;
        let rating = venue.rating_aggregate(&reviews);
        if rating != venue.rating {
            log::warn!(
                "Fixing stale rating of venue {}: {:.2} ({}) -> {:.2} ({})",
                venue.id,
                venue.rating.average,
                venue.rating.count,
                rating.average,
                rating.count
            );
            repo.set_rating_aggregate(venue.id.as_str(), rating)?;
            stale += 1;
        }
    }
    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, super::*, *};
    use courtside_entities::builders::*;

    fn setup() -> MockDb {
        let db = MockDb::default();
        for id in ["a", "b"] {
            db.users
                .borrow_mut()
                .push(User::build().id(id).role(Role::Customer).finish());
        }
        db.venues
            .borrow_mut()
            .push(Venue::build().id("v").status(VenueStatus::Approved).finish());
        db
    }

    fn review(rating: i64) -> NewReview {
        NewReview {
            rating,
            comment: "ok".into(),
        }
    }

    #[test]
    fn aggregate_follows_the_reviews() {
        let db = setup();
        let a = create_review(&db, "a", "v", review(4)).unwrap();
        recompute_venue_rating(&db, "v").unwrap();
        create_review(&db, "b", "v", review(2)).unwrap();
        let rating = recompute_venue_rating(&db, "v").unwrap();
        assert_eq!(rating.average, 3.0);
        assert_eq!(rating.count, 2);
        assert_eq!(db.get_venue("v").unwrap().rating, rating);

        delete_review(&db, "a", a.id.as_str()).unwrap();
        let rating = recompute_venue_rating(&db, "v").unwrap();
        assert_eq!(rating.average, 2.0);
        assert_eq!(rating.count, 1);
    }

    #[test]
    fn aggregate_of_venue_without_reviews_is_zero() {
        let db = setup();
        db.set_rating_aggregate(
            "v",
            RatingAggregate {
                average: 5.0,
                count: 3,
            },
        )
        .unwrap();
        let rating = recompute_venue_rating(&db, "v").unwrap();
        assert_eq!(rating, RatingAggregate::default());
    }

    #[test]
    fn reconcile_stale_aggregates() {
        let db = setup();
        create_review(&db, "a", "v", review(5)).unwrap();
        // the aggregate has not been recomputed yet
        assert_eq!(recompute_all_venue_ratings(&db).unwrap(), 1);
        assert_eq!(db.get_venue("v").unwrap().rating.count, 1);
        // idempotent
        assert_eq!(recompute_all_venue_ratings(&db).unwrap(), 0);
    }
}
