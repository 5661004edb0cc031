use courtside_entities::{review::*, venue::*};

pub trait Rated {
    fn rating_aggregate(&self, _: &[Review]) -> RatingAggregate;
}

impl Rated for Venue {
    fn rating_aggregate(&self, reviews: &[Review]) -> RatingAggregate {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.venue_id == self.id).count()
        );
        reviews
            .iter()
            .fold(RatingAggregateBuilder::default(), |mut acc, r| {
                acc += r.rating;
                acc
            })
            .build()
    }
}
