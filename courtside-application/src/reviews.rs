use super::*;
use crate::error::AppError;

// Runs in a separate transaction after the review has been
// committed. A failure leaves a stale aggregate behind that
// is fixed by the next reconciliation.
fn refresh_venue_rating(connections: &sqlite::Connections, venue_id: &str) {
    let result = connections
        .exclusive()
        .map_err(AppError::from)
        .and_then(|mut db| {
            Ok(db.transaction(|conn| usecases::recompute_venue_rating(conn, venue_id))?)
        });
    if let Err(err) = result {
        error!("Failed to recompute the rating of venue {venue_id}: {err}");
    }
}

pub fn create_review(
    connections: &sqlite::Connections,
    user_id: &str,
    venue_id: &str,
    new_review: usecases::NewReview,
) -> Result<Review> {
    let review = connections.exclusive()?.transaction(|conn| {
        usecases::create_review(conn, user_id, venue_id, new_review).map_err(|err| {
            warn!("Failed to create review of venue {venue_id}: {err}");
            err
        })
    })?;
    refresh_venue_rating(connections, review.venue_id.as_str());
    Ok(review)
}

pub fn update_review(
    connections: &sqlite::Connections,
    user_id: &str,
    review_id: &str,
    update: usecases::ReviewUpdate,
) -> Result<Review> {
    let review = connections.exclusive()?.transaction(|conn| {
        usecases::update_review(conn, user_id, review_id, update).map_err(|err| {
            warn!("Failed to update review {review_id}: {err}");
            err
        })
    })?;
    refresh_venue_rating(connections, review.venue_id.as_str());
    Ok(review)
}

pub fn delete_review(
    connections: &sqlite::Connections,
    user_id: &str,
    review_id: &str,
) -> Result<()> {
    let review = connections.exclusive()?.transaction(|conn| {
        usecases::delete_review(conn, user_id, review_id).map_err(|err| {
            warn!("Failed to delete review {review_id}: {err}");
            err
        })
    })?;
    refresh_venue_rating(connections, review.venue_id.as_str());
    Ok(())
}
