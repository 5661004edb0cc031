use super::{load_active_user, load_user_with_role, prelude::*};

#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i64,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

fn valid_rating(rating: i64) -> Result<RatingValue> {
    u8::try_from(rating)
        .map(RatingValue::from)
        .ok()
        .filter(|rating| rating.is_valid())
        .ok_or(Error::RatingValue)
}

fn valid_comment(comment: String) -> Result<String> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(Error::EmptyComment);
    }
    Ok(comment.to_string())
}

fn load_own_review<R>(repo: &R, user_id: &str, review_id: &str) -> Result<Review>
where
    R: UserRepo + ReviewRepo,
{
    let user = load_active_user(repo, user_id)?;
    let review = repo.get_review(review_id)?;
    if review.user_id != user.id {
        return Err(Error::Forbidden);
    }
    Ok(review)
}

pub fn create_review<R>(
    repo: &R,
    user_id: &str,
    venue_id: &str,
    new_review: NewReview,
) -> Result<Review>
where
    R: UserRepo + VenueRepo + ReviewRepo,
{
    let user = load_user_with_role(repo, user_id, Role::Customer)?;
    let NewReview { rating, comment } = new_review;
    let rating = valid_rating(rating)?;
    let comment = valid_comment(comment)?;
    let venue = repo.get_venue(venue_id)?;
    if repo
        .try_get_review_of_user(venue.id.as_str(), user.id.as_str())?
        .is_some()
    {
        return Err(Error::ReviewExists);
    }
    let now = Timestamp::now();
    let review = Review {
        id: Id::new(),
        venue_id: venue.id,
        user_id: user.id,
        rating,
        comment,
        created_at: now,
        updated_at: now,
    };
    // The pre-check above is racy, the repository has the last word.
    repo.create_review(&review).map_err(|err| match err {
        RepoError::AlreadyExists => Error::ReviewExists,
        err => Error::Repo(err),
    })?;
    log::info!("Created review {} of venue {}", review.id, review.venue_id);
    Ok(review)
}

pub fn update_review<R>(
    repo: &R,
    user_id: &str,
    review_id: &str,
    update: ReviewUpdate,
) -> Result<Review>
where
    R: UserRepo + ReviewRepo,
{
    let mut review = load_own_review(repo, user_id, review_id)?;
    let ReviewUpdate { rating, comment } = update;
    if rating.is_none() && comment.is_none() {
        return Err(Error::EmptyUpdate);
    }
    if let Some(rating) = rating {
        review.rating = valid_rating(rating)?;
    }
    if let Some(comment) = comment {
        review.comment = valid_comment(comment)?;
    }
    review.updated_at = Timestamp::now();
    repo.update_review(&review)?;
    log::info!("Updated review {review_id}");
    Ok(review)
}

pub fn delete_review<R>(repo: &R, user_id: &str, review_id: &str) -> Result<Review>
where
    R: UserRepo + ReviewRepo,
{
    let review = load_own_review(repo, user_id, review_id)?;
    repo.delete_review(review_id)?;
    log::info!("Deleted review {review_id}");
    Ok(review)
}

pub fn reviews_of_venue<R>(repo: &R, venue_id: &str) -> Result<Vec<Review>>
where
    R: VenueRepo + ReviewRepo,
{
    let venue = repo.get_venue(venue_id)?;
    Ok(repo.reviews_of_venue(venue.id.as_str())?)
}
