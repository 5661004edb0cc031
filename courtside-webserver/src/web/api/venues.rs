use super::*;

#[get("/venues")]
pub fn get_venues(db: sqlite::Connections) -> Result<Vec<json::Venue>> {
    let venues = usecases::list_live_venues(&db.shared()?)?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

#[get("/venues/mine")]
pub fn get_my_venues(db: sqlite::Connections, account: Account) -> Result<Vec<json::Venue>> {
    let venues = usecases::venues_of_owner(&db.shared()?, account.id())?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

#[get("/venues/<id>")]
pub fn get_venue(db: sqlite::Connections, id: &str) -> Result<json::Venue> {
    let venue = usecases::get_live_venue(&db.shared()?, id)?;
    Ok(Json(venue.into()))
}

#[post("/venues", format = "application/json", data = "<new_venue>")]
pub fn post_venue(
    db: sqlite::Connections,
    account: Account,
    new_venue: JsonResult<json::NewVenue>,
) -> Result<json::Venue> {
    let new_venue = from_json::new_venue(new_venue?.into_inner());
    let venue = flows::create_venue(&db, account.id(), new_venue)?;
    Ok(Json(venue.into()))
}

/// Stages an update of a live venue until an admin accepts it.
#[put("/venues/<id>", format = "application/json", data = "<update>")]
pub fn put_venue(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    update: JsonResult<json::VenueUpdate>,
) -> Result<json::Venue> {
    let update: VenueUpdate = update?.into_inner().into();
    let change = flows::change_venue_status(
        &db,
        &*notify.0,
        account.id(),
        id,
        VenueAction::RequestUpdate,
        Some(update),
    )?;
    Ok(Json(to_json::venue_change(change)))
}

#[delete("/venues/<id>")]
pub fn delete_venue(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::Venue> {
    let change = flows::change_venue_status(
        &db,
        &*notify.0,
        account.id(),
        id,
        VenueAction::RequestDeletion,
        None,
    )?;
    Ok(Json(to_json::venue_change(change)))
}

#[get("/venues/<id>/booked-slots?<court>&<date>")]
pub fn get_booked_slots(
    db: sqlite::Connections,
    id: &str,
    court: &str,
    date: &str,
) -> Result<Vec<String>> {
    let date = parse_date(date)?;
    let slots = usecases::list_booked_slots(&db.shared()?, id, court, date)?;
    Ok(Json(slots.into_iter().map(|s| s.to_string()).collect()))
}

#[get("/venues/<id>/bookings")]
pub fn get_venue_bookings(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> Result<Vec<json::Booking>> {
    let bookings = usecases::bookings_of_venue(&db.shared()?, account.id(), id)?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

#[get("/venues/<id>/reviews")]
pub fn get_venue_reviews(db: sqlite::Connections, id: &str) -> Result<Vec<json::Review>> {
    let reviews = usecases::reviews_of_venue(&db.shared()?, id)?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[post("/venues/<id>/reviews", format = "application/json", data = "<review>")]
pub fn post_venue_review(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let new_review = from_json::new_review(review?.into_inner());
    let review = flows::create_review(&db, account.id(), id, new_review)?;
    Ok(Json(review.into()))
}
