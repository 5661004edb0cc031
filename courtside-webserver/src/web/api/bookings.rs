use super::*;

#[post("/bookings", format = "application/json", data = "<new_booking>")]
pub fn post_booking(
    db: sqlite::Connections,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    account: Account,
    new_booking: JsonResult<json::NewBooking>,
) -> result::Result<Created<Json<json::Booking>>, ApiError> {
    let new_booking = from_json::try_new_booking(new_booking?.into_inner())?;
    let booking = flows::create_booking(&db, &*notify.0, account.id(), new_booking, cfg.tax_rate)?;
    let location = format!("/bookings/{}", booking.id);
    Ok(Created::new(location).body(Json(booking.into())))
}

#[get("/bookings")]
pub fn get_bookings(db: sqlite::Connections, account: Account) -> Result<Vec<json::Booking>> {
    let bookings = usecases::bookings_of_user(&db.shared()?, account.id())?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// Completes the simulated payment of a pending booking.
#[post("/bookings/<id>/confirm")]
pub fn post_confirm_booking(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> Result<json::Booking> {
    let booking = flows::confirm_booking(&db, account.id(), id)?;
    Ok(Json(booking.into()))
}

#[delete("/bookings/<id>")]
pub fn delete_booking(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::Booking> {
    let booking = flows::cancel_booking(&db, &*notify.0, account.id(), id)?;
    Ok(Json(booking.into()))
}
