use super::{load_active_user, prelude::*};

fn load_own_booking<R>(repo: &R, user_id: &str, booking_id: &str) -> Result<Booking>
where
    R: UserRepo + BookingRepo,
{
    let user = load_active_user(repo, user_id)?;
    let booking = repo.get_booking(booking_id)?;
    if booking.user_id != user.id {
        return Err(Error::Forbidden);
    }
    Ok(booking)
}

/// Cancels an active booking of the calling user and frees its slots.
pub fn cancel_booking<R>(repo: &R, user_id: &str, booking_id: &str) -> Result<Booking>
where
    R: UserRepo + BookingRepo,
{
    let mut booking = load_own_booking(repo, user_id, booking_id)?;
    if !booking.status.is_active() {
        return Err(Error::BookingStatus(booking.status));
    }
    repo.set_booking_status(booking_id, BookingStatus::Cancelled)?;
    let released = repo.release_booking_slots(booking_id)?;
    debug_assert_eq!(released, booking.slots.len());
    booking.status = BookingStatus::Cancelled;
    log::info!("Cancelled booking {booking_id} and released {released} slot(s)");
    Ok(booking)
}

/// Confirms a pending booking, i.e. the (simulated) payment succeeded.
pub fn confirm_booking<R>(repo: &R, user_id: &str, booking_id: &str) -> Result<Booking>
where
    R: UserRepo + BookingRepo,
{
    let mut booking = load_own_booking(repo, user_id, booking_id)?;
    if booking.status != BookingStatus::Pending {
        return Err(Error::BookingStatus(booking.status));
    }
    repo.set_booking_status(booking_id, BookingStatus::Confirmed)?;
    booking.status = BookingStatus::Confirmed;
    log::info!("Confirmed booking {booking_id}");
    Ok(booking)
}

pub fn list_booked_slots<R>(repo: &R, venue_id: &str, court: &str, date: Date) -> Result<Vec<Slot>>
where
    R: VenueRepo + BookingRepo,
{
    let venue = repo.get_venue(venue_id)?;
    if venue.court(court).is_none() {
        return Err(Error::UnknownCourt);
    }
    let slots = normalize_slots(repo.booked_slots(venue_id, court, date)?);
    Ok(slots)
}

pub fn bookings_of_user<R>(repo: &R, user_id: &str) -> Result<Vec<Booking>>
where
    R: UserRepo + BookingRepo,
{
    let user = load_active_user(repo, user_id)?;
    Ok(repo.bookings_of_user(user.id.as_str())?)
}

/// All bookings of a venue, visible for its owner and admins.
pub fn bookings_of_venue<R>(repo: &R, user_id: &str, venue_id: &str) -> Result<Vec<Booking>>
where
    R: UserRepo + VenueRepo + BookingRepo,
{
    let user = load_active_user(repo, user_id)?;
    let venue = repo.get_venue(venue_id)?;
    if venue.owner != user.id && !user.is_admin() {
        return Err(Error::Forbidden);
    }
    Ok(repo.bookings_of_venue(venue_id)?)
}

/// Marks all confirmed bookings before `today` as completed.
pub fn complete_past_bookings<R: BookingRepo>(repo: &R, today: Date) -> Result<usize> {
    let count = repo.complete_bookings_before(today)?;
    if count > 0 {
        log::info!("Completed {count} past booking(s)");
    }
    Ok(count)
}
