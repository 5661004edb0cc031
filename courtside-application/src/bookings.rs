use super::*;

pub fn cancel_booking(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user_id: &str,
    booking_id: &str,
) -> Result<Booking> {
    let booking = connections.exclusive()?.transaction(|conn| {
        usecases::cancel_booking(conn, user_id, booking_id).map_err(|err| {
            warn!("Failed to cancel booking {booking_id}: {err}");
            err
        })
    })?;
    notify.booking_cancelled(&booking);
    Ok(booking)
}

pub fn confirm_booking(
    connections: &sqlite::Connections,
    user_id: &str,
    booking_id: &str,
) -> Result<Booking> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::confirm_booking(conn, user_id, booking_id).map_err(|err| {
            warn!("Failed to confirm booking {booking_id}: {err}");
            err
        })
    })?)
}
