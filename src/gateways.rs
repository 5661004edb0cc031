use courtside_core::{entities::*, gateways::notify::NotificationGateway};

/// Writes all notifications into the log.
///
/// Verification codes are only logged on debug level.
#[derive(Debug, Default)]
pub struct LogNotificationGateway;

impl NotificationGateway for LogNotificationGateway {
    fn user_registered(&self, user: &User, verification: &EmailVerification) {
        log::info!("New {} account {} <{}>", user.role, user.id, user.email.as_str());
        log::debug!(
            "Verification code for {}: {}",
            verification.email.as_str(),
            verification.code.as_str()
        );
    }

    fn verification_code_refreshed(&self, verification: &EmailVerification) {
        log::info!("Refreshed verification code of {}", verification.email.as_str());
        log::debug!(
            "Verification code for {}: {}",
            verification.email.as_str(),
            verification.code.as_str()
        );
    }

    fn booking_created(&self, booking: &Booking, venue: &Venue) {
        log::info!(
            "Booking {} of court {} at {} on {}",
            booking.id,
            booking.court,
            venue.name,
            format_date(booking.date)
        );
    }

    fn booking_cancelled(&self, booking: &Booking) {
        log::info!("Booking {} was cancelled", booking.id);
    }

    fn venue_status_changed(&self, venue: &Venue, old_status: VenueStatus) {
        log::info!(
            "Status of venue {} changed from {} to {}",
            venue.id,
            old_status,
            venue.status
        );
    }

    fn venue_removed(&self, venue: &Venue) {
        log::info!("Venue {} ({}) was removed", venue.id, venue.name);
    }
}
