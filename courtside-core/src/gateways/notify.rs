use courtside_entities::{
    booking::Booking, user::User, venue::Venue, venue_status::VenueStatus,
    verification::EmailVerification,
};

pub trait NotificationGateway {
    fn user_registered(&self, user: &User, verification: &EmailVerification);
    fn verification_code_refreshed(&self, verification: &EmailVerification);
    fn booking_created(&self, booking: &Booking, venue: &Venue);
    fn booking_cancelled(&self, booking: &Booking);
    fn venue_status_changed(&self, venue: &Venue, old_status: VenueStatus);
    fn venue_removed(&self, venue: &Venue);
}
