pub use courtside_boundary::*;

use courtside_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            name,
            email,
            password,
            role,
        } = from;
        usecases::NewUser {
            name,
            email,
            password,
            role: role.into(),
        }
    }

    pub fn new_venue(from: NewVenue) -> usecases::NewVenue {
        let NewVenue {
            name,
            location,
            price,
            image_url,
            sport,
            amenities,
            courts,
        } = from;
        usecases::NewVenue {
            name,
            location,
            price: e::Price::from_minor_units(price),
            image_url,
            sport,
            amenities,
            courts: courts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn try_new_booking(
        from: NewBooking,
    ) -> Result<usecases::NewBooking, time::error::Parse> {
        let NewBooking {
            venue_id,
            court,
            date,
            slots,
            player_name,
            player_email,
            player_phone,
        } = from;
        Ok(usecases::NewBooking {
            venue_id: venue_id.into(),
            court,
            date: e::parse_date(&date)?,
            slots,
            player_name,
            player_email,
            player_phone,
        })
    }

    pub fn new_review(from: NewReview) -> usecases::NewReview {
        let NewReview { rating, comment } = from;
        usecases::NewReview { rating, comment }
    }

    pub fn review_update(from: ReviewUpdate) -> usecases::ReviewUpdate {
        let ReviewUpdate { rating, comment } = from;
        usecases::ReviewUpdate { rating, comment }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    fn count(n: usize) -> u64 {
        u64::try_from(n).unwrap_or(u64::MAX)
    }

    pub fn venue_stats(from: usecases::VenueStats) -> VenueStats {
        let usecases::VenueStats {
            venue_id,
            name,
            status,
            rating,
            live_bookings,
            cancelled_bookings,
            revenue,
        } = from;
        VenueStats {
            venue_id: venue_id.into(),
            name,
            status: status.into(),
            rating: rating.average,
            review_count: rating.count,
            live_bookings: count(live_bookings),
            cancelled_bookings: count(cancelled_bookings),
            revenue: revenue.minor_units(),
        }
    }

    pub fn owner_dashboard(from: usecases::OwnerDashboard) -> OwnerDashboard {
        OwnerDashboard {
            venues: from.venues.into_iter().map(venue_stats).collect(),
        }
    }

    pub fn admin_dashboard(from: usecases::AdminDashboard) -> AdminDashboard {
        let usecases::AdminDashboard {
            users_per_role,
            banned_users,
            venues_per_status,
            bookings_per_status,
            revenue,
        } = from;
        AdminDashboard {
            users_per_role: users_per_role
                .into_iter()
                .map(|(role, n)| UserRoleCount(role.into(), count(n)))
                .collect(),
            banned_users: count(banned_users),
            venues_per_status: venues_per_status
                .into_iter()
                .map(|(status, n)| VenueStatusCount(status.into(), count(n)))
                .collect(),
            bookings_per_status: bookings_per_status
                .into_iter()
                .map(|(status, n)| BookingStatusCount(status.into(), count(n)))
                .collect(),
            revenue: revenue.minor_units(),
        }
    }

    pub fn venue_change(from: usecases::VenueChange) -> Venue {
        match from {
            usecases::VenueChange::Updated { venue, .. } => venue.into(),
            usecases::VenueChange::Removed(venue) => venue.into(),
        }
    }
}
