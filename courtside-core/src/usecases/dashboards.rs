use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::{load_admin, load_user_with_role, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct VenueStats {
    pub venue_id           : Id,
    pub name               : String,
    pub status             : VenueStatus,
    pub rating             : RatingAggregate,
    pub live_bookings      : usize,
    pub cancelled_bookings : usize,
    pub revenue            : Price,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDashboard {
    pub venues: Vec<VenueStats>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub users_per_role      : Vec<(Role, usize)>,
    pub banned_users        : usize,
    pub venues_per_status   : Vec<(VenueStatus, usize)>,
    pub bookings_per_status : Vec<(BookingStatus, usize)>,
    pub revenue             : Price,
}

fn revenue<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Price {
    bookings
        .into_iter()
        .filter(|b| b.status.is_paid())
        .map(|b| b.total_price)
        .sum()
}

pub fn owner_dashboard<R>(repo: &R, user_id: &str) -> Result<OwnerDashboard>
where
    R: UserRepo + VenueRepo + BookingRepo,
{
    let owner = load_user_with_role(repo, user_id, Role::Owner)?;
    let mut venues = vec![];
    for venue in repo.venues_of_owner(owner.id.as_str())? {
        let bookings = repo.bookings_of_venue(venue.id.as_str())?;
        venues.push(VenueStats {
            live_bookings: bookings.iter().filter(|b| b.status.is_active()).count(),
            cancelled_bookings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Cancelled)
                .count(),
            revenue: revenue(&bookings),
            venue_id: venue.id,
            name: venue.name,
            status: venue.status,
            rating: venue.rating,
        });
    }
    Ok(OwnerDashboard { venues })
}

pub fn admin_dashboard<R>(repo: &R, admin_id: &str) -> Result<AdminDashboard>
where
    R: UserRepo + VenueRepo + BookingRepo,
{
    load_admin(repo, admin_id)?;

    let users = repo.all_users()?;
    let mut users_per_role: HashMap<Role, usize> = HashMap::new();
    for user in &users {
        *users_per_role.entry(user.role).or_default() += 1;
    }
    let banned_users = users.iter().filter(|u| u.is_banned()).count();

    let mut venues_per_status: HashMap<VenueStatus, usize> = HashMap::new();
    for venue in repo.all_venues()? {
        *venues_per_status.entry(venue.status).or_default() += 1;
    }

    let bookings = repo.all_bookings()?;
    let mut bookings_per_status: HashMap<BookingStatus, usize> = HashMap::new();
    for booking in &bookings {
        *bookings_per_status.entry(booking.status).or_default() += 1;
    }

    Ok(AdminDashboard {
        users_per_role: [Role::Customer, Role::Owner, Role::Admin]
            .into_iter()
            .map(|r| (r, users_per_role.get(&r).copied().unwrap_or_default()))
            .collect(),
        banned_users,
        venues_per_status: VenueStatus::iter()
            .map(|s| (s, venues_per_status.get(&s).copied().unwrap_or_default()))
            .collect(),
        bookings_per_status: BookingStatus::iter()
            .map(|s| (s, bookings_per_status.get(&s).copied().unwrap_or_default()))
            .collect(),
        revenue: revenue(&bookings),
    })
}
