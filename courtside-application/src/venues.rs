use super::*;

pub fn create_venue(
    connections: &sqlite::Connections,
    user_id: &str,
    new_venue: usecases::NewVenue,
) -> Result<Venue> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_venue(conn, user_id, new_venue).map_err(|err| {
            warn!("Failed to create venue for user {user_id}: {err}");
            err
        })
    })?)
}

/// Applies a workflow action to a venue and notifies
/// about the outcome.
pub fn change_venue_status(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user_id: &str,
    venue_id: &str,
    action: VenueAction,
    update: Option<VenueUpdate>,
) -> Result<usecases::VenueChange> {
    let change = connections.exclusive()?.transaction(|conn| {
        usecases::change_venue_status(conn, user_id, venue_id, action, update).map_err(|err| {
            warn!("Failed to {action} venue {venue_id}: {err}");
            err
        })
    })?;
    match &change {
        usecases::VenueChange::Updated { venue, old_status } => {
            notify.venue_status_changed(venue, *old_status);
        }
        usecases::VenueChange::Removed(venue) => {
            notify.venue_removed(venue);
        }
    }
    Ok(change)
}
