use super::{load_admin, load_user_with_role, prelude::*};

const LIVE_STATUS: [VenueStatus; 3] = [
    VenueStatus::Approved,
    VenueStatus::PendingUpdate,
    VenueStatus::PendingDeletion,
];

pub fn list_live_venues<R: VenueRepo>(repo: &R) -> Result<Vec<Venue>> {
    let mut venues = repo.venues_by_status(&LIVE_STATUS)?;
    venues.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(venues)
}

/// Loads a publicly visible venue.
pub fn get_live_venue<R: VenueRepo>(repo: &R, id: &str) -> Result<Venue> {
    let venue = repo.get_venue(id)?;
    if !venue.is_live() {
        return Err(RepoError::NotFound.into());
    }
    Ok(venue)
}

pub fn venues_of_owner<R>(repo: &R, user_id: &str) -> Result<Vec<Venue>>
where
    R: UserRepo + VenueRepo,
{
    let owner = load_user_with_role(repo, user_id, Role::Owner)?;
    Ok(repo.venues_of_owner(owner.id.as_str())?)
}

/// The moderation queue of admins.
pub fn venues_by_status<R>(repo: &R, admin_id: &str, status: VenueStatus) -> Result<Vec<Venue>>
where
    R: UserRepo + VenueRepo,
{
    load_admin(repo, admin_id)?;
    let mut venues = repo.venues_by_status(&[status])?;
    venues.sort_by_key(|v| v.created_at);
    Ok(venues)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use courtside_entities::builders::*;
    use strum::IntoEnumIterator;

    fn setup() -> MockDb {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().id("owner").role(Role::Owner).finish());
        db.users
            .borrow_mut()
            .push(User::build().id("admin").role(Role::Admin).finish());
        for status in VenueStatus::iter() {
            db.venues.borrow_mut().push(
                Venue::build()
                    .id(&status.to_string())
                    .name(&status.to_string())
                    .owner("owner")
                    .status(status)
                    .finish(),
            );
        }
        db
    }

    #[test]
    fn public_listing_contains_live_venues_only() {
        let db = setup();
        let ids: Vec<_> = list_live_venues(&db)
            .unwrap()
            .into_iter()
            .map(|v| v.id.to_string())
            .collect();
        assert_eq!(ids, vec!["approved", "pending_deletion", "pending_update"]);
        assert!(get_live_venue(&db, "pending_update").is_ok());
        assert!(matches!(
            get_live_venue(&db, "rejected"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn moderation_queue_for_admins() {
        let db = setup();
        let pending = venues_by_status(&db, "admin", VenueStatus::Pending).unwrap();
        assert_eq!(pending.len(), 1);
        assert!(matches!(
            venues_by_status(&db, "owner", VenueStatus::Pending),
            Err(Error::Forbidden)
        ));
        assert_eq!(venues_of_owner(&db, "owner").unwrap().len(), 5);
    }
}
