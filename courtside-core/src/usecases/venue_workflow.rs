use super::{load_active_user, load_user_with_role, prelude::*};
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name      : String,
    pub location  : String,
    pub price     : Price,
    pub image_url : Option<String>,
    pub sport     : String,
    pub amenities : Vec<String>,
    pub courts    : Vec<Court>,
}

#[derive(Debug, Clone)]
pub enum VenueChange {
    Updated {
        venue: Venue,
        old_status: VenueStatus,
    },
    Removed(Venue),
}

impl VenueChange {
    pub fn venue(&self) -> &Venue {
        match self {
            Self::Updated { venue, .. } => venue,
            Self::Removed(venue) => venue,
        }
    }
}

fn normalize_amenities(amenities: Vec<String>) -> Vec<String> {
    let mut amenities: Vec<_> = amenities
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();
    amenities.sort_unstable();
    amenities.dedup();
    amenities
}

fn normalize_courts(courts: Vec<Court>) -> Vec<Court> {
    courts
        .into_iter()
        .map(|c| Court {
            name: c.name.trim().to_string(),
            sport: c.sport.trim().to_string(),
            price: c.price,
        })
        .collect()
}

fn normalize_update(update: VenueUpdate) -> VenueUpdate {
    let VenueUpdate {
        name,
        location,
        price,
        image_url,
        sport,
        amenities,
        courts,
    } = update;
    let trim = |s: String| s.trim().to_string();
    VenueUpdate {
        name: name.map(trim),
        location: location.map(trim),
        price,
        image_url: image_url.map(trim).filter(|url| !url.is_empty()),
        sport: sport.map(trim),
        amenities: amenities.map(normalize_amenities),
        courts: courts.map(normalize_courts),
    }
}

pub fn create_venue<R>(repo: &R, user_id: &str, new_venue: NewVenue) -> Result<Venue>
where
    R: UserRepo + VenueRepo,
{
    let owner = load_user_with_role(repo, user_id, Role::Owner)?;
    let NewVenue {
        name,
        location,
        price,
        image_url,
        sport,
        amenities,
        courts,
    } = new_venue;
    let venue = Venue {
        id: Id::new(),
        owner: owner.id,
        created_at: Timestamp::now(),
        name: name.trim().to_string(),
        location: location.trim().to_string(),
        price,
        image_url: image_url.filter(|url| !url.trim().is_empty()),
        sport: sport.trim().to_string(),
        amenities: normalize_amenities(amenities),
        courts: normalize_courts(courts),
        status: VenueStatus::Pending,
        rating: RatingAggregate::default(),
        pending_update: None,
    };
    venue.validate()?;
    repo.create_venue(&venue)?;
    log::info!("Created venue {} of owner {}", venue.id, venue.owner);
    Ok(venue)
}

/// Applies a workflow action on behalf of the calling user.
///
/// Owners may only request changes of their own venues,
/// all other actions require an admin.
pub fn change_venue_status<R>(
    repo: &R,
    user_id: &str,
    venue_id: &str,
    action: VenueAction,
    update: Option<VenueUpdate>,
) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    let user = load_active_user(repo, user_id)?;
    let mut venue = repo.get_venue(venue_id)?;
    if action.requires_admin() {
        if !user.is_admin() {
            return Err(Error::Forbidden);
        }
    } else if venue.owner != user.id {
        return Err(Error::Forbidden);
    }

    let old_status = venue.status;
    let new_status = match old_status.apply(action)? {
        Transition::Removed => {
            repo.delete_venue(venue_id)?;
            log::info!("Removed venue {venue_id}");
            return Ok(VenueChange::Removed(venue));
        }
        Transition::Status(status) => status,
    };

    match action {
        VenueAction::RequestUpdate => {
            let update = normalize_update(update.ok_or(Error::EmptyUpdate)?);
            if update.is_empty() {
                return Err(Error::EmptyUpdate);
            }
            update.validate()?;
            venue.pending_update = Some(update);
        }
        VenueAction::AcceptUpdate => {
            if let Some(update) = venue.pending_update.take() {
                venue.apply_update(update);
            }
        }
        VenueAction::RejectUpdate => {
            venue.pending_update = None;
        }
        _ => {}
    }
    venue.status = new_status;
    repo.update_venue(&venue)?;
    log::info!("Changed status of venue {venue_id} from {old_status} to {new_status}");
    Ok(VenueChange::Updated { venue, old_status })
}

pub fn request_venue_update<R>(
    repo: &R,
    user_id: &str,
    venue_id: &str,
    update: VenueUpdate,
) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    change_venue_status(
        repo,
        user_id,
        venue_id,
        VenueAction::RequestUpdate,
        Some(update),
    )
}

pub fn request_venue_deletion<R>(repo: &R, user_id: &str, venue_id: &str) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    change_venue_status(repo, user_id, venue_id, VenueAction::RequestDeletion, None)
}

pub fn approve_venue<R>(repo: &R, admin_id: &str, venue_id: &str) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    change_venue_status(repo, admin_id, venue_id, VenueAction::Approve, None)
}

pub fn reject_venue<R>(repo: &R, admin_id: &str, venue_id: &str) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    change_venue_status(repo, admin_id, venue_id, VenueAction::Reject, None)
}

pub fn resolve_venue_update<R>(
    repo: &R,
    admin_id: &str,
    venue_id: &str,
    accept: bool,
) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    let action = if accept {
        VenueAction::AcceptUpdate
    } else {
        VenueAction::RejectUpdate
    };
    change_venue_status(repo, admin_id, venue_id, action, None)
}

pub fn resolve_venue_deletion<R>(
    repo: &R,
    admin_id: &str,
    venue_id: &str,
    accept: bool,
) -> Result<VenueChange>
where
    R: UserRepo + VenueRepo,
{
    let action = if accept {
        VenueAction::AcceptDeletion
    } else {
        VenueAction::RejectDeletion
    };
    change_venue_status(repo, admin_id, venue_id, action, None)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::util::validate::{CourtInvalidation, VenueInvalidation};
    use courtside_entities::builders::*;

    fn setup(status: VenueStatus) -> MockDb {
        let db = MockDb::default();
        for (id, role) in [
            ("owner", Role::Owner),
            ("other", Role::Owner),
            ("admin", Role::Admin),
            ("customer", Role::Customer),
        ] {
            db.users
                .borrow_mut()
                .push(User::build().id(id).role(role).finish());
        }
        db.venues.borrow_mut().push(
            Venue::build()
                .id("x")
                .owner("owner")
                .name("Arena")
                .location("Downtown")
                .sport("tennis")
                .price(1_000)
                .court("Court 1", "tennis", 500)
                .status(status)
                .rating(4.0, 1)
                .finish(),
        );
        db
    }

    fn new_venue() -> NewVenue {
        NewVenue {
            name: " Center Court ".into(),
            location: "Main Street".into(),
            price: Price::from(2_000),
            image_url: Some("".into()),
            sport: "padel".into(),
            amenities: vec!["parking".into(), " showers".into(), "parking".into()],
            courts: vec![Court {
                name: "A".into(),
                sport: "padel".into(),
                price: Price::from(1_500),
            }],
        }
    }

    #[test]
    fn owners_create_pending_venues() {
        let db = setup(VenueStatus::Approved);
        let venue = create_venue(&db, "owner", new_venue()).unwrap();
        assert_eq!(venue.status, VenueStatus::Pending);
        assert_eq!(venue.name, "Center Court");
        assert_eq!(venue.image_url, None);
        assert_eq!(venue.amenities, vec!["parking", "showers"]);
        assert_eq!(venue.rating, RatingAggregate::default());
        assert!(matches!(
            create_venue(&db, "customer", new_venue()),
            Err(Error::Forbidden)
        ));
        let mut invalid = new_venue();
        invalid.courts.clear();
        assert!(matches!(
            create_venue(&db, "owner", invalid),
            Err(Error::Venue(_))
        ));
    }

    #[test]
    fn admin_approves_and_rejects() {
        let db = setup(VenueStatus::Pending);
        assert!(matches!(
            approve_venue(&db, "owner", "x"),
            Err(Error::Forbidden)
        ));
        approve_venue(&db, "admin", "x").unwrap();
        assert_eq!(db.get_venue("x").unwrap().status, VenueStatus::Approved);

        let db = setup(VenueStatus::Pending);
        reject_venue(&db, "admin", "x").unwrap();
        assert_eq!(db.get_venue("x").unwrap().status, VenueStatus::Rejected);
        assert!(matches!(
            approve_venue(&db, "admin", "x"),
            Err(Error::InvalidTransition(_))
        ));
    }

    #[test]
    fn accepted_update_changes_exactly_the_staged_fields() {
        let db = setup(VenueStatus::Approved);
        let before = db.get_venue("x").unwrap();
        let update = VenueUpdate {
            name: Some("Arena Deluxe".into()),
            price: Some(Price::from(1_200)),
            ..Default::default()
        };
        request_venue_update(&db, "owner", "x", update).unwrap();

        // live data is untouched while pending
        let pending = db.get_venue("x").unwrap();
        assert_eq!(pending.status, VenueStatus::PendingUpdate);
        assert_eq!(pending.name, "Arena");
        assert!(pending.pending_update.is_some());

        resolve_venue_update(&db, "admin", "x", true).unwrap();
        let after = db.get_venue("x").unwrap();
        assert_eq!(after.status, VenueStatus::Approved);
        assert!(after.pending_update.is_none());
        assert_eq!(after.name, "Arena Deluxe");
        assert_eq!(after.price, Price::from(1_200));
        assert_eq!(after.location, before.location);
        assert_eq!(after.sport, before.sport);
        assert_eq!(after.courts, before.courts);
        assert_eq!(after.amenities, before.amenities);
        assert_eq!(after.rating, before.rating);
    }

    #[test]
    fn staged_update_is_normalized_before_validation() {
        let db = setup(VenueStatus::Approved);
        let court = |name: &str| Court {
            name: name.into(),
            sport: "tennis".into(),
            price: Price::from(500),
        };
        let duplicates = VenueUpdate {
            courts: Some(vec![court("B"), court("B ")]),
            ..Default::default()
        };
        assert!(matches!(
            request_venue_update(&db, "owner", "x", duplicates),
            Err(Error::Venue(VenueInvalidation::Court(
                CourtInvalidation::DuplicateName(_)
            )))
        ));
        let venue = db.get_venue("x").unwrap();
        assert_eq!(venue.status, VenueStatus::Approved);
        assert!(venue.pending_update.is_none());

        let update = VenueUpdate {
            name: Some(" Arena Deluxe ".into()),
            sport: Some(" padel".into()),
            image_url: Some(" ".into()),
            courts: Some(vec![court(" B"), court("C ")]),
            ..Default::default()
        };
        request_venue_update(&db, "owner", "x", update).unwrap();
        let staged = db.get_venue("x").unwrap().pending_update.unwrap();
        assert_eq!(staged.name.as_deref(), Some("Arena Deluxe"));
        assert_eq!(staged.sport.as_deref(), Some("padel"));
        assert_eq!(staged.image_url, None);
        assert_eq!(
            staged.courts.unwrap().iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["B", "C"]
        );
        assert!(matches!(
            request_venue_update(&db, "owner", "x", VenueUpdate::default()),
            Err(Error::InvalidTransition(_))
        ));
    }

    #[test]
    fn rejected_update_is_discarded() {
        let db = setup(VenueStatus::Approved);
        let update = VenueUpdate {
            location: Some("Uptown".into()),
            ..Default::default()
        };
        request_venue_update(&db, "owner", "x", update).unwrap();
        resolve_venue_update(&db, "admin", "x", false).unwrap();
        let venue = db.get_venue("x").unwrap();
        assert_eq!(venue.status, VenueStatus::Approved);
        assert_eq!(venue.location, "Downtown");
        assert!(venue.pending_update.is_none());
    }

    #[test]
    fn only_one_pending_workflow_at_a_time() {
        let db = setup(VenueStatus::Approved);
        let update = VenueUpdate {
            sport: Some("squash".into()),
            ..Default::default()
        };
        request_venue_update(&db, "owner", "x", update.clone()).unwrap();
        assert!(matches!(
            request_venue_deletion(&db, "owner", "x"),
            Err(Error::InvalidTransition(_))
        ));
        assert!(matches!(
            request_venue_update(&db, "owner", "x", update),
            Err(Error::InvalidTransition(_))
        ));
        assert_eq!(db.get_venue("x").unwrap().status, VenueStatus::PendingUpdate);
    }

    #[test]
    fn only_the_owner_requests_changes() {
        let db = setup(VenueStatus::Approved);
        assert!(matches!(
            request_venue_deletion(&db, "other", "x"),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            request_venue_deletion(&db, "admin", "x"),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            request_venue_update(&db, "owner", "x", VenueUpdate::default()),
            Err(Error::EmptyUpdate)
        ));
    }

    #[test]
    fn accepted_deletion_removes_the_venue() {
        let db = setup(VenueStatus::Approved);
        request_venue_deletion(&db, "owner", "x").unwrap();
        assert_eq!(
            db.get_venue("x").unwrap().status,
            VenueStatus::PendingDeletion
        );
        let change = resolve_venue_deletion(&db, "admin", "x", true).unwrap();
        assert!(matches!(change, VenueChange::Removed(_)));
        assert!(matches!(
            db.get_venue("x"),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn rejected_deletion_restores_approval() {
        let db = setup(VenueStatus::Approved);
        request_venue_deletion(&db, "owner", "x").unwrap();
        resolve_venue_deletion(&db, "admin", "x", false).unwrap();
        assert_eq!(db.get_venue("x").unwrap().status, VenueStatus::Approved);
    }
}
