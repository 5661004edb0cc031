use super::*;

fn change_venue_status(
    db: &sqlite::Connections,
    notify: &Notify,
    account: &Account,
    id: &str,
    action: VenueAction,
) -> Result<json::Venue> {
    let change = flows::change_venue_status(db, &*notify.0, account.id(), id, action, None)?;
    Ok(Json(to_json::venue_change(change)))
}

#[get("/admin/venues?<status>")]
pub fn get_venues_by_status(
    db: sqlite::Connections,
    account: Account,
    status: &str,
) -> Result<Vec<json::Venue>> {
    let status = status
        .parse::<VenueStatus>()
        .map_err(|_| ApiError::bad_request("Invalid venue status"))?;
    let venues = usecases::venues_by_status(&db.shared()?, account.id(), status)?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

#[post("/admin/venues/<id>/approve")]
pub fn post_approve_venue(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::Venue> {
    change_venue_status(&db, notify, &account, id, VenueAction::Approve)
}

#[post("/admin/venues/<id>/reject")]
pub fn post_reject_venue(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::Venue> {
    change_venue_status(&db, notify, &account, id, VenueAction::Reject)
}

#[post("/admin/venues/<id>/resolve-update", format = "application/json", data = "<resolution>")]
pub fn post_resolve_update(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    resolution: JsonResult<json::Resolution>,
) -> Result<json::Venue> {
    let action = if resolution?.accept {
        VenueAction::AcceptUpdate
    } else {
        VenueAction::RejectUpdate
    };
    change_venue_status(&db, notify, &account, id, action)
}

#[post("/admin/venues/<id>/resolve-deletion", format = "application/json", data = "<resolution>")]
pub fn post_resolve_deletion(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    resolution: JsonResult<json::Resolution>,
) -> Result<json::Venue> {
    let action = if resolution?.accept {
        VenueAction::AcceptDeletion
    } else {
        VenueAction::RejectDeletion
    };
    change_venue_status(&db, notify, &account, id, action)
}

#[post("/admin/users/<id>/ban")]
pub fn post_ban_user(db: sqlite::Connections, account: Account, id: &str) -> Result<json::User> {
    let user = flows::change_user_status(&db, account.id(), id, UserStatus::Banned)?;
    Ok(Json(user.into()))
}

#[post("/admin/users/<id>/unban")]
pub fn post_unban_user(db: sqlite::Connections, account: Account, id: &str) -> Result<json::User> {
    let user = flows::change_user_status(&db, account.id(), id, UserStatus::Active)?;
    Ok(Json(user.into()))
}
