use super::*;

#[put("/reviews/<id>", format = "application/json", data = "<update>")]
pub fn put_review(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::ReviewUpdate>,
) -> Result<json::Review> {
    let update = from_json::review_update(update?.into_inner());
    let review = flows::update_review(&db, account.id(), id, update)?;
    Ok(Json(review.into()))
}

#[delete("/reviews/<id>")]
pub fn delete_review(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    flows::delete_review(&db, account.id(), id)?;
    Ok(Json(()))
}
