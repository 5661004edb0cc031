use super::*;

#[get("/admin/dashboard")]
pub fn get_admin_dashboard(
    db: sqlite::Connections,
    account: Account,
) -> Result<json::AdminDashboard> {
    let dashboard = usecases::admin_dashboard(&db.shared()?, account.id())?;
    Ok(Json(to_json::admin_dashboard(dashboard)))
}

#[get("/owner/dashboard")]
pub fn get_owner_dashboard(
    db: sqlite::Connections,
    account: Account,
) -> Result<json::OwnerDashboard> {
    let dashboard = usecases::owner_dashboard(&db.shared()?, account.id())?;
    Ok(Json(to_json::owner_dashboard(dashboard)))
}
