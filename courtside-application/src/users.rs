use super::*;

pub fn change_user_status(
    connections: &sqlite::Connections,
    admin_id: &str,
    user_id: &str,
    status: UserStatus,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_user_status(conn, admin_id, user_id, status).map_err(|err| {
            warn!("Failed to change status of user {user_id} to {status}: {err}");
            err
        })
    })?)
}
