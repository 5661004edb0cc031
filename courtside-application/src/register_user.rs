use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let (user, verification) = connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, new_user).map_err(|err| {
            warn!("Failed to register new user: {err}");
            err
        })
    })?;
    notify.user_registered(&user, &verification);
    Ok(user)
}

pub fn verify_email(connections: &sqlite::Connections, email: &str, code: &str) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::verify_email(conn, email, code).map_err(|err| {
            info!("Failed to verify email address {email}: {err}");
            err
        })
    })?)
}

pub fn refresh_verification_code(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    email: &str,
) -> Result<()> {
    let verification = connections
        .exclusive()?
        .transaction(|conn| usecases::refresh_verification_code(conn, email))?;
    notify.verification_code_refreshed(&verification);
    Ok(())
}

pub fn create_admin(
    connections: &sqlite::Connections,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_admin(conn, name, email, password))?)
}
