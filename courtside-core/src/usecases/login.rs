use super::prelude::*;
use crate::authorization::user::authorize_active;

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    let email = login
        .email
        .parse::<EmailAddress>()
        .map_err(|_| Error::Credentials)?;
    let user = repo
        .try_get_user_by_email(&email)?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    authorize_active(&user)?;
    if !user.email_confirmed {
        return Err(Error::EmailNotConfirmed);
    }
    Ok(user)
}
