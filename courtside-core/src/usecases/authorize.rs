use super::prelude::*;
use crate::authorization::user::{authorize_active, authorize_role};

/// Loads the calling user, regardless of the account status.
pub fn get_current_user<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    match repo.get_user(user_id) {
        Ok(user) => Ok(user),
        Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(err.into()),
    }
}

/// Loads the calling user and rejects banned accounts.
pub fn load_active_user<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    let user = get_current_user(repo, user_id)?;
    authorize_active(&user)?;
    Ok(user)
}

pub fn load_user_with_role<R: UserRepo>(repo: &R, user_id: &str, role: Role) -> Result<User> {
    let user = get_current_user(repo, user_id)?;
    authorize_role(&user, role)?;
    Ok(user)
}

pub fn load_admin<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    load_user_with_role(repo, user_id, Role::Admin)
}
