use super::{load_admin, prelude::*};

pub fn change_user_status<R: UserRepo>(
    repo: &R,
    admin_id: &str,
    user_id: &str,
    status: UserStatus,
) -> Result<User> {
    load_admin(repo, admin_id)?;
    let mut user = repo.get_user(user_id)?;
    if user.is_admin() && status == UserStatus::Banned {
        return Err(Error::Forbidden);
    }
    if user.status != status {
        log::info!("Changing status of user {} to {}", user.id, status);
        user.status = status;
        repo.update_user(&user)?;
    }
    Ok(user)
}
