use courtside_entities::user::{Role, User};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("banned account")]
    Banned,
}

pub type Result<T> = StdResult<T, Error>;

/// Banned accounts are locked out, except for admins.
pub fn authorize_active(user: &User) -> Result<()> {
    if user.is_banned() && !user.is_admin() {
        return Err(Error::Banned);
    }
    Ok(())
}

pub fn authorize_role(user: &User, required_role: Role) -> Result<()> {
    authorize_active(user)?;
    if user.role != required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_entities::{builders::*, user::UserStatus};

    #[test]
    fn banned_users_are_rejected() {
        let user = User::build()
            .role(Role::Customer)
            .status(UserStatus::Banned)
            .finish();
        assert!(matches!(authorize_active(&user), Err(Error::Banned)));
        assert!(matches!(
            authorize_role(&user, Role::Customer),
            Err(Error::Banned)
        ));
    }

    #[test]
    fn admins_bypass_the_ban() {
        let admin = User::build()
            .role(Role::Admin)
            .status(UserStatus::Banned)
            .finish();
        assert!(authorize_active(&admin).is_ok());
        assert!(authorize_role(&admin, Role::Admin).is_ok());
    }

    #[test]
    fn role_must_match() {
        let owner = User::build().role(Role::Owner).finish();
        assert!(matches!(
            authorize_role(&owner, Role::Customer),
            Err(Error::UnauthorizedRole)
        ));
        assert!(authorize_role(&owner, Role::Owner).is_ok());
    }
}
