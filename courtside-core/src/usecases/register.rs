use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn new_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        name,
        email,
        password,
        role,
    } = new_user;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let email = email.parse::<EmailAddress>()?;
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    Ok(User {
        id: Id::new(),
        name,
        email,
        email_confirmed: false,
        password,
        role,
        status: UserStatus::Active,
    })
}

fn store_user<R: UserRepo>(repo: &R, user: &User) -> Result<()> {
    repo.create_user(user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })
}

/// Registers a customer or owner account that needs to be
/// confirmed with the returned verification code.
pub fn register_user<R>(repo: &R, new: NewUser) -> Result<(User, EmailVerification)>
where
    R: UserRepo + VerificationRepo,
{
    if new.role == Role::Admin {
        return Err(Error::Role);
    }
    let user = new_user(repo, new)?;
    store_user(repo, &user)?;
    let verification = EmailVerification {
        email: user.email.clone(),
        code: VerificationCode::new(),
        expires_at: Timestamp::now() + EmailVerification::lifetime(),
    };
    repo.replace_verification(&verification)?;
    log::info!("Registered new {} account {}", user.role, user.id);
    Ok((user, verification))
}

/// Creates an admin account with a confirmed email address.
pub fn create_admin<R: UserRepo>(repo: &R, name: &str, email: &str, password: &str) -> Result<User> {
    let mut user = new_user(
        repo,
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Admin,
        },
    )?;
    user.email_confirmed = true;
    store_user(repo, &user)?;
    log::info!("Created admin account {}", user.id);
    Ok(user)
}
