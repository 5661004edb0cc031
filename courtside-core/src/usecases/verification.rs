use super::prelude::*;

pub fn verify_email<R>(repo: &R, email: &str, code: &str) -> Result<User>
where
    R: UserRepo + VerificationRepo,
{
    let email = email.parse::<EmailAddress>()?;
    let code = code
        .parse::<VerificationCode>()
        .map_err(|_| Error::TokenInvalid)?;
    let verification = match repo.consume_verification(&email, &code) {
        Ok(v) => v,
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        Err(err) => return Err(err.into()),
    };
    if verification.is_expired(Timestamp::now()) {
        return Err(Error::TokenExpired);
    }
    let mut user = repo
        .try_get_user_by_email(&email)?
        .ok_or(Error::UserDoesNotExist)?;
    if !user.email_confirmed {
        user.email_confirmed = true;
        repo.update_user(&user)?;
        log::info!("Confirmed email address of user {}", user.id);
    }
    Ok(user)
}

pub fn refresh_verification_code<R>(repo: &R, email: &str) -> Result<EmailVerification>
where
    R: UserRepo + VerificationRepo,
{
    let email = email.parse::<EmailAddress>()?;
    let user = repo
        .try_get_user_by_email(&email)?
        .ok_or(Error::UserDoesNotExist)?;
    if user.email_confirmed {
        return Err(Error::EmailAlreadyConfirmed);
    }
    let verification = EmailVerification {
        email: user.email,
        code: VerificationCode::new(),
        expires_at: Timestamp::now() + EmailVerification::lifetime(),
    };
    repo.replace_verification(&verification)?;
    Ok(verification)
}

pub fn delete_expired_verifications<R: VerificationRepo>(repo: &R) -> Result<usize> {
    Ok(repo.delete_expired_verifications(Timestamp::now())?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, super::*, *};

    fn register(db: &MockDb) -> (User, EmailVerification) {
        register_user(
            db,
            NewUser {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                password: "secret123".into(),
                role: Role::Customer,
            },
        )
        .unwrap()
    }

    #[test]
    fn codes_are_single_use() {
        let db = MockDb::default();
        let (_, v) = register(&db);
        let user = verify_email(&db, "jane@example.com", v.code.as_str()).unwrap();
        assert!(user.email_confirmed);
        assert!(db.get_user(user.id.as_str()).unwrap().email_confirmed);
        assert!(matches!(
            verify_email(&db, "jane@example.com", v.code.as_str()),
            Err(Error::TokenInvalid)
        ));
    }

    #[test]
    fn reject_wrong_and_expired_codes() {
        let db = MockDb::default();
        let (_, v) = register(&db);
        let wrong = if v.code.as_str() == "000000" {
            "111111"
        } else {
            "000000"
        };
        assert!(matches!(
            verify_email(&db, "jane@example.com", wrong),
            Err(Error::TokenInvalid)
        ));
        assert!(matches!(
            verify_email(&db, "jane@example.com", "abc"),
            Err(Error::TokenInvalid)
        ));

        db.verifications.borrow_mut()[0].expires_at = Timestamp::now() - Duration::hours(1);
        assert!(matches!(
            verify_email(&db, "jane@example.com", v.code.as_str()),
            Err(Error::TokenExpired)
        ));
    }

    #[test]
    fn refresh_replaces_the_previous_code() {
        let db = MockDb::default();
        let (_, old) = register(&db);
        let new = refresh_verification_code(&db, "jane@example.com").unwrap();
        assert_eq!(db.verifications.borrow().len(), 1);
        if new.code != old.code {
            assert!(verify_email(&db, "jane@example.com", old.code.as_str()).is_err());
        }
        verify_email(&db, "jane@example.com", new.code.as_str()).unwrap();
        assert!(matches!(
            refresh_verification_code(&db, "jane@example.com"),
            Err(Error::EmailAlreadyConfirmed)
        ));
        assert!(matches!(
            refresh_verification_code(&db, "joe@example.com"),
            Err(Error::UserDoesNotExist)
        ));
    }
}
