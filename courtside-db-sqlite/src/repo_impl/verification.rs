use super::*;

impl<'a> VerificationRepo for DbReadOnly<'a> {
    fn replace_verification(&self, _verification: &EmailVerification) -> Result<()> {
        unreachable!();
    }
    fn consume_verification(
        &self,
        _email: &EmailAddress,
        _code: &VerificationCode,
    ) -> Result<EmailVerification> {
        unreachable!();
    }
    fn delete_expired_verifications(&self, _expired_before: Timestamp) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> VerificationRepo for DbReadWrite<'a> {
    fn replace_verification(&self, verification: &EmailVerification) -> Result<()> {
        replace_verification(&mut self.conn.borrow_mut(), verification)
    }
    fn consume_verification(
        &self,
        email: &EmailAddress,
        code: &VerificationCode,
    ) -> Result<EmailVerification> {
        consume_verification(&mut self.conn.borrow_mut(), email, code)
    }
    fn delete_expired_verifications(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_verifications(&mut self.conn.borrow_mut(), expired_before)
    }
}

impl<'a> VerificationRepo for DbConnection<'a> {
    fn replace_verification(&self, verification: &EmailVerification) -> Result<()> {
        replace_verification(&mut self.conn.borrow_mut(), verification)
    }
    fn consume_verification(
        &self,
        email: &EmailAddress,
        code: &VerificationCode,
    ) -> Result<EmailVerification> {
        consume_verification(&mut self.conn.borrow_mut(), email, code)
    }
    fn delete_expired_verifications(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_verifications(&mut self.conn.borrow_mut(), expired_before)
    }
}

fn replace_verification(conn: &mut SqliteConnection, v: &EmailVerification) -> Result<()> {
    use schema::verification_codes::dsl;
    let user_rowid = resolve_user_rowid_by_email(conn, v.email.as_str())?;
    diesel::delete(dsl::verification_codes.filter(dsl::user_rowid.eq(user_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let new_code = models::NewVerificationCode {
        user_rowid,
        code: v.code.as_str(),
        expires_at: v.expires_at.as_millis(),
    };
    diesel::insert_into(schema::verification_codes::table)
        .values(&new_code)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn consume_verification(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
    code: &VerificationCode,
) -> Result<EmailVerification> {
    use schema::{users::dsl as user_dsl, verification_codes::dsl};
    let (rowid, expires_at) = schema::verification_codes::table
        .inner_join(schema::users::table)
        .select((dsl::rowid, dsl::expires_at))
        .filter(user_dsl::email.eq(email.as_str()))
        .filter(dsl::code.eq(code.as_str()))
        .first::<(i64, i64)>(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(dsl::verification_codes.filter(dsl::rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(EmailVerification {
        email: email.clone(),
        code: code.clone(),
        expires_at: Timestamp::from_millis(expires_at),
    })
}

fn delete_expired_verifications(
    conn: &mut SqliteConnection,
    expired_before: Timestamp,
) -> Result<usize> {
    use schema::verification_codes::dsl;
    diesel::delete(dsl::verification_codes.filter(dsl::expires_at.lt(expired_before.as_millis())))
        .execute(conn)
        .map_err(from_diesel_err)
}
