use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use courtside_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod booking;
mod review;
mod user;
mod venue;
mod verification;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve user id '{id}': {e}");
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_user_rowid_by_email(conn: &mut SqliteConnection, email: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::email.eq(email))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_venue_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::venues::dsl;
    schema::venues::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve venue id '{id}': {e}");
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_booking_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::bookings::dsl;
    schema::bookings::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve booking id '{id}': {e}");
            e
        })
        .map_err(from_diesel_err)
}
