use courtside_core::{entities::*, repositories as repo};

use super::models::*;

type Result<T> = std::result::Result<T, repo::Error>;

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(u: &'a User) -> Self {
        Self {
            id: u.id.as_str(),
            name: &u.name,
            email: u.email.as_str(),
            email_confirmed: u.email_confirmed,
            password: u.password.as_ref(),
            role: u.role.into(),
            status: u.status.into(),
        }
    }
}

impl From<UserEntity> for User {
    fn from(u: UserEntity) -> Self {
        let UserEntity {
            id,
            name,
            email,
            email_confirmed,
            password,
            role,
            status,
            ..
        } = u;
        Self {
            id: id.into(),
            name,
            email: EmailAddress::new_unchecked(email),
            email_confirmed,
            password: password.into(),
            role: Role::try_from(role).unwrap_or_else(|_| {
                log::warn!(
                    "Could not cast role from i16 (value: {role}). Use {:?} instead.",
                    Role::default()
                );
                Role::default()
            }),
            status: UserStatus::try_from(status).unwrap_or_else(|_| {
                log::warn!("Could not cast user status from i16 (value: {status})");
                UserStatus::default()
            }),
        }
    }
}

pub fn load_venue_status(status: i16) -> Result<VenueStatus> {
    VenueStatus::try_from(status).map_err(|err| anyhow::Error::from(err).into())
}

pub fn load_booking_status(status: i16) -> Result<BookingStatus> {
    BookingStatus::try_from(status).map_err(|err| anyhow::Error::from(err).into())
}

pub fn encode_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn decode_slots(slots: &str) -> Result<Vec<Slot>> {
    slots
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Slot>()
                .map_err(|err| anyhow::anyhow!("Invalid stored slot '{s}': {err}").into())
        })
        .collect()
}

pub fn load_date(date: &str) -> Result<Date> {
    parse_date(date).map_err(|err| anyhow::anyhow!("Invalid stored date '{date}': {err}").into())
}

pub fn encode_pending_update(update: Option<&VenueUpdate>) -> Result<Option<String>> {
    let Some(update) = update else {
        return Ok(None);
    };
    let VenueUpdate {
        name,
        location,
        price,
        image_url,
        sport,
        amenities,
        courts,
    } = update.clone();
    let json = PendingUpdateJson {
        name,
        location,
        price: price.map(Price::minor_units),
        image_url,
        sport,
        amenities,
        courts: courts.map(|courts| {
            courts
                .into_iter()
                .map(|Court { name, sport, price }| CourtJson {
                    name,
                    sport,
                    price: price.minor_units(),
                })
                .collect()
        }),
    };
    serde_json::to_string(&json)
        .map(Some)
        .map_err(|err| anyhow::Error::from(err).into())
}

pub fn decode_pending_update(json: Option<&str>) -> Result<Option<VenueUpdate>> {
    let Some(json) = json else {
        return Ok(None);
    };
    let PendingUpdateJson {
        name,
        location,
        price,
        image_url,
        sport,
        amenities,
        courts,
    } = serde_json::from_str(json).map_err(anyhow::Error::from)?;
    Ok(Some(VenueUpdate {
        name,
        location,
        price: price.map(Price::from_minor_units),
        image_url,
        sport,
        amenities,
        courts: courts.map(|courts| {
            courts
                .into_iter()
                .map(|CourtJson { name, sport, price }| Court {
                    name,
                    sport,
                    price: price.into(),
                })
                .collect()
        }),
    }))
}
