use super::*;
use crate::util::{decode_pending_update, encode_pending_update, load_venue_status};

impl<'a> VenueRepo for DbReadOnly<'a> {
    fn create_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn update_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn delete_venue(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_status(&self, status: &[VenueStatus]) -> Result<Vec<Venue>> {
        venues_by_status(&mut self.conn.borrow_mut(), status)
    }
    fn venues_of_owner(&self, owner_id: &str) -> Result<Vec<Venue>> {
        venues_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }

    fn set_rating_aggregate(&self, _id: &str, _rating: RatingAggregate) -> Result<()> {
        unreachable!();
    }
}

impl<'a> VenueRepo for DbReadWrite<'a> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn delete_venue(&self, id: &str) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_status(&self, status: &[VenueStatus]) -> Result<Vec<Venue>> {
        venues_by_status(&mut self.conn.borrow_mut(), status)
    }
    fn venues_of_owner(&self, owner_id: &str) -> Result<Vec<Venue>> {
        venues_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }

    fn set_rating_aggregate(&self, id: &str, rating: RatingAggregate) -> Result<()> {
        set_rating_aggregate(&mut self.conn.borrow_mut(), id, rating)
    }
}

impl<'a> VenueRepo for DbConnection<'a> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn delete_venue(&self, id: &str) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_status(&self, status: &[VenueStatus]) -> Result<Vec<Venue>> {
        venues_by_status(&mut self.conn.borrow_mut(), status)
    }
    fn venues_of_owner(&self, owner_id: &str) -> Result<Vec<Venue>> {
        venues_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }

    fn set_rating_aggregate(&self, id: &str, rating: RatingAggregate) -> Result<()> {
        set_rating_aggregate(&mut self.conn.borrow_mut(), id, rating)
    }
}

type VenueColumns = (
    schema::venues::rowid,
    schema::venues::id,
    schema::venues::created_at,
    schema::venues::name,
    schema::venues::location,
    schema::venues::price,
    schema::venues::image_url,
    schema::venues::sport,
    schema::venues::status,
    schema::venues::rating_avg,
    schema::venues::rating_count,
    schema::venues::pending_update,
    schema::users::id,
);

const VENUE_COLUMNS: VenueColumns = (
    schema::venues::rowid,
    schema::venues::id,
    schema::venues::created_at,
    schema::venues::name,
    schema::venues::location,
    schema::venues::price,
    schema::venues::image_url,
    schema::venues::sport,
    schema::venues::status,
    schema::venues::rating_avg,
    schema::venues::rating_count,
    schema::venues::pending_update,
    schema::users::id,
);

fn insert_amenities_and_courts(
    conn: &mut SqliteConnection,
    venue_rowid: i64,
    venue: &Venue,
) -> Result<()> {
    let amenities: Vec<_> = venue
        .amenities
        .iter()
        .map(|amenity| models::NewVenueAmenity {
            parent_rowid: venue_rowid,
            amenity: amenity.as_str(),
        })
        .collect();
    if !amenities.is_empty() {
        diesel::insert_into(schema::venue_amenity::table)
            .values(&amenities)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    let courts: Vec<_> = venue
        .courts
        .iter()
        .enumerate()
        .map(|(position, court)| models::VenueCourt {
            parent_rowid: venue_rowid,
            position: position as i32,
            name: court.name.clone(),
            sport: court.sport.clone(),
            price: court.price.minor_units(),
        })
        .collect();
    if !courts.is_empty() {
        diesel::insert_into(schema::venue_court::table)
            .values(&courts)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn create_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    let owner_rowid = resolve_user_rowid(conn, venue.owner.as_str())?;
    let new_venue = models::NewVenue {
        id: venue.id.as_str(),
        owner_rowid,
        created_at: venue.created_at.as_millis(),
        name: &venue.name,
        location: &venue.location,
        price: venue.price.minor_units(),
        image_url: venue.image_url.as_deref(),
        sport: &venue.sport,
        status: venue.status.into(),
        rating_avg: venue.rating.average,
        rating_count: venue.rating.count as i64,
        pending_update: encode_pending_update(venue.pending_update.as_ref())?,
    };
    diesel::insert_into(schema::venues::table)
        .values(&new_venue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let venue_rowid = resolve_venue_rowid(conn, venue.id.as_str())?;
    insert_amenities_and_courts(conn, venue_rowid, venue)
}

fn update_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    use schema::{venue_amenity::dsl as a_dsl, venue_court::dsl as c_dsl, venues::dsl};
    let venue_rowid = resolve_venue_rowid(conn, venue.id.as_str())?;
    let changed_venue = models::ChangedVenue {
        name: &venue.name,
        location: &venue.location,
        price: venue.price.minor_units(),
        image_url: venue.image_url.as_deref(),
        sport: &venue.sport,
        status: venue.status.into(),
        pending_update: encode_pending_update(venue.pending_update.as_ref())?,
    };
    diesel::update(dsl::venues.filter(dsl::rowid.eq(venue_rowid)))
        .set(&changed_venue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(a_dsl::venue_amenity.filter(a_dsl::parent_rowid.eq(venue_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(c_dsl::venue_court.filter(c_dsl::parent_rowid.eq(venue_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_amenities_and_courts(conn, venue_rowid, venue)
}

fn delete_venue(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::venues::dsl;
    // Bookings, their slots and reviews are removed by cascading deletes
    let count = diesel::delete(dsl::venues.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_venue(conn: &mut SqliteConnection, joined: models::JoinedVenue) -> Result<Venue> {
    use schema::{venue_amenity::dsl as a_dsl, venue_court::dsl as c_dsl};
    let models::JoinedVenue {
        rowid,
        id,
        created_at,
        name,
        location,
        price,
        image_url,
        sport,
        status,
        rating_avg,
        rating_count,
        pending_update,
        owner_id,
    } = joined;
    let amenities = schema::venue_amenity::table
        .select(a_dsl::amenity)
        .filter(a_dsl::parent_rowid.eq(rowid))
        .order_by(a_dsl::amenity)
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    let courts = schema::venue_court::table
        .filter(c_dsl::parent_rowid.eq(rowid))
        .order_by(c_dsl::position)
        .load::<models::VenueCourt>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::VenueCourt {
                 name, sport, price, ..
             }| Court {
                name,
                sport,
                price: price.into(),
            },
        )
        .collect();
    Ok(Venue {
        id: id.into(),
        owner: owner_id.into(),
        created_at: Timestamp::from_millis(created_at),
        name,
        location,
        price: price.into(),
        image_url,
        sport,
        amenities,
        courts,
        status: load_venue_status(status)?,
        rating: RatingAggregate {
            average: rating_avg,
            count: rating_count as u64,
        },
        pending_update: decode_pending_update(pending_update.as_deref())?,
    })
}

fn load_venues(
    conn: &mut SqliteConnection,
    joined: Vec<models::JoinedVenue>,
) -> Result<Vec<Venue>> {
    joined
        .into_iter()
        .map(|joined| load_venue(conn, joined))
        .collect()
}

fn get_venue(conn: &mut SqliteConnection, id: &str) -> Result<Venue> {
    use schema::venues::dsl;
    let joined = schema::venues::table
        .inner_join(schema::users::table)
        .select(VENUE_COLUMNS)
        .filter(dsl::id.eq(id))
        .first::<models::JoinedVenue>(conn)
        .map_err(from_diesel_err)?;
    load_venue(conn, joined)
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    let joined = schema::venues::table
        .inner_join(schema::users::table)
        .select(VENUE_COLUMNS)
        .order_by(dsl::rowid)
        .load::<models::JoinedVenue>(conn)
        .map_err(from_diesel_err)?;
    load_venues(conn, joined)
}

fn venues_by_status(conn: &mut SqliteConnection, status: &[VenueStatus]) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    let status: Vec<i16> = status.iter().copied().map(Into::into).collect();
    let joined = schema::venues::table
        .inner_join(schema::users::table)
        .select(VENUE_COLUMNS)
        .filter(dsl::status.eq_any(status))
        .order_by(dsl::rowid)
        .load::<models::JoinedVenue>(conn)
        .map_err(from_diesel_err)?;
    load_venues(conn, joined)
}

fn venues_of_owner(conn: &mut SqliteConnection, owner_id: &str) -> Result<Vec<Venue>> {
    use schema::{users::dsl as user_dsl, venues::dsl};
    let joined = schema::venues::table
        .inner_join(schema::users::table)
        .select(VENUE_COLUMNS)
        .filter(user_dsl::id.eq(owner_id))
        .order_by(dsl::rowid)
        .load::<models::JoinedVenue>(conn)
        .map_err(from_diesel_err)?;
    load_venues(conn, joined)
}

fn set_rating_aggregate(
    conn: &mut SqliteConnection,
    id: &str,
    rating: RatingAggregate,
) -> Result<()> {
    use schema::venues::dsl;
    let count = diesel::update(dsl::venues.filter(dsl::id.eq(id)))
        .set((
            dsl::rating_avg.eq(rating.average),
            dsl::rating_count.eq(rating.count as i64),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
