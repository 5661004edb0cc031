use super::*;
use crate::util::{decode_slots, encode_slots, load_booking_status, load_date};

impl<'a> BookingRepo for DbReadOnly<'a> {
    fn create_booking(&self, _booking: &Booking) -> Result<()> {
        unreachable!();
    }
    fn get_booking(&self, id: &str) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn set_booking_status(&self, _id: &str, _status: BookingStatus) -> Result<()> {
        unreachable!();
    }
    fn release_booking_slots(&self, _id: &str) -> Result<usize> {
        unreachable!();
    }
    fn booked_slots(&self, venue_id: &str, court: &str, date: Date) -> Result<Vec<Slot>> {
        booked_slots(&mut self.conn.borrow_mut(), venue_id, court, date)
    }
    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn bookings_of_venue(&self, venue_id: &str) -> Result<Vec<Booking>> {
        bookings_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn all_bookings(&self) -> Result<Vec<Booking>> {
        all_bookings(&mut self.conn.borrow_mut())
    }
    fn complete_bookings_before(&self, _date: Date) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> BookingRepo for DbReadWrite<'a> {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn get_booking(&self, id: &str) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn set_booking_status(&self, id: &str, status: BookingStatus) -> Result<()> {
        set_booking_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn release_booking_slots(&self, id: &str) -> Result<usize> {
        release_booking_slots(&mut self.conn.borrow_mut(), id)
    }
    fn booked_slots(&self, venue_id: &str, court: &str, date: Date) -> Result<Vec<Slot>> {
        booked_slots(&mut self.conn.borrow_mut(), venue_id, court, date)
    }
    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn bookings_of_venue(&self, venue_id: &str) -> Result<Vec<Booking>> {
        bookings_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn all_bookings(&self) -> Result<Vec<Booking>> {
        all_bookings(&mut self.conn.borrow_mut())
    }
    fn complete_bookings_before(&self, date: Date) -> Result<usize> {
        complete_bookings_before(&mut self.conn.borrow_mut(), date)
    }
}

impl<'a> BookingRepo for DbConnection<'a> {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn get_booking(&self, id: &str) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn set_booking_status(&self, id: &str, status: BookingStatus) -> Result<()> {
        set_booking_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn release_booking_slots(&self, id: &str) -> Result<usize> {
        release_booking_slots(&mut self.conn.borrow_mut(), id)
    }
    fn booked_slots(&self, venue_id: &str, court: &str, date: Date) -> Result<Vec<Slot>> {
        booked_slots(&mut self.conn.borrow_mut(), venue_id, court, date)
    }
    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn bookings_of_venue(&self, venue_id: &str) -> Result<Vec<Booking>> {
        bookings_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn all_bookings(&self) -> Result<Vec<Booking>> {
        all_bookings(&mut self.conn.borrow_mut())
    }
    fn complete_bookings_before(&self, date: Date) -> Result<usize> {
        complete_bookings_before(&mut self.conn.borrow_mut(), date)
    }
}

type BookingColumns = (
    schema::bookings::id,
    schema::bookings::court,
    schema::bookings::date,
    schema::bookings::slots,
    schema::bookings::total_price,
    schema::bookings::status,
    schema::bookings::player_name,
    schema::bookings::player_email,
    schema::bookings::player_phone,
    schema::bookings::created_at,
    schema::venues::id,
    schema::users::id,
);

const BOOKING_COLUMNS: BookingColumns = (
    schema::bookings::id,
    schema::bookings::court,
    schema::bookings::date,
    schema::bookings::slots,
    schema::bookings::total_price,
    schema::bookings::status,
    schema::bookings::player_name,
    schema::bookings::player_email,
    schema::bookings::player_phone,
    schema::bookings::created_at,
    schema::venues::id,
    schema::users::id,
);

fn load_booking(joined: models::JoinedBooking) -> Result<Booking> {
    let models::JoinedBooking {
        id,
        court,
        date,
        slots,
        total_price,
        status,
        player_name,
        player_email,
        player_phone,
        created_at,
        venue_id,
        user_id,
    } = joined;
    Ok(Booking {
        id: id.into(),
        venue_id: venue_id.into(),
        court,
        user_id: user_id.into(),
        date: load_date(&date)?,
        slots: decode_slots(&slots)?,
        total_price: total_price.into(),
        status: load_booking_status(status)?,
        player: PlayerContact {
            name: player_name,
            email: EmailAddress::new_unchecked(player_email),
            phone: player_phone,
        },
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_booking(conn: &mut SqliteConnection, booking: &Booking) -> Result<()> {
    // The booking and all of its slots are stored atomically,
    // even if the caller did not start a transaction.
    let mut repo_error = None;
    conn.transaction::<_, DieselError, _>(|conn| {
        insert_booking(conn, booking).map_err(|err| {
            repo_error = Some(err);
            DieselError::RollbackTransaction
        })
    })
    .map_err(|err| repo_error.take().unwrap_or_else(|| from_diesel_err(err)))
}

fn insert_booking(conn: &mut SqliteConnection, booking: &Booking) -> Result<()> {
    let venue_rowid = resolve_venue_rowid(conn, booking.venue_id.as_str())?;
    let user_rowid = resolve_user_rowid(conn, booking.user_id.as_str())?;
    let date = format_date(booking.date);
    let new_booking = models::NewBooking {
        id: booking.id.as_str(),
        venue_rowid,
        user_rowid,
        court: &booking.court,
        date: date.clone(),
        slots: encode_slots(&booking.slots),
        total_price: booking.total_price.minor_units(),
        status: booking.status.into(),
        player_name: &booking.player.name,
        player_email: booking.player.email.as_str(),
        player_phone: &booking.player.phone,
        created_at: booking.created_at.as_millis(),
    };
    diesel::insert_into(schema::bookings::table)
        .values(&new_booking)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let booking_rowid = resolve_booking_rowid(conn, booking.id.as_str())?;
    for slot in &booking.slots {
        let occupied = models::NewBookingSlot {
            booking_rowid,
            venue_rowid,
            court: &booking.court,
            date: &date,
            slot: slot.to_string(),
        };
        diesel::insert_into(schema::booking_slot::table)
            .values(&occupied)
            .execute(conn)
            .map_err(|err| {
                log::debug!(
                    "Slot {slot} on {date} of court '{}' is not available: {err}",
                    booking.court
                );
                from_diesel_err(err)
            })?;
    }
    Ok(())
}

fn get_booking(conn: &mut SqliteConnection, id: &str) -> Result<Booking> {
    use schema::{bookings::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    let joined = schema::bookings::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(BOOKING_COLUMNS)
        .filter(dsl::id.eq(id))
        .first::<models::JoinedBooking>(conn)
        .map_err(from_diesel_err)?;
    load_booking(joined)
}

fn set_booking_status(conn: &mut SqliteConnection, id: &str, status: BookingStatus) -> Result<()> {
    use schema::bookings::dsl;
    let count = diesel::update(dsl::bookings.filter(dsl::id.eq(id)))
        .set(dsl::status.eq(BookingStatusPrimitive::from(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn release_booking_slots(conn: &mut SqliteConnection, id: &str) -> Result<usize> {
    use schema::booking_slot::dsl;
    let booking_rowid = resolve_booking_rowid(conn, id)?;
    diesel::delete(dsl::booking_slot.filter(dsl::booking_rowid.eq(booking_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn booked_slots(
    conn: &mut SqliteConnection,
    venue_id: &str,
    court: &str,
    date: Date,
) -> Result<Vec<Slot>> {
    use schema::{booking_slot::dsl, bookings::dsl as booking_dsl};
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;
    let active: Vec<BookingStatusPrimitive> = [BookingStatus::Pending, BookingStatus::Confirmed]
        .into_iter()
        .map(Into::into)
        .collect();
    let labels = schema::booking_slot::table
        .inner_join(schema::bookings::table)
        .select(dsl::slot)
        .filter(dsl::venue_rowid.eq(venue_rowid))
        .filter(dsl::court.eq(court))
        .filter(dsl::date.eq(format_date(date)))
        .filter(booking_dsl::status.eq_any(active))
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    let mut slots = labels
        .iter()
        .map(|label| {
            label
                .parse::<Slot>()
                .map_err(|err| anyhow::anyhow!("Invalid stored slot '{label}': {err}").into())
        })
        .collect::<Result<Vec<_>>>()?;
    slots.sort_unstable();
    Ok(slots)
}

fn bookings_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Booking>> {
    use schema::{bookings::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    schema::bookings::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(BOOKING_COLUMNS)
        .filter(user_dsl::id.eq(user_id))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::JoinedBooking>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_booking)
        .collect()
}

fn bookings_of_venue(conn: &mut SqliteConnection, venue_id: &str) -> Result<Vec<Booking>> {
    use schema::{bookings::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    schema::bookings::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(BOOKING_COLUMNS)
        .filter(venue_dsl::id.eq(venue_id))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::JoinedBooking>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_booking)
        .collect()
}

fn all_bookings(conn: &mut SqliteConnection) -> Result<Vec<Booking>> {
    use schema::{bookings::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    schema::bookings::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(BOOKING_COLUMNS)
        .order_by(dsl::rowid)
        .load::<models::JoinedBooking>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_booking)
        .collect()
}

fn complete_bookings_before(conn: &mut SqliteConnection, date: Date) -> Result<usize> {
    use schema::bookings::dsl;
    // Dates are stored as YYYY-MM-DD and compare lexicographically
    diesel::update(
        dsl::bookings
            .filter(dsl::status.eq(BookingStatusPrimitive::from(BookingStatus::Confirmed)))
            .filter(dsl::date.lt(format_date(date))),
    )
    .set(dsl::status.eq(BookingStatusPrimitive::from(BookingStatus::Completed)))
    .execute(conn)
    .map_err(from_diesel_err)
}
