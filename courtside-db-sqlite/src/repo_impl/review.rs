use super::*;

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn delete_review(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_review_of_user(&self, venue_id: &str, user_id: &str) -> Result<Option<Review>> {
        try_get_review_of_user(&mut self.conn.borrow_mut(), venue_id, user_id)
    }
    fn reviews_of_venue(&self, venue_id: &str) -> Result<Vec<Review>> {
        reviews_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
}

impl<'a> ReviewRepo for DbReadWrite<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }
    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_review_of_user(&self, venue_id: &str, user_id: &str) -> Result<Option<Review>> {
        try_get_review_of_user(&mut self.conn.borrow_mut(), venue_id, user_id)
    }
    fn reviews_of_venue(&self, venue_id: &str) -> Result<Vec<Review>> {
        reviews_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }
    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_review_of_user(&self, venue_id: &str, user_id: &str) -> Result<Option<Review>> {
        try_get_review_of_user(&mut self.conn.borrow_mut(), venue_id, user_id)
    }
    fn reviews_of_venue(&self, venue_id: &str) -> Result<Vec<Review>> {
        reviews_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
}

type ReviewColumns = (
    schema::reviews::id,
    schema::reviews::rating,
    schema::reviews::comment,
    schema::reviews::created_at,
    schema::reviews::updated_at,
    schema::venues::id,
    schema::users::id,
);

const REVIEW_COLUMNS: ReviewColumns = (
    schema::reviews::id,
    schema::reviews::rating,
    schema::reviews::comment,
    schema::reviews::created_at,
    schema::reviews::updated_at,
    schema::venues::id,
    schema::users::id,
);

fn load_review(joined: models::JoinedReview) -> Result<Review> {
    let models::JoinedReview {
        id,
        rating,
        comment,
        created_at,
        updated_at,
        venue_id,
        user_id,
    } = joined;
    let rating = u8::try_from(rating)
        .map(RatingValue::from)
        .map_err(|_| anyhow::anyhow!("Invalid stored rating value: {rating}"))?;
    Ok(Review {
        id: id.into(),
        venue_id: venue_id.into(),
        user_id: user_id.into(),
        rating,
        comment,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let venue_rowid = resolve_venue_rowid(conn, review.venue_id.as_str())?;
    let user_rowid = resolve_user_rowid(conn, review.user_id.as_str())?;
    let new_review = models::NewReview {
        id: review.id.as_str(),
        venue_rowid,
        user_rowid,
        rating: u8::from(review.rating).into(),
        comment: &review.comment,
        created_at: review.created_at.as_millis(),
        updated_at: review.updated_at.as_millis(),
    };
    // A second review of the same user violates the unique
    // constraint and is reported as `AlreadyExists`.
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::update(dsl::reviews.filter(dsl::id.eq(review.id.as_str())))
        .set((
            dsl::rating.eq(i16::from(u8::from(review.rating))),
            dsl::comment.eq(&review.comment),
            dsl::updated_at.eq(review.updated_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_review(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(dsl::reviews.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: &str) -> Result<Review> {
    use schema::{reviews::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    let joined = schema::reviews::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(REVIEW_COLUMNS)
        .filter(dsl::id.eq(id))
        .first::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    load_review(joined)
}

fn try_get_review_of_user(
    conn: &mut SqliteConnection,
    venue_id: &str,
    user_id: &str,
) -> Result<Option<Review>> {
    use schema::{reviews::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    schema::reviews::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(REVIEW_COLUMNS)
        .filter(venue_dsl::id.eq(venue_id))
        .filter(user_dsl::id.eq(user_id))
        .first::<models::JoinedReview>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_review)
        .transpose()
}

fn reviews_of_venue(conn: &mut SqliteConnection, venue_id: &str) -> Result<Vec<Review>> {
    use schema::{reviews::dsl, users::dsl as user_dsl, venues::dsl as venue_dsl};
    schema::reviews::table
        .inner_join(schema::venues::table.on(venue_dsl::rowid.eq(dsl::venue_rowid)))
        .inner_join(schema::users::table.on(user_dsl::rowid.eq(dsl::user_rowid)))
        .select(REVIEW_COLUMNS)
        .filter(venue_dsl::id.eq(venue_id))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}
