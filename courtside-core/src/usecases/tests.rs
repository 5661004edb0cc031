use super::prelude::*;

use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Venue {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Booking {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Review {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedSlot {
    pub venue_id: Id,
    pub court: String,
    pub date: Date,
    pub slot: Slot,
    pub booking_id: Id,
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub verifications: RefCell<Vec<EmailVerification>>,
    pub venues: RefCell<Vec<Venue>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub occupied_slots: RefCell<Vec<OccupiedSlot>>,
    pub reviews: RefCell<Vec<Review>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn newest_first<T, F: Fn(&T) -> Timestamp>(mut objects: Vec<T>, created_at: F) -> Vec<T> {
    objects.sort_by_key(|x| std::cmp::Reverse(created_at(x)));
    objects
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl VerificationRepo for MockDb {
    fn replace_verification(&self, verification: &EmailVerification) -> RepoResult<()> {
        let mut verifications = self.verifications.borrow_mut();
        verifications.retain(|v| v.email != verification.email);
        verifications.push(verification.clone());
        Ok(())
    }
    fn consume_verification(
        &self,
        email: &EmailAddress,
        code: &VerificationCode,
    ) -> RepoResult<EmailVerification> {
        let mut verifications = self.verifications.borrow_mut();
        let pos = verifications
            .iter()
            .position(|v| &v.email == email && &v.code == code)
            .ok_or(RepoError::NotFound)?;
        Ok(verifications.remove(pos))
    }
    fn delete_expired_verifications(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let mut verifications = self.verifications.borrow_mut();
        let len = verifications.len();
        verifications.retain(|v| v.expires_at >= expired_before);
        Ok(len - verifications.len())
    }
}

impl VenueRepo for MockDb {
    fn create_venue(&self, venue: &Venue) -> RepoResult<()> {
        create(&mut self.venues.borrow_mut(), venue.clone())
    }
    fn update_venue(&self, venue: &Venue) -> RepoResult<()> {
        let mut venues = self.venues.borrow_mut();
        let rating = venues
            .iter()
            .find(|v| v.id == venue.id)
            .ok_or(RepoError::NotFound)?
            .rating;
        let mut venue = venue.clone();
        venue.rating = rating;
        update(&mut venues, &venue)
    }
    fn delete_venue(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.venues.borrow_mut(), id)?;
        self.bookings.borrow_mut().retain(|b| b.venue_id.as_str() != id);
        self.occupied_slots
            .borrow_mut()
            .retain(|s| s.venue_id.as_str() != id);
        self.reviews.borrow_mut().retain(|r| r.venue_id.as_str() != id);
        Ok(())
    }
    fn get_venue(&self, id: &str) -> RepoResult<Venue> {
        get(&self.venues.borrow(), id)
    }
    fn all_venues(&self) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.borrow().clone())
    }
    fn venues_by_status(&self, status: &[VenueStatus]) -> RepoResult<Vec<Venue>> {
        Ok(self
            .venues
            .borrow()
            .iter()
            .filter(|v| status.contains(&v.status))
            .cloned()
            .collect())
    }
    fn venues_of_owner(&self, owner_id: &str) -> RepoResult<Vec<Venue>> {
        Ok(self
            .venues
            .borrow()
            .iter()
            .filter(|v| v.owner.as_str() == owner_id)
            .cloned()
            .collect())
    }
    fn set_rating_aggregate(&self, id: &str, rating: RatingAggregate) -> RepoResult<()> {
        let mut venues = self.venues.borrow_mut();
        let venue = venues
            .iter_mut()
            .find(|v| v.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        venue.rating = rating;
        Ok(())
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: &Booking) -> RepoResult<()> {
        let mut occupied = self.occupied_slots.borrow_mut();
        let new_slots: Vec<_> = booking
            .slots
            .iter()
            .map(|slot| OccupiedSlot {
                venue_id: booking.venue_id.clone(),
                court: booking.court.clone(),
                date: booking.date,
                slot: *slot,
                booking_id: booking.id.clone(),
            })
            .collect();
        let conflict = new_slots.iter().any(|new| {
            occupied.iter().any(|s| {
                s.venue_id == new.venue_id
                    && s.court == new.court
                    && s.date == new.date
                    && s.slot == new.slot
            })
        });
        if conflict {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.bookings.borrow_mut(), booking.clone())?;
        occupied.extend(new_slots);
        Ok(())
    }
    fn get_booking(&self, id: &str) -> RepoResult<Booking> {
        get(&self.bookings.borrow(), id)
    }
    fn set_booking_status(&self, id: &str, status: BookingStatus) -> RepoResult<()> {
        let mut bookings = self.bookings.borrow_mut();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        booking.status = status;
        Ok(())
    }
    fn release_booking_slots(&self, id: &str) -> RepoResult<usize> {
        let mut occupied = self.occupied_slots.borrow_mut();
        let len = occupied.len();
        occupied.retain(|s| s.booking_id.as_str() != id);
        Ok(len - occupied.len())
    }
    fn booked_slots(&self, venue_id: &str, court: &str, date: Date) -> RepoResult<Vec<Slot>> {
        let bookings = self.bookings.borrow();
        let mut slots: Vec<_> = self
            .occupied_slots
            .borrow()
            .iter()
            .filter(|s| s.venue_id.as_str() == venue_id && s.court == court && s.date == date)
            .filter(|s| {
                bookings
                    .iter()
                    .any(|b| b.id == s.booking_id && b.status.is_active())
            })
            .map(|s| s.slot)
            .collect();
        slots.sort_unstable();
        Ok(slots)
    }
    fn bookings_of_user(&self, user_id: &str) -> RepoResult<Vec<Booking>> {
        let bookings = self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.user_id.as_str() == user_id)
            .cloned()
            .collect();
        Ok(newest_first(bookings, |b| b.created_at))
    }
    fn bookings_of_venue(&self, venue_id: &str) -> RepoResult<Vec<Booking>> {
        let bookings = self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.venue_id.as_str() == venue_id)
            .cloned()
            .collect();
        Ok(newest_first(bookings, |b| b.created_at))
    }
    fn all_bookings(&self) -> RepoResult<Vec<Booking>> {
        Ok(self.bookings.borrow().clone())
    }
    fn complete_bookings_before(&self, date: Date) -> RepoResult<usize> {
        let mut count = 0;
        for b in self.bookings.borrow_mut().iter_mut() {
            if b.status == BookingStatus::Confirmed && b.date < date {
                b.status = BookingStatus::Completed;
                count += 1;
            }
        }
        Ok(count)
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        if self
            .reviews
            .borrow()
            .iter()
            .any(|r| r.venue_id == review.venue_id && r.user_id == review.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.reviews.borrow_mut(), review.clone())
    }
    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update(&mut self.reviews.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.reviews.borrow_mut(), id)
    }
    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }
    fn try_get_review_of_user(&self, venue_id: &str, user_id: &str) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.venue_id.as_str() == venue_id && r.user_id.as_str() == user_id)
            .cloned())
    }
    fn reviews_of_venue(&self, venue_id: &str) -> RepoResult<Vec<Review>> {
        let reviews = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.venue_id.as_str() == venue_id)
            .cloned()
            .collect();
        Ok(newest_first(reviews, |r| r.created_at))
    }
}
