#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use serde::{Deserialize, Serialize};

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub email_confirmed: bool,
    pub password: &'a str,
    pub role: i16,
    pub status: i16,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_confirmed: bool,
    pub password: String,
    pub role: i16,
    pub status: i16,
}

#[derive(Insertable)]
#[diesel(table_name = verification_codes)]
pub struct NewVerificationCode<'a> {
    pub user_rowid: i64,
    pub code: &'a str,
    pub expires_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = venues)]
pub struct NewVenue<'a> {
    pub id: &'a str,
    pub owner_rowid: i64,
    pub created_at: i64,
    pub name: &'a str,
    pub location: &'a str,
    pub price: i64,
    pub image_url: Option<&'a str>,
    pub sport: &'a str,
    pub status: i16,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub pending_update: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = venues, treat_none_as_null = true)]
pub struct ChangedVenue<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub price: i64,
    pub image_url: Option<&'a str>,
    pub sport: &'a str,
    pub status: i16,
    pub pending_update: Option<String>,
}

#[derive(Queryable)]
pub struct JoinedVenue {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub name: String,
    pub location: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub sport: String,
    pub status: i16,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub pending_update: Option<String>,
    pub owner_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = venue_amenity)]
pub struct NewVenueAmenity<'a> {
    pub parent_rowid: i64,
    pub amenity: &'a str,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = venue_court)]
pub struct VenueCourt {
    pub parent_rowid: i64,
    pub position: i32,
    pub name: String,
    pub sport: String,
    pub price: i64,
}

#[derive(Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking<'a> {
    pub id: &'a str,
    pub venue_rowid: i64,
    pub user_rowid: i64,
    pub court: &'a str,
    pub date: String,
    pub slots: String,
    pub total_price: i64,
    pub status: i16,
    pub player_name: &'a str,
    pub player_email: &'a str,
    pub player_phone: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedBooking {
    pub id: String,
    pub court: String,
    pub date: String,
    pub slots: String,
    pub total_price: i64,
    pub status: i16,
    pub player_name: String,
    pub player_email: String,
    pub player_phone: String,
    pub created_at: i64,
    pub venue_id: String,
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = booking_slot)]
pub struct NewBookingSlot<'a> {
    pub booking_rowid: i64,
    pub venue_rowid: i64,
    pub court: &'a str,
    pub date: &'a str,
    pub slot: String,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub venue_rowid: i64,
    pub user_rowid: i64,
    pub rating: i16,
    pub comment: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedReview {
    pub id: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub venue_id: String,
    pub user_id: String,
}

/// JSON representation of a staged venue update
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PendingUpdateJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courts: Option<Vec<CourtJson>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CourtJson {
    pub name: String,
    pub sport: String,
    pub price: i64,
}
