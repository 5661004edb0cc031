use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VerifyEmail {
    pub email: String,
    pub code: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RequestVerificationCode {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_confirmed: bool,
    pub role: UserRole,
    pub status: UserStatus,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Owner,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Banned,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Court {
    pub name: String,
    pub sport: String,
    pub price: i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewVenue {
    pub name      : String,
    pub location  : String,
    pub price     : i64,
    #[serde(default)]
    pub image_url : Option<String>,
    pub sport     : String,
    #[serde(default)]
    pub amenities : Vec<String>,
    pub courts    : Vec<Court>,
}

/// Staged changes of a venue. Absent fields stay untouched.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct VenueUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price     : Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courts    : Option<Vec<Court>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum VenueStatus {
    Pending,
    Approved,
    Rejected,
    PendingUpdate,
    PendingDeletion,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Venue {
    pub id             : String,
    pub owner          : String,
    pub created        : i64,
    pub name           : String,
    pub location       : String,
    pub price          : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url      : Option<String>,
    pub sport          : String,
    pub amenities      : Vec<String>,
    pub courts         : Vec<Court>,
    pub status         : VenueStatus,
    pub rating         : f64,
    pub review_count   : u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_update : Option<VenueUpdate>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewBooking {
    pub venue_id     : String,
    pub court        : String,
    /// `YYYY-MM-DD`
    pub date         : String,
    pub slots        : Vec<String>,
    pub player_name  : String,
    pub player_email : String,
    pub player_phone : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Booking {
    pub id           : String,
    pub venue_id     : String,
    pub court        : String,
    pub user_id      : String,
    pub date         : String,
    pub slots        : Vec<String>,
    pub total_price  : i64,
    pub status       : BookingStatus,
    pub player_name  : String,
    pub player_email : String,
    pub player_phone : String,
    pub created      : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewReview {
    pub rating: i64,
    pub comment: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ReviewUpdate {
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Review {
    pub id       : String,
    pub venue_id : String,
    pub user_id  : String,
    pub rating   : u8,
    pub comment  : String,
    pub created  : i64,
    pub updated  : i64,
}

/// The decision of an admin about a staged update or deletion.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct Resolution {
    pub accept: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VenueStats {
    pub venue_id           : String,
    pub name               : String,
    pub status             : VenueStatus,
    pub rating             : f64,
    pub review_count       : u64,
    pub live_bookings      : u64,
    pub cancelled_bookings : u64,
    pub revenue            : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct OwnerDashboard {
    pub venues: Vec<VenueStats>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserRoleCount(pub UserRole, pub u64);

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VenueStatusCount(pub VenueStatus, pub u64);

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct BookingStatusCount(pub BookingStatus, pub u64);

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AdminDashboard {
    pub users_per_role      : Vec<UserRoleCount>,
    pub banned_users        : u64,
    pub venues_per_status   : Vec<VenueStatusCount>,
    pub bookings_per_status : Vec<BookingStatusCount>,
    pub revenue             : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
