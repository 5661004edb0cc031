///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        email -> Text,
        email_confirmed -> Bool,
        password -> Text,
        role -> SmallInt,
        status -> SmallInt,
    }
}

table! {
    verification_codes (rowid) {
        rowid -> BigInt,
        user_rowid -> BigInt,
        code -> Text,
        expires_at -> BigInt,
    }
}

joinable!(verification_codes -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venues (rowid) {
        rowid -> BigInt,
        id -> Text,
        owner_rowid -> BigInt,
        created_at -> BigInt,
        name -> Text,
        location -> Text,
        price -> BigInt,
        image_url -> Nullable<Text>,
        sport -> Text,
        status -> SmallInt,
        rating_avg -> Double,
        rating_count -> BigInt,
        pending_update -> Nullable<Text>,
    }
}

joinable!(venues -> users (owner_rowid));

table! {
    venue_amenity (parent_rowid, amenity) {
        parent_rowid -> BigInt,
        amenity -> Text,
    }
}

joinable!(venue_amenity -> venues (parent_rowid));

table! {
    venue_court (parent_rowid, name) {
        parent_rowid -> BigInt,
        position -> Integer,
        name -> Text,
        sport -> Text,
        price -> BigInt,
    }
}

joinable!(venue_court -> venues (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Bookings
///////////////////////////////////////////////////////////////////////

table! {
    bookings (rowid) {
        rowid -> BigInt,
        id -> Text,
        venue_rowid -> BigInt,
        user_rowid -> BigInt,
        court -> Text,
        date -> Text,
        slots -> Text,
        total_price -> BigInt,
        status -> SmallInt,
        player_name -> Text,
        player_email -> Text,
        player_phone -> Text,
        created_at -> BigInt,
    }
}

joinable!(bookings -> venues (venue_rowid));
joinable!(bookings -> users (user_rowid));

table! {
    booking_slot (booking_rowid, slot) {
        booking_rowid -> BigInt,
        venue_rowid -> BigInt,
        court -> Text,
        date -> Text,
        slot -> Text,
    }
}

joinable!(booking_slot -> bookings (booking_rowid));

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (rowid) {
        rowid -> BigInt,
        id -> Text,
        venue_rowid -> BigInt,
        user_rowid -> BigInt,
        rating -> SmallInt,
        comment -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(reviews -> venues (venue_rowid));
joinable!(reviews -> users (user_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    bookings,
    booking_slot,
    reviews,
    users,
    venues,
    venue_amenity,
    venue_court,
    verification_codes,
);
