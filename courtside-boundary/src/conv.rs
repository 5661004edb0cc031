use super::*;
use courtside_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role as R;
        match from {
            R::Customer => Self::Customer,
            R::Owner => Self::Owner,
            R::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role as R;
        match from {
            UserRole::Customer => R::Customer,
            UserRole::Owner => R::Owner,
            UserRole::Admin => R::Admin,
        }
    }
}

impl From<e::user::UserStatus> for UserStatus {
    fn from(from: e::user::UserStatus) -> Self {
        use e::user::UserStatus as S;
        match from {
            S::Active => Self::Active,
            S::Banned => Self::Banned,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            email_confirmed,
            role,
            status,
            password: _password,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            email_confirmed,
            role: role.into(),
            status: status.into(),
        }
    }
}

impl From<e::venue_status::VenueStatus> for VenueStatus {
    fn from(from: e::venue_status::VenueStatus) -> Self {
        use e::venue_status::VenueStatus as S;
        match from {
            S::Pending => Self::Pending,
            S::Approved => Self::Approved,
            S::Rejected => Self::Rejected,
            S::PendingUpdate => Self::PendingUpdate,
            S::PendingDeletion => Self::PendingDeletion,
        }
    }
}

impl From<VenueStatus> for e::venue_status::VenueStatus {
    fn from(from: VenueStatus) -> Self {
        use e::venue_status::VenueStatus as S;
        match from {
            VenueStatus::Pending => S::Pending,
            VenueStatus::Approved => S::Approved,
            VenueStatus::Rejected => S::Rejected,
            VenueStatus::PendingUpdate => S::PendingUpdate,
            VenueStatus::PendingDeletion => S::PendingDeletion,
        }
    }
}

impl From<e::venue::Court> for Court {
    fn from(from: e::venue::Court) -> Self {
        let e::venue::Court { name, sport, price } = from;
        Self {
            name,
            sport,
            price: price.minor_units(),
        }
    }
}

impl From<Court> for e::venue::Court {
    fn from(from: Court) -> Self {
        let Court { name, sport, price } = from;
        Self {
            name,
            sport,
            price: e::price::Price::from_minor_units(price),
        }
    }
}

impl From<e::venue::VenueUpdate> for VenueUpdate {
    fn from(from: e::venue::VenueUpdate) -> Self {
        let e::venue::VenueUpdate {
            name,
            location,
            price,
            image_url,
            sport,
            amenities,
            courts,
        } = from;
        Self {
            name,
            location,
            price: price.map(e::price::Price::minor_units),
            image_url,
            sport,
            amenities,
            courts: courts.map(|courts| courts.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<VenueUpdate> for e::venue::VenueUpdate {
    fn from(from: VenueUpdate) -> Self {
        let VenueUpdate {
            name,
            location,
            price,
            image_url,
            sport,
            amenities,
            courts,
        } = from;
        Self {
            name,
            location,
            price: price.map(e::price::Price::from_minor_units),
            image_url,
            sport,
            amenities,
            courts: courts.map(|courts| courts.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<e::venue::Venue> for Venue {
    fn from(from: e::venue::Venue) -> Self {
        let e::venue::Venue {
            id,
            owner,
            created_at,
            name,
            location,
            price,
            image_url,
            sport,
            amenities,
            courts,
            status,
            rating,
            pending_update,
        } = from;
        Self {
            id: id.into(),
            owner: owner.into(),
            created: created_at.as_millis(),
            name,
            location,
            price: price.minor_units(),
            image_url,
            sport,
            amenities,
            courts: courts.into_iter().map(Into::into).collect(),
            status: status.into(),
            rating: rating.average,
            review_count: rating.count,
            pending_update: pending_update.map(Into::into),
        }
    }
}

impl From<e::booking::BookingStatus> for BookingStatus {
    fn from(from: e::booking::BookingStatus) -> Self {
        use e::booking::BookingStatus as S;
        match from {
            S::Pending => Self::Pending,
            S::Confirmed => Self::Confirmed,
            S::Cancelled => Self::Cancelled,
            S::Completed => Self::Completed,
        }
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
            id,
            venue_id,
            court,
            user_id,
            date,
            slots,
            total_price,
            status,
            player,
            created_at,
        } = from;
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            court,
            user_id: user_id.into(),
            date: e::time::format_date(date),
            slots: slots.into_iter().map(|s| s.to_string()).collect(),
            total_price: total_price.minor_units(),
            status: status.into(),
            player_name: player.name,
            player_email: player.email.into_string(),
            player_phone: player.phone,
            created: created_at.as_millis(),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            venue_id,
            user_id,
            rating,
            comment,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            user_id: user_id.into(),
            rating: rating.into(),
            comment,
            created: created_at.as_millis(),
            updated: updated_at.as_millis(),
        }
    }
}
