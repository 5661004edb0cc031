use crate::{id::*, time::*};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub venue_id   : Id,
    pub user_id    : Id,
    pub rating     : RatingValue,
    pub comment    : String,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

/// The denormalized rating of a venue.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    pub average: f64,
    pub count: u64,
}

#[derive(Debug, Default, Clone)]
pub struct RatingAggregateBuilder {
    acc: u64,
    cnt: u64,
}

impl RatingAggregateBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub fn build(self) -> RatingAggregate {
        if self.cnt > 0 {
            RatingAggregate {
                average: self.acc as f64 / self.cnt as f64,
                count: self.cnt,
            }
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for RatingAggregateBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl FromIterator<RatingValue> for RatingAggregate {
    fn from_iter<I: IntoIterator<Item = RatingValue>>(iter: I) -> Self {
        let mut builder = RatingAggregateBuilder::default();
        for v in iter {
            builder += v;
        }
        builder.build()
    }
}
