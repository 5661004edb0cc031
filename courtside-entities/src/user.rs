use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{email::EmailAddress, id::Id, password::Password};

pub type RolePrimitive = i16;
pub type UserStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id              : Id,
    pub name            : String,
    pub email           : EmailAddress,
    pub email_confirmed : bool,
    pub password        : Password,
    pub role            : Role,
    pub status          : UserStatus,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_banned(&self) -> bool {
        self.status == UserStatus::Banned
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Customer = 0,
    Owner    = 1,
    Admin    = 2,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UserStatus {
    #[default]
    Active = 0,
    Banned = 1,
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("role primitive")
    }
}

#[derive(Debug, Error)]
#[error("Invalid user status primitive: {0}")]
pub struct InvalidUserStatusPrimitive(UserStatusPrimitive);

impl TryFrom<UserStatusPrimitive> for UserStatus {
    type Error = InvalidUserStatusPrimitive;
    fn try_from(from: UserStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidUserStatusPrimitive(from))
    }
}

impl From<UserStatus> for UserStatusPrimitive {
    fn from(from: UserStatus) -> Self {
        from.to_i16().expect("user status primitive")
    }
}
