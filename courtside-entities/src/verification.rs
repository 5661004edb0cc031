use std::{fmt, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

use crate::{email::EmailAddress, time::*};

/// A numeric one-time code that confirms the ownership of an email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub const LEN: usize = 6;

    pub fn new() -> Self {
        let n = Uuid::new_v4().as_u128() % 10u128.pow(Self::LEN as u32);
        Self(format!("{n:0width$}", width = Self::LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VerificationCode {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
#[error("Invalid verification code")]
pub struct VerificationCodeParseError;

impl FromStr for VerificationCode {
    type Err = VerificationCodeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != Self::LEN || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerificationCodeParseError);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailVerification {
    pub email: EmailAddress,
    pub code: VerificationCode,
    pub expires_at: Timestamp,
}

impl EmailVerification {
    pub fn lifetime() -> Duration {
        Duration::hours(24)
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at < now
    }
}
