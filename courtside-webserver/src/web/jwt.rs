use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The id of the user
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    fn random() -> Self {
        let secret = BASE64.encode(rand::random::<[u8; 32]>());
        Self::new(secret.as_bytes())
    }
}

/// Issues and validates the tokens of logged in users.
///
/// The signing key is generated on startup, i.e. all tokens
/// become invalid when the server restarts.
pub struct JwtState {
    key: Key,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(time_valid: Duration) -> Self {
        Self {
            key: Key::random(),
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, user_id: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };
        Ok(encode(&Header::default(), &claims, &self.key.encoding_key)?)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        Ok(self.decode(token)?.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let invalid_tokens = self
            .lock()
            .iter()
            .filter(|token| self.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        let mut blacklist = self.lock();
        for token in invalid_tokens {
            blacklist.remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}
