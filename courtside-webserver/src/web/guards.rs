use std::ops::Deref;

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use courtside_core::{gateways::notify::NotificationGateway, usecases::Error as ParameterError};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    match auth_header_val.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    user_id: Option<String>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&str, ParameterError> {
        self.user_id.as_deref().ok_or(ParameterError::Unauthorized)
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn user_id_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_user_id(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let user_id = Self::user_id_from_jwt_in_header(request, &bearer_tokens).await;
        Outcome::Success(Self {
            bearer_tokens,
            user_id,
        })
    }
}

/// The id of an authenticated user.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.user_id() {
            Ok(id) => Outcome::Success(Account(id.to_owned())),
            Err(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
