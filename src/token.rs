//! Token issuer: mints short-lived HS256 JWTs for the metrics API.
//!
//! Tokens expire [`TOKEN_LIFETIME_SECS`] seconds after issuance. Callers must
//! not cache a token across calls separated by more than that horizon; the
//! page fetcher mints a fresh one for every request.
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const TOKEN_LIFETIME_SECS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub exp: i64,
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct TokenIssuer {
    api_key: String,
    key: EncodingKey,
    lifetime: Duration,
    clock: Clock,
}

impl TokenIssuer {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            key: EncodingKey::from_secret(config.api_secret.expose_secret().as_bytes()),
            lifetime: Duration::seconds(TOKEN_LIFETIME_SECS),
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the wall clock used by [`TokenIssuer::issue`].
    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Mint a token valid from now until now + lifetime.
    pub fn issue(&self) -> Result<String, TokenError> {
        self.issue_at((self.clock)())
    }

    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            iss: self.api_key.clone(),
            exp: (now + self.lifetime).timestamp(),
        };
        let header = Header::new(Algorithm::HS256);
        Ok(encode(&header, &claims, &self.key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    #[test]
    fn token_carries_issuer_and_thirty_second_expiry() {
        let issuer = TokenIssuer::new(&Config::new("my-key", "my-secret"));
        let now = Utc::now();
        let token = issuer.issue_at(now).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&["my-key"]);
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"my-secret"),
            &validation,
        )
        .unwrap();
        assert_eq!(data.claims.iss, "my-key");
        assert_eq!(data.claims.exp, now.timestamp() + TOKEN_LIFETIME_SECS);
        assert_eq!(data.header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let issuer = TokenIssuer::new(&Config::new("my-key", "my-secret"));
        let token = issuer.issue().unwrap();
        let res = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(res.is_err());
    }
}
