//! Password hashing and session tokens.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::error::{Error, Result};

/// Argon2id memory cost in KiB for stored passwords.
const MEMORY_COST_KIB: u32 = 19_456;
const ITERATIONS: u32 = 2;

/// Hashes and verifies passwords with Argon2id.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Hasher with production parameters.
    ///
    /// # Errors
    /// Returns an error if the parameters are rejected by argon2.
    pub fn new() -> Result<Self> {
        Self::with_cost(MEMORY_COST_KIB, ITERATIONS)
    }

    /// Hasher with explicit memory (KiB) and iteration costs. Verification
    /// reads the cost from the stored hash, so hashes made with any cost
    /// verify under any hasher.
    ///
    /// # Errors
    /// Returns an error if the parameters are out of argon2's range.
    pub fn with_cost(memory_kib: u32, iterations: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, 1, None)
            .map_err(|e| Error::Auth(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `password` into a PHC string.
    ///
    /// # Errors
    /// Returns an error if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Auth(e.to_string()))
    }

    /// Check `password` against a stored PHC string.
    ///
    /// # Errors
    /// Returns an error if the stored hash is malformed.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored).map_err(|e| Error::Auth(e.to_string()))?;
        Ok(self
            .argon()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// JWT payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks HS256 session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Sign a token for `user` that expires after the configured TTL.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn issue(&self, user: &UserId) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| Error::Auth(e.to_string()))
    }

    /// The user a token was issued to.
    ///
    /// # Errors
    /// Returns [`Error::Auth`] for tampered, foreign or expired tokens.
    pub fn verify(&self, token: &str) -> Result<UserId> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| Error::Auth(e.to_string()))?;
        Ok(UserId::new(data.claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> PasswordHasher {
        PasswordHasher::with_cost(1024, 1).unwrap()
    }

    #[test]
    fn hash_verifies_only_the_right_password() {
        let hasher = cheap();
        let hash = hasher.hash("Password123!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("Password123!", &hash).unwrap());
        assert!(!hasher.verify("password123!", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = cheap();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(cheap().verify("x", "plaintext"), Err(Error::Auth(_))));
    }

    #[test]
    fn token_round_trips_the_user() {
        let tokens = TokenService::new("a-test-secret-of-some-length", Duration::hours(1));
        let user = UserId::new("u-42");
        let token = tokens.issue(&user).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let ours = TokenService::new("a-test-secret-of-some-length", Duration::hours(1));
        let theirs = TokenService::new("another-secret-entirely!!", Duration::hours(1));
        let token = theirs.issue(&UserId::new("u-1")).unwrap();
        assert!(matches!(ours.verify(&token), Err(Error::Auth(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenService::new("a-test-secret-of-some-length", Duration::hours(-2));
        let token = tokens.issue(&UserId::new("u-1")).unwrap();
        assert!(tokens.verify(&token).is_err());
    }
}
