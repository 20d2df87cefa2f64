//! Bearer tokens: HS256 JWTs signed with the process-wide shared secret.

use crate::errors::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid.
const TOKEN_TTL_HOURS: i64 = 24;

/// The signed identity claim carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the caller; the wallet address doubles as the id
    pub id: String,
    /// Wallet address the token was issued to
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

/// Issues a token for a verified wallet, expiring in 24 hours.
pub fn issue_token(wallet_address: &str, secret: &str) -> Result<String> {
    issue_token_with_ttl(wallet_address, secret, Duration::hours(TOKEN_TTL_HOURS))
}

/// Issues a token with an explicit time-to-live.
pub fn issue_token_with_ttl(
    wallet_address: &str,
    secret: &str,
    time_to_live: Duration,
) -> Result<String> {
    let claims = Claims {
        id: wallet_address.to_string(),
        wallet_address: wallet_address.to_string(),
        exp: (Utc::now() + time_to_live).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(Into::into)
}

/// Verifies a token against the shared secret, returning its claims.
/// Expired and tampered tokens fail verification.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const SECRET: &str = "test-secret";
    const WALLET: &str = "9aE476sH92Vz7DMPyq5WLPkrKWivxeuTKEFKd2sZZcde";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_token(WALLET, SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.id, WALLET);
        assert_eq!(claims.wallet_address, WALLET);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = issue_token(WALLET, SECRET).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_fails() {
        let token = issue_token_with_ttl(WALLET, SECRET, Duration::hours(-2)).unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(verify_token("not-a-token", SECRET).is_err());
    }
}
