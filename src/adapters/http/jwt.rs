//! Bearer token verification.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

/// Verified token payload.
pub type Claims = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT secret is not valid hex: {0}")]
    InvalidSecret(String),

    #[error("Signature has expired")]
    TokenExpired,

    #[error("The token is not yet valid (nbf)")]
    TokenNotYetValid,

    #[error("{0}")]
    InvalidToken(String),
}

/// Verifies HS256 tokens signed with a shared secret.
///
/// `exp` and `nbf` are enforced when present but not required, and the
/// audience is not checked: tokens are issued by the platform's auth service
/// with arbitrary payloads.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create a verifier from a hex-encoded secret.
    pub fn from_hex_secret(hex_secret: &str) -> Result<Self, JwtError> {
        let secret =
            hex::decode(hex_secret.trim()).map_err(|e| JwtError::InvalidSecret(e.to_string()))?;
        Ok(Self::new(&secret))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::ImmatureSignature => JwtError::TokenNotYetValid,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}

/// Best-effort caller identity for logs.
pub fn subject(claims: &Claims) -> &str {
    ["sub", "user_id", "email"]
        .iter()
        .find_map(|key| claims.get(*key).and_then(Value::as_str))
        .unwrap_or("anonymous")
}
