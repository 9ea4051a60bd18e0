//! Bearer token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use workroom_core::config::AuthConfig;
use workroom_core::error::AppError;
use workroom_core::result::AppResult;

use super::claims::Claims;

/// Validates bearer tokens minted by the identity provider.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a bearer token string.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    use super::*;

    const SECRET: &str = "test-secret";

    fn config_with_secret() -> AuthConfig {
        AuthConfig {
            token_secret: SECRET.to_string(),
            issuer: None,
        }
    }

    fn mint(secret: &str, exp_offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "auth0|u1".to_string(),
            email: Some("u1@example.com".to_string()),
            name: Some("User One".to_string()),
            picture: None,
            iat: now,
            exp: now + exp_offset_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let verifier = TokenVerifier::new(&config_with_secret());
        let claims = verifier.verify(&mint(SECRET, 3600)).unwrap();
        assert_eq!(claims.sub, "auth0|u1");
        assert_eq!(claims.email.as_deref(), Some("u1@example.com"));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let verifier = TokenVerifier::new(&config_with_secret());
        let err = verifier.verify(&mint(SECRET, -3600)).unwrap_err();
        assert_eq!(err.kind, workroom_core::error::ErrorKind::Authentication);
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let verifier = TokenVerifier::new(&config_with_secret());
        let err = verifier.verify(&mint("other-secret", 3600)).unwrap_err();
        assert_eq!(err.kind, workroom_core::error::ErrorKind::Authentication);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let verifier = TokenVerifier::new(&config_with_secret());
        let err = verifier.verify("not-a-token").unwrap_err();
        assert_eq!(err.kind, workroom_core::error::ErrorKind::Authentication);
    }

    #[test]
    fn test_verify_checks_issuer_when_configured() {
        #[derive(Serialize)]
        struct IssuedClaims {
            sub: String,
            iat: i64,
            exp: i64,
            iss: String,
        }

        let mint_issued = |iss: &str| {
            let now = chrono::Utc::now().timestamp();
            encode(
                &Header::default(),
                &IssuedClaims {
                    sub: "auth0|u1".to_string(),
                    iat: now,
                    exp: now + 3600,
                    iss: iss.to_string(),
                },
                &EncodingKey::from_secret(SECRET.as_bytes()),
            )
            .unwrap()
        };

        let verifier = TokenVerifier::new(&AuthConfig {
            token_secret: SECRET.to_string(),
            issuer: Some("https://idp.example.com/".to_string()),
        });

        assert!(verifier.verify(&mint_issued("https://idp.example.com/")).is_ok());
        assert!(verifier.verify(&mint_issued("https://evil.example.com/")).is_err());
    }
}
