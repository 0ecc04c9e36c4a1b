// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use super::claims::parse_claims;

const TOKEN_CODE: &str = r#"
    user({uid}, {uname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

/// Issues and verifies Ed25519-signed biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    fn build_params(
        subject: &TokenSubject,
        issued_at: SystemTime,
        expires_at: SystemTime,
    ) -> HashMap<String, Term> {
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".to_string(), subject.user_id.to_string().into());
        params.insert("uname".to_string(), subject.username.clone().into());
        params.insert("issued".to_string(), issued_at.into());
        params.insert("exp".to_string(), expires_at.into());
        params
    }

    fn serialize(&self, params: HashMap<String, Term>) -> ApplicationResult<String> {
        let token = Biscuit::builder()
            .code_with_params(TOKEN_CODE, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let token = self.serialize(Self::build_params(&subject, issued_at, expires_at))?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let unauthorized = |err: biscuit_auth::error::Token| {
            tracing::debug!(error = %err, "bearer token rejected");
            ApplicationError::unauthorized("Not authorized")
        };

        let biscuit = Biscuit::from_base64(token, self.public).map_err(unauthorized)?;

        // time-bound checks embedded in the token run against the current clock
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true;")
            .map_err(unauthorized)?
            .build(&biscuit)
            .map_err(unauthorized)?;
        authorizer.authorize().map_err(unauthorized)?;

        let view = biscuit.authorizer().map_err(unauthorized)?;
        let (facts, _, _, _) = view.dump();

        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    const KEY_HEX: &str = "c2b7e4a1f0d9e8c7b6a5f4e3d2c1b0a99887766554433221100ffeeddccbbaa9";

    fn manager(ttl: Duration) -> BiscuitTokenManager {
        BiscuitTokenManager::new(KEY_HEX, ttl).unwrap()
    }

    #[tokio::test]
    async fn issued_token_authenticates_as_its_subject() {
        let tokens = manager(Duration::from_secs(60));
        let user_id = UserId::generate();
        let issued = tokens
            .issue(TokenSubject {
                user_id,
                username: "writer".into(),
            })
            .await
            .unwrap();
        assert_eq!(issued.expires_in, 60);

        let user = tokens.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "writer");
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let err = manager(Duration::from_secs(60))
            .authenticate("not-a-token")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn expired_token_is_unauthorized() {
        let tokens = manager(Duration::ZERO);
        let issued = tokens
            .issue(TokenSubject {
                user_id: UserId::generate(),
                username: "writer".into(),
            })
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        let err = tokens.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(BiscuitTokenManager::new("zz", Duration::from_secs(1)).is_err());
    }
}
