// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub(super) fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user_id: Option<String>,
    username: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl Claims {
    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Str(id), Term::Str(name)]) => {
                self.user_id = Some(id.clone());
                self.username = Some(name.clone());
            }
            ("issued_at", [Term::Date(secs)]) => self.issued_at = Some(from_unix(*secs)),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = Some(from_unix(*secs)),
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let missing = |what: &str| {
            tracing::debug!(claim = what, "token missing claim");
            ApplicationError::unauthorized("Not authorized")
        };

        let id: UserId = self
            .user_id
            .ok_or_else(|| missing("user"))?
            .parse()
            .map_err(|_| missing("user id"))?;

        Ok(AuthenticatedUser {
            id,
            username: self.username.ok_or_else(|| missing("username"))?,
            issued_at: DateTime::<Utc>::from(self.issued_at.ok_or_else(|| missing("issued_at"))?),
            expires_at: DateTime::<Utc>::from(
                self.expires_at.ok_or_else(|| missing("expires_at"))?,
            ),
        })
    }
}

fn from_unix(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}
