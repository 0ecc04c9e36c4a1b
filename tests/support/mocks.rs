// tests/support/mocks.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use inkpost::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
    ports::time::Clock,
};

/// Stores passwords with a visible prefix so tests skip argon2's cost.
pub struct PlainPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain:") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("Invalid credentials"))
        }
    }
}

/// Advances one second per reading so creation order is unambiguous.
pub struct TickingClock {
    next: AtomicI64,
}

impl TickingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: AtomicI64::new(start.timestamp()),
        }
    }
}

impl Default for TickingClock {
    fn default() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let secs = self.next.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(secs, 0).unwrap()
    }
}
