use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::platform::BaseClock;

/// Length of every one-time code.
pub const CODE_LENGTH: usize = 6;

/// A one-time code issued for one phone submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode {
    value: String,
    issued_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl OneTimeCode {
    pub fn new(value: impl Into<String>, issued_at: DateTime<Utc>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .map(|ttl| issued_at + ttl);
        Self {
            value: value.into(),
            issued_at,
            expires_at,
        }
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        self.expires_at.map(|deadline| at >= deadline).unwrap_or(false)
    }

    /// Exactly six ASCII digits equal to this code.
    pub fn matches(&self, input: &str) -> bool {
        is_well_formed(input) && input == self.value
    }
}

/// Six ASCII digits, nothing else.
pub fn is_well_formed(input: &str) -> bool {
    input.len() == CODE_LENGTH && input.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Issuers
// =============================================================================

#[async_trait(?Send)]
pub trait BaseCodeIssuer {
    /// Issue a fresh code for `phone`, replacing any previous one.
    async fn issue(&self, phone: &str) -> Result<OneTimeCode>;
}

/// Generates codes in the browser.
///
/// Placeholder only: the code never leaves the client, so anyone reading the
/// page state can log in. A real deployment issues and expires codes on the
/// backend and the client only relays what the user typed.
pub struct LocalCodeIssuer {
    clock: Arc<dyn BaseClock>,
    ttl: Option<Duration>,
}

impl LocalCodeIssuer {
    pub fn new(clock: Arc<dyn BaseClock>, ttl: Option<Duration>) -> Self {
        Self { clock, ttl }
    }
}

#[async_trait(?Send)]
impl BaseCodeIssuer for LocalCodeIssuer {
    async fn issue(&self, phone: &str) -> Result<OneTimeCode> {
        let value = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));
        warn!(phone, "Issuing a locally generated one-time code (placeholder)");
        #[cfg(debug_assertions)]
        tracing::info!(code = %value, "Development one-time code");

        Ok(OneTimeCode::new(value, self.clock.now(), self.ttl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeClock;

    #[test]
    fn test_well_formed_requires_six_digits() {
        assert!(is_well_formed("012345"));
        assert!(!is_well_formed("12345"));
        assert!(!is_well_formed("1234567"));
        assert!(!is_well_formed("12a456"));
        assert!(!is_well_formed("۱۲۳۴۵۶"));
    }

    #[test]
    fn test_expiry() {
        let clock = FakeClock::new();
        let code = OneTimeCode::new("123456", clock.now(), Some(Duration::from_secs(120)));

        assert!(!code.is_expired(clock.now()));
        clock.advance(Duration::from_secs(119));
        assert!(!code.is_expired(clock.now()));
        clock.advance(Duration::from_secs(1));
        assert!(code.is_expired(clock.now()));
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let clock = FakeClock::new();
        let code = OneTimeCode::new("123456", clock.now(), None);
        clock.advance(Duration::from_secs(86_400));
        assert!(!code.is_expired(clock.now()));
    }

    #[tokio::test]
    async fn test_local_issuer_produces_well_formed_codes() {
        let clock = Arc::new(FakeClock::new());
        let issuer = LocalCodeIssuer::new(clock.clone(), Some(Duration::from_secs(60)));

        for _ in 0..50 {
            let code = issuer.issue("09123456789").await.unwrap();
            assert!(is_well_formed(&code.value));
            assert_eq!(code.issued_at(), clock.now());
        }
    }
}
