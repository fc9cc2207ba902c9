//! Background analytics ping, rate limited through durable client storage.
//!
//! The last ping instant is stored under [`LAST_PING_KEY`] as Unix
//! milliseconds. It is written *before* the request goes out, so two mounts
//! inside one window never both ping, even if the first request is still in
//! flight. Ping failures are logged and otherwise ignored.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use storefront_client::StorefrontClient;
use tracing::{debug, warn};

use crate::platform::{BaseClock, BaseStorage};

pub const LAST_PING_KEY: &str = "lastPingTime";

#[async_trait(?Send)]
pub trait BasePinger {
    async fn ping(&self) -> Result<()>;
}

#[async_trait(?Send)]
impl BasePinger for StorefrontClient {
    async fn ping(&self) -> Result<()> {
        Ok(StorefrontClient::ping(self).await?)
    }
}

/// Decides whether a ping is due and records the claim.
pub struct PingGate {
    storage: Arc<dyn BaseStorage>,
    clock: Arc<dyn BaseClock>,
    cooldown: Duration,
}

impl PingGate {
    pub fn new(storage: Arc<dyn BaseStorage>, clock: Arc<dyn BaseClock>, cooldown: Duration) -> Self {
        Self {
            storage,
            clock,
            cooldown,
        }
    }

    fn last_ping(&self) -> Option<DateTime<Utc>> {
        let raw = self.storage.get(LAST_PING_KEY)?;
        let millis: i64 = raw.trim().parse().ok()?;
        DateTime::from_timestamp_millis(millis)
    }

    /// Claim the current window. Returns `false` if a ping already happened
    /// within the cooldown, or if the claim cannot be recorded.
    ///
    /// A stored instant in the future (clock moved backwards, tampered
    /// storage) does not block pinging forever: it is treated as stale.
    pub fn try_claim(&self) -> bool {
        let now = self.clock.now();

        if let Some(last) = self.last_ping() {
            let elapsed = (now - last).to_std().ok();
            if matches!(elapsed, Some(elapsed) if elapsed < self.cooldown) {
                debug!(%last, "Analytics ping still cooling down");
                return false;
            }
        }

        match self
            .storage
            .set(LAST_PING_KEY, &now.timestamp_millis().to_string())
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Could not record analytics ping, skipping");
                false
            }
        }
    }
}

/// Ping if the cooldown allows. Returns whether a ping was sent.
pub async fn ping_if_due(gate: &PingGate, pinger: &dyn BasePinger) -> bool {
    if !gate.try_claim() {
        return false;
    }

    if let Err(e) = pinger.ping().await {
        warn!(error = %e, "Analytics ping failed");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryStorage, StorageError};
    use crate::testing::{FakeClock, MockPinger};

    const COOLDOWN: Duration = Duration::from_secs(300);

    fn gate(clock: &Arc<FakeClock>, storage: Arc<dyn BaseStorage>) -> PingGate {
        PingGate::new(storage, clock.clone(), COOLDOWN)
    }

    #[tokio::test]
    async fn test_first_mount_pings_and_records_time() {
        let clock = Arc::new(FakeClock::new());
        let storage = Arc::new(MemoryStorage::new());
        let pinger = MockPinger::new();

        assert!(ping_if_due(&gate(&clock, storage.clone()), &pinger).await);

        assert_eq!(pinger.count(), 1);
        assert_eq!(
            storage.get(LAST_PING_KEY),
            Some(clock.now().timestamp_millis().to_string())
        );
    }

    #[tokio::test]
    async fn test_never_twice_within_window_for_any_mount_sequence() {
        let clock = Arc::new(FakeClock::new());
        let storage: Arc<dyn BaseStorage> = Arc::new(MemoryStorage::new());
        let pinger = MockPinger::new();
        let mut sent_at = Vec::new();

        // Irregular mount spacing, including bursts and exact-boundary hits.
        let steps = [0, 1, 1, 59, 120, 119, 1, 299, 300, 7, 0, 450, 3, 297, 600, 0, 1];
        for step in steps {
            clock.advance(Duration::from_secs(step));
            // Each mount builds its own gate, like a fresh component would.
            if ping_if_due(&gate(&clock, storage.clone()), &pinger).await {
                sent_at.push(clock.now());
            }
        }

        assert_eq!(pinger.count(), sent_at.len());
        assert!(sent_at.len() >= 2);
        for pair in sent_at.windows(2) {
            let gap = (pair[1] - pair[0]).to_std().unwrap();
            assert!(gap >= COOLDOWN, "pings {:?} apart", gap);
        }
    }

    #[tokio::test]
    async fn test_boundary_is_inclusive() {
        let clock = Arc::new(FakeClock::new());
        let storage: Arc<dyn BaseStorage> = Arc::new(MemoryStorage::new());
        let pinger = MockPinger::new();

        assert!(ping_if_due(&gate(&clock, storage.clone()), &pinger).await);
        clock.advance(Duration::from_secs(299));
        assert!(!ping_if_due(&gate(&clock, storage.clone()), &pinger).await);
        clock.advance(Duration::from_secs(1));
        assert!(ping_if_due(&gate(&clock, storage.clone()), &pinger).await);
    }

    #[tokio::test]
    async fn test_failed_ping_still_consumes_window() {
        let clock = Arc::new(FakeClock::new());
        let storage: Arc<dyn BaseStorage> = Arc::new(MemoryStorage::new());
        let pinger = MockPinger::failing();

        assert!(ping_if_due(&gate(&clock, storage.clone()), &pinger).await);
        clock.advance(Duration::from_secs(10));
        assert!(!ping_if_due(&gate(&clock, storage.clone()), &pinger).await);
        assert_eq!(pinger.count(), 1);
    }

    #[tokio::test]
    async fn test_future_timestamp_is_stale() {
        let clock = Arc::new(FakeClock::new());
        let storage: Arc<dyn BaseStorage> = Arc::new(MemoryStorage::new());
        let future = clock.now() + chrono::Duration::days(3);
        storage
            .set(LAST_PING_KEY, &future.timestamp_millis().to_string())
            .unwrap();

        assert!(gate(&clock, storage).try_claim());
    }

    #[tokio::test]
    async fn test_garbage_timestamp_is_ignored() {
        let clock = Arc::new(FakeClock::new());
        let storage: Arc<dyn BaseStorage> = Arc::new(MemoryStorage::new());
        storage.set(LAST_PING_KEY, "yesterday").unwrap();

        assert!(gate(&clock, storage).try_claim());
    }

    struct ReadOnlyStorage;

    impl BaseStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("QuotaExceededError".into()))
        }
    }

    #[tokio::test]
    async fn test_unrecordable_claim_skips_ping() {
        let clock = Arc::new(FakeClock::new());
        let pinger = MockPinger::new();

        assert!(!ping_if_due(&gate(&clock, Arc::new(ReadOnlyStorage)), &pinger).await);
        assert_eq!(pinger.count(), 0);
    }
}
