// Test doubles for the platform and flow capability traits.
//
// Each mock records its calls behind a mutex so tests can assert on them
// after the flow has run.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront_client::{PaymentStatus, PaymentVerification, StorefrontError};

use crate::analytics::BasePinger;
use crate::flows::auth::{BaseCodeIssuer, OneTimeCode};
use crate::flows::payment::BasePaymentVerifier;
use crate::platform::{BaseClock, BaseNavigator, BaseTimer};
use crate::routes::Destination;

// =============================================================================
// Clock
// =============================================================================

/// Manually advanced clock, starting at a fixed instant.
pub struct FakeClock {
    now: Mutex<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + chrono::Duration::from_std(by).unwrap();
    }
}

impl BaseClock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// Timer
// =============================================================================

/// Returns immediately and remembers how long it was asked to wait.
pub struct FakeTimer {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl FakeTimer {
    pub fn new() -> Self {
        Self {
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl BaseTimer for FakeTimer {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

// =============================================================================
// Navigator
// =============================================================================

pub struct RecordingNavigator {
    destinations: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            destinations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn destinations(&self) -> Vec<Destination> {
        self.destinations.lock().unwrap().clone()
    }
}

impl BaseNavigator for RecordingNavigator {
    fn navigate(&self, to: Destination) {
        self.destinations.lock().unwrap().push(to);
    }
}

// =============================================================================
// Code issuer
// =============================================================================

/// Always issues the same code.
pub struct FixedCodeIssuer {
    code: OneTimeCode,
    issued_for: Arc<Mutex<Vec<String>>>,
    fail_next: AtomicBool,
}

impl FixedCodeIssuer {
    pub fn new(code: OneTimeCode) -> Self {
        Self {
            code,
            issued_for: Arc::new(Mutex::new(Vec::new())),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next `issue` call fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Phones a code was successfully issued for.
    pub fn issued_for(&self) -> Vec<String> {
        self.issued_for.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl BaseCodeIssuer for FixedCodeIssuer {
    async fn issue(&self, phone: &str) -> Result<OneTimeCode> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(anyhow!("sms gateway timed out"));
        }
        self.issued_for.lock().unwrap().push(phone.to_string());
        Ok(self.code.clone())
    }
}

// =============================================================================
// Payment verifier
// =============================================================================

enum VerifierResponse {
    Status(PaymentStatus),
    Error { status: Option<u16>, message: String },
}

pub struct MockVerifier {
    response: Mutex<VerifierResponse>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockVerifier {
    /// Defaults to a completed payment.
    pub fn new() -> Self {
        Self {
            response: Mutex::new(VerifierResponse::Status(PaymentStatus::Completed)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_status(self, status: PaymentStatus) -> Self {
        *self.response.lock().unwrap() = VerifierResponse::Status(status);
        self
    }

    /// Fail every call. API errors keep their status; anything else is
    /// replayed as a network error with the same text.
    pub fn with_error(self, err: StorefrontError) -> Self {
        let response = match err {
            StorefrontError::Api { status, message } => VerifierResponse::Error {
                status: Some(status),
                message,
            },
            other => VerifierResponse::Error {
                status: None,
                message: other.to_string(),
            },
        };
        *self.response.lock().unwrap() = response;
        self
    }

    /// Track ids passed to `verify`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl BasePaymentVerifier for MockVerifier {
    async fn verify(&self, track_id: &str) -> Result<PaymentVerification, StorefrontError> {
        self.calls.lock().unwrap().push(track_id.to_string());

        match &*self.response.lock().unwrap() {
            VerifierResponse::Status(status) => Ok(PaymentVerification {
                status: status.clone(),
                message: None,
                order_id: Some(42),
                ref_number: Some("REF-0042".to_string()),
                amount: Some(1_250_000),
            }),
            VerifierResponse::Error {
                status: Some(status),
                message,
            } => Err(StorefrontError::Api {
                status: *status,
                message: message.clone(),
            }),
            VerifierResponse::Error {
                status: None,
                message,
            } => Err(StorefrontError::Network(message.clone())),
        }
    }
}

// =============================================================================
// Pinger
// =============================================================================

pub struct MockPinger {
    count: AtomicUsize,
    fail: bool,
}

impl MockPinger {
    pub fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl BasePinger for MockPinger {
    async fn ping(&self) -> Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(anyhow!("ping endpoint returned 503"));
        }
        Ok(())
    }
}
