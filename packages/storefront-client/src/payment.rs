//! Payment verification.

use tracing::info;

use crate::types::{PaymentVerification, VerifyPaymentInput};
use crate::{Result, StorefrontClient};

impl StorefrontClient {
    /// Ask the backend to verify a gateway transaction.
    ///
    /// Uses the client's retry count; the same track id is sent on every
    /// attempt.
    pub async fn verify_payment(&self, track_id: &str) -> Result<PaymentVerification> {
        let request = self
            .post("payment/verify")
            .json(&VerifyPaymentInput { track_id });
        let response = self.send_with_retries(request, self.retries).await?;
        let verification: PaymentVerification = Self::json(response).await?;

        info!(track_id, status = ?verification.status, "Payment verification answered");
        Ok(verification)
    }
}
