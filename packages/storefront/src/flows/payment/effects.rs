use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use storefront_client::{PaymentVerification, StorefrontClient, StorefrontError};

use super::{PaymentCommand, PaymentEvent, VerifyFailure};
use crate::machine::Effect;
use crate::platform::{BaseNavigator, BaseTimer};

/// Asks the backend whether a gateway transaction went through.
#[async_trait(?Send)]
pub trait BasePaymentVerifier {
    async fn verify(&self, track_id: &str) -> Result<PaymentVerification, StorefrontError>;
}

#[async_trait(?Send)]
impl BasePaymentVerifier for StorefrontClient {
    async fn verify(&self, track_id: &str) -> Result<PaymentVerification, StorefrontError> {
        self.verify_payment(track_id).await
    }
}

impl From<&StorefrontError> for VerifyFailure {
    fn from(err: &StorefrontError) -> Self {
        match err.bad_request_message() {
            Some(message) => VerifyFailure::Rejected(message.to_string()),
            None => VerifyFailure::Unreachable(err.to_string()),
        }
    }
}

pub struct PaymentEffects {
    pub verifier: Arc<dyn BasePaymentVerifier>,
    pub timer: Arc<dyn BaseTimer>,
    pub navigator: Arc<dyn BaseNavigator>,
    /// Lets the gateway's own server callback land before we ask.
    pub verify_delay: Duration,
}

#[async_trait(?Send)]
impl Effect for PaymentEffects {
    type Command = PaymentCommand;
    type Event = PaymentEvent;

    async fn execute(&self, command: PaymentCommand) -> Option<PaymentEvent> {
        match command {
            PaymentCommand::Verify { track_id } => {
                self.timer.sleep(self.verify_delay).await;
                Some(match self.verifier.verify(&track_id).await {
                    Ok(verification) => PaymentEvent::Verified { verification },
                    Err(err) => PaymentEvent::VerificationFailed {
                        failure: VerifyFailure::from(&err),
                    },
                })
            }
            PaymentCommand::ScheduleRedirect { after } => {
                self.timer.sleep(after).await;
                Some(PaymentEvent::RedirectDue)
            }
            PaymentCommand::Navigate(to) => {
                self.navigator.navigate(to);
                None
            }
        }
    }
}
