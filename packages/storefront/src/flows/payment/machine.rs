use std::time::Duration;
use storefront_client::PaymentVerification;
use tracing::{debug, info, warn};

use super::CallbackQuery;
use crate::flows::messages;
use crate::machine::Machine;
use crate::routes::Destination;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentState {
    Loading,
    Success {
        track_id: String,
        order_id: Option<i64>,
        ref_number: Option<String>,
    },
    Error {
        message: String,
    },
}

/// Why verification did not produce a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyFailure {
    /// HTTP 400: the server explained itself; show its words.
    Rejected(String),
    /// Anything else: transport failure, 5xx after retry, bad body.
    Unreachable(String),
}

#[derive(Debug, Clone)]
pub enum PaymentEvent {
    Mounted { query: CallbackQuery },
    Verified { verification: PaymentVerification },
    VerificationFailed { failure: VerifyFailure },
    RedirectDue,
    BackToCart,
    ViewOrders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCommand {
    Verify { track_id: String },
    ScheduleRedirect { after: Duration },
    Navigate(Destination),
}

/// Payment callback state. Verifies at most once per instance.
#[derive(Debug, Clone)]
pub struct PaymentMachine {
    state: PaymentState,
    track_id: Option<String>,
    requested: bool,
    redirect_delay: Duration,
}

impl PaymentMachine {
    pub fn new(redirect_delay: Duration) -> Self {
        Self {
            state: PaymentState::Loading,
            track_id: None,
            requested: false,
            redirect_delay,
        }
    }

    pub fn state(&self) -> &PaymentState {
        &self.state
    }

    fn fail(&mut self, message: impl Into<String>) -> Option<PaymentCommand> {
        let message = message.into();
        warn!(track_id = ?self.track_id, %message, "Payment verification failed");
        self.state = PaymentState::Error { message };
        None
    }
}

impl Machine for PaymentMachine {
    type Event = PaymentEvent;
    type Command = PaymentCommand;

    fn decide(&mut self, event: &PaymentEvent) -> Option<PaymentCommand> {
        let loading = matches!(self.state, PaymentState::Loading);

        match event {
            PaymentEvent::Mounted { query } if loading && !self.requested => {
                self.requested = true;
                debug!(
                    success = ?query.success,
                    status = ?query.status,
                    payment_id = ?query.payment_id,
                    "Payment callback landed"
                );
                match &query.track_id {
                    Some(track_id) => {
                        self.track_id = Some(track_id.clone());
                        Some(PaymentCommand::Verify {
                            track_id: track_id.clone(),
                        })
                    }
                    None => self.fail(messages::TRACK_ID_MISSING),
                }
            }

            PaymentEvent::Verified { verification } if loading && self.requested => {
                if !verification.status.is_completed() {
                    return self.fail(messages::PAYMENT_NOT_COMPLETED);
                }
                let track_id = self.track_id.clone().unwrap_or_default();
                info!(%track_id, order_id = ?verification.order_id, "Payment verified");
                self.state = PaymentState::Success {
                    track_id,
                    order_id: verification.order_id,
                    ref_number: verification.ref_number.clone(),
                };
                Some(PaymentCommand::ScheduleRedirect {
                    after: self.redirect_delay,
                })
            }

            PaymentEvent::VerificationFailed { failure } if loading && self.requested => {
                match failure {
                    VerifyFailure::Rejected(message) => self.fail(message.clone()),
                    VerifyFailure::Unreachable(detail) => {
                        debug!(%detail, "Verification transport failure");
                        self.fail(messages::PAYMENT_UNREACHABLE)
                    }
                }
            }

            PaymentEvent::RedirectDue if matches!(self.state, PaymentState::Success { .. }) => {
                Some(PaymentCommand::Navigate(Destination::Orders))
            }

            PaymentEvent::BackToCart if matches!(self.state, PaymentState::Error { .. }) => {
                Some(PaymentCommand::Navigate(Destination::Cart))
            }
            PaymentEvent::ViewOrders if !loading => {
                Some(PaymentCommand::Navigate(Destination::Orders))
            }

            other => {
                debug!(state = ?self.state, event = ?other, "Ignoring payment event");
                None
            }
        }
    }
}
