use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use super::{AuthCommand, AuthEvent, BaseAccountDirectory, BaseCodeIssuer};
use crate::flows::messages;
use crate::machine::Effect;
use crate::platform::{BaseNavigator, BaseTimer};

/// Executes auth commands. Every network-backed step is held for
/// `step_delay` first so the loading state is visible.
pub struct AuthEffects {
    pub codes: Arc<dyn BaseCodeIssuer>,
    pub accounts: Arc<dyn BaseAccountDirectory>,
    pub timer: Arc<dyn BaseTimer>,
    pub navigator: Arc<dyn BaseNavigator>,
    pub step_delay: Duration,
}

impl AuthEffects {
    fn failed(err: anyhow::Error, what: &str) -> AuthEvent {
        warn!(error = %err, "{} failed", what);
        AuthEvent::RequestFailed {
            message: messages::REQUEST_FAILED.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Effect for AuthEffects {
    type Command = AuthCommand;
    type Event = AuthEvent;

    async fn execute(&self, command: AuthCommand) -> Option<AuthEvent> {
        match command {
            AuthCommand::IssueCode { phone } => {
                self.timer.sleep(self.step_delay).await;
                Some(match self.codes.issue(&phone).await {
                    Ok(code) => AuthEvent::CodeIssued { code },
                    Err(e) => Self::failed(e, "Issuing code"),
                })
            }
            AuthCommand::LookupAccount { phone } => {
                self.timer.sleep(self.step_delay).await;
                Some(match self.accounts.account_exists(&phone).await {
                    Ok(true) => AuthEvent::AccountFound,
                    Ok(false) => AuthEvent::AccountMissing,
                    Err(e) => Self::failed(e, "Account lookup"),
                })
            }
            AuthCommand::CreateAccount { phone, draft } => {
                self.timer.sleep(self.step_delay).await;
                Some(match self.accounts.create_account(&phone, &draft).await {
                    Ok(()) => AuthEvent::AccountCreated,
                    Err(e) => Self::failed(e, "Account creation"),
                })
            }
            AuthCommand::Navigate(to) => {
                self.navigator.navigate(to);
                None
            }
        }
    }
}
