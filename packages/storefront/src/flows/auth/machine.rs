use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::OneTimeCode;
use crate::flows::messages;
use crate::machine::Machine;
use crate::routes::Destination;

/// Minimum accepted phone length, after trimming.
pub const MIN_PHONE_LEN: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Phone,
    Otp,
    Signup,
    /// Existing account verified; navigation has been requested.
    LoggedIn,
    /// New account created; navigation has been requested.
    Registered,
}

impl AuthStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AuthStep::LoggedIn | AuthStep::Registered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Phone,
    Otp,
    Name,
    Email,
}

/// Name and optional email collected on the signup step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub name: String,
    pub email: Option<String>,
}

// ============================================================================
// Events (facts) and commands (intent)
// ============================================================================

#[derive(Debug, Clone)]
pub enum AuthEvent {
    Edited { field: AuthField, value: String },
    PhoneSubmitted,
    CodeIssued { code: OneTimeCode },
    OtpSubmitted { at: DateTime<Utc> },
    AccountFound,
    AccountMissing,
    ChangePhoneRequested,
    SignupSubmitted,
    AccountCreated,
    RequestFailed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCommand {
    IssueCode { phone: String },
    LookupAccount { phone: String },
    CreateAccount { phone: String, draft: SignupDraft },
    Navigate(Destination),
}

// ============================================================================
// Machine
// ============================================================================

/// Phone login state. Owns the form inputs so every transition, including
/// "change phone clears the code input", is visible to tests.
#[derive(Debug, Clone)]
pub struct AuthMachine {
    step: AuthStep,
    phone: String,
    otp_input: String,
    name: String,
    email: String,
    expected: Option<OneTimeCode>,
    error: Option<String>,
    loading: bool,
}

impl Default for AuthMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthMachine {
    pub fn new() -> Self {
        Self {
            step: AuthStep::Phone,
            phone: String::new(),
            otp_input: String::new(),
            name: String::new(),
            email: String::new(),
            expected: None,
            error: None,
            loading: false,
        }
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn otp_input(&self) -> &str {
        &self.otp_input
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while an effect is in flight; inputs are disabled.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn expected_code(&self) -> Option<&OneTimeCode> {
        self.expected.as_ref()
    }

    fn fail(&mut self, message: &str) -> Option<AuthCommand> {
        debug!(step = ?self.step, message, "Auth validation failed");
        self.error = Some(message.to_string());
        None
    }

    fn start(&mut self, command: AuthCommand) -> Option<AuthCommand> {
        self.loading = true;
        self.error = None;
        Some(command)
    }

    fn edit(&mut self, field: AuthField, value: &str) {
        let target = match field {
            AuthField::Phone => &mut self.phone,
            AuthField::Otp => &mut self.otp_input,
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
        };
        *target = value.to_string();
    }

    fn submit_phone(&mut self) -> Option<AuthCommand> {
        let phone = self.phone.trim().to_string();
        if phone.chars().count() < MIN_PHONE_LEN {
            return self.fail(messages::INVALID_PHONE);
        }
        self.phone = phone.clone();
        self.start(AuthCommand::IssueCode { phone })
    }

    /// The raw input must be exactly the issued code; surrounding
    /// whitespace counts as a mismatch. Expiry is only checked for a match.
    fn submit_otp(&mut self, at: DateTime<Utc>) -> Option<AuthCommand> {
        let Some(expected) = &self.expected else {
            return self.fail(messages::INVALID_CODE);
        };

        if !expected.matches(&self.otp_input) {
            return self.fail(messages::INVALID_CODE);
        }
        if expected.is_expired(at) {
            return self.fail(messages::CODE_EXPIRED);
        }

        let phone = self.phone.clone();
        self.start(AuthCommand::LookupAccount { phone })
    }

    fn submit_signup(&mut self) -> Option<AuthCommand> {
        let name = self.name.trim();
        if name.is_empty() {
            return self.fail(messages::NAME_REQUIRED);
        }

        let email = self.email.trim();
        let draft = SignupDraft {
            name: name.to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        };
        let phone = self.phone.clone();
        self.start(AuthCommand::CreateAccount { phone, draft })
    }
}

impl Machine for AuthMachine {
    type Event = AuthEvent;
    type Command = AuthCommand;

    fn decide(&mut self, event: &AuthEvent) -> Option<AuthCommand> {
        use AuthEvent::*;

        // Inputs are disabled while loading and nothing moves after a terminal step.
        let idle = !self.loading && !self.step.is_terminal();

        match (self.step, event) {
            (_, Edited { field, value }) if idle => {
                self.edit(*field, value);
                None
            }

            (AuthStep::Phone, PhoneSubmitted) if idle => self.submit_phone(),
            (AuthStep::Phone, CodeIssued { code }) if self.loading => {
                info!(phone = %self.phone, "One-time code issued");
                self.loading = false;
                self.expected = Some(code.clone());
                self.otp_input.clear();
                self.step = AuthStep::Otp;
                None
            }

            (AuthStep::Otp, OtpSubmitted { at }) if idle => self.submit_otp(*at),
            (AuthStep::Otp, ChangePhoneRequested) if idle => {
                self.step = AuthStep::Phone;
                self.otp_input.clear();
                self.error = None;
                self.expected = None;
                None
            }
            (AuthStep::Otp, AccountFound) if self.loading => {
                info!(phone = %self.phone, "Existing account verified");
                self.loading = false;
                self.expected = None;
                self.step = AuthStep::LoggedIn;
                Some(AuthCommand::Navigate(Destination::Home))
            }
            (AuthStep::Otp, AccountMissing) if self.loading => {
                info!(phone = %self.phone, "No account for phone, moving to signup");
                self.loading = false;
                self.expected = None;
                self.step = AuthStep::Signup;
                None
            }

            (AuthStep::Signup, SignupSubmitted) if idle => self.submit_signup(),
            (AuthStep::Signup, AccountCreated) if self.loading => {
                info!(phone = %self.phone, "Account created");
                self.loading = false;
                self.step = AuthStep::Registered;
                Some(AuthCommand::Navigate(Destination::Home))
            }

            (_, RequestFailed { message }) if self.loading => {
                self.loading = false;
                self.error = Some(message.clone());
                None
            }

            (step, event) => {
                debug!(?step, ?event, loading = self.loading, "Ignoring auth event");
                None
            }
        }
    }
}
