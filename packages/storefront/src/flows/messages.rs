//! User-facing messages produced by the flows.

pub const INVALID_PHONE: &str = "Please enter a valid phone number";
pub const INVALID_CODE: &str = "Invalid verification code";
pub const CODE_EXPIRED: &str = "This code has expired. Go back and request a new one";
pub const NAME_REQUIRED: &str = "Please enter your name";
pub const REQUEST_FAILED: &str = "Something went wrong. Please try again";

pub const TRACK_ID_MISSING: &str = "Transaction identifier is missing";
pub const PAYMENT_NOT_COMPLETED: &str = "Payment was not completed";
pub const PAYMENT_UNREACHABLE: &str =
    "Could not reach the payment service. Please check your connection.";
