use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Products
// ============================================================================

/// Product summary embedded in cart and wishlist rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub title: String,
    pub price: i64,
    #[serde(default)]
    pub discount_price: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ProductSummary {
    /// Price the customer actually pays.
    pub fn effective_price(&self) -> i64 {
        self.discount_price.unwrap_or(self.price)
    }
}

// ============================================================================
// Cart
// ============================================================================

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub product_id: i64,
    pub quantity: u32,
    #[serde(default)]
    pub product: Option<ProductSummary>,
}

impl CartItem {
    /// Line total, zero when the product summary is missing.
    pub fn line_total(&self) -> i64 {
        self.product
            .as_ref()
            .map(|p| p.effective_price() * i64::from(self.quantity))
            .unwrap_or(0)
    }
}

/// Body for creating or updating a cart line.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemInput {
    pub product_id: i64,
    pub quantity: u32,
}

// ============================================================================
// Wishlist
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product: Option<ProductSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WishlistInput {
    pub product_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CountResponse {
    pub count: u64,
}

// ============================================================================
// Payment
// ============================================================================

/// Status reported by the verification endpoint. Only `completed` counts
/// as success; anything unrecognised lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Canceled,
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct VerifyPaymentInput<'a> {
    pub track_id: &'a str,
}

/// Verification endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentVerification {
    pub status: PaymentStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub ref_number: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
}

// ============================================================================
// Accounts
// ============================================================================

/// Account creation body.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub phone: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: i64,
    pub phone: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body shapes the backend uses. The first present field wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    pub detail: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.detail).or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_payment_status_is_other() {
        let v: PaymentVerification =
            serde_json::from_str(r#"{"status":"reversed"}"#).unwrap();
        assert_eq!(v.status, PaymentStatus::Other);
        assert!(!v.status.is_completed());
    }

    #[test]
    fn test_completed_status() {
        let v: PaymentVerification =
            serde_json::from_str(r#"{"status":"completed","order_id":42}"#).unwrap();
        assert!(v.status.is_completed());
        assert_eq!(v.order_id, Some(42));
    }

    #[test]
    fn test_line_total_uses_discount() {
        let item = CartItem {
            id: 1,
            product_id: 7,
            quantity: 3,
            product: Some(ProductSummary {
                id: 7,
                title: "Mug".into(),
                price: 100,
                discount_price: Some(80),
                image: None,
                slug: None,
            }),
        };
        assert_eq!(item.line_total(), 240);
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"d","message":"m"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("m"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail":"d"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("d"));
    }
}
