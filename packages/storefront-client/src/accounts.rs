//! Account lookup and creation used by the phone login flow.

use serde::Deserialize;
use tracing::info;

use crate::types::{Account, NewAccount};
use crate::{Result, StorefrontClient};

#[derive(Debug, Deserialize)]
struct AccountExists {
    exists: bool,
}

impl StorefrontClient {
    /// Whether `phone` already belongs to an account.
    pub async fn account_exists(&self, phone: &str) -> Result<bool> {
        let request = self.get("accounts/exists").query(&[("phone", phone)]);
        let response = self.send(request).await?;
        let body: AccountExists = Self::json(response).await?;
        Ok(body.exists)
    }

    pub async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        let response = self.send(self.post("accounts").json(account)).await?;
        let created: Account = Self::json(response).await?;
        info!(account_id = created.id, "Account created");
        Ok(created)
    }
}
