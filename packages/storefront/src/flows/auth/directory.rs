use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use storefront_client::{NewAccount, StorefrontClient};
use tracing::info;

use super::SignupDraft;

/// Phone number seeded into the demo directory.
pub const SEEDED_PHONE: &str = "09123456789";

/// Knows which phone numbers already have accounts.
#[async_trait(?Send)]
pub trait BaseAccountDirectory {
    async fn account_exists(&self, phone: &str) -> Result<bool>;

    async fn create_account(&self, phone: &str, draft: &SignupDraft) -> Result<()>;
}

#[async_trait(?Send)]
impl BaseAccountDirectory for StorefrontClient {
    async fn account_exists(&self, phone: &str) -> Result<bool> {
        Ok(StorefrontClient::account_exists(self, phone).await?)
    }

    async fn create_account(&self, phone: &str, draft: &SignupDraft) -> Result<()> {
        let account = NewAccount {
            phone: phone.to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
        };
        StorefrontClient::create_account(self, &account).await?;
        Ok(())
    }
}

/// In-memory directory for demos and tests.
#[derive(Debug, Default)]
pub struct SeededAccountDirectory {
    phones: Mutex<HashSet<String>>,
}

impl SeededAccountDirectory {
    /// Directory containing [`SEEDED_PHONE`].
    pub fn new() -> Self {
        Self::with_phones([SEEDED_PHONE])
    }

    pub fn with_phones<I, S>(phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phones: Mutex::new(phones.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait(?Send)]
impl BaseAccountDirectory for SeededAccountDirectory {
    async fn account_exists(&self, phone: &str) -> Result<bool> {
        let phones = self
            .phones
            .lock()
            .map_err(|e| anyhow::anyhow!("directory lock poisoned: {}", e))?;
        Ok(phones.contains(phone))
    }

    async fn create_account(&self, phone: &str, draft: &SignupDraft) -> Result<()> {
        let mut phones = self
            .phones
            .lock()
            .map_err(|e| anyhow::anyhow!("directory lock poisoned: {}", e))?;
        phones.insert(phone.to_string());
        info!(phone, name = %draft.name, "Demo account created");
        Ok(())
    }
}
