//! Background analytics ping. Callers own the rate limiting.

use crate::{Result, StorefrontClient};

impl StorefrontClient {
    pub async fn ping(&self) -> Result<()> {
        self.send(self.post("analytics/ping")).await?;
        Ok(())
    }
}
