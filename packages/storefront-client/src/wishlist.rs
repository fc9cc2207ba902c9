//! Wishlist endpoints, including the admin views keyed by user id.

use tracing::info;

use crate::types::{CountResponse, ExistsResponse, WishlistInput, WishlistItem};
use crate::{Result, StorefrontClient};

impl StorefrontClient {
    pub async fn add_to_wishlist(&self, product_id: i64) -> Result<WishlistItem> {
        let response = self
            .send(self.post("wishlist").json(&WishlistInput { product_id }))
            .await?;
        let item: WishlistItem = Self::json(response).await?;
        info!(product_id, "Added to wishlist");
        Ok(item)
    }

    pub async fn remove_from_wishlist(&self, product_id: i64) -> Result<()> {
        self.send(self.delete(&format!("wishlist/{}", product_id)))
            .await?;
        info!(product_id, "Removed from wishlist");
        Ok(())
    }

    /// The current user's wishlist.
    pub async fn list_wishlist(&self) -> Result<Vec<WishlistItem>> {
        let response = self.send(self.get("wishlist")).await?;
        Self::json(response).await
    }

    pub async fn wishlist_contains(&self, product_id: i64) -> Result<bool> {
        let response = self
            .send(self.get(&format!("wishlist/{}/exists", product_id)))
            .await?;
        let body: ExistsResponse = Self::json(response).await?;
        Ok(body.exists)
    }

    pub async fn wishlist_count(&self) -> Result<u64> {
        let response = self.send(self.get("wishlist/count")).await?;
        let body: CountResponse = Self::json(response).await?;
        Ok(body.count)
    }

    /// Admin: every wishlist row owned by `user_id`.
    pub async fn list_wishlist_for_user(&self, user_id: i64) -> Result<Vec<WishlistItem>> {
        let response = self
            .send(self.get(&format!("admin/wishlist/users/{}", user_id)))
            .await?;
        Self::json(response).await
    }

    /// Admin: drop every wishlist row owned by `user_id`.
    pub async fn delete_wishlist_for_user(&self, user_id: i64) -> Result<()> {
        self.send(self.delete(&format!("admin/wishlist/users/{}", user_id)))
            .await?;
        info!(user_id, "Deleted user wishlist");
        Ok(())
    }
}
