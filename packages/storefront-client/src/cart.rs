//! Cart endpoints.

use tracing::info;

use crate::types::{CartItem, CartItemInput};
use crate::{Result, StorefrontClient};

impl StorefrontClient {
    /// List the current user's cart lines.
    pub async fn list_cart(&self) -> Result<Vec<CartItem>> {
        let response = self.send(self.get("cart/items")).await?;
        Self::json(response).await
    }

    /// Add a product to the cart.
    pub async fn add_to_cart(&self, product_id: i64, quantity: u32) -> Result<CartItem> {
        let body = CartItemInput {
            product_id,
            quantity,
        };
        let response = self.send(self.post("cart/items").json(&body)).await?;
        let item: CartItem = Self::json(response).await?;
        info!(item_id = item.id, product_id, quantity, "Added to cart");
        Ok(item)
    }

    /// Change the quantity of an existing line.
    pub async fn update_cart_item(
        &self,
        item_id: i64,
        product_id: i64,
        quantity: u32,
    ) -> Result<CartItem> {
        let body = CartItemInput {
            product_id,
            quantity,
        };
        let response = self
            .send(self.put(&format!("cart/items/{}", item_id)).json(&body))
            .await?;
        Self::json(response).await
    }

    pub async fn remove_cart_item(&self, item_id: i64) -> Result<()> {
        self.send(self.delete(&format!("cart/items/{}", item_id)))
            .await?;
        info!(item_id, "Removed cart item");
        Ok(())
    }

    /// Remove every line from the cart.
    pub async fn clear_cart(&self) -> Result<()> {
        self.send(self.delete("cart/clear")).await?;
        info!("Cleared cart");
        Ok(())
    }
}
