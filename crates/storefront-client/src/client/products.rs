//! Product write endpoints.

use serde_json::Value;
use storefront_core::ProductPatch;

use crate::error::ClientError;
use crate::wire::patch_to_wire;

use super::StorefrontClient;

impl StorefrontClient {
    /// Sends a partial update (`PATCH /products/:id`) and returns the record
    /// the backend responds with.
    ///
    /// Field names are translated to their wire form first (see
    /// [`patch_to_wire`]). An empty success body is returned as
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] on transport failure.
    /// - [`ClientError::HttpStatus`] on any non-2xx status, carrying the
    ///   backend's `message` when present.
    /// - [`ClientError::Decode`] if a non-empty body is not valid JSON.
    pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<Value, ClientError> {
        let url = self.endpoint(&format!("products/{id}"))?;
        let payload = Value::Object(patch_to_wire(patch));
        tracing::debug!(%url, %payload, "PATCH");

        let request = self.client.patch(url.clone()).json(&payload);
        let response = self.send(request, &url).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            context: format!("PATCH {url}"),
            source: e,
        })
    }

    /// Deletes one product (`DELETE /products/:id`). Any 2xx counts as success.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] on transport failure.
    /// - [`ClientError::HttpStatus`] on any non-2xx status.
    pub async fn delete_product(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("products/{id}")).await
    }

    /// Deletes every product (`DELETE /products/all`).
    ///
    /// The backend offers no undo; callers are expected to confirm with the
    /// user before calling this.
    ///
    /// # Errors
    ///
    /// Same as [`Self::delete_product`].
    pub async fn delete_all_products(&self) -> Result<(), ClientError> {
        self.delete("products/all").await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}
