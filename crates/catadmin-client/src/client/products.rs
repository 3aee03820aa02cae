use reqwest::Method;

use catadmin_core::{ProductListing, ProductSubmission};

use super::CatalogClient;
use crate::error::ClientError;

impl CatalogClient {
    /// Fetches one page of the product listing. Pages are 1-based.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthorized`] on HTTP 401.
    /// - [`ClientError::Api`] on any other non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a listing object.
    /// - [`ClientError::Http`] on network failure.
    pub async fn list_products(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<ProductListing, ClientError> {
        let url = self.endpoint(
            "/api/products",
            &[("page", page.to_string()), ("perPage", per_page.to_string())],
        )?;
        tracing::debug!(%url, "fetching product page");

        let request = self.request(Method::GET, &url);
        self.send_json(
            request,
            &format!("product page {page}"),
            "Network response was not ok",
        )
        .await
    }

    /// Submits a new product built from a draft. The response body is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::list_products`], except the body is never
    /// decoded.
    pub async fn create_product(&self, product: &ProductSubmission) -> Result<(), ClientError> {
        let url = self.endpoint("/api/products", &[])?;
        tracing::debug!(
            %url,
            name = %product.name,
            skus = product.skus_ids.len(),
            "creating product"
        );

        let request = self.request(Method::POST, &url).json(product);
        self.send(request, "Failed to save product").await?;

        tracing::info!(name = %product.name, skus = product.skus_ids.len(), "product saved");
        Ok(())
    }
}
