use reqwest::Method;

use catadmin_core::{Attribute, NewAttribute};

use super::CatalogClient;
use crate::error::ClientError;

impl CatalogClient {
    /// Fetches every attribute definition.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthorized`] on HTTP 401.
    /// - [`ClientError::Api`] on any other non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not an attribute array.
    /// - [`ClientError::Http`] on network failure.
    pub async fn list_attributes(&self) -> Result<Vec<Attribute>, ClientError> {
        let url = self.endpoint("/api/attributes", &[])?;
        tracing::debug!(%url, "fetching attributes");

        let request = self.request(Method::GET, &url);
        self.send_json(request, "attribute list", "Failed to fetch attributes")
            .await
    }

    /// Creates an attribute and returns it as stored by the server.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::list_attributes`]; a rejected create (e.g. a
    /// duplicate name) surfaces as [`ClientError::Api`] with the server's
    /// message.
    pub async fn create_attribute(
        &self,
        attribute: &NewAttribute,
    ) -> Result<Attribute, ClientError> {
        let url = self.endpoint("/api/attributes", &[])?;
        tracing::debug!(%url, name = %attribute.name, "creating attribute");

        let request = self.request(Method::POST, &url).json(attribute);
        let created: Attribute = self
            .send_json(request, "created attribute", "Failed to save attribute")
            .await?;

        tracing::info!(id = %created.id, name = %created.name, "attribute created");
        Ok(created)
    }
}
