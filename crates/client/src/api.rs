//! Product API client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::card::ProductDraft;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with something other than 200.
    #[error("request failed with status {0}")]
    Status(u16),

    #[error("network error")]
    Transport(#[from] reqwest::Error),
}

/// The product endpoints the page talks to. Success is HTTP 200 and nothing
/// else; there are no retries and no request timeouts beyond the client
/// defaults.
#[automock]
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `PUT {base}/{uuid}` with the draft as a JSON body.
    async fn update_product(&self, product: Uuid, draft: &ProductDraft) -> Result<(), ApiError>;

    /// `DELETE {base}/{uuid}`.
    async fn delete_product(&self, product: Uuid) -> Result<(), ApiError>;
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    name: &'a str,
    price: u64,
    unit: &'a str,
}

/// reqwest-backed [`ProductApi`].
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn product_url(&self, product: Uuid) -> String {
        format!("{}/{product}", self.base_url)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn update_product(&self, product: Uuid, draft: &ProductDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.product_url(product))
            .json(&UpdateBody {
                name: &draft.name,
                price: draft.price,
                unit: &draft.unit,
            })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    async fn delete_product(&self, product: Uuid) -> Result<(), ApiError> {
        let response = self.client.delete(self.product_url(product)).send().await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_url_joins_base_and_uuid() {
        let api = HttpProductApi::new("/management/products");
        let uuid = Uuid::nil();

        assert_eq!(
            api.product_url(uuid),
            format!("/management/products/{uuid}")
        );
    }
}
