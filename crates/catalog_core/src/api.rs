//! Remote catalog service client.

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use shared::{
    domain::{Product, ProductDraft, ProductId},
    protocol::{CreatedProduct, RemoteProduct},
};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog API returned {status} for {method} {url}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
    },
    #[error("catalog API is unavailable")]
    Unavailable,
}

/// The four calls the catalog manager makes. Every call is best effort:
/// callers fall back to local-only behavior on any error.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn create_product(&self, draft: &ProductDraft) -> Result<CreatedProduct, ApiError>;
    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<RemoteProduct, ApiError>;
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}

pub struct HttpCatalogApi {
    http: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id.0)
    }
}

fn check_status(method: Method, res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    Err(ApiError::Status {
        method,
        url: res.url().to_string(),
        status,
    })
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url();
        debug!(%url, "fetching catalog");
        let res = self.http.get(&url).send().await?;
        let products = check_status(Method::GET, res)?.json().await?;
        Ok(products)
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<CreatedProduct, ApiError> {
        let url = self.products_url();
        debug!(%url, title = %draft.title, "creating product");
        let res = self.http.post(&url).json(draft).send().await?;
        let created = check_status(Method::POST, res)?.json().await?;
        Ok(created)
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<RemoteProduct, ApiError> {
        let url = self.product_url(id);
        debug!(%url, "updating product");
        let res = self.http.put(&url).json(product).send().await?;
        let remote = check_status(Method::PUT, res)?.json().await?;
        Ok(remote)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.product_url(id);
        debug!(%url, "deleting product");
        let res = self.http.delete(&url).send().await?;
        check_status(Method::DELETE, res)?;
        Ok(())
    }
}

/// Stand-in used when no remote service should be contacted.
pub struct OfflineCatalogApi;

#[async_trait]
impl CatalogApi for OfflineCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn create_product(&self, _draft: &ProductDraft) -> Result<CreatedProduct, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn update_product(
        &self,
        _id: ProductId,
        _product: &Product,
    ) -> Result<RemoteProduct, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn delete_product(&self, _id: ProductId) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
