//! Request component for orders.
//!
//! Order operations live almost entirely on the legacy API; only
//! transaction listing has moved to the current API.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::routing;

/// Request component for the order resource.
#[derive(Clone, Debug)]
pub struct OrderRequest {
    client: Arc<HttpClient>,
}

impl OrderRequest {
    /// Default page size for order list requests.
    pub const DEFAULT_LIMIT: u32 = 50;

    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Counts orders in the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn count(&self) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::order::COUNT, &[]).build()?;
        self.client.request(request).await
    }

    /// Fetches a page of orders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch(&self, page: u32, limit: u32) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::order::FETCH, &[])
            .query_param("page", page)
            .query_param("limit", limit)
            .build()?;
        self.client.request(request).await
    }

    /// Fetches a single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_by_id(&self, order_id: u64) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::order::FETCH_BY_ID, &[("order_id", order_id)])
                .build()?;
        self.client.request(request).await
    }

    /// Updates an existing order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update(&self, order_id: u64, order: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::order::UPDATE, &[("order_id", order_id)])
            .json(order)
            .build()?;
        self.client.request(request).await
    }

    /// Fetches a page of products in a given order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_ordered_products(
        &self,
        order_id: u64,
        page: u32,
        limit: u32,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::order::FETCH_ORDERED_PRODUCTS,
            &[("order_id", order_id)],
        )
        .query_param("page", page)
        .query_param("limit", limit)
        .build()?;
        self.client.request(request).await
    }

    /// Fetches a single product from a given order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_ordered_product_by_id(
        &self,
        order_id: u64,
        product_id: u64,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::order::FETCH_ORDERED_PRODUCT_BY_ID,
            &[("order_id", order_id), ("product_id", product_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Fetches the order statuses defined for the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_statuses(&self) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::order::FETCH_STATUSES, &[]).build()?;
        self.client.request(request).await
    }

    /// Fetches a single order status by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_status_by_id(&self, status_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::order::FETCH_STATUS_BY_ID,
            &[("status_id", status_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Fetches the transactions of a given order.
    ///
    /// This is the one order operation served by the current API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_transactions(&self, order_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::order::FETCH_TRANSACTIONS,
            &[("order_id", order_id)],
        )
        .build()?;
        self.client.request(request).await
    }
}
