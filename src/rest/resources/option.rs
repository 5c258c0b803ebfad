//! Request component for shared catalog options.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{batch, HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::resources::{apply_list_options, ListOptions};
use crate::rest::routing;

/// Request component for the option resource.
///
/// Options page larger than other resources; the conventional page size
/// is [`OptionRequest::DEFAULT_LIMIT`] (250).
#[derive(Clone, Debug)]
pub struct OptionRequest {
    client: Arc<HttpClient>,
}

impl OptionRequest {
    /// Default page size for option list requests.
    pub const DEFAULT_LIMIT: u32 = 250;

    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Counts options in the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn count(&self) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::option::COUNT, &[]).build()?;
        self.client.request(request).await
    }

    /// Fetches a page of options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch(
        &self,
        page: u32,
        limit: u32,
        options: &ListOptions,
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(&routing::option::FETCH, &[])
            .query_param("page", page)
            .query_param("limit", limit);
        let request = apply_list_options(builder, options).build()?;
        self.client.request(request).await
    }

    /// Fetches a single option by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_by_id(&self, option_id: u64) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::option::FETCH_BY_ID, &[("option_id", option_id)])
                .build()?;
        self.client.request(request).await
    }

    /// Creates a new option from a pass-through payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create(&self, option: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::option::CREATE, &[])
            .json(option)
            .build()?;
        self.client.request(request).await
    }

    /// Updates an existing option.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update(&self, option_id: u64, option: Value) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::option::UPDATE, &[("option_id", option_id)])
                .json(option)
                .build()?;
        self.client.request(request).await
    }

    /// Deletes a single option by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_by_id(&self, option_id: u64) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::option::DELETE_BY_ID, &[("option_id", option_id)])
                .build()?;
        self.client.request(request).await
    }

    /// Deletes several options, one DELETE per id, joined fail-fast.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed among the calls.
    pub async fn delete(&self, option_ids: &[u64]) -> Result<Vec<HttpResponse>, HttpError> {
        batch::fail_fast(option_ids.iter().map(|id| self.delete_by_id(*id))).await
    }
}
