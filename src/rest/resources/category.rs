//! Request component for product categories.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{batch, HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::image::ImageSource;
use crate::rest::resources::{apply_field_selection, apply_filters, apply_list_options, ListOptions};
use crate::rest::routing;

/// Request component for the category resource.
///
/// Category catalog operations use the current API; only `count` remains
/// on the legacy API. All methods build a single request and return the
/// raw response.
///
/// # Example
///
/// ```rust,ignore
/// let response = bigcommerce.category().fetch(1, 50, &ListOptions::new()).await?;
/// let categories: serde_json::Value = response.json()?;
/// ```
#[derive(Clone, Debug)]
pub struct CategoryRequest {
    client: Arc<HttpClient>,
}

impl CategoryRequest {
    /// Default page size for category list requests.
    pub const DEFAULT_LIMIT: u32 = 50;

    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Counts categories in the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn count(&self) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::category::COUNT, &[]).build()?;
        self.client.request(request).await
    }

    /// Fetches a page of categories.
    ///
    /// `page` and `limit` are always sent; additional filters and field
    /// selection come from `options`.
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
        let builder = HttpRequest::for_route(&routing::category::FETCH, &[])
            .query_param("page", page)
            .query_param("limit", limit);
        let request = apply_list_options(builder, options).build()?;
        self.client.request(request).await
    }

    /// Fetches a single category by id, with optional field selection.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_by_id(
        &self,
        category_id: u64,
        include_fields: &[&str],
        exclude_fields: &[&str],
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(
            &routing::category::FETCH_BY_ID,
            &[("category_id", category_id)],
        );
        let request = apply_field_selection(builder, include_fields, exclude_fields).build()?;
        self.client.request(request).await
    }

    /// Creates a new category from a pass-through payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create(&self, category: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::category::CREATE, &[])
            .json(category)
            .build()?;
        self.client.request(request).await
    }

    /// Creates several categories, one POST per payload, joined fail-fast.
    ///
    /// With N payloads exactly N requests are issued; when all succeed the
    /// responses come back in input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed among the calls.
    pub async fn create_many(&self, categories: Vec<Value>) -> Result<Vec<HttpResponse>, HttpError> {
        batch::fail_fast(categories.into_iter().map(|category| self.create(category))).await
    }

    /// Updates an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update(&self, category_id: u64, category: Value) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::category::UPDATE, &[("category_id", category_id)])
                .json(category)
                .build()?;
        self.client.request(request).await
    }

    /// Deletes categories matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete(&self, filters: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(&routing::category::DELETE, &[]);
        let request = apply_filters(builder, filters).build()?;
        self.client.request(request).await
    }

    /// Deletes a single category by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_by_id(&self, category_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::category::DELETE_BY_ID,
            &[("category_id", category_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Uploads an image for a category.
    ///
    /// A URL source is sent as a JSON body (`{"image_url": ...}`); a local
    /// file is validated and sent as multipart form data. Validation
    /// failures surface before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Upload`](crate::clients::HttpError) for invalid
    /// local files, or another [`HttpError`] when the request fails.
    pub async fn create_image(
        &self,
        category_id: u64,
        source: impl Into<ImageSource>,
    ) -> Result<HttpResponse, HttpError> {
        let body = source.into().into_body()?;
        let request = HttpRequest::for_route(
            &routing::category::CREATE_IMAGE,
            &[("category_id", category_id)],
        )
        .body(body)
        .build()?;
        self.client.request(request).await
    }

    /// Deletes the image of a category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_images(&self, category_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::category::DELETE_IMAGES,
            &[("category_id", category_id)],
        )
        .build()?;
        self.client.request(request).await
    }
}
