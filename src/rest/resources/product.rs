//! Request component for products and their sub-resources.
//!
//! Products carry the widest surface of the API: besides the base CRUD
//! operations there are images, options, option values, variants, and the
//! legacy brand endpoints.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::{batch, HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::image::ImageSource;
use crate::rest::resources::{apply_field_selection, apply_filters, apply_list_options, ListOptions};
use crate::rest::routing;

/// Request component for the product resource.
///
/// Catalog operations use the current API; `count` and the brand endpoints
/// remain on the legacy API.
#[derive(Clone, Debug)]
pub struct ProductRequest {
    client: Arc<HttpClient>,
}

impl ProductRequest {
    /// Default page size for product list requests.
    pub const DEFAULT_LIMIT: u32 = 50;

    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Counts products in the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn count(&self) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::product::COUNT, &[]).build()?;
        self.client.request(request).await
    }

    /// Fetches a page of products.
    ///
    /// `page` and `limit` are always sent; filters, includes, and field
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
        let builder = HttpRequest::for_route(&routing::product::FETCH, &[])
            .query_param("page", page)
            .query_param("limit", limit);
        let request = apply_list_options(builder, options).build()?;
        self.client.request(request).await
    }

    /// Fetches a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_by_id(
        &self,
        product_id: u64,
        options: &ListOptions,
    ) -> Result<HttpResponse, HttpError> {
        let builder =
            HttpRequest::for_route(&routing::product::FETCH_BY_ID, &[("product_id", product_id)]);
        let request = apply_list_options(builder, options).build()?;
        self.client.request(request).await
    }

    /// Creates a new product from a pass-through payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create(&self, product: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::product::CREATE, &[])
            .json(product)
            .build()?;
        self.client.request(request).await
    }

    /// Creates several products, one POST per payload, joined fail-fast.
    ///
    /// With N payloads exactly N requests are issued; when all succeed the
    /// responses come back in input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed among the calls.
    pub async fn create_many(&self, products: Vec<Value>) -> Result<Vec<HttpResponse>, HttpError> {
        batch::fail_fast(products.into_iter().map(|product| self.create(product))).await
    }

    /// Updates an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update(&self, product_id: u64, product: Value) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::product::UPDATE, &[("product_id", product_id)])
                .json(product)
                .build()?;
        self.client.request(request).await
    }

    /// Deletes products matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete(&self, filters: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(&routing::product::DELETE, &[]);
        let request = apply_filters(builder, filters).build()?;
        self.client.request(request).await
    }

    /// Deletes a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_by_id(&self, product_id: u64) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::product::DELETE_BY_ID, &[("product_id", product_id)])
                .build()?;
        self.client.request(request).await
    }

    // --- Images ---

    /// Fetches all images of a product, with optional field selection.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_images(
        &self,
        product_id: u64,
        include_fields: &[&str],
        exclude_fields: &[&str],
    ) -> Result<HttpResponse, HttpError> {
        let builder =
            HttpRequest::for_route(&routing::product::FETCH_IMAGES, &[("product_id", product_id)]);
        let request = apply_field_selection(builder, include_fields, exclude_fields).build()?;
        self.client.request(request).await
    }

    /// Fetches a single product image by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_image_by_id(
        &self,
        product_id: u64,
        image_id: u64,
        include_fields: &[&str],
        exclude_fields: &[&str],
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(
            &routing::product::FETCH_IMAGE_BY_ID,
            &[("product_id", product_id), ("image_id", image_id)],
        );
        let request = apply_field_selection(builder, include_fields, exclude_fields).build()?;
        self.client.request(request).await
    }

    /// Uploads an image for a product.
    ///
    /// A URL source is sent as a JSON body (`{"image_url": ...}`); a local
    /// file is validated and sent as multipart form data. Validation
    /// failures surface before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Upload`](crate::clients::HttpError) for invalid
    /// local files, or another [`HttpError`] when the request fails.
    pub async fn upload_image(
        &self,
        product_id: u64,
        source: impl Into<ImageSource>,
    ) -> Result<HttpResponse, HttpError> {
        let body = source.into().into_body()?;
        let request =
            HttpRequest::for_route(&routing::product::UPLOAD_IMAGE, &[("product_id", product_id)])
                .body(body)
                .build()?;
        self.client.request(request).await
    }

    /// Uploads several images for a product, joined fail-fast.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed among the calls.
    pub async fn upload_images<S>(
        &self,
        product_id: u64,
        sources: impl IntoIterator<Item = S>,
    ) -> Result<Vec<HttpResponse>, HttpError>
    where
        S: Into<ImageSource>,
    {
        batch::fail_fast(
            sources
                .into_iter()
                .map(|source| self.upload_image(product_id, source)),
        )
        .await
    }

    /// Replaces an existing product image from a URL or local file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Upload`](crate::clients::HttpError) for invalid
    /// local files, or another [`HttpError`] when the request fails.
    pub async fn update_image(
        &self,
        product_id: u64,
        image_id: u64,
        source: impl Into<ImageSource>,
    ) -> Result<HttpResponse, HttpError> {
        let body = source.into().into_body()?;
        let request = HttpRequest::for_route(
            &routing::product::UPDATE_IMAGE,
            &[("product_id", product_id), ("image_id", image_id)],
        )
        .body(body)
        .build()?;
        self.client.request(request).await
    }

    /// Deletes a single product image by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_image_by_id(
        &self,
        product_id: u64,
        image_id: u64,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::product::DELETE_IMAGE_BY_ID,
            &[("product_id", product_id), ("image_id", image_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    // --- Options ---

    /// Creates an option for a product.
    ///
    /// The option payload is assembled from the display name, the option
    /// type (e.g., `swatch`, `radio_buttons`), and its values.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create_option(
        &self,
        product_id: u64,
        display_name: &str,
        option_type: &str,
        option_values: Value,
    ) -> Result<HttpResponse, HttpError> {
        let option = json!({
            "display_name": display_name,
            "type": option_type,
            "option_values": option_values,
        });
        let request =
            HttpRequest::for_route(&routing::product::CREATE_OPTION, &[("product_id", product_id)])
                .json(option)
                .build()?;
        self.client.request(request).await
    }

    /// Fetches a page of options for a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_options(
        &self,
        product_id: u64,
        page: u32,
        limit: u32,
    ) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::product::FETCH_OPTIONS, &[("product_id", product_id)])
                .query_param("page", page)
                .query_param("limit", limit)
                .build()?;
        self.client.request(request).await
    }

    /// Creates a single value for a product option.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create_option_value(
        &self,
        product_id: u64,
        option_id: u64,
        option_value: Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::product::CREATE_OPTION_VALUE,
            &[("product_id", product_id), ("option_id", option_id)],
        )
        .json(option_value)
        .build()?;
        self.client.request(request).await
    }

    /// Fetches a page of values for a product option.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_option_values(
        &self,
        product_id: u64,
        option_id: u64,
        page: u32,
        limit: u32,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::product::FETCH_OPTION_VALUES,
            &[("product_id", product_id), ("option_id", option_id)],
        )
        .query_param("page", page)
        .query_param("limit", limit)
        .build()?;
        self.client.request(request).await
    }

    // --- Variants ---

    /// Fetches a page of variants for a product, with optional field
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_variants(
        &self,
        product_id: u64,
        page: u32,
        limit: u32,
        include_fields: &[&str],
        exclude_fields: &[&str],
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(
            &routing::product::FETCH_VARIANTS,
            &[("product_id", product_id)],
        )
        .query_param("page", page)
        .query_param("limit", limit);
        let request = apply_field_selection(builder, include_fields, exclude_fields).build()?;
        self.client.request(request).await
    }

    /// Creates a single variant for a product.
    async fn create_variant(
        &self,
        product_id: u64,
        variant: Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::product::CREATE_VARIANT,
            &[("product_id", product_id)],
        )
        .json(variant)
        .build()?;
        self.client.request(request).await
    }

    /// Creates several variants for a product, one POST per payload,
    /// joined fail-fast.
    ///
    /// With N payloads exactly N requests are issued; when all succeed the
    /// responses come back in input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed among the calls.
    pub async fn create_variants(
        &self,
        product_id: u64,
        variants: Vec<Value>,
    ) -> Result<Vec<HttpResponse>, HttpError> {
        batch::fail_fast(
            variants
                .into_iter()
                .map(|variant| self.create_variant(product_id, variant)),
        )
        .await
    }

    /// Updates a single variant for a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update_variant(
        &self,
        product_id: u64,
        variant_id: u64,
        variant: Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::product::UPDATE_VARIANT,
            &[("product_id", product_id), ("variant_id", variant_id)],
        )
        .json(variant)
        .build()?;
        self.client.request(request).await
    }

    // --- Brands (legacy API) ---

    /// Fetches a page of brands.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_brands(&self, page: u32, limit: u32) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::product::FETCH_BRANDS, &[])
            .query_param("page", page)
            .query_param("limit", limit)
            .build()?;
        self.client.request(request).await
    }

    /// Fetches a single brand by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_brand_by_id(&self, brand_id: u64) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::product::FETCH_BRAND_BY_ID, &[("brand_id", brand_id)])
                .build()?;
        self.client.request(request).await
    }

    /// Creates a new brand.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create_brand(&self, brand: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::product::CREATE_BRAND, &[])
            .json(brand)
            .build()?;
        self.client.request(request).await
    }

    /// Updates an existing brand.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update_brand(&self, brand_id: u64, brand: Value) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::product::UPDATE_BRAND, &[("brand_id", brand_id)])
                .json(brand)
                .build()?;
        self.client.request(request).await
    }

    /// Deletes a single brand by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_brand_by_id(&self, brand_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::product::DELETE_BRAND_BY_ID,
            &[("brand_id", brand_id)],
        )
        .build()?;
        self.client.request(request).await
    }
}
