//! Request components for the BigCommerce REST resources.
//!
//! Each component maps one-to-one to a REST resource and exposes methods
//! that build a single HTTP call and return the raw response. Components
//! share one [`HttpClient`](crate::clients::HttpClient) and hold no other
//! state.
//!
//! # List queries
//!
//! List operations always send `page` and `limit`. Additional filters and
//! field selection are supplied through [`ListOptions`]:
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::ListOptions;
//!
//! let options = ListOptions::new()
//!     .filter("is_visible", "true")
//!     .include_field("name")
//!     .include_field("price");
//!
//! let response = bigcommerce.product().fetch(1, 50, &options).await?;
//! ```

mod category;
mod customer;
mod merchant;
mod option;
mod order;
mod product;

pub use category::CategoryRequest;
pub use customer::CustomerRequest;
pub use merchant::MerchantRequest;
pub use option::OptionRequest;
pub use order::OrderRequest;
pub use product::ProductRequest;

use crate::clients::HttpRequestBuilder;

/// Optional query parameters for list operations.
///
/// Filters are appended to the query verbatim after `page` and `limit`.
/// The `include`, `include_fields`, and `exclude_fields` lists are
/// comma-joined in input order and omitted entirely when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Sub-resources to include in the response.
    pub include: Vec<String>,
    /// Fields to include in the response.
    pub include_fields: Vec<String>,
    /// Fields to exclude from the response.
    pub exclude_fields: Vec<String>,
    /// Additional filter parameters, passed through unvalidated.
    pub filters: Vec<(String, String)>,
}

impl ListOptions {
    /// Creates an empty set of list options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sub-resource to the `include` list.
    #[must_use]
    pub fn include(mut self, resource: impl Into<String>) -> Self {
        self.include.push(resource.into());
        self
    }

    /// Adds a field to the `include_fields` list.
    #[must_use]
    pub fn include_field(mut self, field: impl Into<String>) -> Self {
        self.include_fields.push(field.into());
        self
    }

    /// Adds a field to the `exclude_fields` list.
    #[must_use]
    pub fn exclude_field(mut self, field: impl Into<String>) -> Self {
        self.exclude_fields.push(field.into());
        self
    }

    /// Adds a filter parameter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }
}

/// Appends list options to a request builder.
fn apply_list_options(mut builder: HttpRequestBuilder, options: &ListOptions) -> HttpRequestBuilder {
    builder = builder.query_pairs(
        options
            .filters
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    if !options.include.is_empty() {
        builder = builder.query_param("include", options.include.join(","));
    }
    if !options.include_fields.is_empty() {
        builder = builder.query_param("include_fields", options.include_fields.join(","));
    }
    if !options.exclude_fields.is_empty() {
        builder = builder.query_param("exclude_fields", options.exclude_fields.join(","));
    }
    builder
}

/// Appends `include_fields`/`exclude_fields` selection to a request builder.
///
/// Empty lists emit no parameter.
fn apply_field_selection(
    mut builder: HttpRequestBuilder,
    include_fields: &[&str],
    exclude_fields: &[&str],
) -> HttpRequestBuilder {
    if !include_fields.is_empty() {
        builder = builder.query_param("include_fields", include_fields.join(","));
    }
    if !exclude_fields.is_empty() {
        builder = builder.query_param("exclude_fields", exclude_fields.join(","));
    }
    builder
}

/// Appends plain filter pairs to a request builder.
fn apply_filters(builder: HttpRequestBuilder, filters: &[(&str, &str)]) -> HttpRequestBuilder {
    builder.query_pairs(
        filters
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string())),
    )
}
