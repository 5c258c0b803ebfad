//! REST request infrastructure for the BigCommerce API.
//!
//! This module contains everything above the raw HTTP layer:
//!
//! - **[`routing`]**: the table mapping each (resource, operation) pair to
//!   an API version, HTTP method, and path template
//! - **[`resources`]**: the per-resource request components
//! - **[`ImageSource`]**: tagged URL-or-file argument for image uploads
//! - **[`ProductType`]**: the fixed set of product type values
//!
//! Resource components do not parse responses; every operation returns the
//! raw [`HttpResponse`](crate::clients::HttpResponse) for the caller to
//! interpret.

mod image;
mod product_type;

pub mod resources;
pub mod routing;

pub use image::ImageSource;
pub use product_type::{ProductType, UnsupportedProductTypeError};
pub use resources::{
    CategoryRequest, CustomerRequest, ListOptions, MerchantRequest, OptionRequest, OrderRequest,
    ProductRequest,
};
