//! Per-operation routing table for the BigCommerce API.
//!
//! BigCommerce splits its store API across two versions: the current v3 API
//! (`catalog/...`) and the legacy v2 API still serving orders, customers,
//! brands, and merchant details. Which version an operation talks to is not
//! derivable from any general rule, so the mapping lives here as one table
//! of [`Route`] constants instead of being repeated inside every request
//! method.
//!
//! Each route names its resource and operation, the HTTP method, the API
//! version, and the path template. Templates use `{id_name}` placeholders
//! that [`build_path`] interpolates.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::routing::{self, build_path, ApiVersion};
//!
//! let route = routing::category::FETCH;
//! assert_eq!(route.version, ApiVersion::V3);
//! assert_eq!(route.template, "catalog/categories");
//!
//! let path = build_path(routing::product::FETCH_IMAGE_BY_ID.template, &[
//!     ("product_id", 7),
//!     ("image_id", 12),
//! ]);
//! assert_eq!(path, "catalog/products/7/images/12");
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// The API version a request is routed to.
///
/// `V3` is the current API; `V2` is the legacy API still used by several
/// resources (orders, customers, brands, merchant details).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The current (v3) API.
    V3,
    /// The legacy (v2) API.
    V2,
}

impl ApiVersion {
    /// Returns the URL path segment for this version.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "v3",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The REST resources exposed by the SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Product categories.
    Category,
    /// Products, including images, options, variants, and brands.
    Product,
    /// Orders, ordered products, statuses, and transactions.
    Order,
    /// Customers, addresses, and subscribers.
    Customer,
    /// Merchant/store details.
    Merchant,
    /// Shared catalog options.
    Option,
}

/// A single entry in the routing table.
///
/// Routes are declared as constants so the full wire contract is available
/// for inspection and testing via [`ROUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// The resource this route belongs to.
    pub resource: Resource,
    /// The operation name (matches the request method on the resource).
    pub operation: &'static str,
    /// The HTTP method.
    pub method: HttpMethod,
    /// The API version the route is pinned to.
    pub version: ApiVersion,
    /// The path template with `{id_name}` placeholders.
    pub template: &'static str,
}

impl Route {
    const fn new(
        resource: Resource,
        operation: &'static str,
        method: HttpMethod,
        version: ApiVersion,
        template: &'static str,
    ) -> Self {
        Self {
            resource,
            operation,
            method,
            version,
            template,
        }
    }
}

/// Builds a path from a template by interpolating integer ids.
///
/// Replaces each `{name}` placeholder with the matching value. Placeholders
/// without a matching id are left untouched, which shows up immediately in
/// tests and in the wire path.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, u64)]) -> String {
    let mut path = template.to_string();
    for (name, value) in ids {
        path = path.replace(&format!("{{{name}}}"), &value.to_string());
    }
    path
}

/// Routes for the category resource.
pub mod category {
    use super::{ApiVersion, HttpMethod, Resource, Route};

    pub const COUNT: Route = Route::new(
        Resource::Category,
        "count",
        HttpMethod::Get,
        ApiVersion::V2,
        "categories/count",
    );
    pub const FETCH: Route = Route::new(
        Resource::Category,
        "fetch",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/categories",
    );
    pub const FETCH_BY_ID: Route = Route::new(
        Resource::Category,
        "fetch_by_id",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/categories/{category_id}",
    );
    pub const CREATE: Route = Route::new(
        Resource::Category,
        "create",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/categories",
    );
    pub const UPDATE: Route = Route::new(
        Resource::Category,
        "update",
        HttpMethod::Put,
        ApiVersion::V3,
        "catalog/categories/{category_id}",
    );
    pub const DELETE: Route = Route::new(
        Resource::Category,
        "delete",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/categories",
    );
    pub const DELETE_BY_ID: Route = Route::new(
        Resource::Category,
        "delete_by_id",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/categories/{category_id}",
    );
    pub const CREATE_IMAGE: Route = Route::new(
        Resource::Category,
        "create_image",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/categories/{category_id}/image",
    );
    pub const DELETE_IMAGES: Route = Route::new(
        Resource::Category,
        "delete_images",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/categories/{category_id}/image",
    );
}

/// Routes for the product resource and its sub-resources.
pub mod product {
    use super::{ApiVersion, HttpMethod, Resource, Route};

    pub const COUNT: Route = Route::new(
        Resource::Product,
        "count",
        HttpMethod::Get,
        ApiVersion::V2,
        "products/count",
    );
    pub const FETCH: Route = Route::new(
        Resource::Product,
        "fetch",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products",
    );
    pub const FETCH_BY_ID: Route = Route::new(
        Resource::Product,
        "fetch_by_id",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products/{product_id}",
    );
    pub const CREATE: Route = Route::new(
        Resource::Product,
        "create",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/products",
    );
    pub const UPDATE: Route = Route::new(
        Resource::Product,
        "update",
        HttpMethod::Put,
        ApiVersion::V3,
        "catalog/products/{product_id}",
    );
    pub const DELETE: Route = Route::new(
        Resource::Product,
        "delete",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/products",
    );
    pub const DELETE_BY_ID: Route = Route::new(
        Resource::Product,
        "delete_by_id",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/products/{product_id}",
    );
    pub const FETCH_IMAGES: Route = Route::new(
        Resource::Product,
        "fetch_images",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products/{product_id}/images",
    );
    pub const FETCH_IMAGE_BY_ID: Route = Route::new(
        Resource::Product,
        "fetch_image_by_id",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products/{product_id}/images/{image_id}",
    );
    pub const UPLOAD_IMAGE: Route = Route::new(
        Resource::Product,
        "upload_image",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/products/{product_id}/images",
    );
    pub const UPDATE_IMAGE: Route = Route::new(
        Resource::Product,
        "update_image",
        HttpMethod::Put,
        ApiVersion::V3,
        "catalog/products/{product_id}/images/{image_id}",
    );
    pub const DELETE_IMAGE_BY_ID: Route = Route::new(
        Resource::Product,
        "delete_image_by_id",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/products/{product_id}/images/{image_id}",
    );
    pub const CREATE_OPTION: Route = Route::new(
        Resource::Product,
        "create_option",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/products/{product_id}/options",
    );
    pub const FETCH_OPTIONS: Route = Route::new(
        Resource::Product,
        "fetch_options",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products/{product_id}/options",
    );
    pub const CREATE_OPTION_VALUE: Route = Route::new(
        Resource::Product,
        "create_option_value",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/products/{product_id}/options/{option_id}/values",
    );
    pub const FETCH_OPTION_VALUES: Route = Route::new(
        Resource::Product,
        "fetch_option_values",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products/{product_id}/options/{option_id}/values",
    );
    pub const FETCH_VARIANTS: Route = Route::new(
        Resource::Product,
        "fetch_variants",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/products/{product_id}/variants",
    );
    pub const CREATE_VARIANT: Route = Route::new(
        Resource::Product,
        "create_variant",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/products/{product_id}/variants",
    );
    pub const UPDATE_VARIANT: Route = Route::new(
        Resource::Product,
        "update_variant",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/products/{product_id}/variants/{variant_id}",
    );
    pub const FETCH_BRANDS: Route = Route::new(
        Resource::Product,
        "fetch_brands",
        HttpMethod::Get,
        ApiVersion::V2,
        "brands",
    );
    pub const FETCH_BRAND_BY_ID: Route = Route::new(
        Resource::Product,
        "fetch_brand_by_id",
        HttpMethod::Get,
        ApiVersion::V2,
        "brands/{brand_id}",
    );
    pub const CREATE_BRAND: Route = Route::new(
        Resource::Product,
        "create_brand",
        HttpMethod::Post,
        ApiVersion::V2,
        "brands",
    );
    pub const UPDATE_BRAND: Route = Route::new(
        Resource::Product,
        "update_brand",
        HttpMethod::Put,
        ApiVersion::V2,
        "brands/{brand_id}",
    );
    pub const DELETE_BRAND_BY_ID: Route = Route::new(
        Resource::Product,
        "delete_brand_by_id",
        HttpMethod::Delete,
        ApiVersion::V2,
        "brands/{brand_id}",
    );
}

/// Routes for the order resource.
pub mod order {
    use super::{ApiVersion, HttpMethod, Resource, Route};

    pub const COUNT: Route = Route::new(
        Resource::Order,
        "count",
        HttpMethod::Get,
        ApiVersion::V2,
        "orders/count",
    );
    pub const FETCH: Route = Route::new(
        Resource::Order,
        "fetch",
        HttpMethod::Get,
        ApiVersion::V2,
        "orders",
    );
    pub const FETCH_BY_ID: Route = Route::new(
        Resource::Order,
        "fetch_by_id",
        HttpMethod::Get,
        ApiVersion::V2,
        "orders/{order_id}",
    );
    pub const UPDATE: Route = Route::new(
        Resource::Order,
        "update",
        HttpMethod::Put,
        ApiVersion::V2,
        "orders/{order_id}",
    );
    pub const FETCH_ORDERED_PRODUCTS: Route = Route::new(
        Resource::Order,
        "fetch_ordered_products",
        HttpMethod::Get,
        ApiVersion::V2,
        "orders/{order_id}/products",
    );
    pub const FETCH_ORDERED_PRODUCT_BY_ID: Route = Route::new(
        Resource::Order,
        "fetch_ordered_product_by_id",
        HttpMethod::Get,
        ApiVersion::V2,
        "orders/{order_id}/products/{product_id}",
    );
    pub const FETCH_STATUSES: Route = Route::new(
        Resource::Order,
        "fetch_statuses",
        HttpMethod::Get,
        ApiVersion::V2,
        "order_statuses",
    );
    pub const FETCH_STATUS_BY_ID: Route = Route::new(
        Resource::Order,
        "fetch_status_by_id",
        HttpMethod::Get,
        ApiVersion::V2,
        "order_statuses/{status_id}",
    );
    pub const FETCH_TRANSACTIONS: Route = Route::new(
        Resource::Order,
        "fetch_transactions",
        HttpMethod::Get,
        ApiVersion::V3,
        "orders/{order_id}/transactions",
    );
}

/// Routes for the customer resource and its sub-resources.
pub mod customer {
    use super::{ApiVersion, HttpMethod, Resource, Route};

    pub const FETCH: Route = Route::new(
        Resource::Customer,
        "fetch",
        HttpMethod::Get,
        ApiVersion::V2,
        "customers",
    );
    pub const FETCH_BY_ID: Route = Route::new(
        Resource::Customer,
        "fetch_by_id",
        HttpMethod::Get,
        ApiVersion::V2,
        "customers/{customer_id}",
    );
    pub const CREATE: Route = Route::new(
        Resource::Customer,
        "create",
        HttpMethod::Post,
        ApiVersion::V2,
        "customers",
    );
    pub const UPDATE: Route = Route::new(
        Resource::Customer,
        "update",
        HttpMethod::Put,
        ApiVersion::V2,
        "customers/{customer_id}",
    );
    pub const DELETE: Route = Route::new(
        Resource::Customer,
        "delete",
        HttpMethod::Delete,
        ApiVersion::V2,
        "customers",
    );
    pub const DELETE_BY_ID: Route = Route::new(
        Resource::Customer,
        "delete_by_id",
        HttpMethod::Delete,
        ApiVersion::V2,
        "customers/{customer_id}",
    );
    pub const FETCH_ADDRESSES: Route = Route::new(
        Resource::Customer,
        "fetch_addresses",
        HttpMethod::Get,
        ApiVersion::V2,
        "customers/{customer_id}/addresses",
    );
    pub const CREATE_ADDRESS: Route = Route::new(
        Resource::Customer,
        "create_address",
        HttpMethod::Post,
        ApiVersion::V2,
        "customers/{customer_id}/addresses",
    );
    pub const UPDATE_ADDRESS: Route = Route::new(
        Resource::Customer,
        "update_address",
        HttpMethod::Put,
        ApiVersion::V2,
        "customers/{customer_id}/addresses/{address_id}",
    );
    pub const DELETE_ADDRESS: Route = Route::new(
        Resource::Customer,
        "delete_address",
        HttpMethod::Delete,
        ApiVersion::V2,
        "customers/{customer_id}/addresses/{address_id}",
    );
    pub const DELETE_ADDRESSES: Route = Route::new(
        Resource::Customer,
        "delete_addresses",
        HttpMethod::Delete,
        ApiVersion::V2,
        "customers/{customer_id}/addresses",
    );
    pub const FETCH_SUBSCRIBERS: Route = Route::new(
        Resource::Customer,
        "fetch_subscribers",
        HttpMethod::Get,
        ApiVersion::V3,
        "customers/subscribers",
    );
    pub const FETCH_SUBSCRIBER_BY_ID: Route = Route::new(
        Resource::Customer,
        "fetch_subscriber_by_id",
        HttpMethod::Get,
        ApiVersion::V3,
        "customers/subscribers/{subscriber_id}",
    );
    pub const CREATE_SUBSCRIBER: Route = Route::new(
        Resource::Customer,
        "create_subscriber",
        HttpMethod::Post,
        ApiVersion::V3,
        "customers/subscribers",
    );
    pub const UPDATE_SUBSCRIBER: Route = Route::new(
        Resource::Customer,
        "update_subscriber",
        HttpMethod::Put,
        ApiVersion::V3,
        "customers/subscribers/{subscriber_id}",
    );
    pub const DELETE_SUBSCRIBER_BY_ID: Route = Route::new(
        Resource::Customer,
        "delete_subscriber_by_id",
        HttpMethod::Delete,
        ApiVersion::V3,
        "customers/subscribers/{subscriber_id}",
    );
    pub const DELETE_SUBSCRIBERS: Route = Route::new(
        Resource::Customer,
        "delete_subscribers",
        HttpMethod::Delete,
        ApiVersion::V3,
        "customers/subscribers",
    );
}

/// Routes for the merchant resource.
pub mod merchant {
    use super::{ApiVersion, HttpMethod, Resource, Route};

    pub const FETCH_DETAILS: Route = Route::new(
        Resource::Merchant,
        "fetch_details",
        HttpMethod::Get,
        ApiVersion::V2,
        "store",
    );
}

/// Routes for the shared option resource.
pub mod option {
    use super::{ApiVersion, HttpMethod, Resource, Route};

    pub const COUNT: Route = Route::new(
        Resource::Option,
        "count",
        HttpMethod::Get,
        ApiVersion::V2,
        "options/count",
    );
    pub const FETCH: Route = Route::new(
        Resource::Option,
        "fetch",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/options",
    );
    pub const FETCH_BY_ID: Route = Route::new(
        Resource::Option,
        "fetch_by_id",
        HttpMethod::Get,
        ApiVersion::V3,
        "catalog/options/{option_id}",
    );
    pub const CREATE: Route = Route::new(
        Resource::Option,
        "create",
        HttpMethod::Post,
        ApiVersion::V3,
        "catalog/options",
    );
    pub const UPDATE: Route = Route::new(
        Resource::Option,
        "update",
        HttpMethod::Put,
        ApiVersion::V3,
        "catalog/options/{option_id}",
    );
    pub const DELETE_BY_ID: Route = Route::new(
        Resource::Option,
        "delete_by_id",
        HttpMethod::Delete,
        ApiVersion::V3,
        "catalog/options/{option_id}",
    );
}

/// Every route in the table, for inspection and contract tests.
pub const ROUTES: &[Route] = &[
    category::COUNT,
    category::FETCH,
    category::FETCH_BY_ID,
    category::CREATE,
    category::UPDATE,
    category::DELETE,
    category::DELETE_BY_ID,
    category::CREATE_IMAGE,
    category::DELETE_IMAGES,
    product::COUNT,
    product::FETCH,
    product::FETCH_BY_ID,
    product::CREATE,
    product::UPDATE,
    product::DELETE,
    product::DELETE_BY_ID,
    product::FETCH_IMAGES,
    product::FETCH_IMAGE_BY_ID,
    product::UPLOAD_IMAGE,
    product::UPDATE_IMAGE,
    product::DELETE_IMAGE_BY_ID,
    product::CREATE_OPTION,
    product::FETCH_OPTIONS,
    product::CREATE_OPTION_VALUE,
    product::FETCH_OPTION_VALUES,
    product::FETCH_VARIANTS,
    product::CREATE_VARIANT,
    product::UPDATE_VARIANT,
    product::FETCH_BRANDS,
    product::FETCH_BRAND_BY_ID,
    product::CREATE_BRAND,
    product::UPDATE_BRAND,
    product::DELETE_BRAND_BY_ID,
    order::COUNT,
    order::FETCH,
    order::FETCH_BY_ID,
    order::UPDATE,
    order::FETCH_ORDERED_PRODUCTS,
    order::FETCH_ORDERED_PRODUCT_BY_ID,
    order::FETCH_STATUSES,
    order::FETCH_STATUS_BY_ID,
    order::FETCH_TRANSACTIONS,
    customer::FETCH,
    customer::FETCH_BY_ID,
    customer::CREATE,
    customer::UPDATE,
    customer::DELETE,
    customer::DELETE_BY_ID,
    customer::FETCH_ADDRESSES,
    customer::CREATE_ADDRESS,
    customer::UPDATE_ADDRESS,
    customer::DELETE_ADDRESS,
    customer::DELETE_ADDRESSES,
    customer::FETCH_SUBSCRIBERS,
    customer::FETCH_SUBSCRIBER_BY_ID,
    customer::CREATE_SUBSCRIBER,
    customer::UPDATE_SUBSCRIBER,
    customer::DELETE_SUBSCRIBER_BY_ID,
    customer::DELETE_SUBSCRIBERS,
    merchant::FETCH_DETAILS,
    option::COUNT,
    option::FETCH,
    option::FETCH_BY_ID,
    option::CREATE,
    option::UPDATE,
    option::DELETE_BY_ID,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path_single_id() {
        let path = build_path("catalog/categories/{category_id}", &[("category_id", 42)]);
        assert_eq!(path, "catalog/categories/42");
    }

    #[test]
    fn test_build_path_nested_ids() {
        let path = build_path(
            "catalog/products/{product_id}/options/{option_id}/values",
            &[("product_id", 7), ("option_id", 3)],
        );
        assert_eq!(path, "catalog/products/7/options/3/values");
    }

    #[test]
    fn test_build_path_without_placeholders() {
        assert_eq!(build_path("orders/count", &[]), "orders/count");
    }

    #[test]
    fn test_api_version_segments() {
        assert_eq!(ApiVersion::V3.as_str(), "v3");
        assert_eq!(ApiVersion::V2.as_str(), "v2");
    }

    #[test]
    fn test_routes_are_unique_per_resource_operation() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert!(
                    !(a.resource == b.resource && a.operation == b.operation),
                    "duplicate route {:?}/{}",
                    a.resource,
                    a.operation
                );
            }
        }
    }

    #[test]
    fn test_count_operations_are_legacy() {
        for route in ROUTES.iter().filter(|r| r.operation == "count") {
            assert_eq!(route.version, ApiVersion::V2, "{:?} count", route.resource);
        }
    }

    #[test]
    fn test_catalog_paths_are_current_api() {
        for route in ROUTES.iter().filter(|r| r.template.starts_with("catalog/")) {
            assert_eq!(
                route.version,
                ApiVersion::V3,
                "{:?}/{}",
                route.resource,
                route.operation
            );
        }
    }
}
