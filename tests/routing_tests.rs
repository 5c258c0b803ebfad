//! Contract tests for the routing table.
//!
//! The table is the wire contract: each (resource, operation) pair is
//! pinned to an API version, HTTP method, and path template. These tests
//! pin the entries that callers depend on so a drift in the table shows
//! up here before it shows up on the wire.

use bigcommerce_api::rest::routing::{self, build_path, ApiVersion, Resource, Route, ROUTES};
use bigcommerce_api::HttpMethod;

fn find(resource: Resource, operation: &str) -> &'static Route {
    ROUTES
        .iter()
        .find(|r| r.resource == resource && r.operation == operation)
        .unwrap_or_else(|| panic!("missing route {resource:?}/{operation}"))
}

#[test]
fn test_category_routing() {
    assert_eq!(find(Resource::Category, "count").version, ApiVersion::V2);
    assert_eq!(find(Resource::Category, "count").template, "categories/count");

    let fetch = find(Resource::Category, "fetch");
    assert_eq!(fetch.version, ApiVersion::V3);
    assert_eq!(fetch.method, HttpMethod::Get);
    assert_eq!(fetch.template, "catalog/categories");

    let create = find(Resource::Category, "create");
    assert_eq!(create.version, ApiVersion::V3);
    assert_eq!(create.method, HttpMethod::Post);

    let image = find(Resource::Category, "create_image");
    assert_eq!(image.version, ApiVersion::V3);
    assert_eq!(image.method, HttpMethod::Post);
    assert_eq!(image.template, "catalog/categories/{category_id}/image");
}

#[test]
fn test_product_routing() {
    assert_eq!(find(Resource::Product, "count").version, ApiVersion::V2);
    assert_eq!(find(Resource::Product, "count").template, "products/count");

    assert_eq!(find(Resource::Product, "fetch").template, "catalog/products");
    assert_eq!(find(Resource::Product, "fetch").version, ApiVersion::V3);

    let variants = find(Resource::Product, "fetch_variants");
    assert_eq!(variants.version, ApiVersion::V3);
    assert_eq!(variants.method, HttpMethod::Get);
    assert_eq!(variants.template, "catalog/products/{product_id}/variants");

    let create_variant = find(Resource::Product, "create_variant");
    assert_eq!(create_variant.method, HttpMethod::Post);
    assert_eq!(
        create_variant.template,
        "catalog/products/{product_id}/variants"
    );

    // Variant updates go through POST on this API, not PUT.
    assert_eq!(
        find(Resource::Product, "update_variant").method,
        HttpMethod::Post
    );
}

#[test]
fn test_brand_routing_is_legacy() {
    for operation in [
        "fetch_brands",
        "fetch_brand_by_id",
        "create_brand",
        "update_brand",
        "delete_brand_by_id",
    ] {
        assert_eq!(
            find(Resource::Product, operation).version,
            ApiVersion::V2,
            "{operation}"
        );
    }
}

#[test]
fn test_order_routing_is_legacy_except_transactions() {
    for route in ROUTES.iter().filter(|r| r.resource == Resource::Order) {
        if route.operation == "fetch_transactions" {
            assert_eq!(route.version, ApiVersion::V3);
            assert_eq!(route.template, "orders/{order_id}/transactions");
        } else {
            assert_eq!(route.version, ApiVersion::V2, "{}", route.operation);
        }
    }
}

#[test]
fn test_customer_routing_splits_subscribers() {
    for route in ROUTES.iter().filter(|r| r.resource == Resource::Customer) {
        if route.operation.contains("subscriber") {
            assert_eq!(route.version, ApiVersion::V3, "{}", route.operation);
            assert!(
                route.template.starts_with("customers/subscribers"),
                "{}",
                route.operation
            );
        } else {
            assert_eq!(route.version, ApiVersion::V2, "{}", route.operation);
        }
    }
}

#[test]
fn test_merchant_routing() {
    let details = find(Resource::Merchant, "fetch_details");
    assert_eq!(details.version, ApiVersion::V2);
    assert_eq!(details.method, HttpMethod::Get);
    assert_eq!(details.template, "store");
}

#[test]
fn test_option_routing() {
    assert_eq!(find(Resource::Option, "count").version, ApiVersion::V2);
    assert_eq!(find(Resource::Option, "count").template, "options/count");

    for operation in ["fetch", "fetch_by_id", "create", "update", "delete_by_id"] {
        let route = find(Resource::Option, operation);
        assert_eq!(route.version, ApiVersion::V3, "{operation}");
        assert!(route.template.starts_with("catalog/options"), "{operation}");
    }
}

#[test]
fn test_every_template_interpolates_fully() {
    // Interpolating with every placeholder name used by the table must
    // leave no braces behind in any route.
    let ids: &[(&str, u64)] = &[
        ("category_id", 1),
        ("product_id", 2),
        ("image_id", 3),
        ("option_id", 4),
        ("variant_id", 5),
        ("brand_id", 6),
        ("order_id", 7),
        ("status_id", 8),
        ("customer_id", 9),
        ("address_id", 10),
        ("subscriber_id", 11),
    ];

    for route in ROUTES {
        let path = build_path(route.template, ids);
        assert!(
            !path.contains('{') && !path.contains('}'),
            "unresolved placeholder in {:?}/{}: {path}",
            route.resource,
            route.operation
        );
    }
}

#[test]
fn test_named_constants_match_table_entries() {
    assert_eq!(*find(Resource::Category, "fetch"), routing::category::FETCH);
    assert_eq!(*find(Resource::Product, "count"), routing::product::COUNT);
    assert_eq!(
        *find(Resource::Order, "fetch_transactions"),
        routing::order::FETCH_TRANSACTIONS
    );
    assert_eq!(
        *find(Resource::Customer, "fetch_subscribers"),
        routing::customer::FETCH_SUBSCRIBERS
    );
}
