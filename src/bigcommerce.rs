//! The SDK facade.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::BigCommerceConfig;
use crate::rest::resources::{
    CategoryRequest, CustomerRequest, MerchantRequest, OptionRequest, OrderRequest, ProductRequest,
};

/// Entry point to the SDK.
///
/// Holds one shared [`HttpClient`] and one instance of each resource
/// request component behind read-only accessors. All components share the
/// same base URLs and headers; nothing here is mutable after construction.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{
///     AccessToken, BigCommerce, BigCommerceConfig, ClientId, ClientSecret, StoreId,
/// };
///
/// let config = BigCommerceConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .store_id(StoreId::new("a1b2c3d4e5").unwrap())
///     .build()
///     .unwrap();
///
/// let bigcommerce = BigCommerce::new(&config);
/// let _products = bigcommerce.product();
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerce {
    category: CategoryRequest,
    product: ProductRequest,
    order: OrderRequest,
    customer: CustomerRequest,
    merchant: MerchantRequest,
    option: OptionRequest,
}

impl BigCommerce {
    /// Creates the facade from store credentials.
    #[must_use]
    pub fn new(config: &BigCommerceConfig) -> Self {
        Self::with_client(Arc::new(HttpClient::new(config)))
    }

    /// Creates the facade around an existing HTTP client.
    ///
    /// Useful when the client carries a custom
    /// [`RequestSigner`](crate::clients::RequestSigner).
    #[must_use]
    pub fn with_client(client: Arc<HttpClient>) -> Self {
        Self {
            category: CategoryRequest::new(Arc::clone(&client)),
            product: ProductRequest::new(Arc::clone(&client)),
            order: OrderRequest::new(Arc::clone(&client)),
            customer: CustomerRequest::new(Arc::clone(&client)),
            merchant: MerchantRequest::new(Arc::clone(&client)),
            option: OptionRequest::new(client),
        }
    }

    /// Returns the category request component.
    #[must_use]
    pub const fn category(&self) -> &CategoryRequest {
        &self.category
    }

    /// Returns the product request component.
    #[must_use]
    pub const fn product(&self) -> &ProductRequest {
        &self.product
    }

    /// Returns the order request component.
    #[must_use]
    pub const fn order(&self) -> &OrderRequest {
        &self.order
    }

    /// Returns the customer request component.
    #[must_use]
    pub const fn customer(&self) -> &CustomerRequest {
        &self.customer
    }

    /// Returns the merchant request component.
    #[must_use]
    pub const fn merchant(&self) -> &MerchantRequest {
        &self.merchant
    }

    /// Returns the option request component.
    #[must_use]
    pub const fn option(&self) -> &OptionRequest {
        &self.option
    }
}

// Verify BigCommerce is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerce>();
};
