//! Request component for customers, their addresses, and subscribers.
//!
//! Plain customer and address operations use the legacy API; subscriber
//! operations use the current API.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{batch, HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::resources::{apply_filters, apply_list_options, ListOptions};
use crate::rest::routing;

/// Request component for the customer resource.
#[derive(Clone, Debug)]
pub struct CustomerRequest {
    client: Arc<HttpClient>,
}

impl CustomerRequest {
    /// Default page size for customer list requests.
    pub const DEFAULT_LIMIT: u32 = 50;

    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetches a page of customers.
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
        let builder = HttpRequest::for_route(&routing::customer::FETCH, &[])
            .query_param("page", page)
            .query_param("limit", limit);
        let request = apply_list_options(builder, options).build()?;
        self.client.request(request).await
    }

    /// Fetches a single customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_by_id(
        &self,
        customer_id: u64,
        filters: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let builder =
            HttpRequest::for_route(&routing::customer::FETCH_BY_ID, &[("customer_id", customer_id)]);
        let request = apply_filters(builder, filters).build()?;
        self.client.request(request).await
    }

    /// Creates a new customer from a pass-through payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create(&self, customer: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::customer::CREATE, &[])
            .json(customer)
            .build()?;
        self.client.request(request).await
    }

    /// Updates an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update(&self, customer_id: u64, customer: Value) -> Result<HttpResponse, HttpError> {
        let request =
            HttpRequest::for_route(&routing::customer::UPDATE, &[("customer_id", customer_id)])
                .json(customer)
                .build()?;
        self.client.request(request).await
    }

    /// Deletes customers matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete(&self, filters: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(&routing::customer::DELETE, &[]);
        let request = apply_filters(builder, filters).build()?;
        self.client.request(request).await
    }

    /// Deletes a single customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_by_id(&self, customer_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::DELETE_BY_ID,
            &[("customer_id", customer_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    // --- Addresses ---

    /// Fetches the addresses belonging to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_addresses(&self, customer_id: u64) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::FETCH_ADDRESSES,
            &[("customer_id", customer_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Creates a single address for a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create_address(
        &self,
        customer_id: u64,
        address: Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::CREATE_ADDRESS,
            &[("customer_id", customer_id)],
        )
        .json(address)
        .build()?;
        self.client.request(request).await
    }

    /// Creates several addresses for a customer, joined fail-fast.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed among the calls.
    pub async fn create_addresses(
        &self,
        customer_id: u64,
        addresses: Vec<Value>,
    ) -> Result<Vec<HttpResponse>, HttpError> {
        batch::fail_fast(
            addresses
                .into_iter()
                .map(|address| self.create_address(customer_id, address)),
        )
        .await
    }

    /// Updates a single address of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update_address(
        &self,
        customer_id: u64,
        address_id: u64,
        address: Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::UPDATE_ADDRESS,
            &[("customer_id", customer_id), ("address_id", address_id)],
        )
        .json(address)
        .build()?;
        self.client.request(request).await
    }

    /// Deletes a single address of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_address(
        &self,
        customer_id: u64,
        address_id: u64,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::DELETE_ADDRESS,
            &[("customer_id", customer_id), ("address_id", address_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Deletes addresses of a customer matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_addresses(
        &self,
        customer_id: u64,
        filters: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(
            &routing::customer::DELETE_ADDRESSES,
            &[("customer_id", customer_id)],
        );
        let request = apply_filters(builder, filters).build()?;
        self.client.request(request).await
    }

    // --- Subscribers (current API) ---

    /// Fetches a page of subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_subscribers(
        &self,
        page: u32,
        limit: u32,
        options: &ListOptions,
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(&routing::customer::FETCH_SUBSCRIBERS, &[])
            .query_param("page", page)
            .query_param("limit", limit);
        let request = apply_list_options(builder, options).build()?;
        self.client.request(request).await
    }

    /// Fetches a single subscriber by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_subscriber_by_id(
        &self,
        subscriber_id: u64,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::FETCH_SUBSCRIBER_BY_ID,
            &[("subscriber_id", subscriber_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Creates a new subscriber from a pass-through payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn create_subscriber(&self, subscriber: Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::customer::CREATE_SUBSCRIBER, &[])
            .json(subscriber)
            .build()?;
        self.client.request(request).await
    }

    /// Updates an existing subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn update_subscriber(
        &self,
        subscriber_id: u64,
        subscriber: Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::UPDATE_SUBSCRIBER,
            &[("subscriber_id", subscriber_id)],
        )
        .json(subscriber)
        .build()?;
        self.client.request(request).await
    }

    /// Deletes a single subscriber by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_subscriber_by_id(
        &self,
        subscriber_id: u64,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(
            &routing::customer::DELETE_SUBSCRIBER_BY_ID,
            &[("subscriber_id", subscriber_id)],
        )
        .build()?;
        self.client.request(request).await
    }

    /// Deletes subscribers matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn delete_subscribers(
        &self,
        filters: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let builder = HttpRequest::for_route(&routing::customer::DELETE_SUBSCRIBERS, &[]);
        let request = apply_filters(builder, filters).build()?;
        self.client.request(request).await
    }
}
