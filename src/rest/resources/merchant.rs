//! Request component for merchant/store details.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::rest::routing;

/// Request component for the merchant resource.
#[derive(Clone, Debug)]
pub struct MerchantRequest {
    client: Arc<HttpClient>,
}

impl MerchantRequest {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetches the merchant/store details.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails.
    pub async fn fetch_details(&self) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::for_route(&routing::merchant::FETCH_DETAILS, &[]).build()?;
        self.client.request(request).await
    }
}
