//! Batch execution helpers for combining pending calls.
//!
//! Multiple in-flight requests can be joined under one of two policies,
//! exposed as distinct named functions so call sites read unambiguously:
//!
//! - [`fail_fast`]: the first failure observed rejects the whole batch.
//! - [`settle`]: every call runs to a terminal state and the batch itself
//!   never fails; each element carries its own outcome.
//!
//! All calls are issued eagerly; neither policy gates one call on another.
//! Results are returned in input order.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::clients::batch;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let calls = (1..=2).map(|i| async move { Ok::<_, String>(i) });
//! let values = batch::fail_fast(calls).await.unwrap();
//! assert_eq!(values, vec![1, 2]);
//! # }
//! ```

use std::future::Future;

use futures::future::{join_all, try_join_all};

/// Joins pending calls, rejecting with the first failure observed.
///
/// All calls are driven concurrently; as soon as any of them fails, the
/// batch resolves to that error. When every call succeeds, the results are
/// returned in input order.
///
/// # Errors
///
/// Returns the first error produced by any call.
pub async fn fail_fast<T, E, F>(calls: impl IntoIterator<Item = F>) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    try_join_all(calls).await
}

/// Joins pending calls, collecting every outcome.
///
/// All calls are driven to a terminal state; the batch itself always
/// resolves. Callers inspect each element for success or failure.
pub async fn settle<T, E, F>(calls: impl IntoIterator<Item = F>) -> Vec<Result<T, E>>
where
    F: Future<Output = Result<T, E>>,
{
    join_all(calls).await
}
