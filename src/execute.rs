//! Execute trait for running API requests
//!
//! The `Execute` trait provides the `.get()` method used by the query builder
//! to execute requests and return results.

use crate::error::Result;

/// Trait for executing API requests
pub trait Execute {
    /// The output type of the request
    type Output;

    /// Execute the request and return the result
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
