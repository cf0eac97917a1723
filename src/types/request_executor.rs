use std::future::Future;

use super::{HttpMethod, RequestOptions};

/// # RequestExecutor
/// Performs the request a grant has assembled.
///
/// Grants never inspect or translate what the executor returns; both the
/// response and the error type flow back to the caller unchanged.
pub trait RequestExecutor {
    /// Value returned on success
    type Response;
    /// Value returned on failure
    type Error;

    /// Executes a request.
    ///
    ///  - `method`: Http method of the request
    ///  - `path`: Endpoint path, relative to the executor's host
    ///  - `options`: Params, authentication mode and headers of the request
    fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}
