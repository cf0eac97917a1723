#![warn(missing_docs)]
//! # OAuth2 Grant
//!
//! OAuth2 `refresh_token` grant for Rust. The grant assembles the token request and
//! hands it to a [types::RequestExecutor]; the stock [executor::HttpRequestExecutor]
//! authenticates the client and sends the request through a [types::OAuth2HttpClient].
//!
//! ## Refresh Token Grant
//! - [grant::RefreshTokenGrant::new]
//! - [grant::RefreshTokenGrant::from_config]
//! - [grant::RefreshTokenGrant::build_request]
//! - [grant::RefreshTokenGrant::get_token_async]
//!
//! ## Token Response
//! - [token_response::TokenResponse::from_response]

pub mod executor;
pub mod grant;
mod helpers;
/// Default Http Client
#[cfg(feature = "http_client")]
pub mod http_client;
#[cfg(test)]
mod tests;
/// TokenResponse Module
pub mod token_response;
pub mod types;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Value};
    pub use url;
}
