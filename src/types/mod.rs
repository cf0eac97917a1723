//! # Types Module
//! All the types, request, response, options, error etc are in this module

mod client_config;
mod errors;
mod grant_request_options;
/// Http client interface
pub mod http_client;
mod request_executor;

pub use client_config::{ClientConfig, DEFAULT_TOKEN_PATH};
pub use errors::{
    Error, ErrorWithResponse, OAuth2ClientError, OAuth2ReturnType, StandardBodyError,
};
pub use grant_request_options::{Authenticate, GrantRequestOptions, RequestOptions};
pub use http_client::{HttpMethod, HttpRequest, HttpResponse, OAuth2HttpClient};
pub use request_executor::RequestExecutor;
