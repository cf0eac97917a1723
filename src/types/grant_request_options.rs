//! GrantRequestOptions
use std::collections::HashMap;

use super::HttpMethod;

/// # Authenticate
/// Where the client credentials are sent on a token request
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Authenticate {
    /// HTTP Basic `authorization` header
    #[default]
    Headers,
    /// `client_id` and `client_secret` in the request params
    Body,
}

/// # GrantRequestOptions
/// Caller options for a grant request
#[derive(Debug, Default, Clone)]
pub struct GrantRequestOptions {
    /// Additional request params. Merged over the grant's own params.
    pub params: HashMap<String, String>,
    /// Where to send the client credentials. Defaults to [Authenticate::Headers]
    pub authenticate: Option<Authenticate>,
    /// Http method of the request. Defaults to [HttpMethod::POST]
    pub method: Option<HttpMethod>,
    /// Additional request headers
    pub headers: HashMap<String, String>,
}

impl GrantRequestOptions {
    /// Adds a single request param.
    ///
    ///  - `name`: Name of the param
    ///  - `value`: Value of the param
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replaces the request params with the provided HashMap.
    pub fn params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Sets where the client credentials are sent.
    pub fn authenticate(mut self, authenticate: Authenticate) -> Self {
        self.authenticate = Some(authenticate);
        self
    }

    /// Sets the http method.
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Adds a single request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// # RequestOptions
/// Effective options handed to a [super::RequestExecutor].
/// The http method is passed separately and is never part of these options.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestOptions {
    /// Request params
    pub params: HashMap<String, String>,
    /// Where to send the client credentials
    pub authenticate: Authenticate,
    /// Additional request headers
    pub headers: HashMap<String, String>,
}
