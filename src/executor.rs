//! # Http Request Executor
//! Stock [RequestExecutor] that authenticates the client, encodes the params and
//! sends the request through an [OAuth2HttpClient].

use std::collections::HashMap;

use tracing::debug;

use crate::{
    helpers::{basic_credentials, convert_json_to, validate_url},
    types::{
        Authenticate, ClientConfig, HttpMethod, HttpRequest, HttpResponse, OAuth2ClientError,
        OAuth2HttpClient, OAuth2ReturnType, RequestExecutor, RequestOptions, StandardBodyError,
    },
};

/// # HttpRequestExecutor
/// Executes requests against the authorization server described by a [ClientConfig]
///
/// A client without a `client_secret` is treated as a public client and only sends its
/// `client_id` in the params, whatever the [Authenticate] mode.
///
/// With [Authenticate::Body] and a method that sends params in the query
/// (see [HttpMethod::sends_params_in_query]) the `client_secret` ends up in the url.
#[derive(Debug, Clone)]
pub struct HttpRequestExecutor<T> {
    config: ClientConfig,
    http_client: T,
}

impl<T> HttpRequestExecutor<T>
where
    T: OAuth2HttpClient,
{
    /// Creates a new [HttpRequestExecutor]
    ///
    /// - `config` - Client credentials and the authorization server host
    /// - `http_client` - The http client to make the requests with
    pub fn new(config: ClientConfig, http_client: T) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// The configuration of this executor
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The http client requests are sent with
    pub fn http_client(&self) -> &T {
        &self.http_client
    }

    pub(crate) fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> OAuth2ReturnType<HttpRequest> {
        let base = validate_url(&self.config.host)?;
        let url = base.join(path).map_err(|_| {
            Box::new(OAuth2ClientError::new_type_error(
                &format!("invalid endpoint path: {path}"),
                None,
            ))
        })?;

        let mut req = HttpRequest::new(url)
            .method(method)
            .header("accept", "application/json");

        let params = match (options.authenticate, self.config.client_secret.as_deref()) {
            (Authenticate::Headers, Some(secret)) => {
                let b64 = basic_credentials(&self.config.client_id, secret);
                req = req.header_replace("authorization", vec![format!("Basic {b64}")]);
                options.params
            }
            (Authenticate::Body, Some(secret)) => {
                let mut form: HashMap<String, String> = HashMap::new();
                form.insert("client_id".to_owned(), self.config.client_id.to_owned());
                form.insert("client_secret".to_owned(), secret.to_owned());
                form.extend(options.params);
                form
            }
            (_, None) => {
                let mut form: HashMap<String, String> = HashMap::new();
                form.insert("client_id".to_owned(), self.config.client_id.to_owned());
                form.extend(options.params);
                form
            }
        };

        req = if method.sends_params_in_query() {
            req.query(&params)
        } else {
            req.form(&params)
        };

        for (name, value) in options.headers {
            req = req.header_replace(name.to_lowercase(), vec![value]);
        }

        Ok(req)
    }
}

fn classify_response(response: HttpResponse) -> OAuth2ReturnType<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }

    if let Some(body) = &response.body {
        if let Ok(sbe) = convert_json_to::<StandardBodyError>(body) {
            return Err(Box::new(OAuth2ClientError::OPError(sbe, Some(response))));
        }
    }

    Err(Box::new(OAuth2ClientError::new_op_error(
        "server_error".to_string(),
        Some(format!("expected 2xx, got: {}", response.status_code)),
        None,
        Some(response),
    )))
}

impl<T> RequestExecutor for HttpRequestExecutor<T>
where
    T: OAuth2HttpClient + Sync,
{
    type Response = HttpResponse;
    type Error = Box<OAuth2ClientError>;

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> OAuth2ReturnType<HttpResponse> {
        let req = self.build_request(method, path, options)?;

        debug!(method = ?req.method, url = %req.url, "sending request");

        let response = self.http_client.request(req).await.map_err(|e| {
            debug!(error = %e, "request failed");
            Box::new(OAuth2ClientError::new_error(&e, None))
        })?;

        classify_response(response).inspect_err(|e| debug!(error = %e, "request rejected"))
    }
}
