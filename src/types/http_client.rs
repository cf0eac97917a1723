//! # Http Client Interface for Custom Http Clients

use std::collections::HashMap;

use url::Url;

use crate::helpers::string_map_to_form_url_encoded;

/// The Http methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// The GET method is used to retrieve data from a server.
    GET,
    /// The POST method is used to submit data to a server.
    POST,
    /// The PUT method is used to replace all existing data on a server with the provided data.
    PUT,
    /// The PATCH method is used to update a specific part of a resource on a server.
    PATCH,
    /// The DELETE method is used to delete a resource from a server.
    DELETE,
    /// The HEAD method is used to retrieve only the headers of a resource, without the actual data.
    HEAD,
    /// The OPTIONS method is used to retrieve the capabilities of a server.
    OPTIONS,
}

impl HttpMethod {
    /// Whether request params travel in the query string instead of the body.
    ///
    /// Credentials sent as params end up in the url for these methods, where proxies and
    /// server access logs can record them.
    pub fn sends_params_in_query(&self) -> bool {
        matches!(self, HttpMethod::GET | HttpMethod::HEAD | HttpMethod::DELETE)
    }
}

/// # Request
/// Request built by the executor and handed to the [OAuth2HttpClient].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Url of the request, including any query params
    pub url: Url,
    /// Http method of the request
    pub method: HttpMethod,
    /// Headers that are sent in the request
    pub headers: HashMap<String, Vec<String>>,
    /// The request body to be sent
    pub body: Option<String>,
}

impl HttpRequest {
    pub(crate) fn new(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
            method: HttpMethod::GET,
            body: None,
        }
    }

    pub(crate) fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub(crate) fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        if let Some(values) = self.headers.get_mut(&name) {
            values.push(value);
        } else {
            let values = vec![value];
            self.headers.insert(name, values);
        }
        self
    }

    pub(crate) fn header_replace(mut self, name: impl Into<String>, value: Vec<String>) -> Self {
        self.headers.insert(name.into(), value);
        self
    }

    pub(crate) fn query(mut self, params: &HashMap<String, String>) -> Self {
        if !params.is_empty() {
            self.url.query_pairs_mut().extend_pairs(params);
        }
        self
    }

    pub(crate) fn form(mut self, form: &HashMap<String, String>) -> Self {
        let form_body = string_map_to_form_url_encoded(form);
        self.headers.insert(
            "content-type".to_string(),
            vec!["application/x-www-form-urlencoded".to_string()],
        );
        self.body(form_body)
    }

    pub(crate) fn body(mut self, body: String) -> Self {
        self.headers.insert(
            "content-length".to_string(),
            vec![body.as_bytes().len().to_string()],
        );
        self.body = Some(body);
        self
    }
}

/// Represents an HTTP response received from a server.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code of the response (e.g., 200 for success, 404 for Not Found).
    pub status_code: u16,
    /// The content type header
    pub content_type: Option<String>,
    /// The optional body content of the response. None if there is no body content (String).
    pub body: Option<String>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }
}

/// This trait defines the interface for making HTTP requests used by the library.
/// Users who need custom HTTP clients need to implement this trait.
pub trait OAuth2HttpClient {
    /// Makes an HTTP request using the provided HttpRequest object.
    ///
    /// The future resolves to either:
    ///  * `Ok(HttpResponse)` containing the HTTP response, whatever its status code.
    ///  * `Err(String)` with an error message describing a transport failure.
    ///
    /// This function allows the library to be agnostic to the specific HTTP client
    /// implementation used, as long as it implements this trait.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, String>> + Send;
}
