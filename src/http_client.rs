//! Default Http Client

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, ClientBuilder, Method, Response};

use crate::types::{HttpMethod, HttpRequest, HttpResponse, OAuth2HttpClient};

/// The default HttpClient
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHttpClient;

impl DefaultHttpClient {
    async fn to_response(response: Response) -> HttpResponse {
        let status_code = response.status().as_u16();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(|ct| ct.to_string());

        let mut body: Option<String> = None;
        if let Ok(body_string) = response.text().await {
            if !body_string.is_empty() {
                body = Some(body_string);
            }
        }

        HttpResponse {
            body,
            status_code,
            content_type,
        }
    }
}

impl OAuth2HttpClient for DefaultHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, String> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("{e}"))?;

        let method = match req.method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
            HttpMethod::PUT => Method::PUT,
            HttpMethod::PATCH => Method::PATCH,
            HttpMethod::DELETE => Method::DELETE,
            HttpMethod::HEAD => Method::HEAD,
            HttpMethod::OPTIONS => Method::OPTIONS,
        };

        let mut req_builder = client.request(method, req.url);

        if let Some(body) = req.body {
            req_builder = req_builder.body(body);
        }

        for (name, values) in req.headers {
            for value in values {
                req_builder = req_builder.header(name.clone(), value);
            }
        }

        req_builder = req_builder.header("User-Agent", "oauth2-grant");

        match req_builder.send().await {
            Ok(res) => Ok(Self::to_response(res).await),
            Err(e) => Err(format!("{e}")),
        }
    }
}
