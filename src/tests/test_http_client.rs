use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use serde_json::Value;
use url::Url;

use crate::{
    helpers::form_url_encoded_to_string_map,
    types::{HttpMethod, HttpRequest, HttpResponse, OAuth2HttpClient},
};

pub struct TestHttpReqRes {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: HashMap<String, Vec<String>>,
    pub body: Option<String>,

    pub response_body: Option<String>,
    pub response_status_code: u16,
    pub response_content_type: Option<String>,
    pub transport_error: Option<String>,
}

impl TestHttpReqRes {
    pub fn new(url: impl Into<String>) -> Self {
        TestHttpReqRes {
            url: Url::parse(&url.into()).unwrap(),
            method: HttpMethod::GET,
            headers: HashMap::new(),
            body: None,
            response_body: None,
            response_status_code: 200,
            response_content_type: None,
            transport_error: None,
        }
    }

    pub fn assert_request_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn assert_request_header(mut self, key: impl Into<String>, value: Vec<String>) -> Self {
        self.headers.insert(key.into(), value);
        self
    }

    pub fn assert_request_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn set_response_body(mut self, response_body: impl Into<String>) -> Self {
        self.response_body = Some(response_body.into());
        self
    }

    pub fn set_response_status_code(mut self, response_status_code: u16) -> Self {
        self.response_status_code = response_status_code;
        self
    }

    pub fn set_response_content_type_header(mut self, ct: impl Into<String>) -> Self {
        self.response_content_type = Some(ct.into());
        self
    }

    pub fn set_transport_error(mut self, error: impl Into<String>) -> Self {
        self.transport_error = Some(error.into());
        self
    }

    pub fn build(self) -> TestHttpClient {
        let http_client = TestHttpClient::new();

        http_client.add(self)
    }
}

pub struct TestHttpClient {
    req_res: Mutex<VecDeque<TestHttpReqRes>>,
}

impl TestHttpClient {
    pub fn new() -> Self {
        Self {
            req_res: Mutex::new(VecDeque::with_capacity(5)),
        }
    }

    pub fn add(self, req_res: TestHttpReqRes) -> Self {
        self.req_res.lock().unwrap().push_back(req_res);

        self
    }

    pub fn assert(&self) {
        assert!(
            self.req_res.lock().unwrap().is_empty(),
            "All requests not fullfilled"
        );
    }
}

fn query_map(url: &Url) -> HashMap<String, String> {
    url.query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl OAuth2HttpClient for TestHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, String> {
        let req_res = self
            .req_res
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request");

        let mut req_url = req.url.clone();
        req_url.set_query(None);
        let mut expected_url = req_res.url.clone();
        expected_url.set_query(None);

        assert_eq!(req_url, expected_url);
        assert_eq!(query_map(&req.url), query_map(&req_res.url));
        assert_eq!(req.method, req_res.method);
        assert_eq!(req.headers, req_res.headers);

        if req_res
            .headers
            .get("content-type")
            .is_some_and(|ct| ct.contains(&"application/json".to_string()))
        {
            assert_eq!(
                req.body.map(|b| serde_json::from_str::<Value>(&b).unwrap()),
                req_res
                    .body
                    .map(|b| serde_json::from_str::<Value>(&b).unwrap()),
            )
        } else if req_res
            .headers
            .get("content-type")
            .is_some_and(|ct| ct.contains(&"application/x-www-form-urlencoded".to_string()))
        {
            assert_eq!(
                req.body.map(|b| form_url_encoded_to_string_map(&b)),
                req_res.body.map(|b| form_url_encoded_to_string_map(&b)),
            )
        } else {
            assert_eq!(req.body, req_res.body);
        }

        if let Some(error) = req_res.transport_error {
            return Err(error);
        }

        Ok(HttpResponse {
            body: req_res.response_body,
            status_code: req_res.response_status_code,
            content_type: req_res.response_content_type,
        })
    }
}
