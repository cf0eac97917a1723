use std::collections::HashMap;

use tracing::warn;

use crate::{
    executor::HttpRequestExecutor,
    types::{
        ClientConfig, GrantRequestOptions, HttpMethod, OAuth2HttpClient, RequestExecutor,
        RequestOptions,
    },
};

const GRANT_TYPE: &str = "grant_type";
const REFRESH_TOKEN: &str = "refresh_token";

/// # RefreshTokenGrant
/// Exchanges a refresh token for a new access token at the token endpoint.
#[derive(Debug, Clone)]
pub struct RefreshTokenGrant<E> {
    executor: E,
    token_path: String,
}

impl<E> RefreshTokenGrant<E>
where
    E: RequestExecutor,
{
    /// Creates a new [RefreshTokenGrant]
    ///
    /// - `executor` - Performs the assembled request
    /// - `token_path` - Path of the token endpoint passed to the executor
    pub fn new(executor: E, token_path: impl Into<String>) -> Self {
        Self {
            executor,
            token_path: token_path.into(),
        }
    }

    /// Value sent as the `grant_type` param
    pub fn grant_type(&self) -> &'static str {
        "refresh_token"
    }

    /// Path of the token endpoint
    pub fn token_path(&self) -> &str {
        &self.token_path
    }

    /// The executor requests are delegated to
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// # Build Request
    /// Assembles the method and effective options of a refresh request without sending it.
    ///
    /// `grant_type` and `refresh_token` are always the grant's own values. A caller param
    /// with either name is dropped; every other caller param is merged over the defaults.
    pub fn build_request(
        &self,
        refresh_token: &str,
        opts: Option<GrantRequestOptions>,
    ) -> (HttpMethod, RequestOptions) {
        let opts = opts.unwrap_or_default();

        let mut params: HashMap<String, String> = HashMap::new();

        for (k, v) in opts.params {
            if k == GRANT_TYPE || k == REFRESH_TOKEN {
                warn!(param = %k, "ignoring caller override of a reserved refresh grant param");
                continue;
            }
            params.insert(k, v);
        }

        params.insert(GRANT_TYPE.to_string(), self.grant_type().to_owned());
        params.insert(REFRESH_TOKEN.to_string(), refresh_token.to_owned());

        let method = opts.method.unwrap_or(HttpMethod::POST);

        let options = RequestOptions {
            params,
            authenticate: opts.authenticate.unwrap_or_default(),
            headers: opts.headers,
        };

        (method, options)
    }

    /// # Get Token
    /// Performs a `refresh_token` grant at the token endpoint.
    ///
    /// - `refresh_token` : Refresh token issued by the authorization server
    /// - `opts` : See [GrantRequestOptions]
    ///
    /// Whatever the executor returns, success or error, is returned unchanged.
    pub async fn get_token_async(
        &self,
        refresh_token: &str,
        opts: Option<GrantRequestOptions>,
    ) -> Result<E::Response, E::Error> {
        if refresh_token.is_empty() {
            warn!("refresh grant requested with an empty refresh_token");
        }

        let (method, options) = self.build_request(refresh_token, opts);

        self.executor
            .execute(method, &self.token_path, options)
            .await
    }
}

impl<T> RefreshTokenGrant<HttpRequestExecutor<T>>
where
    T: OAuth2HttpClient + Sync,
{
    /// Creates a [RefreshTokenGrant] backed by an [HttpRequestExecutor],
    /// using the token path of the `config`.
    pub fn from_config(config: ClientConfig, http_client: T) -> Self {
        let token_path = config.token_path.clone();
        Self::new(HttpRequestExecutor::new(config, http_client), token_path)
    }
}
