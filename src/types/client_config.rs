/// Default path of the token endpoint
pub const DEFAULT_TOKEN_PATH: &str = "/oauth/token";

/// # ClientConfig
/// Client registration and endpoint configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Client identifier issued by the authorization server
    pub client_id: String,
    /// Client secret issued by the authorization server
    pub client_secret: Option<String>,
    /// Absolute base url of the authorization server, e.g. `https://op.example.com`
    pub host: String,
    /// Token endpoint path. Defaults to [DEFAULT_TOKEN_PATH]
    pub token_path: String,
}

impl ClientConfig {
    /// Creates a new [ClientConfig] for a public client.
    pub fn new(client_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            host: host.into(),
            token_path: DEFAULT_TOKEN_PATH.to_string(),
        }
    }

    /// Sets the client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the token endpoint path.
    pub fn token_path(mut self, token_path: impl Into<String>) -> Self {
        self.token_path = token_path.into();
        self
    }
}
