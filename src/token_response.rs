use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    helpers::convert_json_to,
    types::{HttpResponse, OAuth2ClientError, OAuth2ReturnType},
};

/// # TokenResponse
/// Successful response of the token endpoint (RFC 6749 §5.1).
/// - If there are other properties present, they are stored in `other`. Access it via [`TokenResponse::get_other()`]
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_token: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, Value>,
}

impl TokenResponse {
    /// Parses the JSON body of a token endpoint response
    pub fn from_response(response: &HttpResponse) -> OAuth2ReturnType<Self> {
        let body = response.body.as_ref().ok_or_else(|| {
            Box::new(OAuth2ClientError::new_error(
                "body expected in token response",
                Some(response.clone()),
            ))
        })?;

        convert_json_to::<Self>(body).map_err(|_| {
            Box::new(OAuth2ClientError::new_error(
                "could not convert body to TokenResponse",
                Some(response.clone()),
            ))
        })
    }

    /// Gets the access token
    pub fn get_access_token(&self) -> Option<String> {
        self.access_token.clone()
    }

    /// Gets the token type
    pub fn get_token_type(&self) -> Option<String> {
        self.token_type.clone()
    }

    /// Gets the refresh token. Authorization servers that rotate refresh tokens return a new one here.
    pub fn get_refresh_token(&self) -> Option<String> {
        self.refresh_token.clone()
    }

    /// Gets the access token lifetime in seconds
    pub fn get_expires_in(&self) -> Option<i64> {
        self.expires_in
    }

    /// Gets the granted scope
    pub fn get_scope(&self) -> Option<String> {
        self.scope.clone()
    }

    /// Gets the id token
    pub fn get_id_token(&self) -> Option<String> {
        self.id_token.clone()
    }

    /// Gets the other fields of the response
    pub fn get_other(&self) -> &HashMap<String, Value> {
        &self.other
    }
}
