use std::fmt::Display;

use serde::Deserialize;

use super::http_client::HttpResponse;

/// # StandardBodyError
/// Error body returned from the OAuth2 Server (RFC 6749 §5.2)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StandardBodyError {
    /// Short title of the error
    pub error: String,
    /// Description
    pub error_description: Option<String>,
    /// Uri of a human readable page about the error
    pub error_uri: Option<String>,
}

/// # Error
/// Generic error carrying a message
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Error message
    pub message: String,
}

/// # ErrorWithResponse
/// Error together with the response that caused it, if any
#[derive(Debug)]
pub struct ErrorWithResponse<T> {
    /// The error
    pub error: T,
    /// The response from the server, if the error occurred as part of a request
    pub response: Option<HttpResponse>,
}

/// # OAuth2ClientError
/// Error that will be returned to the end user of this library
#[derive(Debug)]
pub enum OAuth2ClientError {
    /// Generic failure, such as a transport error or an undecodable body
    Error(Error, Option<HttpResponse>),
    /// Misuse of the library, such as missing credentials or an invalid url
    TypeError(Error, Option<HttpResponse>),
    /// Error returned by the authorization server
    OPError(StandardBodyError, Option<HttpResponse>),
}

/// Result type used throughout the crate
pub type OAuth2ReturnType<T> = Result<T, Box<OAuth2ClientError>>;

impl OAuth2ClientError {
    pub(crate) fn new_error(message: &str, response: Option<HttpResponse>) -> Self {
        OAuth2ClientError::Error(
            Error {
                message: message.to_string(),
            },
            response,
        )
    }

    pub(crate) fn new_type_error(message: &str, response: Option<HttpResponse>) -> Self {
        OAuth2ClientError::TypeError(
            Error {
                message: message.to_string(),
            },
            response,
        )
    }

    pub(crate) fn new_op_error(
        error: String,
        error_description: Option<String>,
        error_uri: Option<String>,
        response: Option<HttpResponse>,
    ) -> Self {
        OAuth2ClientError::OPError(
            StandardBodyError {
                error,
                error_description,
                error_uri,
            },
            response,
        )
    }

    /// Checks if the Error is [OAuth2ClientError::Error]
    pub fn is_error(&self) -> bool {
        matches!(self, OAuth2ClientError::Error(..))
    }

    /// Checks if the Error is [OAuth2ClientError::TypeError]
    pub fn is_type_error(&self) -> bool {
        matches!(self, OAuth2ClientError::TypeError(..))
    }

    /// Checks if the Error is [OAuth2ClientError::OPError]
    pub fn is_op_error(&self) -> bool {
        matches!(self, OAuth2ClientError::OPError(..))
    }

    /// Returns the [Error] with its response
    ///
    /// *It will panic if it is not an [OAuth2ClientError::Error]. Check with [OAuth2ClientError::is_error]*
    pub fn error(self) -> ErrorWithResponse<Error> {
        if let OAuth2ClientError::Error(error, response) = self {
            return ErrorWithResponse { error, response };
        }
        panic!("Not an Error");
    }

    /// Returns the type error with its response
    ///
    /// *It will panic if it is not an [OAuth2ClientError::TypeError]. Check with [OAuth2ClientError::is_type_error]*
    pub fn type_error(self) -> ErrorWithResponse<Error> {
        if let OAuth2ClientError::TypeError(error, response) = self {
            return ErrorWithResponse { error, response };
        }
        panic!("Not a TypeError");
    }

    /// Returns the [StandardBodyError] with its response
    ///
    /// *It will panic if it is not an [OAuth2ClientError::OPError]. Check with [OAuth2ClientError::is_op_error]*
    pub fn op_error(self) -> ErrorWithResponse<StandardBodyError> {
        if let OAuth2ClientError::OPError(error, response) = self {
            return ErrorWithResponse { error, response };
        }
        panic!("Not an OPError");
    }

    /// The response attached to the error, if any
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            OAuth2ClientError::Error(_, response)
            | OAuth2ClientError::TypeError(_, response)
            | OAuth2ClientError::OPError(_, response) => response.as_ref(),
        }
    }
}

impl Display for OAuth2ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OAuth2ClientError::Error(e, _) => write!(f, "Error: {}", e.message),
            OAuth2ClientError::TypeError(e, _) => write!(f, "TypeError: {}", e.message),
            OAuth2ClientError::OPError(e, _) => match &e.error_description {
                Some(description) => write!(f, "OPError: {} ({description})", e.error),
                None => write!(f, "OPError: {}", e.error),
            },
        }
    }
}

impl std::error::Error for OAuth2ClientError {}
