use std::collections::HashMap;

use serde::Deserialize;
use url::{form_urlencoded, Url};

use crate::types::{OAuth2ClientError, OAuth2ReturnType};

pub(crate) fn validate_url(url: &str) -> OAuth2ReturnType<Url> {
    if let Ok(u) = Url::parse(url) {
        if !u.cannot_be_a_base() {
            return Ok(u);
        }
    }

    Err(Box::new(OAuth2ClientError::new_type_error(
        "only valid absolute URLs can be requested",
        None,
    )))
}

pub(crate) fn convert_json_to<T: for<'a> Deserialize<'a>>(plain: &str) -> Result<T, String> {
    serde_json::from_str(plain).map_err(|e| e.to_string())
}

/// Encodes client credentials for the `Basic` scheme, form-encoding each part first (RFC 6749 §2.3.1)
pub(crate) fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    use base64::{engine::general_purpose, Engine};

    let encoded = format!(
        "{}:{}",
        urlencoding::encode(client_id),
        urlencoding::encode(client_secret)
    )
    .replace("%20", "+");

    general_purpose::STANDARD.encode(encoded)
}

pub(crate) fn string_map_to_form_url_encoded(map: &HashMap<String, String>) -> String {
    let mut form_urlencoded = form_urlencoded::Serializer::new(String::new());
    for (k, v) in map {
        form_urlencoded.append_pair(k, v);
    }

    form_urlencoded.finish()
}

#[cfg(test)]
pub(crate) fn form_url_encoded_to_string_map(string: &str) -> HashMap<String, String> {
    form_urlencoded::parse(string.as_bytes())
        .map(|(x, y)| (x.to_string(), y.to_string()))
        .collect()
}
