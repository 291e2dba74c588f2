//! Transport layer: HTTP shape of each operation and wire-format details
//! (serialization/deserialization).

mod coerce;
mod company;
mod did;
mod user;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Service;

#[derive(Debug, thiserror::Error)]
/// A successful response did not have the shape the operation expects.
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing `{path}`")]
    MissingField { path: String },

    #[error("response field `{path}` has an unexpected shape: {source}")]
    InvalidField {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verbs used by the SecureFax API.
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP response as received from the SecureFax API.
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// `true` for any 2xx status.
    pub fn is_successful(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Parse the whole body as JSON.
    pub fn json(&self) -> Result<Value, DecodeError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body and return the value at a dotted path such as `data.company`.
    ///
    /// An empty path returns the whole document. `null` counts as missing.
    pub fn json_path(&self, path: &str) -> Result<Value, DecodeError> {
        let mut root = self.json()?;
        lookup_mut(&mut root, path).map(Value::take)
    }

    /// Decode the value at a dotted path into `T`.
    pub fn decode_at<T: DeserializeOwned>(&self, path: &str) -> Result<T, DecodeError> {
        let value = self.json_path(path)?;
        serde_json::from_value(value).map_err(|source| DecodeError::InvalidField {
            path: path.to_owned(),
            source,
        })
    }
}

/// Shape of one SecureFax API operation.
///
/// Implementations are plain values: they describe the HTTP request and know how
/// to turn a successful [`Response`] into the operation's output. Operations that
/// declare no typed output return the [`Response`] itself.
pub trait Request {
    /// Value produced from a successful response.
    type Output;

    fn method(&self) -> Method;

    /// API family the request belongs to; selects the base URL.
    fn resolve_service(&self) -> Service;

    /// Endpoint path relative to the service base URL, starting with `/`.
    fn resolve_endpoint(&self) -> String;

    /// JSON body, if the operation sends one.
    fn default_body(&self) -> Option<Value> {
        None
    }

    /// Query parameters with empty values already removed.
    fn default_query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Self::Output, DecodeError>;
}

fn json_pointer(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    format!("/{}", path.replace('.', "/"))
}

fn lookup<'a>(root: &'a Value, path: &str) -> Result<&'a Value, DecodeError> {
    match root.pointer(&json_pointer(path)) {
        Some(Value::Null) | None => Err(DecodeError::MissingField {
            path: path.to_owned(),
        }),
        Some(value) => Ok(value),
    }
}

fn lookup_mut<'a>(root: &'a mut Value, path: &str) -> Result<&'a mut Value, DecodeError> {
    match root.pointer_mut(&json_pointer(path)) {
        Some(Value::Null) | None => Err(DecodeError::MissingField {
            path: path.to_owned(),
        }),
        Some(value) => Ok(value),
    }
}

fn decode_field<T: DeserializeOwned>(root: &Value, path: &str) -> Result<T, DecodeError> {
    let value = lookup(root, path)?;
    T::deserialize(value).map_err(|source| DecodeError::InvalidField {
        path: path.to_owned(),
        source,
    })
}

/// Keep only parameters with a non-empty value.
fn query_pairs<I>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (&'static str, Option<String>)>,
{
    pairs
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key.to_owned(), value))
        })
        .collect()
}

/// `page` parameter for list operations; page `0` is treated as unset.
fn page_query(page: u32) -> Vec<(String, String)> {
    query_pairs([("page", (page != 0).then(|| page.to_string()))])
}
