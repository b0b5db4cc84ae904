//! Response envelopes
//!
//! A successful call answers `200` with a JSON object holding a `status`
//! string next to the payload, which is keyed by resource name:
//!
//! ```json
//! {"status": "ok", "video": {"key": "yYul4DRz", "title": "Example"}}
//! ```
//!
//! Any other HTTP status is reported as [`Error::Protocol`] with the raw
//! body; the error schema of the remote service is not decoded.

use crate::http::HttpResponse;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A decoded `200` response
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status: String,
    fields: Map<String, Value>,
}

impl Envelope {
    /// Check the HTTP status and decode the JSON object
    pub fn parse(response: HttpResponse) -> Result<Self> {
        if !response.is_ok() {
            return Err(Error::protocol(response.status, response.body));
        }

        match serde_json::from_str::<Value>(&response.body)? {
            Value::Object(fields) => {
                let status = fields
                    .get("status")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Ok(Self { status, fields })
            }
            other => Err(Error::unexpected_response(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// The envelope's `status` field, empty when absent
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|value| !value.is_null())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    /// Decode the payload named `name`, which must be present
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.optional_field(name)?.ok_or_else(|| {
            Error::unexpected_response(format!("missing `{name}` in response"))
        })
    }

    /// Decode the payload named `name` if it is present and not null
    pub fn optional_field<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        self.get(name)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(Error::from)
    }

    /// Decode the first of `names` that holds a list
    pub fn first_list<T: DeserializeOwned>(&self, names: &[&str]) -> Result<Option<Vec<T>>> {
        for name in names {
            if let Some(value) = self.get(name).filter(|value| value.is_array()) {
                return Ok(Some(serde_json::from_value(value.clone())?));
            }
        }
        Ok(None)
    }

    /// Decode the whole object, `status` included
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.fields.clone()))?)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
