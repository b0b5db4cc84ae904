//! Raw HTTP responses returned by a backend

use serde::{Deserialize, Serialize};

/// Status class of a response, as far as the API distinguishes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseKind {
    Ok,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Other(u16),
}

impl From<u16> for ResponseKind {
    fn from(status: u16) -> Self {
        match status {
            200 => Self::Ok,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            other => Self::Other(other),
        }
    }
}

/// Status code and body text of an answered request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn kind(&self) -> ResponseKind {
        ResponseKind::from(self.status)
    }

    pub fn is_ok(&self) -> bool {
        self.kind() == ResponseKind::Ok
    }
}
