//! Transport trait.

use std::fmt;

use async_trait::async_trait;

use crate::Result;
use crate::options::ListOptions;

/// HTTP method of a table request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carries table requests to the API.
///
/// `path` is already escaped (`<table>[/<id>]`) and relative to the base.
/// Implementations own authentication, timeouts and status handling, and
/// return the raw response body of a successful request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request without a body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<u8>>;

    /// Issue a request with a JSON body.
    async fn request_with_body(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Vec<u8>,
    ) -> Result<Vec<u8>>;
}
