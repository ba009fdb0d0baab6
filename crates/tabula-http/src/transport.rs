//! HTTP transport implementation.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{debug, instrument, trace};

use tabula_core::{
    ApiError, ApiUrl, BaseId, Error, InvalidInputError, ListOptions, Method, Result, Transport,
    TransportError,
};

use crate::auth::ApiKey;
use crate::config::HttpConfig;

/// Error body returned by the API.
///
/// The API reports either `{"error": "NOT_FOUND"}` or
/// `{"error": {"type": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Code(String),
    Detailed {
        #[serde(rename = "type")]
        kind: Option<String>,
        message: Option<String>,
    },
}

/// Map a reqwest failure onto the transport error taxonomy.
fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// A [`Transport`] that talks to the API over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: ApiUrl,
    base: BaseId,
    api_key: ApiKey,
}

impl HttpTransport {
    /// Create a transport for one base with the default configuration.
    pub fn new(base: BaseId, api_key: ApiKey) -> Result<Self> {
        Self::with_config(HttpConfig::default(), base, api_key)
    }

    /// Create a transport for one base.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or cannot be sent as a
    /// header, or if the HTTP client cannot be built.
    pub fn with_config(config: HttpConfig, base: BaseId, api_key: ApiKey) -> Result<Self> {
        if api_key.is_empty() {
            return Err(InvalidInputError::Other {
                message: "API key cannot be empty".to_string(),
            }
            .into());
        }
        if HeaderValue::from_str(&format!("Bearer {}", api_key.as_str())).is_err() {
            return Err(InvalidInputError::Other {
                message: "API key contains characters not allowed in a header".to_string(),
            }
            .into());
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;

        Ok(Self {
            client,
            api_url: config.api_url,
            base,
            api_key,
        })
    }

    /// Returns the API URL this transport is configured for.
    pub fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the base this transport addresses.
    pub fn base(&self) -> &BaseId {
        &self.base
    }

    /// Create authorization headers for requests.
    fn auth_headers(&self, with_body: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key.as_str());
        // Checked in the constructor.
        if let Ok(value) = HeaderValue::from_str(&auth_value) {
            headers.insert(AUTHORIZATION, value);
        }
        if with_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = self.api_url.endpoint(&self.base, path);
        debug!(%method, %url, "HTTP request");

        let mut request = self
            .client
            .request(to_reqwest(method), &url)
            .headers(self.auth_headers(body.is_some()));

        if let Some(options) = options {
            let query = options.to_query();
            trace!(?query, "query parameters");
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Handle a response, returning the body or the API error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if status.is_success() {
            let body = response.bytes().await.map_err(transport_error)?;
            Ok(body.to_vec())
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse an error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse {
                error: ErrorBody::Code(code),
            }) => ApiError::new(status, Some(code), None),
            Ok(ErrorResponse {
                error: ErrorBody::Detailed { kind, message },
            }) => ApiError::new(status, kind, message),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, options), fields(base = %self.base))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<u8>> {
        self.send(method, path, options, None).await
    }

    #[instrument(skip(self, options, body), fields(base = %self.base))]
    async fn request_with_body(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Vec<u8>,
    ) -> Result<Vec<u8>> {
        self.send(method, path, options, Some(body)).await
    }
}
