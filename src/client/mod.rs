//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::domain::{ApiKey, ValidationError};

mod campaigns;
mod contacts;
mod media;
mod templates;
mod verify;

pub use campaigns::Campaigns;
pub use contacts::{ContactLists, Contacts};
pub use media::Media;
pub use templates::Templates;
pub use verify::{Sessions, Verify};

const DEFAULT_BASE_URL: &str = "https://api.textwave.io/v1";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        query: &'a [(String, String)],
        body: Option<&'a Value>,
        auth: &'a ApiKey,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn send_multipart<'a>(
        &'a self,
        url: &'a str,
        file: Vec<u8>,
        content_type: &'a str,
        filename: &'a str,
        auth: &'a ApiKey,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        query: &'a [(String, String)],
        body: Option<&'a Value>,
        auth: &'a ApiKey,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = match method {
                Method::Get => self.client.get(url),
                Method::Post => self.client.post(url),
                Method::Patch => self.client.patch(url),
                Method::Delete => self.client.delete(url),
            };
            if !query.is_empty() {
                builder = builder.query(query);
            }
            if let Some(body) = body {
                builder = builder.json(body);
            }
            let response = builder
                .header("Authorization", format!("Bearer {}", auth.as_str()))
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn send_multipart<'a>(
        &'a self,
        url: &'a str,
        file: Vec<u8>,
        content_type: &'a str,
        filename: &'a str,
        auth: &'a ApiKey,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let part = reqwest::multipart::Part::bytes(file)
                .file_name(filename.to_owned())
                .mime_str(content_type)?;
            let form = reqwest::multipart::Form::new().part("file", part);
            let response = self
                .client
                .post(url)
                .header("Authorization", format!("Bearer {}", auth.as_str()))
                .multipart(form)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextWaveClient`] resources.
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (non-2xx with a structured error body),
/// - validation/parse failures.
pub enum TextWaveError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code with no structured error body.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Non-successful HTTP status code with a structured error body.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Shared request core held by every resource.
///
/// Resources are stateless beyond this handle; cloning is cheap and re-invoking
/// any method is idempotent from the client's point of view.
#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: Arc<str>,
    api_key: ApiKey,
    http: Arc<dyn HttpTransport>,
}

impl ApiClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, TextWaveError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = method.as_str(), path, "dispatching API request");
        let response = self
            .http
            .send(method, &url, &query, body.as_ref(), &self.api_key)
            .await
            .map_err(TextWaveError::Transport)?;
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            "API response received"
        );

        if !(200..=299).contains(&response.status) {
            return Err(error_from_response(response));
        }

        parse_body(response.body)
    }

    async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Value, TextWaveError> {
        self.execute(Method::Get, path, query, None).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TextWaveError> {
        self.execute(Method::Post, path, Vec::new(), body).await
    }

    async fn patch(&self, path: &str, body: Option<Value>) -> Result<Value, TextWaveError> {
        self.execute(Method::Patch, path, Vec::new(), body).await
    }

    async fn delete(&self, path: &str) -> Result<Value, TextWaveError> {
        self.execute(Method::Delete, path, Vec::new(), None).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        file: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> Result<Value, TextWaveError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, filename, "dispatching multipart upload");
        let response = self
            .http
            .send_multipart(&url, file, content_type, filename, &self.api_key)
            .await
            .map_err(TextWaveError::Transport)?;

        if !(200..=299).contains(&response.status) {
            return Err(error_from_response(response));
        }

        parse_body(response.body)
    }
}

/// Empty bodies (e.g. 204 responses to deletes) parse as JSON `null`.
fn parse_body(body: String) -> Result<Value, TextWaveError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|err| TextWaveError::Parse(Box::new(err)))
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<ApiErrorDetail>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ApiErrorDetail {
    Message(String),
    Structured {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        code: Option<String>,
    },
}

fn error_from_response(response: HttpResponse) -> TextWaveError {
    let status = response.status;
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&response.body) {
        let detail = match parsed.error {
            Some(ApiErrorDetail::Message(message)) => Some((message, parsed.code)),
            Some(ApiErrorDetail::Structured { message, code }) => Some((
                message.unwrap_or_else(|| "unknown API error".to_owned()),
                code,
            )),
            None => parsed.message.map(|message| (message, parsed.code)),
        };
        if let Some((message, code)) = detail {
            return TextWaveError::Api {
                status,
                code,
                message,
            };
        }
    }

    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    TextWaveError::HttpStatus { status, body }
}

#[derive(Debug, Clone)]
/// Builder for [`TextWaveClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TextWaveClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextWaveClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (useful for sandboxes and test servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextWaveClient`].
    pub fn build(self) -> Result<TextWaveClient, TextWaveError> {
        let base = Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidBaseUrl {
            input: self.base_url.clone(),
        })?;
        let base_url = base.as_str().trim_end_matches('/').to_owned();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| TextWaveError::Transport(Box::new(err)))?;

        Ok(TextWaveClient::from_core(ApiClient {
            base_url: base_url.into(),
            api_key: self.api_key,
            http: Arc::new(ReqwestTransport { client }),
        }))
    }
}

/// High-level TextWave API client.
///
/// The client is a bundle of resource handles sharing one request core; each
/// resource method performs a single HTTP call and decodes the response into
/// domain models. The client holds no mutable state.
#[derive(Clone)]
pub struct TextWaveClient {
    contacts: Contacts,
    verify: Verify,
    templates: Templates,
    campaigns: Campaigns,
    media: Media,
}

impl std::fmt::Debug for TextWaveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextWaveClient").finish_non_exhaustive()
    }
}

impl TextWaveClient {
    /// Create a client against the production API.
    ///
    /// For more customization, use [`TextWaveClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self::from_core(ApiClient {
            base_url: DEFAULT_BASE_URL.into(),
            api_key,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        })
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TextWaveClientBuilder {
        TextWaveClientBuilder::new(api_key)
    }

    fn from_core(core: ApiClient) -> Self {
        Self {
            contacts: Contacts::new(core.clone()),
            verify: Verify::new(core.clone()),
            templates: Templates::new(core.clone()),
            campaigns: Campaigns::new(core.clone()),
            media: Media::new(core),
        }
    }

    /// Contact management.
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Phone verification.
    pub fn verify(&self) -> &Verify {
        &self.verify
    }

    /// Verification message templates.
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Bulk messaging campaigns.
    pub fn campaigns(&self) -> &Campaigns {
        &self.campaigns
    }

    /// Media uploads.
    pub fn media(&self) -> &Media {
        &self.media
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedMultipart {
        pub(crate) bytes: Vec<u8>,
        pub(crate) content_type: String,
        pub(crate) filename: String,
    }

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedRequest {
        pub(crate) method: &'static str,
        pub(crate) url: String,
        pub(crate) query: Vec<(String, String)>,
        pub(crate) body: Option<Value>,
        pub(crate) multipart: Option<RecordedMultipart>,
        pub(crate) api_key: String,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        response_status: u16,
        response_body: String,
    }

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        pub(crate) fn last_request(&self) -> RecordedRequest {
            let state = self.state.lock().unwrap();
            state.requests.last().expect("no request recorded").clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            method: Method,
            url: &'a str,
            query: &'a [(String, String)],
            body: Option<&'a Value>,
            auth: &'a ApiKey,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(RecordedRequest {
                        method: method.as_str(),
                        url: url.to_owned(),
                        query: query.to_vec(),
                        body: body.cloned(),
                        multipart: None,
                        api_key: auth.as_str().to_owned(),
                    });
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }

        fn send_multipart<'a>(
            &'a self,
            url: &'a str,
            file: Vec<u8>,
            content_type: &'a str,
            filename: &'a str,
            auth: &'a ApiKey,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(RecordedRequest {
                        method: "POST",
                        url: url.to_owned(),
                        query: Vec::new(),
                        body: None,
                        multipart: Some(RecordedMultipart {
                            bytes: file,
                            content_type: content_type.to_owned(),
                            filename: filename.to_owned(),
                        }),
                        api_key: auth.as_str().to_owned(),
                    });
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }
    }

    pub(crate) fn make_client(transport: &FakeTransport) -> TextWaveClient {
        TextWaveClient::from_core(make_core(transport))
    }

    pub(crate) fn make_core(transport: &FakeTransport) -> ApiClient {
        ApiClient {
            base_url: "https://api.example.invalid/v1".into(),
            api_key: ApiKey::new("test_key").unwrap(),
            http: Arc::new(transport.clone()),
        }
    }
}
