//! HTTP client for the bridge API

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::{self, PUBKEY_HEADER, SIGNATURE_HEADER};
use crate::error::{BridgeError, Result};
use crate::keys::KeysService;
use crate::signer::{Credential, Signer};
use crate::types::{BridgeConfig, ErrorBody};
use crate::users::UsersService;

/// HTTP client for the bridge API
///
/// Cloning is cheap: clones share the connection pool and the signer.
///
/// # Example
///
/// ```rust,no_run
/// use storj_bridge::{BridgeClient, BridgeConfig, Credential, User};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BridgeClient::new(BridgeConfig::default())?
///     .with_credential(Credential::generate());
///
/// client.users().create(User::new("me@example.com", "hunter2")).await?;
///
/// let keys = client.keys().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BridgeClient {
    config: BridgeConfig,
    http: Client,
    signer: Option<Arc<dyn Signer>>,
}

impl BridgeClient {
    /// Create a new unauthenticated client
    pub fn new(config: BridgeConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| BridgeError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BridgeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http,
            signer: None,
        })
    }

    /// Authenticate protected calls with the given signer
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Authenticate protected calls with an in-memory credential
    pub fn with_credential(self, credential: Credential) -> Self {
        self.with_signer(Arc::new(credential))
    }

    /// Whether protected operations can be called
    pub fn is_authenticated(&self) -> bool {
        self.signer.is_some()
    }

    /// Public key the client authenticates with, if any
    pub fn public_key_hex(&self) -> Option<String> {
        self.signer.as_ref().map(|s| s.public_key_hex())
    }

    /// Public key management
    pub fn keys(&self) -> KeysService<'_> {
        KeysService::new(self)
    }

    /// User registration
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    // ==================== Helper Methods ====================

    /// Signer for a protected call; fails before any I/O when absent.
    pub(crate) fn signer(&self) -> Result<&dyn Signer> {
        self.signer
            .as_deref()
            .ok_or(BridgeError::AuthenticationRequired)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        Url::parse(&url).map_err(|e| BridgeError::Config(format!("invalid request URL {url:?}: {e}")))
    }

    /// Send one request, signing it when a signer is given.
    ///
    /// The signed path and query are taken from the final URL so they
    /// match what the server sees, base-URL prefix included.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        signer: Option<&dyn Signer>,
    ) -> Result<Response> {
        let url = self.endpoint(path)?;

        debug!(
            method = %method,
            path = url.path(),
            signed = signer.is_some(),
            "Dispatching bridge request"
        );

        let mut request = self.http.request(method.clone(), url.clone());

        if let Some(signer) = signer {
            let headers = auth::sign_request(
                signer,
                &method,
                url.path(),
                url.query(),
                body.as_deref().unwrap_or_default(),
            )?;
            request = request
                .header(PUBKEY_HEADER, headers.pubkey)
                .header(SIGNATURE_HEADER, headers.signature);
        }

        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        Ok(request.send().await?)
    }
}

/// Pass through any 2xx response.
pub(crate) async fn require_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(unexpected_status(response).await)
    }
}

/// Pass through only the exact expected status.
pub(crate) async fn require_status(response: Response, expected: StatusCode) -> Result<Response> {
    if response.status() == expected {
        Ok(response)
    } else {
        Err(unexpected_status(response).await)
    }
}

/// Decode a JSON response body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode a JSON response body if there is one worth decoding.
pub(crate) async fn read_optional_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            debug!(error = %e, "Ignoring unrecognised success body");
            Ok(None)
        }
    }
}

async fn unexpected_status(response: Response) -> BridgeError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "Failed to read error body");
            String::new()
        }
    };

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.is_empty() => status.canonical_reason().unwrap_or_default().to_string(),
        Err(_) => body,
    };

    warn!(status = status.as_u16(), %message, "Unexpected bridge response");

    BridgeError::UnexpectedStatus {
        status: status.as_u16(),
        message,
    }
}

impl std::fmt::Debug for BridgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeClient")
            .field("base_url", &self.config.base_url)
            .field("public_key", &self.public_key_hex())
            .finish()
    }
}
