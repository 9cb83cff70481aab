//! Session endpoint client
//!
//! `POST {base}/create-session` with `{"theme": ...}`; a 2xx JSON body is a
//! `Session`. The error type separates failures the caller recovers from
//! (transport, status) from payloads that are simply wrong (malformed).

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;

use crate::features::session::Session;

const CREATE_SESSION_PATH: &str = "create-session";

/// Why a session could not be obtained from the endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum SessionFetchError {
    /// The request never produced a response
    Transport(String),
    /// The server answered with a non-2xx status
    Status(u16),
    /// The server answered 2xx with a body that is not a valid session
    Malformed(String),
}

impl SessionFetchError {
    /// Transport and status failures are recoverable by the failure policy
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionFetchError::Malformed(_))
    }
}

impl std::fmt::Display for SessionFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionFetchError::Transport(e) => write!(f, "Session request failed: {}", e),
            SessionFetchError::Status(code) => write!(f, "Session endpoint returned {}", code),
            SessionFetchError::Malformed(e) => write!(f, "Malformed session payload: {}", e),
        }
    }
}

impl std::error::Error for SessionFetchError {}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    theme: &'a str,
}

/// HTTP client bound to one session service
#[derive(Clone)]
pub struct SessionClient {
    http: Client,
    base: Url,
    endpoint: Url,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl SessionClient {
    /// Build a client for `base_url`. `None` keeps the client's default timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base: Url = base_url
            .trim()
            .parse()
            .with_context(|| format!("Invalid session server url: {:?}", base_url))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("Session server url cannot be a base: {}", base);
        }
        // Treat the configured path as a directory so joins append to it
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(CREATE_SESSION_PATH)
            .context("Failed to build session endpoint url")?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Underlying HTTP client, shared with layer downloads
    pub fn http(&self) -> Client {
        self.http.clone()
    }

    /// Resolve a layer URL; relative URLs are relative to the session server
    pub fn resolve(&self, url: &str) -> Result<Url> {
        self.base
            .join(url)
            .with_context(|| format!("Invalid layer url: {:?}", url))
    }

    /// Request a session for `theme`
    pub async fn create_session(&self, theme: &str) -> Result<Session, SessionFetchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&CreateSessionRequest { theme })
            .send()
            .await
            .map_err(|e| SessionFetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionFetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SessionFetchError::Transport(e.to_string()))?;

        parse_session(status, &body)
    }
}

fn parse_session(status: StatusCode, body: &[u8]) -> Result<Session, SessionFetchError> {
    let session: Session = serde_json::from_slice(body)
        .map_err(|e| SessionFetchError::Malformed(format!("{} (HTTP {})", e, status.as_u16())))?;
    session.validate().map_err(SessionFetchError::Malformed)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ocean_body() -> serde_json::Value {
        serde_json::json!({
            "title": "Calm Ocean",
            "script": "Breathe with the tide.",
            "layers": [{"name": "Waves", "url": "a.mp3", "initialVolume": 0.5}],
            "colors": {"primary": "#000", "secondary": "#111"}
        })
    }

    #[test]
    fn test_endpoint_appends_to_base_path() {
        let client = SessionClient::new("http://127.0.0.1:8000", None).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:8000/create-session");

        let client = SessionClient::new("https://zen.example.com/api", None).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://zen.example.com/api/create-session"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(SessionClient::new("not a url", None).is_err());
        assert!(SessionClient::new("mailto:zen@example.com", None).is_err());
    }

    #[test]
    fn test_resolve_relative_and_absolute_layer_urls() {
        let client = SessionClient::new("http://127.0.0.1:8000", None).unwrap();
        assert_eq!(
            client.resolve("a.mp3").unwrap().as_str(),
            "http://127.0.0.1:8000/a.mp3"
        );
        assert_eq!(
            client.resolve("https://cdn.example.com/rain.mp3").unwrap().as_str(),
            "https://cdn.example.com/rain.mp3"
        );
    }

    #[tokio::test]
    async fn test_create_session_posts_theme() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-session"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"theme": "Ocean"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(ocean_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SessionClient::new(&server.uri(), None).unwrap();
        let session = client.create_session("Ocean").await.unwrap();
        assert_eq!(session.title, "Calm Ocean");
        assert_eq!(session.layers.len(), 1);
        assert_eq!(session.layers[0].initial_volume, 0.5);
        assert_eq!(session.colors.primary, "#000");
    }

    #[tokio::test]
    async fn test_non_success_status_is_recoverable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = SessionClient::new(&server.uri(), None).unwrap();
        let err = client.create_session("Forest").await.unwrap_err();
        assert_eq!(err, SessionFetchError::Status(503));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop a listener to get a port nobody is serving
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = SessionClient::new(&format!("http://127.0.0.1:{}", port), None).unwrap();
        let err = client.create_session("Forest").await.unwrap_err();
        assert!(matches!(err, SessionFetchError::Transport(_)), "{:?}", err);
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_recoverable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"title": "Half"})),
            )
            .mount(&server)
            .await;

        let client = SessionClient::new(&server.uri(), None).unwrap();
        let err = client.create_session("Rain").await.unwrap_err();
        assert!(matches!(err, SessionFetchError::Malformed(_)), "{:?}", err);
        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn test_functional_css_colors_are_accepted() {
        let mut body = ocean_body();
        body["colors"]["primary"] = serde_json::json!("rgb(10, 20, 30)");
        body["colors"]["secondary"] = serde_json::json!("teal");
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = SessionClient::new(&server.uri(), None).unwrap();
        let session = client.create_session("Ocean").await.unwrap();
        assert_eq!(session.colors.primary, "rgb(10, 20, 30)");
        assert_eq!(session.colors.secondary, "teal");
    }

    #[test]
    fn test_out_of_range_volume_is_malformed() {
        let mut body = ocean_body();
        body["layers"][0]["initialVolume"] = serde_json::json!(3.0);
        let bytes = serde_json::to_vec(&body).unwrap();
        let err = parse_session(StatusCode::OK, &bytes).unwrap_err();
        assert!(matches!(err, SessionFetchError::Malformed(_)));
    }
}
