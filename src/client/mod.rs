//! Client layer: the `Genesis` connector, its builder, and the resource façades.

mod auth;
mod resource;
#[cfg(test)]
mod test_support;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

pub use auth::SECURITY_KEY_HEADER;
pub use resource::{
    CompanyResource, DidResource, ManagerResource, SecureFaxResource, UsersResource,
};

use crate::domain::{ApiKey, Password, Service, Username, ValidationError};
use crate::transport::{DecodeError, Method, Request, Response};
use auth::MultiAuthenticator;

/// Environment variable holding the Basic-auth username.
pub const USERNAME_ENV: &str = "GENESIS_USERNAME";
/// Environment variable holding the Basic-auth password.
pub const PASSWORD_ENV: &str = "GENESIS_PASSWORD";
/// Environment variable holding the `Security-key` value.
pub const API_KEY_ENV: &str = "GENESIS_API_KEY";
/// Environment variable selecting the sandbox (`1`/`true`/`yes`/`on`).
pub const SANDBOX_ENV: &str = "GENESIS_SANDBOX";
/// Environment variable overriding the base URL of every service.
pub const BASE_URL_ENV: &str = "GENESIS_BASE_URL";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<Response, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<Response, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.into(), request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(Response::new(status, body))
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
/// A SecureFax call that did not succeed.
///
/// The message is extracted from the JSON `message` field when possible; the full
/// response is kept for inspection.
pub struct ApiFailure {
    message: String,
    response: Response,
}

impl ApiFailure {
    /// Message used when a successful response is turned into a failure.
    pub const UNEXPECTED_SUCCESS: &'static str = "Unexpected successful response received";
    /// Message used when the error body carries no `message`.
    pub const UNKNOWN_ERROR: &'static str = "An unknown error occurred";
    /// Prefix of the message used when the error body cannot be read as JSON.
    pub const UNREADABLE_PREFIX: &'static str = "Error extracting response message: ";

    pub fn from_response(response: Response) -> Self {
        Self {
            message: extract_error_message(&response),
            response,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response.
    pub fn status(&self) -> u16 {
        self.response.status()
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn into_response(self) -> Response {
        self.response
    }
}

fn extract_error_message(response: &Response) -> String {
    if response.is_successful() {
        return ApiFailure::UNEXPECTED_SUCCESS.to_owned();
    }

    let unreadable = || format!("{}{}", ApiFailure::UNREADABLE_PREFIX, response.body());
    if response.body().trim().is_empty() {
        return ApiFailure::UNKNOWN_ERROR.to_owned();
    }
    match serde_json::from_str::<Value>(response.body()) {
        Ok(Value::Object(fields)) => match fields.get("message") {
            None | Some(Value::Null) => ApiFailure::UNKNOWN_ERROR.to_owned(),
            Some(Value::String(message)) => message.clone(),
            Some(Value::Number(code)) => code.to_string(),
            Some(Value::Bool(flag)) => String::from(if *flag { "1" } else { "" }),
            Some(_) => unreadable(),
        },
        Ok(_) => ApiFailure::UNKNOWN_ERROR.to_owned(),
        Err(_) => unreadable(),
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Genesis`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, timeouts),
/// - API failures (non-2xx status) with the original response,
/// - decode and validation failures.
pub enum GenesisError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The API answered with a non-successful status.
    #[error(transparent)]
    Api(#[from] ApiFailure),

    /// A successful response did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Base URL and endpoint did not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl GenesisError {
    /// The API failure, if this error is one.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Api(failure) => Some(failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`Genesis`].
///
/// Credentials are validated by [`GenesisBuilder::build`]; secrets stay redacted in
/// `Debug` output.
pub struct GenesisBuilder {
    username: Option<String>,
    password: Option<SecretString>,
    api_key: Option<SecretString>,
    sandbox: bool,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GenesisBuilder {
    /// Create a builder targeting the live environment with no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read credentials and environment selection from `GENESIS_*` variables.
    ///
    /// Unset variables leave the corresponding setting unset.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let mut builder = Self::new();
        if let Some(username) = lookup(USERNAME_ENV) {
            builder = builder.username(username);
        }
        if let Some(password) = lookup(PASSWORD_ENV) {
            builder = builder.password(password);
        }
        if let Some(api_key) = lookup(API_KEY_ENV) {
            builder = builder.api_key(api_key);
        }
        if let Some(sandbox) = lookup(SANDBOX_ENV) {
            builder = builder.sandbox(parse_flag(SANDBOX_ENV, &sandbox)?);
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|it| !it.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    /// Username for HTTP Basic authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Password for HTTP Basic authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Value of the `Security-key` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Target the sandbox instead of the live API.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Send every service to this base URL instead of the live/sandbox default.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
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

    fn authenticator(&self) -> Result<MultiAuthenticator, ValidationError> {
        if self.username.is_none() && self.password.is_some() {
            return Err(ValidationError::Empty {
                field: Username::FIELD,
            });
        }
        let username = self.username.clone().map(Username::new).transpose()?;
        let password = self
            .password
            .as_ref()
            .map(|it| Password::new(it.expose_secret().clone()))
            .transpose()?;
        let api_key = self
            .api_key
            .as_ref()
            .map(|it| ApiKey::new(it.expose_secret().clone()))
            .transpose()?;
        Ok(MultiAuthenticator::from_credentials(
            username, password, api_key,
        ))
    }

    /// Build a [`Genesis`] client.
    pub fn build(self) -> Result<Genesis, GenesisError> {
        let auth = self.authenticator()?;
        if let Some(base_url) = &self.base_url {
            Url::parse(base_url)?;
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GenesisError::Transport(Box::new(err)))?;

        Ok(Genesis {
            auth,
            sandbox: self.sandbox,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidFlag {
            field,
            input: value.to_owned(),
        }),
    }
}

#[derive(Clone)]
/// SecureFax API connector.
///
/// Immutable once built: the target service is resolved from each request at call
/// time, so one instance can be cloned and shared across tasks.
pub struct Genesis {
    auth: MultiAuthenticator,
    sandbox: bool,
    base_url: Option<String>,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Genesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Genesis")
            .field("sandbox", &self.sandbox)
            .field("base_url", &self.base_url)
            .field("authenticated", &!self.auth.is_empty())
            .finish_non_exhaustive()
    }
}

impl Genesis {
    /// Create a client with Basic auth and an API key.
    ///
    /// For a timeout, user agent or base URL override, use [`Genesis::builder`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
        sandbox: bool,
    ) -> Result<Self, GenesisError> {
        Self::builder()
            .username(username)
            .password(password)
            .api_key(api_key)
            .sandbox(sandbox)
            .build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GenesisBuilder {
        GenesisBuilder::new()
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Base URL used for requests to `service`.
    pub fn resolve_base_url(&self, service: Service) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| service.base_url(self.sandbox))
    }

    /// Entry point to the grouped SecureFax API.
    pub fn secure_fax(&self) -> SecureFaxResource<'_> {
        SecureFaxResource::new(self)
    }

    /// Send a request and return the raw response.
    ///
    /// Errors:
    /// - [`GenesisError::Transport`] when the request could not be performed,
    /// - [`GenesisError::Api`] for non-2xx responses.
    #[instrument(
        skip_all,
        fields(
            service = ?request.resolve_service(),
            method = %request.method(),
            endpoint = %request.resolve_endpoint(),
        )
    )]
    pub async fn send<R: Request>(&self, request: &R) -> Result<Response, GenesisError> {
        let service = request.resolve_service();
        let url = resolve_url(
            self.resolve_base_url(service),
            &request.resolve_endpoint(),
            &request.default_query(),
        )?;

        let body = request.default_body().map(|body| body.to_string());
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        self.auth.apply(&mut headers);

        let response = self
            .http
            .send(HttpRequest {
                method: request.method(),
                url: url.into(),
                headers,
                body,
            })
            .await
            .map_err(|err| {
                warn!(error = %err, "transport failure");
                GenesisError::Transport(err)
            })?;

        debug!(status = response.status(), "received response");
        if !response.is_successful() {
            let failure = ApiFailure::from_response(response);
            warn!(
                status = failure.status(),
                error = failure.message(),
                "request failed"
            );
            return Err(GenesisError::Api(failure));
        }

        Ok(response)
    }

    /// Send a request and decode its typed output.
    ///
    /// Errors: as [`Genesis::send`], plus [`GenesisError::Decode`] when the response
    /// lacks the fields the operation expects.
    pub async fn send_dto<R: Request>(&self, request: &R) -> Result<R::Output, GenesisError> {
        let response = self.send(request).await?;
        Ok(request.create_dto_from_response(&response)?)
    }
}

/// Join `endpoint` onto `base` with exactly one `/` and append the query.
fn resolve_url(
    base: &str,
    endpoint: &str,
    query: &[(String, String)],
) -> Result<Url, url::ParseError> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    let mut url = Url::parse(&joined)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::test_support::{FakeTransport, header, make_client};
    use super::*;
    use crate::domain::{
        CompanyId, CompanyName, CreateCompany, DeleteDid, DidId, GetCompanies, ListDids,
        Pagination,
    };

    #[test]
    fn resolve_url_joins_with_single_slash() {
        let url = resolve_url("https://api.questblue.com/v3/securefax/", "/did/available", &[])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.questblue.com/v3/securefax/did/available");

        let url = resolve_url("http://apiv3.test/v3/securefax", "user", &[]).unwrap();
        assert_eq!(url.as_str(), "http://apiv3.test/v3/securefax/user");
    }

    #[test]
    fn resolve_url_encodes_query() {
        let query = vec![
            ("page".to_owned(), "2".to_owned()),
            ("q".to_owned(), "a b&c".to_owned()),
        ];
        let url = resolve_url("https://host/v3/securefax/", "/user", &query).unwrap();
        assert_eq!(url.as_str(), "https://host/v3/securefax/user?page=2&q=a+b%26c");
    }

    #[tokio::test]
    async fn send_targets_live_url_with_auth_and_json_headers() {
        let transport = FakeTransport::new(
            201,
            r#"{"data":{"company":{"id":"1","name":"Acme","timezone":"UTC","locked":0}}}"#,
        );
        let client = make_client(transport.clone(), false);
        let request = CreateCompany::new(CompanyName::new("Acme").unwrap());

        let company = client.send_dto(&request).await.unwrap();
        assert_eq!(company.name, "Acme");
        assert!(!company.locked);

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(
            sent.url,
            "https://api.questblue.com/v3/securefax/manager/company/create"
        );
        assert_eq!(header(&sent, "Authorization"), Some("Basic dXNlcjpwYXNz"));
        assert_eq!(header(&sent, "Security-key"), Some("key-123"));
        assert_eq!(header(&sent, "Accept"), Some("application/json"));
        assert_eq!(header(&sent, "Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Acme"}));
    }

    #[tokio::test]
    async fn send_targets_sandbox_and_appends_page_query() {
        let transport = FakeTransport::new(200, r#"{"data":[]}"#);
        let client = make_client(transport.clone(), true);

        let response = client.send(&GetCompanies::new(None)).await.unwrap();
        assert_eq!(response.status(), 200);

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://apiv3.test/v3/securefax/manager/company?page=1");
        assert_eq!(sent.body, None);
        assert_eq!(header(&sent, "Content-Type"), None);

        client
            .send(&GetCompanies::new(Some(Pagination::page(5))))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://apiv3.test/v3/securefax/manager/company?page=5"
        );
    }

    #[tokio::test]
    async fn send_maps_validation_failure_message() {
        let transport = FakeTransport::new(422, r#"{"message": "Validation failed"}"#);
        let client = make_client(transport, false);

        let err = client
            .send(&CreateCompany::new(CompanyName::new("Acme").unwrap()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation failed");
        let failure = err.api_failure().unwrap();
        assert_eq!(failure.message(), "Validation failed");
        assert_eq!(failure.status(), 422);
        assert_eq!(failure.response().status(), 422);
    }

    #[tokio::test]
    async fn send_maps_unparseable_error_body_to_raw_text() {
        let transport = FakeTransport::new(500, "<h1>Internal Server Error</h1>");
        let client = make_client(transport, false);

        let err = client.send(&ListDids::new(CompanyId::new("c-1").unwrap())).await.unwrap_err();
        match err {
            GenesisError::Api(failure) => {
                assert_eq!(failure.status(), 500);
                assert!(failure.message().contains("<h1>Internal Server Error</h1>"));
                assert!(failure.message().starts_with(ApiFailure::UNREADABLE_PREFIX));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_dto_skips_decoding_on_failure() {
        let transport = FakeTransport::new(404, r#"{"error": "not found"}"#);
        let client = make_client(transport, false);

        let err = client
            .send_dto(&ListDids::new(CompanyId::new("c-1").unwrap()))
            .await
            .unwrap_err();
        let failure = err.api_failure().unwrap();
        assert_eq!(failure.message(), ApiFailure::UNKNOWN_ERROR);
        assert_eq!(failure.clone().into_response().body(), r#"{"error": "not found"}"#);
    }

    #[tokio::test]
    async fn send_dto_maps_missing_fields_to_decode_error() {
        let transport = FakeTransport::new(200, r#"{"data":{"dids":[]}}"#);
        let client = make_client(transport, false);

        let err = client
            .send_dto(&ListDids::new(CompanyId::new("c-1").unwrap()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenesisError::Decode(DecodeError::MissingField { ref path }) if path == "meta.total"
        ));
    }

    #[tokio::test]
    async fn send_maps_transport_failure() {
        let transport = FakeTransport::failing("connection refused");
        let client = make_client(transport, false);

        let err = client.send(&GetCompanies::default()).await.unwrap_err();
        match err {
            GenesisError::Transport(source) => assert_eq!(source.to_string(), "connection refused"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_did_sends_company_body_to_did_path() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone(), false);
        let request = DeleteDid::new(DidId::new("d-9").unwrap(), CompanyId::new("c-1").unwrap());

        client.send(&request).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, "https://api.questblue.com/v3/securefax/manager/did/d-9");
        assert_eq!(sent.body.as_deref(), Some(r#"{"company":"c-1"}"#));
    }

    #[tokio::test]
    async fn base_url_override_applies_to_every_service() {
        let transport = FakeTransport::new(200, "{}");
        let mut client = make_client(transport.clone(), true);
        client.base_url = Some("http://127.0.0.1:8080/mock/".to_owned());

        assert_eq!(
            client.resolve_base_url(Service::SecureFax),
            "http://127.0.0.1:8080/mock/"
        );
        client.send(&GetCompanies::default()).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://127.0.0.1:8080/mock/manager/company?page=1"
        );
    }

    #[tokio::test]
    async fn unauthenticated_client_sends_no_credentials() {
        let transport = FakeTransport::new(200, "{}");
        let mut client = make_client(transport.clone(), false);
        client.auth = MultiAuthenticator::default();

        client.send(&GetCompanies::default()).await.unwrap();
        let sent = transport.last_request();
        assert_eq!(header(&sent, "Authorization"), None);
        assert_eq!(header(&sent, "Security-key"), None);
    }

    #[test]
    fn failure_messages_follow_extraction_rules() {
        let message = |status, body: &str| {
            ApiFailure::from_response(Response::new(status, body))
                .message()
                .to_owned()
        };

        assert_eq!(message(200, "{}"), ApiFailure::UNEXPECTED_SUCCESS);
        assert_eq!(message(400, r#"{"message":"Bad"}"#), "Bad");
        assert_eq!(message(400, r#"{"message":null}"#), ApiFailure::UNKNOWN_ERROR);
        assert_eq!(message(400, r#"{"errors":[]}"#), ApiFailure::UNKNOWN_ERROR);
        assert_eq!(message(400, "   "), ApiFailure::UNKNOWN_ERROR);
        assert_eq!(message(400, "[1,2]"), ApiFailure::UNKNOWN_ERROR);
        assert_eq!(message(400, r#"{"message":404}"#), "404");
        assert_eq!(message(400, r#"{"message":true}"#), "1");
        assert_eq!(message(400, r#"{"message":false}"#), "");
        assert_eq!(
            message(400, r#"{"message":["a"]}"#),
            r#"Error extracting response message: {"message":["a"]}"#
        );
        assert_eq!(
            message(502, "Bad Gateway"),
            "Error extracting response message: Bad Gateway"
        );
    }

    #[test]
    fn builder_validates_credentials() {
        let err = Genesis::builder().username("  ").build().unwrap_err();
        assert!(matches!(
            err,
            GenesisError::Validation(ValidationError::Empty { field: "username" })
        ));

        let err = Genesis::builder()
            .username("user")
            .password("")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            GenesisError::Validation(ValidationError::Empty { field: "password" })
        ));

        let err = Genesis::builder().password("x").build().unwrap_err();
        assert!(matches!(
            err,
            GenesisError::Validation(ValidationError::Empty { field: "username" })
        ));

        let err = Genesis::builder().api_key(" ").build().unwrap_err();
        assert!(matches!(
            err,
            GenesisError::Validation(ValidationError::Empty { field: "api_key" })
        ));

        let err = Genesis::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, GenesisError::InvalidUrl(_)));
    }

    #[test]
    fn builder_selects_environment() {
        let live = Genesis::new("user", "pass", "key", false).unwrap();
        assert!(!live.is_sandbox());
        assert_eq!(
            live.resolve_base_url(Service::SecureFax),
            "https://api.questblue.com/v3/securefax/"
        );

        let sandbox = Genesis::builder().sandbox(true).build().unwrap();
        assert!(sandbox.is_sandbox());
        assert_eq!(
            sandbox.resolve_base_url(Service::SecureFax),
            "http://apiv3.test/v3/securefax/"
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let builder = Genesis::builder()
            .username("user")
            .password("hunter2")
            .api_key("top-secret-key");
        let rendered = format!("{builder:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("top-secret-key"));

        let client = builder.build().unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("authenticated: true"));
    }

    #[test]
    fn from_lookup_reads_genesis_variables() {
        let vars = HashMap::from([
            (USERNAME_ENV, "user"),
            (PASSWORD_ENV, "pass"),
            (API_KEY_ENV, "key"),
            (SANDBOX_ENV, "TRUE"),
        ]);
        let builder =
            GenesisBuilder::from_lookup(|key| vars.get(key).map(|it| (*it).to_owned())).unwrap();
        let client = builder.build().unwrap();
        assert!(client.is_sandbox());
        assert!(!client.auth.is_empty());

        let empty = GenesisBuilder::from_lookup(|_| None).unwrap().build().unwrap();
        assert!(!empty.is_sandbox());
        assert!(empty.auth.is_empty());
    }

    #[test]
    fn from_lookup_reads_base_url_override() {
        let client = GenesisBuilder::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "http://127.0.0.1:8080/mock/".to_owned())
        })
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(
            client.resolve_base_url(Service::SecureFax),
            "http://127.0.0.1:8080/mock/"
        );

        let client = GenesisBuilder::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "   ".to_owned())
        })
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(
            client.resolve_base_url(Service::SecureFax),
            "https://api.questblue.com/v3/securefax/"
        );

        let err = GenesisBuilder::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "not a url".to_owned())
        })
        .unwrap()
        .build()
        .unwrap_err();
        assert!(matches!(err, GenesisError::InvalidUrl(_)));
    }

    #[test]
    fn from_lookup_rejects_unknown_sandbox_flag() {
        let err = GenesisBuilder::from_lookup(|key| {
            (key == SANDBOX_ENV).then(|| "sometimes".to_owned())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFlag {
                field: SANDBOX_ENV,
                input: "sometimes".to_owned(),
            }
        );
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        for on in ["1", "true", "Yes", " on "] {
            assert!(parse_flag(SANDBOX_ENV, on).unwrap(), "{on}");
        }
        for off in ["", "0", "false", "NO", "off"] {
            assert!(!parse_flag(SANDBOX_ENV, off).unwrap(), "{off}");
        }
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Genesis>();
    }
}
