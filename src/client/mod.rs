//! Client layer: orchestrates transport calls and maps transport errors into
//! the public error type.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::domain::{
    ApiKey, BalanceResponse, Password, SendSms, SendSmsResponse, ValidationError,
};
use crate::transport::TransportError;

const DEFAULT_ENDPOINT: &str = "https://smspilot.ru/api.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials for SMSPilot API calls.
///
/// The legacy endpoint authenticates by API key; the `password` field is
/// still required on the wire, so [`Credentials::api_key`] pairs the key with
/// the static placeholder value.
pub struct Credentials {
    api_key: ApiKey,
    password: Password,
}

impl Credentials {
    /// Create credentials from an API key, using the placeholder password.
    pub fn api_key(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(value)?,
            password: Password::placeholder(),
        })
    }

    /// Create credentials from already-validated parts.
    pub fn new(api_key: ApiKey, password: Password) -> Self {
        Self { api_key, password }
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
        params.push((
            Password::FIELD.to_owned(),
            self.password.as_str().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsPilotClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - gateway-level failures (the first response line signals an error),
/// - validation failures.
pub enum SmsPilotError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The gateway returned an empty response body.
    #[error("empty gateway response")]
    EmptyResponse,

    /// The gateway reported a failure; `message` is the first response line,
    /// verbatim.
    #[error("gateway error: {message}")]
    Gateway { message: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<TransportError> for SmsPilotError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::EmptyResponse => Self::EmptyResponse,
            TransportError::Gateway { message } => Self::Gateway { message },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsPilotClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// response handling.
pub struct SmsPilotClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    hide_api_status: bool,
    danger_accept_invalid_certs: bool,
}

impl SmsPilotClientBuilder {
    /// Create a builder with the default endpoint and no overrides.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            hide_api_status: false,
            danger_accept_invalid_certs: false,
        }
    }

    /// Override the gateway endpoint URL (send and balance share one URL).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
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

    /// Drop the gateway's `status=` line from reported balance strings.
    pub fn hide_api_status(mut self, hide: bool) -> Self {
        self.hide_api_status = hide;
        self
    }

    /// Accept invalid TLS certificates. Off unless explicitly requested.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Build a [`SmsPilotClient`].
    pub fn build(self) -> Result<SmsPilotClient, SmsPilotError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if self.danger_accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| SmsPilotError::Transport(Box::new(err)))?;

        Ok(SmsPilotClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            hide_api_status: self.hide_api_status,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMSPilot client.
///
/// This type orchestrates request validation, form encoding, and response
/// parsing. Both operations POST UTF-8 `application/x-www-form-urlencoded`
/// bodies to `https://smspilot.ru/api.php` and read back the gateway's
/// line-oriented plain-text report.
pub struct SmsPilotClient {
    credentials: Credentials,
    endpoint: String,
    hide_api_status: bool,
    http: Arc<dyn HttpTransport>,
}

impl SmsPilotClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmsPilotClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            hide_api_status: false,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsPilotClientBuilder {
        SmsPilotClientBuilder::new(credentials)
    }

    /// Build a client from host [`Settings`].
    ///
    /// Applies the API key and the hide-api-status preference; the `enabled`
    /// flag is the host dispatcher's concern (see [`Settings::status`]).
    pub fn from_settings(settings: &Settings) -> Result<Self, SmsPilotError> {
        let credentials = Credentials::api_key(&settings.apikey)?;
        Self::builder(credentials)
            .hide_api_status(settings.hide_api_status)
            .build()
    }

    /// Send an SMS message through SMSPilot.
    ///
    /// Errors:
    /// - [`SmsPilotError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`SmsPilotError::EmptyResponse`] when the gateway returns nothing,
    /// - [`SmsPilotError::Gateway`] when the gateway reports a failure.
    pub async fn send_sms(&self, request: &SendSms) -> Result<SendSmsResponse, SmsPilotError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_sms_form(request));

        let report = self.post_and_decode(params).await?;
        Ok(SendSmsResponse {
            balance: report.balance,
        })
    }

    /// Query the remaining account credit.
    ///
    /// Errors as for [`SmsPilotClient::send_sms`].
    pub async fn check_balance(&self) -> Result<BalanceResponse, SmsPilotError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_check_balance_form());

        let report = self.post_and_decode(params).await?;
        Ok(BalanceResponse {
            balance: report.balance,
        })
    }

    async fn post_and_decode(
        &self,
        params: Vec<(String, String)>,
    ) -> Result<crate::transport::PlainReport, SmsPilotError> {
        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(SmsPilotError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsPilotError::HttpStatus {
                status: response.status,
                body,
            });
        }

        tracing::debug!("gateway response: {}", response.body);
        let report = crate::transport::decode_plain_report(&response.body, self.hide_api_status)?;
        Ok(report)
    }
}
