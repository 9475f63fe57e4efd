//! HTTP client for the backend API.

use crate::error::{Error, Result};
use crate::types::{
    AuthData, Draft, EmailRequest, Envelope, LoginRequest, Message, MessageData, MessagesData,
    OtpRequest, PromptRequest, ResetPasswordRequest, SendRequest, SignupRequest, TempEmailData,
    User, UserData,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Client for the disposable-email backend.
///
/// Holds the base URL (resolved once at startup) and the bearer credential
/// when a session is active; every request attaches the credential when
/// present. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    #[must_use]
    pub fn new(mut base_url: Url) -> Self {
        // Url::join treats the last path segment as a sibling unless the
        // base path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            http: Client::new(),
            base_url,
            token: None,
        }
    }

    /// Sets the bearer credential used for authenticated endpoints.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replaces the bearer credential (`None` clears it).
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Returns the current bearer credential, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the resolved base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<AuthData> {
        self.post_data(
            "auth/signup",
            &SignupRequest {
                email,
                password,
                name,
            },
        )
        .await
    }

    /// Requests a signup verification OTP for the given address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn request_signup_otp(&self, email: &str) -> Result<Option<String>> {
        self.post_ack("auth/signup/request-otp", &EmailRequest { email })
            .await
    }

    /// Authenticates with email and password.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData> {
        self.post_data("auth/login", &LoginRequest { email, password })
            .await
    }

    /// Fetches the user record for the current bearer credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credential is invalid.
    pub async fn me(&self) -> Result<User> {
        let data: UserData = self.get_data("auth/me").await?;
        Ok(data.user)
    }

    /// URL of the redirect-based OAuth entry point.
    ///
    /// The flow itself completes in a browser; the callback credential is
    /// handed back to this client via [`ApiClient::with_token`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be constructed.
    pub fn google_auth_url(&self) -> Result<Url> {
        self.endpoint("auth/google")
    }

    /// Requests a password-reset OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>> {
        self.post_ack("auth/forgot-password", &EmailRequest { email })
            .await
    }

    /// Verifies a password-reset OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the OTP is rejected.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<Option<String>> {
        self.post_ack("auth/verify-otp", &OtpRequest { email, otp })
            .await
    }

    /// Sets a new password after OTP verification.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<Option<String>> {
        self.post_ack(
            "auth/reset-password",
            &ResetPasswordRequest {
                email,
                new_password,
            },
        )
        .await
    }

    /// Requests a new disposable address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn create_temp_email(&self) -> Result<String> {
        let data: TempEmailData = self
            .post_data("email/create", &serde_json::json!({}))
            .await?;
        Ok(data.temp_email)
    }

    /// Fetches the current inbox snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn inbox(&self) -> Result<Vec<Message>> {
        let data: MessagesData = self.get_data("email/inbox").await?;
        Ok(data.emails)
    }

    /// Fetches the current outbox snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn outbox(&self) -> Result<Vec<Message>> {
        let data: MessagesData = self.get_data("email/outbox").await?;
        Ok(data.emails)
    }

    /// Fetches a single message by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the message does not exist.
    pub async fn message(&self, id: &str) -> Result<Message> {
        let data: MessageData = self.get_data(&format!("email/{id}")).await?;
        Ok(data.email)
    }

    /// Submits an outbound message and returns the server's record of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn send_message(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<Message> {
        let data: MessageData = self
            .post_data(
                "email/send",
                &SendRequest {
                    from,
                    to,
                    subject,
                    body,
                },
            )
            .await?;
        Ok(data.email)
    }

    /// Deletes a message server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn delete_message(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("email/{id}"))?;
        debug!(%url, "DELETE");
        let response = self.authorized(self.http.delete(url)).send().await?;
        decode_ack(response.status(), &response.bytes().await?)?;
        Ok(())
    }

    /// Requests an AI-composed subject and body for a free-text prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn generate_draft(&self, prompt: &str) -> Result<Draft> {
        self.post_data("email/generate-ai", &PromptRequest { prompt })
            .await
    }

    /// Subscribes an address to the newsletter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<Option<String>> {
        self.post_ack("newsletter/subscribe", &EmailRequest { email })
            .await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self.authorized(self.http.get(url)).send().await?;
        decode_data(response.status(), &response.bytes().await?)
    }

    async fn post_data<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        decode_data(response.status(), &response.bytes().await?)
    }

    async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Option<String>> {
        let response = self.post(path, body).await?;
        decode_ack(response.status(), &response.bytes().await?)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        Ok(self.authorized(self.http.post(url)).json(body).send().await?)
    }
}

/// Decodes an envelope and extracts its payload.
fn decode_data<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    match serde_json::from_slice::<Envelope<T>>(body) {
        Ok(envelope) if status.is_success() && envelope.success => {
            envelope.data.ok_or(Error::MissingData)
        }
        Ok(envelope) => Err(api_error(status, envelope.message)),
        Err(err) if status.is_success() => Err(Error::Json(err)),
        Err(_) => Err(api_error(status, None)),
    }
}

/// Decodes an envelope with no expected payload, yielding the server message.
fn decode_ack(status: StatusCode, body: &[u8]) -> Result<Option<String>> {
    if body.is_empty() && status.is_success() {
        return Ok(None);
    }
    match serde_json::from_slice::<Envelope<serde_json::Value>>(body) {
        Ok(envelope) if status.is_success() && envelope.success => Ok(envelope.message),
        Ok(envelope) => Err(api_error(status, envelope.message)),
        Err(err) if status.is_success() => Err(Error::Json(err)),
        Err(_) => Err(api_error(status, None)),
    }
}

fn api_error(status: StatusCode, message: Option<String>) -> Error {
    Error::Api {
        status: status.as_u16(),
        message: message.unwrap_or_else(|| format!("Request failed with status {status}")),
    }
}
