//! Session service: owns the authenticated identity and the auth flows.

use tempmail_api::AuthData;
use tracing::{debug, info};

use super::{Identity, SessionRepository};
use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::validation;

/// State holder for the authenticated session.
///
/// Operations resolve to a `Result` the caller consumes directly, and
/// additionally record a display error string and a loading flag on the
/// service itself (cleared on entry, settled on every exit path).
#[derive(Debug)]
pub struct SessionService<B> {
    backend: B,
    repository: SessionRepository,
    identity: Option<Identity>,
    loading: bool,
    error: Option<String>,
}

impl<B: Backend> SessionService<B> {
    /// Creates the service and restores any persisted session.
    ///
    /// Restoration happens exactly once, here; the service is constructed
    /// with the loading flag already settled to `false`.
    pub fn new(mut backend: B, repository: SessionRepository) -> Self {
        let identity = repository.load();
        if let Some(identity) = &identity {
            backend.set_token(Some(identity.token.clone()));
            debug!(email = %identity.user.email, "restored session");
        }
        Self {
            backend,
            repository,
            identity,
            loading: false,
            error: None,
        }
    }

    /// Creates a new account and establishes the session.
    ///
    /// On failure neither the in-memory identity nor the persisted state
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a storage error.
    pub async fn sign_up(&mut self, email: &str, password: &str, name: &str) -> Result<()> {
        self.begin();
        let outcome = match self.backend.signup(email, password, name).await {
            Ok(auth) => self.establish(auth),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Authenticates and establishes the session.
    ///
    /// On failure neither the in-memory identity nor the persisted state
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a storage error.
    pub async fn log_in(&mut self, email: &str, password: &str) -> Result<()> {
        self.begin();
        let outcome = match self.backend.login(email, password).await {
            Ok(auth) => self.establish(auth),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Clears the persisted session and resets identity. Never fails.
    pub fn log_out(&mut self) {
        self.repository.clear();
        self.backend.set_token(None);
        self.identity = None;
        self.error = None;
        info!("logged out");
    }

    /// Completes a redirect-based OAuth flow with the callback credential.
    ///
    /// The credential is persisted and applied before the profile fetch;
    /// if that fetch fails the credential remains stored while the
    /// identity stays absent. The next successful login or a logout
    /// overwrites or clears the stored credential.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a storage error.
    pub async fn complete_oauth(&mut self, token: &str) -> Result<()> {
        self.begin();
        let outcome = self.try_complete_oauth(token).await;
        self.finish(outcome)
    }

    /// Requests a signup verification OTP; validates the address first.
    ///
    /// # Errors
    ///
    /// Returns a validation error (no request issued) or the backend
    /// rejection.
    pub async fn request_signup_otp(&mut self, email: &str) -> Result<Option<String>> {
        self.begin();
        let outcome = match validation::validate_email(email) {
            Ok(()) => self
                .backend
                .request_signup_otp(email)
                .await
                .map_err(Error::from),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Requests a password-reset OTP; validates the address first.
    ///
    /// # Errors
    ///
    /// Returns a validation error (no request issued) or the backend
    /// rejection.
    pub async fn request_password_reset(&mut self, email: &str) -> Result<Option<String>> {
        self.begin();
        let outcome = match validation::validate_email(email) {
            Ok(()) => self.backend.forgot_password(email).await.map_err(Error::from),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Verifies a password-reset OTP.
    ///
    /// An OTP that is not exactly six digits is rejected locally and no
    /// request is issued.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the backend rejection.
    pub async fn verify_otp(&mut self, email: &str, otp: &str) -> Result<Option<String>> {
        self.begin();
        let outcome = match validation::validate_otp(otp) {
            Ok(()) => self.backend.verify_otp(email, otp).await.map_err(Error::from),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Sets a new password after OTP verification.
    ///
    /// # Errors
    ///
    /// Returns a validation error (length, confirmation mismatch) or the
    /// backend rejection.
    pub async fn reset_password(
        &mut self,
        email: &str,
        new_password: &str,
        confirm: &str,
    ) -> Result<Option<String>> {
        self.begin();
        let outcome = match validation::validate_new_password(new_password, confirm) {
            Ok(()) => self
                .backend
                .reset_password(email, new_password)
                .await
                .map_err(Error::from),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// The current identity, if authenticated.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The current bearer token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.token.as_str())
    }

    /// Whether an identity is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The most recently recorded error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    async fn try_complete_oauth(&mut self, token: &str) -> Result<()> {
        self.repository.store_token(token)?;
        self.backend.set_token(Some(token.to_string()));
        let user = self.backend.me().await?;
        self.repository.store_user(&user)?;
        info!(email = %user.email, "session established via OAuth");
        self.identity = Some(Identity {
            user,
            token: token.to_string(),
        });
        Ok(())
    }

    /// Persists and installs a fresh authentication result.
    fn establish(&mut self, auth: AuthData) -> Result<()> {
        self.repository.store_token(&auth.token)?;
        self.repository.store_user(&auth.user)?;
        self.backend.set_token(Some(auth.token.clone()));
        info!(email = %auth.user.email, "session established");
        self.identity = Some(Identity {
            user: auth.user,
            token: auth.token,
        });
        Ok(())
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish<T>(&mut self, outcome: Result<T>) -> Result<T> {
        self.loading = false;
        if let Err(err) = &outcome {
            self.error = Some(err.to_string());
        }
        outcome
    }
}
