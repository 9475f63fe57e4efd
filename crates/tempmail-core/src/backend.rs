//! The backend seam the state services depend on.

use tempmail_api::{ApiClient, AuthData, Draft, Message, Result as ApiResult, User};

/// Backend operations the session and mailbox services are generic over.
///
/// [`ApiClient`] is the production implementation; tests substitute an
/// in-memory fake. Futures are only awaited on the calling task, so no
/// `Send` bound is imposed.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Creates a new account.
    async fn signup(&self, email: &str, password: &str, name: &str) -> ApiResult<AuthData>;

    /// Requests a signup verification OTP.
    async fn request_signup_otp(&self, email: &str) -> ApiResult<Option<String>>;

    /// Authenticates with email and password.
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthData>;

    /// Fetches the user record for the current credential.
    async fn me(&self) -> ApiResult<User>;

    /// Requests a password-reset OTP.
    async fn forgot_password(&self, email: &str) -> ApiResult<Option<String>>;

    /// Verifies a password-reset OTP.
    async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<Option<String>>;

    /// Sets a new password after OTP verification.
    async fn reset_password(&self, email: &str, new_password: &str) -> ApiResult<Option<String>>;

    /// Requests a new disposable address.
    async fn create_temp_email(&self) -> ApiResult<String>;

    /// Fetches the current inbox snapshot.
    async fn inbox(&self) -> ApiResult<Vec<Message>>;

    /// Fetches the current outbox snapshot.
    async fn outbox(&self) -> ApiResult<Vec<Message>>;

    /// Fetches a single message by id.
    async fn message(&self, id: &str) -> ApiResult<Message>;

    /// Submits an outbound message.
    async fn send_message(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> ApiResult<Message>;

    /// Deletes a message server-side.
    async fn delete_message(&self, id: &str) -> ApiResult<()>;

    /// Requests an AI-composed draft for a free-text prompt.
    async fn generate_draft(&self, prompt: &str) -> ApiResult<Draft>;

    /// Subscribes an address to the newsletter.
    async fn subscribe_newsletter(&self, email: &str) -> ApiResult<Option<String>>;

    /// Replaces the bearer credential attached to subsequent requests.
    fn set_token(&mut self, token: Option<String>);
}

// Inherent methods are preferred over trait methods during resolution, so
// the delegation below does not recurse.
impl Backend for ApiClient {
    async fn signup(&self, email: &str, password: &str, name: &str) -> ApiResult<AuthData> {
        self.signup(email, password, name).await
    }

    async fn request_signup_otp(&self, email: &str) -> ApiResult<Option<String>> {
        self.request_signup_otp(email).await
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthData> {
        self.login(email, password).await
    }

    async fn me(&self) -> ApiResult<User> {
        self.me().await
    }

    async fn forgot_password(&self, email: &str) -> ApiResult<Option<String>> {
        self.forgot_password(email).await
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<Option<String>> {
        self.verify_otp(email, otp).await
    }

    async fn reset_password(&self, email: &str, new_password: &str) -> ApiResult<Option<String>> {
        self.reset_password(email, new_password).await
    }

    async fn create_temp_email(&self) -> ApiResult<String> {
        self.create_temp_email().await
    }

    async fn inbox(&self) -> ApiResult<Vec<Message>> {
        self.inbox().await
    }

    async fn outbox(&self) -> ApiResult<Vec<Message>> {
        self.outbox().await
    }

    async fn message(&self, id: &str) -> ApiResult<Message> {
        self.message(id).await
    }

    async fn send_message(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> ApiResult<Message> {
        self.send_message(from, to, subject, body).await
    }

    async fn delete_message(&self, id: &str) -> ApiResult<()> {
        self.delete_message(id).await
    }

    async fn generate_draft(&self, prompt: &str) -> ApiResult<Draft> {
        self.generate_draft(prompt).await
    }

    async fn subscribe_newsletter(&self, email: &str) -> ApiResult<Option<String>> {
        self.subscribe_newsletter(email).await
    }

    fn set_token(&mut self, token: Option<String>) {
        Self::set_token(self, token);
    }
}
