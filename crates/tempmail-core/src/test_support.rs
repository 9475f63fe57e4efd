//! Shared test fixtures: a programmable in-memory backend.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use tempmail_api::{AuthData, Draft, Error as ApiError, Message, Result as ApiResult, User};

use crate::backend::Backend;

/// In-memory [`Backend`] whose responses are configured up front and whose
/// shared state (call log, failure switch, token, snapshots) stays visible
/// through clones held by the test.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    auth: Option<AuthData>,
    me_user: Option<User>,
    temp_email: Option<String>,
    single_message: Option<Message>,
    sent_message: Option<Message>,
    draft: Option<Draft>,
    ack: Option<String>,
    inbox: Rc<RefCell<Vec<Message>>>,
    outbox: Rc<RefCell<Vec<Message>>>,
    failure: Rc<RefCell<Option<(u16, String)>>>,
    outbox_failure: Rc<RefCell<Option<(u16, String)>>>,
    calls: Rc<RefCell<Vec<String>>>,
    token: Rc<RefCell<Option<String>>>,
}

impl FakeBackend {
    /// Response for `signup` and `login`.
    pub fn with_auth(mut self, auth: AuthData) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Response for `me`.
    pub fn with_me(mut self, user: User) -> Self {
        self.me_user = Some(user);
        self
    }

    /// Response for `create_temp_email`.
    pub fn with_temp_email(mut self, address: &str) -> Self {
        self.temp_email = Some(address.to_string());
        self
    }

    /// Response for `message`.
    pub fn with_message(mut self, message: Message) -> Self {
        self.single_message = Some(message);
        self
    }

    /// Response for `send_message`.
    pub fn with_sent(mut self, message: Message) -> Self {
        self.sent_message = Some(message);
        self
    }

    /// Response for `generate_draft`.
    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Acknowledge message for the OTP/reset/newsletter endpoints.
    pub fn with_ack(mut self, message: &str) -> Self {
        self.ack = Some(message.to_string());
        self
    }

    /// Snapshot returned by `inbox`; replaceable mid-test through a clone.
    pub fn set_inbox(&self, messages: Vec<Message>) {
        *self.inbox.borrow_mut() = messages;
    }

    /// Snapshot returned by `outbox`; replaceable mid-test through a clone.
    pub fn set_outbox(&self, messages: Vec<Message>) {
        *self.outbox.borrow_mut() = messages;
    }

    /// Makes every subsequent call fail with the given rejection.
    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.borrow_mut() = Some((status, message.to_string()));
    }

    /// Makes only `outbox` fail with the given rejection.
    pub fn fail_outbox_with(&self, status: u16, message: &str) {
        *self.outbox_failure.borrow_mut() = Some((status, message.to_string()));
    }

    /// Names of the backend calls issued so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How many times the named call was issued.
    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == name).count()
    }

    /// The bearer token most recently applied via `set_token`.
    pub fn current_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn record(&self, name: &str) -> ApiResult<()> {
        self.calls.borrow_mut().push(name.to_string());
        match self.failure.borrow().as_ref() {
            Some((status, message)) => Err(ApiError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    async fn signup(&self, _email: &str, _password: &str, _name: &str) -> ApiResult<AuthData> {
        self.record("signup")?;
        Ok(self.auth.clone().expect("signup response not configured"))
    }

    async fn request_signup_otp(&self, _email: &str) -> ApiResult<Option<String>> {
        self.record("request_signup_otp")?;
        Ok(self.ack.clone())
    }

    async fn login(&self, _email: &str, _password: &str) -> ApiResult<AuthData> {
        self.record("login")?;
        Ok(self.auth.clone().expect("login response not configured"))
    }

    async fn me(&self) -> ApiResult<User> {
        self.record("me")?;
        Ok(self.me_user.clone().expect("me response not configured"))
    }

    async fn forgot_password(&self, _email: &str) -> ApiResult<Option<String>> {
        self.record("forgot_password")?;
        Ok(self.ack.clone())
    }

    async fn verify_otp(&self, _email: &str, _otp: &str) -> ApiResult<Option<String>> {
        self.record("verify_otp")?;
        Ok(self.ack.clone())
    }

    async fn reset_password(&self, _email: &str, _new_password: &str) -> ApiResult<Option<String>> {
        self.record("reset_password")?;
        Ok(self.ack.clone())
    }

    async fn create_temp_email(&self) -> ApiResult<String> {
        self.record("create_temp_email")?;
        Ok(self
            .temp_email
            .clone()
            .expect("temp email response not configured"))
    }

    async fn inbox(&self) -> ApiResult<Vec<Message>> {
        self.record("inbox")?;
        Ok(self.inbox.borrow().clone())
    }

    async fn outbox(&self) -> ApiResult<Vec<Message>> {
        self.record("outbox")?;
        if let Some((status, message)) = self.outbox_failure.borrow().as_ref() {
            return Err(ApiError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(self.outbox.borrow().clone())
    }

    async fn message(&self, _id: &str) -> ApiResult<Message> {
        self.record("message")?;
        Ok(self
            .single_message
            .clone()
            .expect("message response not configured"))
    }

    async fn send_message(
        &self,
        _from: &str,
        _to: &str,
        _subject: &str,
        _body: &str,
    ) -> ApiResult<Message> {
        self.record("send_message")?;
        Ok(self
            .sent_message
            .clone()
            .expect("sent response not configured"))
    }

    async fn delete_message(&self, _id: &str) -> ApiResult<()> {
        self.record("delete_message")?;
        Ok(())
    }

    async fn generate_draft(&self, _prompt: &str) -> ApiResult<Draft> {
        self.record("generate_draft")?;
        Ok(self.draft.clone().expect("draft response not configured"))
    }

    async fn subscribe_newsletter(&self, _email: &str) -> ApiResult<Option<String>> {
        self.record("subscribe_newsletter")?;
        Ok(self.ack.clone())
    }

    fn set_token(&mut self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }
}

/// A user record for tests.
pub fn sample_user(email: &str) -> User {
    User {
        id: "u1".to_string(),
        email: email.to_string(),
        name: "Test User".to_string(),
        temp_emails: Vec::new(),
    }
}

/// An auth payload for tests.
pub fn auth_data(token: &str, email: &str) -> AuthData {
    AuthData {
        user: sample_user(email),
        token: token.to_string(),
    }
}

/// An inbound message with the given id.
pub fn sample_message(id: &str) -> Message {
    Message {
        id: id.to_string(),
        from: "sender@example.com".to_string(),
        to: "me@tmp.com".to_string(),
        subject: format!("subject {id}"),
        body: "body".to_string(),
        is_read: false,
        is_outbound: false,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}
