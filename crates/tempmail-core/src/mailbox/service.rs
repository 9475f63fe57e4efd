//! Mailbox service: owns the address and message collections.

use tempmail_api::{Draft, Message};
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::session::Identity;
use crate::validation;

/// State holder for disposable addresses and the inbox/outbox collections.
///
/// All operations share one loading flag and one error field, cleared on
/// entry and settled on every exit path. Collections only change on
/// confirmed backend success; a failed operation leaves them untouched.
#[derive(Debug)]
pub struct MailboxService<B> {
    backend: B,
    temp_emails: Vec<String>,
    inbox: Vec<Message>,
    outbox: Vec<Message>,
    loading: bool,
    error: Option<String>,
}

impl<B: Backend> MailboxService<B> {
    /// Creates an empty mailbox over the given backend.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            temp_emails: Vec::new(),
            inbox: Vec::new(),
            outbox: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Requests a new disposable address and appends it to the session's
    /// address list.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection; the address list is unchanged.
    pub async fn create_temp_email(&mut self) -> Result<String> {
        self.begin();
        let outcome = match self.backend.create_temp_email().await {
            Ok(address) => {
                debug!(%address, "created disposable address");
                self.temp_emails.push(address.clone());
                Ok(address)
            }
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Replaces the inbox with the server's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection; the previous snapshot is kept.
    pub async fn refresh_inbox(&mut self) -> Result<()> {
        self.begin();
        let outcome = match self.backend.inbox().await {
            Ok(messages) => {
                self.inbox = messages;
                Ok(())
            }
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Replaces the outbox with the server's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection; the previous snapshot is kept.
    pub async fn refresh_outbox(&mut self) -> Result<()> {
        self.begin();
        let outcome = match self.backend.outbox().await {
            Ok(messages) => {
                self.outbox = messages;
                Ok(())
            }
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Fetches a single message by id without touching either collection.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection; callers treat failure as "not found".
    pub async fn fetch_message(&mut self, id: &str) -> Result<Message> {
        self.begin();
        let outcome = self.backend.message(id).await.map_err(Error::from);
        self.finish(outcome)
    }

    /// Submits an outbound message.
    ///
    /// On success the outbox is unconditionally re-fetched before
    /// returning, so the collection reflects server truth rather than an
    /// optimistic append. A failed refresh is recorded in the shared error
    /// field but does not fail the send.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection of the send itself.
    pub async fn send(&mut self, from: &str, to: &str, subject: &str, body: &str) -> Result<Message> {
        self.begin();
        let outcome = match self.backend.send_message(from, to, subject, body).await {
            Ok(message) => {
                if self.refresh_outbox().await.is_err() {
                    warn!("outbox refresh after send failed");
                }
                Ok(message)
            }
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Deletes a message server-side, then drops any local copy with a
    /// matching id from both collections.
    ///
    /// Removing an id that is absent from a collection is a no-op, so the
    /// operation is idempotent from the client's perspective.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection; neither collection changes.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.begin();
        let outcome = match self.backend.delete_message(id).await {
            Ok(()) => {
                self.inbox.retain(|message| message.id != id);
                self.outbox.retain(|message| message.id != id);
                Ok(())
            }
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Requests an AI-composed draft for a free-text prompt.
    ///
    /// A blank prompt is rejected locally before any request is issued.
    /// The result is purely advisory; nothing in the mailbox changes.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the backend rejection.
    pub async fn generate_draft(&mut self, prompt: &str) -> Result<Draft> {
        self.begin();
        let outcome = match validation::validate_prompt(prompt) {
            Ok(()) => self.backend.generate_draft(prompt).await.map_err(Error::from),
            Err(err) => Err(Error::from(err)),
        };
        self.finish(outcome)
    }

    /// Account-level addresses followed by the addresses created this
    /// session, concatenated as-is.
    ///
    /// The lists are not deduplicated; the server is the authority on any
    /// overlap between them.
    #[must_use]
    pub fn combined_addresses(&self, identity: Option<&Identity>) -> Vec<String> {
        let mut addresses: Vec<String> = identity
            .map(|identity| identity.user.temp_emails.clone())
            .unwrap_or_default();
        addresses.extend(self.temp_emails.iter().cloned());
        addresses
    }

    /// Addresses created during this session.
    #[must_use]
    pub fn temp_emails(&self) -> &[String] {
        &self.temp_emails
    }

    /// The current inbox snapshot.
    #[must_use]
    pub fn inbox(&self) -> &[Message] {
        &self.inbox
    }

    /// The current outbox snapshot.
    #[must_use]
    pub fn outbox(&self) -> &[Message] {
        &self.outbox
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
