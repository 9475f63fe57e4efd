//! Mailbox state: disposable addresses, inbox/outbox, send and delete.

mod service;

pub use service::MailboxService;
