//! # tempmail-core
//!
//! Core state services for the tempmail client.
//!
//! This crate provides:
//! - **Session service** - identity, credential persistence, auth flows
//!   (signup, login, OAuth callback completion, OTP password reset)
//! - **Mailbox service** - disposable addresses, inbox/outbox snapshots,
//!   send/delete, AI-assisted drafts
//! - Client-side validation with user-facing messages
//! - Runtime configuration resolved once at startup
//! - The [`Backend`] seam both services are generic over

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
mod error;
pub mod mailbox;
pub mod session;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use backend::Backend;
pub use config::Config;
pub use error::{Error, Result};
pub use mailbox::MailboxService;
pub use session::{Identity, SessionRepository, SessionService};
pub use validation::{
    ValidationError, validate_email, validate_new_password, validate_otp, validate_prompt,
};
