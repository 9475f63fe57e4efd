//! # tempmail-api
//!
//! Typed HTTP client for the tempmail backend JSON API.
//!
//! Every endpoint wraps its payload in a `{ success, message, data }`
//! envelope; this crate decodes the envelope once and hands callers either
//! the typed payload or a structured [`Error`] carrying the server's own
//! message.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tempmail_api::ApiClient;
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let base = Url::parse("http://localhost:5000")?;
//!     let client = ApiClient::new(base);
//!
//!     let auth = client.login("user@example.com", "hunter22").await?;
//!     let client = client.with_token(auth.token);
//!
//!     let address = client.create_temp_email().await?;
//!     println!("disposable address: {address}");
//!
//!     for message in client.inbox().await? {
//!         println!("{}: {}", message.from, message.subject);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use types::{AuthData, Draft, Envelope, Message, User};
