//! tempmail - disposable email from the command line.
//!
//! Thin CLI over the session and mailbox services; every subcommand maps
//! to one user action against the backend.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tempmail_api::ApiClient;
use tempmail_core::{Config, SessionRepository, SessionService};

#[derive(Parser, Debug)]
#[command(name = "tempmail")]
#[command(about = "Disposable email from the command line", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and log in
    Signup {
        /// Display name
        name: String,
        /// Account email address
        email: String,
        /// Account password
        password: String,
    },
    /// Request a signup verification OTP
    SignupOtp {
        /// Account email address
        email: String,
    },
    /// Log in with email and password, or start the Google OAuth flow
    Login {
        /// Account email address
        email: Option<String>,
        /// Account password
        password: Option<String>,
        /// Open the Google OAuth entry URL instead
        #[arg(long)]
        google: bool,
    },
    /// Complete a Google OAuth callback with the returned token
    Oauth {
        /// Token from the OAuth redirect
        token: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the current session
    Whoami,
    /// Create a new disposable address
    Create,
    /// List all disposable addresses
    Addresses,
    /// Show the inbox
    Inbox {
        /// Keep refreshing on the configured interval until Ctrl-C
        #[arg(long)]
        watch: bool,
    },
    /// Show the outbox
    Outbox,
    /// Read a single message
    Read {
        /// Message id
        id: String,
    },
    /// Send a message from one of your disposable addresses
    Send {
        /// Sending disposable address
        #[arg(long)]
        from: String,
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Subject line
        #[arg(long)]
        subject: Option<String>,
        /// Body text
        #[arg(long)]
        body: Option<String>,
        /// Generate subject and body from this prompt (explicit
        /// --subject/--body still win)
        #[arg(long)]
        ai: Option<String>,
    },
    /// Generate an AI draft without sending
    Draft {
        /// Free-text prompt
        prompt: String,
    },
    /// Delete a message
    Delete {
        /// Message id
        id: String,
    },
    /// Request a password-reset OTP
    ForgotPassword {
        /// Account email address
        email: String,
    },
    /// Verify a password-reset OTP
    VerifyOtp {
        /// Account email address
        email: String,
        /// Six-digit code from the email
        otp: String,
    },
    /// Set a new password after OTP verification
    ResetPassword {
        /// Account email address
        email: String,
        /// New password
        new_password: String,
        /// New password again
        confirm: String,
    },
    /// Subscribe an address to the newsletter
    Subscribe {
        /// Address to subscribe
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tempmail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let client = ApiClient::new(config.base_url.clone());
    let repository = SessionRepository::new(config.data_dir.clone());
    let session = SessionService::new(client.clone(), repository);

    commands::run(cli.command, session, client, &config).await
}
