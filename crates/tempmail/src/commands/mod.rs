//! Subcommand implementations.

mod auth;
mod mail;

use anyhow::Context as _;
use tempmail_api::ApiClient;
use tempmail_core::{Config, MailboxService, SessionService};

use crate::Command;

/// Dispatches a parsed subcommand.
pub async fn run(
    command: Command,
    mut session: SessionService<ApiClient>,
    client: ApiClient,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        Command::Signup {
            name,
            email,
            password,
        } => auth::signup(&mut session, &name, &email, &password).await,
        Command::SignupOtp { email } => auth::signup_otp(&mut session, &email).await,
        Command::Login {
            email,
            password,
            google,
        } => auth::login(&mut session, &client, email, password, google).await,
        Command::Oauth { token } => auth::oauth(&mut session, &token).await,
        Command::Logout => {
            auth::logout(&mut session);
            Ok(())
        }
        Command::Whoami => {
            auth::whoami(&session);
            Ok(())
        }
        Command::ForgotPassword { email } => auth::forgot_password(&mut session, &email).await,
        Command::VerifyOtp { email, otp } => auth::verify_otp(&mut session, &email, &otp).await,
        Command::ResetPassword {
            email,
            new_password,
            confirm,
        } => auth::reset_password(&mut session, &email, &new_password, &confirm).await,
        Command::Subscribe { email } => auth::subscribe(&client, &email).await,
        Command::Create => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            mail::create(&mut mailbox).await
        }
        Command::Addresses => {
            let mailbox = authenticated_mailbox(&session, &client)?;
            mail::addresses(&mailbox, &session);
            Ok(())
        }
        Command::Inbox { watch } => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            if watch {
                mail::watch_inbox(&mut mailbox, config.poll_interval).await
            } else {
                mail::inbox(&mut mailbox).await
            }
        }
        Command::Outbox => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            mail::outbox(&mut mailbox).await
        }
        Command::Read { id } => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            mail::read(&mut mailbox, &id).await
        }
        Command::Send {
            from,
            to,
            subject,
            body,
            ai,
        } => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            mail::send(&mut mailbox, &from, &to, subject, body, ai).await
        }
        Command::Draft { prompt } => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            mail::draft(&mut mailbox, &prompt).await
        }
        Command::Delete { id } => {
            let mut mailbox = authenticated_mailbox(&session, &client)?;
            mail::delete(&mut mailbox, &id).await
        }
    }
}

/// Builds a mailbox service over a client carrying the session credential.
fn authenticated_mailbox(
    session: &SessionService<ApiClient>,
    client: &ApiClient,
) -> anyhow::Result<MailboxService<ApiClient>> {
    let token = session
        .token()
        .context("not logged in; run `tempmail login` first")?;
    Ok(MailboxService::new(client.clone().with_token(token)))
}
