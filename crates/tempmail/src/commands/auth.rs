//! Account and session subcommands.

use anyhow::bail;
use tempmail_api::ApiClient;
use tempmail_core::{SessionService, validate_email};

/// Creates an account and reports the established session.
pub async fn signup(
    session: &mut SessionService<ApiClient>,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    session.sign_up(email, password, name).await?;
    println!("Account created. Logged in as {email}.");
    Ok(())
}

/// Requests a signup verification OTP.
pub async fn signup_otp(
    session: &mut SessionService<ApiClient>,
    email: &str,
) -> anyhow::Result<()> {
    let message = session.request_signup_otp(email).await?;
    println!("{}", message.unwrap_or_else(|| "OTP sent".to_string()));
    Ok(())
}

/// Logs in with credentials, or prints/opens the Google OAuth entry URL.
pub async fn login(
    session: &mut SessionService<ApiClient>,
    client: &ApiClient,
    email: Option<String>,
    password: Option<String>,
    google: bool,
) -> anyhow::Result<()> {
    if google {
        let url = client.google_auth_url()?;
        println!("Continue in your browser: {url}");
        println!("Then finish with: tempmail oauth <token>");
        if opener::open(url.as_str()).is_err() {
            println!("(could not open a browser; visit the URL manually)");
        }
        return Ok(());
    }

    let (Some(email), Some(password)) = (email, password) else {
        bail!("usage: tempmail login <email> <password>, or tempmail login --google");
    };
    session.log_in(&email, &password).await?;
    println!("Logged in as {email}.");
    Ok(())
}

/// Completes a Google OAuth callback.
pub async fn oauth(session: &mut SessionService<ApiClient>, token: &str) -> anyhow::Result<()> {
    session.complete_oauth(token).await?;
    match session.identity() {
        Some(identity) => println!("Logged in as {}.", identity.email()),
        None => println!("Credential stored."),
    }
    Ok(())
}

/// Clears the stored session.
pub fn logout(session: &mut SessionService<ApiClient>) {
    session.log_out();
    println!("Logged out.");
}

/// Prints the current session, if any.
pub fn whoami(session: &SessionService<ApiClient>) {
    match session.identity() {
        Some(identity) => {
            println!("{} <{}>", identity.name(), identity.email());
            for address in &identity.user.temp_emails {
                println!("  {address}");
            }
        }
        None => println!("Not logged in."),
    }
}

/// Requests a password-reset OTP.
pub async fn forgot_password(
    session: &mut SessionService<ApiClient>,
    email: &str,
) -> anyhow::Result<()> {
    let message = session.request_password_reset(email).await?;
    println!(
        "{}",
        message.unwrap_or_else(|| "OTP sent to your email".to_string())
    );
    Ok(())
}

/// Verifies a password-reset OTP.
pub async fn verify_otp(
    session: &mut SessionService<ApiClient>,
    email: &str,
    otp: &str,
) -> anyhow::Result<()> {
    let message = session.verify_otp(email, otp).await?;
    println!("{}", message.unwrap_or_else(|| "OTP verified".to_string()));
    println!("Now run: tempmail reset-password {email} <new-password> <confirm>");
    Ok(())
}

/// Sets a new password after OTP verification.
pub async fn reset_password(
    session: &mut SessionService<ApiClient>,
    email: &str,
    new_password: &str,
    confirm: &str,
) -> anyhow::Result<()> {
    let message = session.reset_password(email, new_password, confirm).await?;
    println!(
        "{}",
        message.unwrap_or_else(|| "Password reset successful".to_string())
    );
    Ok(())
}

/// Subscribes an address to the newsletter.
pub async fn subscribe(client: &ApiClient, email: &str) -> anyhow::Result<()> {
    validate_email(email)?;
    let message = client.subscribe_newsletter(email).await?;
    println!("{}", message.unwrap_or_else(|| "Subscribed".to_string()));
    Ok(())
}
