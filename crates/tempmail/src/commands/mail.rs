//! Mailbox subcommands.

use std::time::Duration;

use anyhow::bail;
use tempmail_api::{ApiClient, Message};
use tempmail_core::{MailboxService, SessionService};
use tracing::warn;

/// Creates a new disposable address.
pub async fn create(mailbox: &mut MailboxService<ApiClient>) -> anyhow::Result<()> {
    let address = mailbox.create_temp_email().await?;
    println!("{address}");
    Ok(())
}

/// Lists account-level and session-created addresses.
pub fn addresses(mailbox: &MailboxService<ApiClient>, session: &SessionService<ApiClient>) {
    let all = mailbox.combined_addresses(session.identity());
    if all.is_empty() {
        println!("No disposable addresses yet. Run `tempmail create`.");
        return;
    }
    for address in all {
        println!("{address}");
    }
}

/// Prints the current inbox snapshot.
pub async fn inbox(mailbox: &mut MailboxService<ApiClient>) -> anyhow::Result<()> {
    mailbox.refresh_inbox().await?;
    print_listing(mailbox.inbox(), false);
    Ok(())
}

/// Re-polls the inbox on a fixed interval until Ctrl-C.
pub async fn watch_inbox(
    mailbox: &mut MailboxService<ApiClient>,
    poll_interval: Duration,
) -> anyhow::Result<()> {
    println!(
        "Watching inbox (every {}s, Ctrl-C to stop)",
        poll_interval.as_secs()
    );
    let mut interval = tokio::time::interval(poll_interval);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match mailbox.refresh_inbox().await {
                    Ok(()) => {
                        println!("-- {} --", chrono::Local::now().format("%H:%M:%S"));
                        print_listing(mailbox.inbox(), false);
                    }
                    // Keep polling; the next tick is the retry.
                    Err(err) => warn!("inbox refresh failed: {err}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Stopped.");
                return Ok(());
            }
        }
    }
}

/// Prints the current outbox snapshot.
pub async fn outbox(mailbox: &mut MailboxService<ApiClient>) -> anyhow::Result<()> {
    mailbox.refresh_outbox().await?;
    print_listing(mailbox.outbox(), true);
    Ok(())
}

/// Prints a single message in full.
pub async fn read(mailbox: &mut MailboxService<ApiClient>, id: &str) -> anyhow::Result<()> {
    let Ok(message) = mailbox.fetch_message(id).await else {
        bail!("message {id} not found");
    };
    let folder = if message.is_outbound { "outbox" } else { "inbox" };
    println!("From:    {}", message.from);
    println!("To:      {}", message.to);
    println!("Date:    {}", message.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Subject: {}", message.subject);
    println!("Folder:  {folder}");
    println!();
    println!("{}", message.body);
    Ok(())
}

/// Sends a message, optionally pre-filling subject/body from an AI draft.
pub async fn send(
    mailbox: &mut MailboxService<ApiClient>,
    from: &str,
    to: &str,
    subject: Option<String>,
    body: Option<String>,
    ai: Option<String>,
) -> anyhow::Result<()> {
    let (subject, body) = match (subject, body, ai) {
        (Some(subject), Some(body), _) => (subject, body),
        (subject, body, Some(prompt)) => {
            let draft = mailbox.generate_draft(&prompt).await?;
            (
                subject.unwrap_or(draft.subject),
                body.unwrap_or(draft.body),
            )
        }
        _ => bail!("provide --subject and --body, or --ai <prompt>"),
    };

    let message = mailbox.send(from, to, &subject, &body).await?;
    println!("Sent {} to {}.", message.id, message.to);
    if let Some(err) = mailbox.error() {
        println!("(outbox refresh failed: {err})");
    }
    Ok(())
}

/// Prints an AI draft without sending anything.
pub async fn draft(mailbox: &mut MailboxService<ApiClient>, prompt: &str) -> anyhow::Result<()> {
    let draft = mailbox.generate_draft(prompt).await?;
    println!("Subject: {}", draft.subject);
    println!();
    println!("{}", draft.body);
    Ok(())
}

/// Deletes a message.
pub async fn delete(mailbox: &mut MailboxService<ApiClient>, id: &str) -> anyhow::Result<()> {
    mailbox.delete(id).await?;
    println!("Deleted {id}.");
    Ok(())
}

/// One line per message: unread marker, id, counterpart address, date,
/// subject.
fn print_listing(messages: &[Message], outbound: bool) {
    if messages.is_empty() {
        println!("(empty)");
        return;
    }
    for message in messages {
        let marker = if message.is_read || outbound { ' ' } else { '*' };
        let counterpart = if outbound { &message.to } else { &message.from };
        println!(
            "{marker} {:<24}  {:<30}  {}  {}",
            message.id,
            counterpart,
            message.created_at.format("%Y-%m-%d %H:%M"),
            message.subject
        );
    }
}
