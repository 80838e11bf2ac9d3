use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::Code;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{debug, info};

use crate::error::{OmniError, Result};

// Replies that mean the server refused our login
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

fn parse_mailbox(role: &str, address: &str) -> Result<Mailbox> {
    address.parse().map_err(|err| {
        OmniError::Config(format!("invalid '{}' address '{}': {}", role, address, err))
    })
}

/// Builds the Mail Drop message: the task text is the subject, the body is empty.
pub fn build_message(from_mail: &str, to_mail: &str, subject: &str) -> Result<Message> {
    let message = Message::builder()
        .from(parse_mailbox("from", from_mail)?)
        .to(parse_mailbox("to", to_mail)?)
        .subject(subject)
        .body(String::new())
        .map_err(|err| OmniError::Config(format!("cannot build message: {}", err)))?;
    Ok(message)
}

fn is_auth_failure(code: Code) -> bool {
    AUTH_FAILURE_CODES.contains(&code.to_string().as_str())
}

fn classify(host: &str, port: u16, err: lettre::transport::smtp::Error) -> OmniError {
    match err.status() {
        Some(code) if is_auth_failure(code) => OmniError::Auth(err.to_string()),
        _ => OmniError::Connect(format!("{}:{}: {}", host, port, err)),
    }
}

// Connect with STARTTLS, log in as the sender and deliver the message
pub async fn send(
    host: &str,
    port: u16,
    from_mail: &str,
    to_mail: &str,
    text: &str,
    password: String,
) -> Result<()> {
    let message = build_message(from_mail, to_mail, text)?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        .map_err(|err| classify(host, port, err))?
        .port(port)
        .credentials(Credentials::new(from_mail.to_string(), password))
        .build();

    info!("-- connecting to {}:{}", host, port);
    let response = transport
        .send(message)
        .await
        .map_err(|err| classify(host, port, err))?;

    debug!("-- server replied {}", response.code());
    info!("-- task sent to {}", to_mail);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_message_puts_task_in_subject() {
        let message = build_message(
            "me@live.com",
            "drop@sync.omnigroup.com",
            "--Buy milk @errands",
        )
        .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: --Buy milk @errands\r\n"));
        assert!(formatted.contains("From: me@live.com\r\n"));
        assert!(formatted.contains("To: drop@sync.omnigroup.com\r\n"));
    }

    #[test]
    fn test_build_message_rejects_bad_address() {
        let err = build_message("not an address", "drop@sync.omnigroup.com", "task").unwrap_err();

        assert!(matches!(err, OmniError::Config(ref msg) if msg.contains("'from'")));
    }
}
