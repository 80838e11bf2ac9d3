pub mod credentials;
pub mod smtp;

use log::info;

use crate::error::{OmniError, Result};
use crate::settings::Configuration;

/// Mails `text` to the Mail Drop address from `config`.
///
/// The password is asked right before connecting and dropped once the
/// message is handed over.
pub async fn send_task(config: &Configuration, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(OmniError::Validation("refusing to send an empty task".to_string()));
    }

    info!("-- sending from {} to {}", config.from_mail, config.to_mail);
    let password = credentials::get_password(&config.from_mail)?;
    smtp::send(
        &config.host,
        config.port,
        &config.from_mail,
        &config.to_mail,
        text,
        password,
    )
    .await
}
