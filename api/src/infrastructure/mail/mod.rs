use std::sync::Arc;

use crate::application::ports::email_sender::EmailSender;
use crate::bootstrap::config::{Config, EmailProvider};

pub mod http_api;
pub mod providers;
pub mod smtp;

/// Picks the outgoing mail adapter named by `EMAIL_PROVIDER`; `None` when mail is disabled.
pub fn build_email_sender(cfg: &Config) -> anyhow::Result<Option<Arc<dyn EmailSender>>> {
    let sender: Arc<dyn EmailSender> = match cfg.email_provider {
        EmailProvider::Disabled => {
            tracing::info!("email_disabled");
            return Ok(None);
        }
        EmailProvider::Smtp => Arc::new(smtp::SmtpEmailSender::new(cfg.smtp_url.as_deref())?),
        EmailProvider::HttpApi => {
            let builder = providers::request_builder_for(&cfg.email_http_api_provider)?;
            if cfg.email_http_api_key.is_none() {
                tracing::warn!(provider = builder.provider(), "email_http_api_key_missing");
            }
            Arc::new(http_api::HttpApiEmailSender::new(
                cfg.email_http_api_url.clone(),
                cfg.email_http_api_key.clone(),
                builder,
            ))
        }
    };
    tracing::info!(provider = ?cfg.email_provider, "email_sender_ready");
    Ok(Some(sender))
}
