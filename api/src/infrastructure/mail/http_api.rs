use async_trait::async_trait;
use reqwest::Client;

use super::providers::HttpEmailRequestBuilder;
use crate::application::ports::email_sender::{EmailError, EmailSender, OutgoingEmail};

/// Sends mail through a transactional email HTTP API authenticated with an `api-key` header.
pub struct HttpApiEmailSender {
    client: Client,
    url: String,
    api_key: Option<String>,
    builder: Box<dyn HttpEmailRequestBuilder>,
}

impl std::fmt::Debug for HttpApiEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiEmailSender")
            .field("url", &self.url)
            .field("provider", &self.builder.provider())
            .finish_non_exhaustive()
    }
}

impl HttpApiEmailSender {
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        builder: Box<dyn HttpEmailRequestBuilder>,
    ) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            builder,
        }
    }
}

#[async_trait]
impl EmailSender for HttpApiEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(EmailError::NotConfigured("HTTP API key is not configured"));
        };
        let body = self.builder.build(email)?;
        let resp = self
            .client
            .post(&self.url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, provider = self.builder.provider(), "http_email_request_failed");
                EmailError::Transport(e.to_string())
            })?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), provider = self.builder.provider(), "http_email_rejected");
            return Err(EmailError::Rejected(status.as_u16()));
        }
        tracing::info!(provider = self.builder.provider(), "http_email_sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mail::providers::BrevoRequestBuilder;

    #[tokio::test]
    async fn missing_api_key_is_not_configured() {
        let sender = HttpApiEmailSender::new(
            "http://127.0.0.1:9/never",
            Some("  ".into()),
            Box::new(BrevoRequestBuilder),
        );
        let email = OutgoingEmail {
            from: "a@example.com".into(),
            to: "b@example.com".into(),
            subject: "s".into(),
            html_body: "b".into(),
        };
        assert!(matches!(
            sender.send(&email).await,
            Err(EmailError::NotConfigured(_))
        ));
    }
}
