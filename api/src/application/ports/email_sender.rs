use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("email delivery is not configured: {0}")]
    NotConfigured(&'static str),
    #[error("invalid email configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown email provider `{0}`")]
    UnknownProvider(String),
    #[error("invalid address `{0}`")]
    InvalidAddress(String),
    #[error("email provider rejected the request with status {0}")]
    Rejected(u16),
    #[error("email transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}
