use crate::application::ports::email_sender::{EmailError, EmailSender, OutgoingEmail};
use crate::application::ports::personal_info_repository::PersonalInfoRepository;
use crate::application::services::mail::{render_contact_email, sanitize_header};
use crate::domain::contact::ContactMessage;
use crate::domain::validation::FieldErrors;

pub const MESSAGE_SENT: &str = "Message sent successfully! I'll get back to you soon.";
pub const MESSAGE_LOGGED: &str = "Thank you for contacting me. I will get back to you soon.";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
    #[error("Failed to send message. Please try again later.")]
    Delivery(#[source] EmailError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ContactSettings {
    pub from: Option<String>,
    pub to: Option<String>,
    pub website_domain: String,
}

fn configured(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty() && *v != "null")
}

pub struct SubmitContact<'a, P, E>
where
    P: PersonalInfoRepository + ?Sized,
    E: EmailSender + ?Sized,
{
    pub personal_info: &'a P,
    pub sender: Option<&'a E>,
    pub settings: &'a ContactSettings,
}

impl<'a, P, E> SubmitContact<'a, P, E>
where
    P: PersonalInfoRepository + ?Sized,
    E: EmailSender + ?Sized,
{
    /// Mails the message to the site owner and returns the text shown to the visitor.
    pub async fn execute(&self, message: &ContactMessage) -> Result<&'static str, ContactError> {
        message.validate()?;

        let to = match configured(self.settings.to.as_deref()) {
            Some(to) => Some(to.to_string()),
            None => self
                .personal_info
                .first()
                .await?
                .and_then(|p| p.email)
                .filter(|e| configured(Some(e.as_str())).is_some()),
        };
        let Some(to) = to else {
            return Ok(not_sent("recipient email not configured"));
        };
        let Some(sender) = self.sender else {
            return Ok(not_sent("email sender not configured"));
        };
        let Some(from) = configured(self.settings.from.as_deref()) else {
            return Ok(not_sent("sender email not configured"));
        };

        let email = OutgoingEmail {
            from: from.to_string(),
            to,
            subject: subject_line(message),
            html_body: render_contact_email(message, &self.settings.website_domain),
        };
        sender.send(&email).await.map_err(|e| {
            tracing::error!(error = %e, "contact_email_failed");
            ContactError::Delivery(e)
        })?;
        tracing::info!("contact_email_sent");
        Ok(MESSAGE_SENT)
    }
}

fn not_sent(reason: &str) -> &'static str {
    tracing::warn!(reason, "contact_email_skipped");
    MESSAGE_LOGGED
}

pub fn subject_line(message: &ContactMessage) -> String {
    let prefix = message
        .subject()
        .map(sanitize_header)
        .unwrap_or_else(|| "Contact Form Submission".to_string());
    format!("[Contact Form] {} - {}", prefix, sanitize_header(&message.name))
}
