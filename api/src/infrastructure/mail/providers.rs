use serde::Serialize;

use crate::application::ports::email_sender::{EmailError, OutgoingEmail};

/// Shapes an outgoing email into the JSON body a transactional mail API expects.
pub trait HttpEmailRequestBuilder: Send + Sync {
    fn provider(&self) -> &'static str;
    fn build(&self, email: &OutgoingEmail) -> Result<serde_json::Value, EmailError>;
}

#[derive(Serialize)]
struct BrevoAddress<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoRequest<'a> {
    sender: BrevoAddress<'a>,
    to: [BrevoAddress<'a>; 1],
    subject: &'a str,
    html_content: &'a str,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrevoRequestBuilder;

impl HttpEmailRequestBuilder for BrevoRequestBuilder {
    fn provider(&self) -> &'static str {
        "brevo"
    }

    fn build(&self, email: &OutgoingEmail) -> Result<serde_json::Value, EmailError> {
        let body = BrevoRequest {
            sender: BrevoAddress { email: &email.from },
            to: [BrevoAddress { email: &email.to }],
            subject: &email.subject,
            html_content: &email.html_body,
        };
        serde_json::to_value(body).map_err(|e| EmailError::Transport(e.to_string()))
    }
}

/// Looks up the request builder for `provider` (case and whitespace insensitive).
pub fn request_builder_for(provider: &str) -> Result<Box<dyn HttpEmailRequestBuilder>, EmailError> {
    match provider.trim().to_lowercase().as_str() {
        "brevo" => Ok(Box::new(BrevoRequestBuilder)),
        other => Err(EmailError::UnknownProvider(other.to_string())),
    }
}
