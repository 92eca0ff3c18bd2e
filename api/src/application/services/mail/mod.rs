use htmlescape::encode_minimal as escape_html;

use crate::domain::contact::ContactMessage;

/// Makes a value safe for a single-line mail header.
pub fn sanitize_header(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalises newlines and strips control characters, keeping `\n`.
pub fn sanitize_body(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_ascii_control())
        .collect::<String>()
        .replace('\t', "    ")
}

fn field(value: &str) -> String {
    escape_html(&sanitize_body(value))
}

pub fn render_contact_email(message: &ContactMessage, website_domain: &str) -> String {
    let name = field(&message.name);
    let email = field(&message.email);
    let body = field(&message.message).replace('\n', "<br>");
    let domain = field(website_domain);
    let subject_block = message
        .subject()
        .map(|s| {
            format!(
                r#"<div class="field-group">
                    <div class="field-label">Subject</div>
                    <div class="field-value">{}</div>
                </div>"#,
                field(s)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #13343b; background-color: #fcfcf9; margin: 0; padding: 20px; }}
        .container {{ max-width: 600px; margin: 0 auto; background-color: #fffffd; border-radius: 8px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); overflow: hidden; }}
        .header {{ background: linear-gradient(135deg, #21808d 0%, #1d7480 100%); color: #ffffff; padding: 30px 20px; text-align: center; }}
        .header h1 {{ margin: 0; font-size: 24px; font-weight: 600; }}
        .content {{ padding: 30px 20px; }}
        .field-group {{ margin-bottom: 20px; }}
        .field-label {{ font-weight: 600; color: #21808d; font-size: 12px; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 5px; }}
        .field-value {{ color: #13343b; font-size: 16px; padding: 10px; background-color: #fcfcf9; border-left: 3px solid #21808d; border-radius: 4px; }}
        .message-box {{ background-color: #fcfcf9; border-left: 3px solid #21808d; padding: 15px; border-radius: 4px; margin-top: 10px; }}
        .footer {{ background-color: #fcfcf9; padding: 20px; text-align: center; font-size: 12px; color: #626c71; border-top: 1px solid rgba(94, 82, 64, 0.2); }}
        .footer a {{ color: #21808d; text-decoration: none; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>New Contact Form Submission</h1>
        </div>
        <div class="content">
            <div class="field-group">
                <div class="field-label">Name</div>
                <div class="field-value">{name}</div>
            </div>
            <div class="field-group">
                <div class="field-label">Email</div>
                <div class="field-value">{email}</div>
            </div>
            {subject_block}
            <div class="field-group">
                <div class="field-label">Message</div>
                <div class="message-box">{body}</div>
            </div>
        </div>
        <div class="footer">
            This message was sent from the contact form on <a href="https://{domain}">{domain}</a>
        </div>
    </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(subject: Option<&str>, text: &str) -> ContactMessage {
        ContactMessage {
            name: "Alan".into(),
            email: "alan@example.com".into(),
            subject: subject.map(str::to_string),
            message: text.into(),
        }
    }

    #[test]
    fn header_drops_line_breaks_and_controls() {
        assert_eq!(sanitize_header("  Hi\r\nBcc: x@y\t!\u{7}  "), "HiBcc: x@y !");
        assert_eq!(sanitize_header(""), "");
    }

    #[test]
    fn body_normalises_newlines() {
        assert_eq!(sanitize_body("a\r\nb\rc\u{0}\td"), "a\nb\nc    d");
    }

    #[test]
    fn email_escapes_and_breaks_lines() {
        let html = render_contact_email(&message(None, "line one\n<b>two</b>"), "example.com");
        assert!(html.contains("line one<br>&lt;b&gt;two&lt;/b&gt;"));
        assert!(html.contains(r#"<a href="https://example.com">example.com</a>"#));
        assert!(!html.contains(">Subject<"));
    }

    #[test]
    fn subject_block_only_when_present() {
        let html = render_contact_email(&message(Some("Job offer"), "hi"), "localhost");
        assert!(html.contains(">Subject<"));
        assert!(html.contains("Job offer"));
        let html = render_contact_email(&message(Some("  "), "hi"), "localhost");
        assert!(!html.contains(">Subject<"));
    }
}
