use crate::domain::validation::FieldErrors;

/// A visitor's message submitted through the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errs = FieldErrors::new();
        errs.required("name", &self.name, "Name is required");
        errs.max_len("name", Some(&self.name), 100, "Name must not exceed 100 characters");
        errs.required("email", &self.email, "Email is required");
        errs.email("email", Some(&self.email));
        errs.max_len(
            "email",
            Some(&self.email),
            100,
            "Email must not exceed 100 characters",
        );
        errs.max_len(
            "subject",
            self.subject.as_deref(),
            200,
            "Subject must not exceed 200 characters",
        );
        errs.required("message", &self.message, "Message is required");
        errs.max_len(
            "message",
            Some(&self.message),
            5000,
            "Message must not exceed 5000 characters",
        );
        errs.into_result()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg() -> ContactMessage {
        ContactMessage {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            subject: None,
            message: "Hello there".into(),
        }
    }

    #[test]
    fn accepts_minimal_message() {
        assert!(msg().validate().is_ok());
    }

    #[test]
    fn rejects_bad_email_and_long_message() {
        let mut m = msg();
        m.email = "grace".into();
        m.message = "x".repeat(5001);
        let err = m.validate().unwrap_err().to_string();
        assert_eq!(
            err,
            "Validation failed: email - Email should be valid; message - Message must not exceed 5000 characters"
        );
    }

    #[test]
    fn blank_subject_counts_as_absent() {
        let mut m = msg();
        m.subject = Some("   ".into());
        assert_eq!(m.subject(), None);
        m.subject = Some("Hi".into());
        assert_eq!(m.subject(), Some("Hi"));
    }
}
