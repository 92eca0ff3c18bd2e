use once_cell::sync::Lazy;
use regex::Regex;

static MONTH_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])-\d{4}$").expect("valid month-year regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collects field-level violations for a payload; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn required(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    pub fn max_len(&mut self, field: &str, value: Option<&str>, max: usize, message: &str) {
        if value.map(|v| v.chars().count() > max).unwrap_or(false) {
            self.push(field, message);
        }
    }

    pub fn email(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            if !EMAIL_RE.is_match(v) {
                self.push(field, "Email should be valid");
            }
        }
    }

    pub fn month_year(&mut self, field: &str, value: Option<&str>, label: &str) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            if !MONTH_YEAR_RE.is_match(v) {
                self.push(
                    field,
                    format!("{label} must be in MM-YYYY format (e.g., 12-2025)"),
                );
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{} - {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Validation failed: {joined}")
    }
}

impl std::error::Error for FieldErrors {}

pub fn is_month_year(value: &str) -> bool {
    MONTH_YEAR_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_errors_in_order() {
        let mut errs = FieldErrors::new();
        errs.required("title", "  ", "Title is required");
        errs.max_len("slug", Some(&"x".repeat(251)), 250, "Slug must not exceed 250 characters");
        errs.required("content", "body", "Content is required");
        assert_eq!(
            errs.to_string(),
            "Validation failed: title - Title is required; slug - Slug must not exceed 250 characters"
        );
    }

    #[test]
    fn max_len_counts_characters_not_bytes() {
        let mut errs = FieldErrors::new();
        errs.max_len("name", Some("ééééé"), 5, "too long");
        assert!(errs.is_empty());
    }

    #[test]
    fn email_check_skips_absent_values() {
        let mut errs = FieldErrors::new();
        errs.email("email", None);
        errs.email("email", Some(""));
        assert!(errs.is_empty());
        errs.email("email", Some("not-an-email"));
        assert_eq!(errs.iter().count(), 1);
    }

    #[test]
    fn month_year_format() {
        assert!(is_month_year("12-2025"));
        assert!(is_month_year("01-1999"));
        assert!(!is_month_year("13-2025"));
        assert!(!is_month_year("1-2025"));
        assert!(!is_month_year("2025-12"));
    }
}
