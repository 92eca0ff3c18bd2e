use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PersonalInfo {
    pub id: Uuid,
    pub name: String,
    pub tagline: String,
    pub description: Vec<String>,
    pub profile_image: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub updated_at: DateTime<Utc>,
}

/// Replacement values for the site owner's profile.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfoUpdate {
    pub name: String,
    pub tagline: String,
    pub description: Vec<String>,
    pub profile_image: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: Option<SocialLinks>,
}

impl PersonalInfoUpdate {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errs = FieldErrors::new();
        errs.required("name", &self.name, "Name is required");
        errs.max_len("name", Some(&self.name), 100, "Name must not exceed 100 characters");
        errs.required("tagline", &self.tagline, "Tagline is required");
        errs.max_len(
            "tagline",
            Some(&self.tagline),
            200,
            "Tagline must not exceed 200 characters",
        );
        errs.required("profileImage", &self.profile_image, "Profile image is required");
        errs.email("email", self.email.as_deref());
        errs.max_len(
            "email",
            self.email.as_deref(),
            100,
            "Email must not exceed 100 characters",
        );
        errs.max_len(
            "phone",
            self.phone.as_deref(),
            20,
            "Phone must not exceed 20 characters",
        );
        errs.max_len(
            "location",
            self.location.as_deref(),
            100,
            "Location must not exceed 100 characters",
        );
        errs.into_result()
    }

    pub fn apply_to(self, info: &mut PersonalInfo, now: DateTime<Utc>) {
        info.name = self.name;
        info.tagline = self.tagline;
        info.description = self.description;
        info.profile_image = self.profile_image;
        info.email = self.email;
        info.phone = self.phone;
        info.location = self.location;
        info.social_links = self.social_links;
        info.updated_at = now;
    }

    pub fn into_new(self, now: DateTime<Utc>) -> PersonalInfo {
        PersonalInfo {
            id: Uuid::new_v4(),
            name: self.name,
            tagline: self.tagline,
            description: self.description,
            profile_image: self.profile_image,
            email: self.email,
            phone: self.phone,
            location: self.location,
            social_links: self.social_links,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update() -> PersonalInfoUpdate {
        PersonalInfoUpdate {
            name: "Ada".into(),
            tagline: "Engineer".into(),
            profile_image: "/img/ada.png".into(),
            email: Some("ada@example.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_update_passes() {
        assert!(update().validate().is_ok());
    }

    #[test]
    fn reports_every_broken_field() {
        let mut u = update();
        u.name = String::new();
        u.email = Some("nope".into());
        u.phone = Some("0".repeat(21));
        let errs = u.validate().unwrap_err();
        let fields: Vec<_> = errs.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "phone"]);
    }

    #[test]
    fn apply_keeps_identity() {
        let now = Utc::now();
        let mut info = update().into_new(now);
        let id = info.id;
        let mut next = update();
        next.tagline = "Writer".into();
        next.apply_to(&mut info, now);
        assert_eq!(info.id, id);
        assert_eq!(info.tagline, "Writer");
    }
}
