use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::validation::FieldErrors;

const WORDS_PER_MINUTE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Draft => "DRAFT",
            BlogStatus::Published => "PUBLISHED",
            BlogStatus::Archived => "ARCHIVED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(BlogStatus::Draft),
            "PUBLISHED" => Some(BlogStatus::Published),
            "ARCHIVED" => Some(BlogStatus::Archived),
            _ => None,
        }
    }

    pub fn is_publicly_visible(&self) -> bool {
        matches!(self, BlogStatus::Published)
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, BlogStatus::Draft | BlogStatus::Published)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogCategory {
    Technical,
    Life,
    Career,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Technical => "TECHNICAL",
            BlogCategory::Life => "LIFE",
            BlogCategory::Career => "CAREER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TECHNICAL" => Some(BlogCategory::Technical),
            "LIFE" => Some(BlogCategory::Life),
            "CAREER" => Some(BlogCategory::Career),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlogCategory::Technical => "Technical",
            BlogCategory::Life => "Life",
            BlogCategory::Career => "Career",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BlogCategory::Technical => "fas fa-code",
            BlogCategory::Life => "fas fa-heart",
            BlogCategory::Career => "fas fa-briefcase",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BlogCategory::Technical => {
                "Technical posts about programming, software development, and technology"
            }
            BlogCategory::Life => "Personal experiences, thoughts, and life reflections",
            BlogCategory::Career => {
                "Career development, professional insights, and industry trends"
            }
        }
    }
}

impl std::fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub reading_time: Option<i32>,
    pub view_count: i64,
    pub status: BlogStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub category: Option<BlogCategory>,
}

impl Blog {
    pub fn is_publicly_visible(&self) -> bool {
        self.is_active && self.status.is_publicly_visible()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = BlogStatus::Published;
        self.published_at = Some(now);
    }

    pub fn unpublish(&mut self) {
        self.status = BlogStatus::Draft;
        self.published_at = None;
    }
}

/// Editable part of a blog post, as submitted by the admin.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub reading_time: Option<i32>,
    pub status: Option<BlogStatus>,
    pub category: Option<BlogCategory>,
}

impl BlogDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errs = FieldErrors::new();
        errs.required("title", &self.title, "Title is required");
        errs.max_len(
            "title",
            Some(&self.title),
            200,
            "Title must not exceed 200 characters",
        );
        errs.required("content", &self.content, "Content is required");
        errs.required("slug", &self.slug, "Slug is required");
        errs.max_len(
            "slug",
            Some(&self.slug),
            250,
            "Slug must not exceed 250 characters",
        );
        errs.max_len(
            "excerpt",
            self.excerpt.as_deref(),
            500,
            "Excerpt must not exceed 500 characters",
        );
        errs.into_result()
    }
}

/// Estimated minutes to read `content` at 200 words per minute; 0 for blank content.
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    if words == 0 {
        return 0;
    }
    ((words as f64 / WORDS_PER_MINUTE).ceil() as i32).max(1)
}
