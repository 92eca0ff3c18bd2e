use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A named group of skills, e.g. "Languages" or "Cloud".
#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub id: Uuid,
    pub category_name: String,
    pub skills: Vec<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
