use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Experience {
    pub id: Uuid,
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    /// `MM-YYYY`
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    pub company_logo: Option<String>,
    pub company_website: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
