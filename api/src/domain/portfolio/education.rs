use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::dates::parse_month_year;

#[derive(Debug, Clone)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub field_of_study: String,
    pub institution_name: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    pub institution_logo: Option<String>,
    pub institution_website: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Education {
    /// Date used for chronological ordering: the end date, or the start date
    /// while ongoing or when no end date was recorded.
    pub fn sort_date(&self) -> Option<NaiveDate> {
        let raw = match (&self.end_date, self.is_current) {
            (Some(end), false) => end.as_str(),
            _ => self.start_date.as_str(),
        };
        parse_month_year(Some(raw))
    }
}
