use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::dates::parse_month_year;

#[derive(Debug, Clone)]
pub struct Certification {
    pub id: Uuid,
    pub certification_name: String,
    pub issuing_organization: String,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub does_not_expire: bool,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub organization_logo: Option<String>,
    pub organization_website: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Certification {
    pub fn issued_on(&self) -> Option<NaiveDate> {
        parse_month_year(self.issue_date.as_deref())
    }
}
