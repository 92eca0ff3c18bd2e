use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::education_repository::EducationRepository;
use crate::domain::portfolio::education::Education;
use crate::infrastructure::db::PgPool;

pub struct SqlxEducationRepository {
    pub pool: PgPool,
}

impl SqlxEducationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EducationRepository for SqlxEducationRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Education>> {
        let rows = sqlx::query(
            r#"SELECT id, degree, field_of_study, institution_name, location, start_date,
                      end_date, is_current, description, institution_logo, institution_website,
                      display_order, created_at, updated_at
               FROM educations"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Education {
                id: r.get("id"),
                degree: r.get("degree"),
                field_of_study: r.get("field_of_study"),
                institution_name: r.get("institution_name"),
                location: r.get("location"),
                start_date: r.get("start_date"),
                end_date: r.get("end_date"),
                is_current: r.get("is_current"),
                description: r.get("description"),
                institution_logo: r.get("institution_logo"),
                institution_website: r.get("institution_website"),
                display_order: r.get("display_order"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect())
    }
}
