use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::experience_repository::ExperienceRepository;
use crate::domain::portfolio::experience::Experience;
use crate::infrastructure::db::PgPool;

pub struct SqlxExperienceRepository {
    pub pool: PgPool,
}

impl SqlxExperienceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepository {
    async fn list_by_display_order_desc(&self) -> anyhow::Result<Vec<Experience>> {
        let rows = sqlx::query(
            r#"SELECT id, company_name, position, location, start_date, end_date, is_current,
                      description, technologies, achievements, company_logo, company_website,
                      display_order, created_at, updated_at
               FROM experiences
               ORDER BY display_order DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Experience {
                id: r.get("id"),
                company_name: r.get("company_name"),
                position: r.get("position"),
                location: r.get("location"),
                start_date: r.get("start_date"),
                end_date: r.get("end_date"),
                is_current: r.get("is_current"),
                description: r.get("description"),
                technologies: r.get("technologies"),
                achievements: r.get("achievements"),
                company_logo: r.get("company_logo"),
                company_website: r.get("company_website"),
                display_order: r.get("display_order"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect())
    }
}
