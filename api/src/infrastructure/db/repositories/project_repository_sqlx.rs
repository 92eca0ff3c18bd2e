use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::portfolio::project::Project;
use crate::infrastructure::db::PgPool;

pub struct SqlxProjectRepository {
    pub pool: PgPool,
}

impl SqlxProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepository {
    async fn list_active_by_display_order_desc(&self) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, short_description, featured_image, technologies,
                      project_url, github_url, start_date, end_date, is_active, display_order,
                      created_at, updated_at
               FROM projects
               WHERE is_active
               ORDER BY display_order DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Project {
                id: r.get("id"),
                title: r.get("title"),
                description: r.get("description"),
                short_description: r.get("short_description"),
                featured_image: r.get("featured_image"),
                technologies: r.get("technologies"),
                project_url: r.get("project_url"),
                github_url: r.get("github_url"),
                start_date: r.get("start_date"),
                end_date: r.get("end_date"),
                is_active: r.get("is_active"),
                display_order: r.get("display_order"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect())
    }
}
