use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::skill_repository::SkillRepository;
use crate::domain::portfolio::skill::SkillGroup;
use crate::infrastructure::db::PgPool;

pub struct SqlxSkillRepository {
    pub pool: PgPool,
}

impl SqlxSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepository {
    async fn list_by_display_order(&self) -> anyhow::Result<Vec<SkillGroup>> {
        let rows = sqlx::query(
            r#"SELECT id, category_name, skills, display_order, created_at, updated_at
               FROM skills
               ORDER BY display_order ASC, category_name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| SkillGroup {
                id: r.get("id"),
                category_name: r.get("category_name"),
                skills: r.get("skills"),
                display_order: r.get("display_order"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect())
    }
}
