use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::certification_repository::CertificationRepository;
use crate::domain::portfolio::certification::Certification;
use crate::infrastructure::db::PgPool;

pub struct SqlxCertificationRepository {
    pub pool: PgPool,
}

impl SqlxCertificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificationRepository for SqlxCertificationRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Certification>> {
        let rows = sqlx::query(
            r#"SELECT id, certification_name, issuing_organization, issue_date, expiration_date,
                      does_not_expire, credential_id, credential_url, description,
                      organization_logo, organization_website, display_order,
                      created_at, updated_at
               FROM certifications"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Certification {
                id: r.get("id"),
                certification_name: r.get("certification_name"),
                issuing_organization: r.get("issuing_organization"),
                issue_date: r.get("issue_date"),
                expiration_date: r.get("expiration_date"),
                does_not_expire: r.get("does_not_expire"),
                credential_id: r.get("credential_id"),
                credential_url: r.get("credential_url"),
                description: r.get("description"),
                organization_logo: r.get("organization_logo"),
                organization_website: r.get("organization_website"),
                display_order: r.get("display_order"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect())
    }
}
