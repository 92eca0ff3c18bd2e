use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::personal_info_repository::PersonalInfoRepository;
use crate::domain::portfolio::personal_info::{PersonalInfo, SocialLinks};
use crate::infrastructure::db::PgPool;

pub struct SqlxPersonalInfoRepository {
    pub pool: PgPool,
}

impl SqlxPersonalInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_personal_info(r: PgRow) -> PersonalInfo {
    let links = SocialLinks {
        github: r.get("social_github"),
        linkedin: r.get("social_linkedin"),
        twitter: r.get("social_twitter"),
        website: r.get("social_website"),
    };
    PersonalInfo {
        id: r.get("id"),
        name: r.get("name"),
        tagline: r.get("tagline"),
        description: r.get("description"),
        profile_image: r.get("profile_image"),
        email: r.get("email"),
        phone: r.get("phone"),
        location: r.get("location"),
        social_links: (links != SocialLinks::default()).then_some(links),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl PersonalInfoRepository for SqlxPersonalInfoRepository {
    async fn first(&self) -> anyhow::Result<Option<PersonalInfo>> {
        let row = sqlx::query(
            r#"SELECT id, name, tagline, description, profile_image, email, phone, location,
                      social_github, social_linkedin, social_twitter, social_website, updated_at
               FROM personal_info
               ORDER BY created_at ASC, id ASC
               LIMIT 1"#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_personal_info))
    }

    async fn upsert(&self, info: &PersonalInfo) -> anyhow::Result<PersonalInfo> {
        let links = info.social_links.clone().unwrap_or_default();
        let row = sqlx::query(
            r#"INSERT INTO personal_info (id, name, tagline, description, profile_image, email,
                      phone, location, social_github, social_linkedin, social_twitter,
                      social_website, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
               ON CONFLICT (id) DO UPDATE SET
                   name = EXCLUDED.name,
                   tagline = EXCLUDED.tagline,
                   description = EXCLUDED.description,
                   profile_image = EXCLUDED.profile_image,
                   email = EXCLUDED.email,
                   phone = EXCLUDED.phone,
                   location = EXCLUDED.location,
                   social_github = EXCLUDED.social_github,
                   social_linkedin = EXCLUDED.social_linkedin,
                   social_twitter = EXCLUDED.social_twitter,
                   social_website = EXCLUDED.social_website,
                   updated_at = EXCLUDED.updated_at
               RETURNING id, name, tagline, description, profile_image, email, phone, location,
                         social_github, social_linkedin, social_twitter, social_website, updated_at"#,
        )
        .bind(info.id)
        .bind(&info.name)
        .bind(&info.tagline)
        .bind(&info.description)
        .bind(&info.profile_image)
        .bind(&info.email)
        .bind(&info.phone)
        .bind(&info.location)
        .bind(&links.github)
        .bind(&links.linkedin)
        .bind(&links.twitter)
        .bind(&links.website)
        .bind(info.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_personal_info(row))
    }
}
