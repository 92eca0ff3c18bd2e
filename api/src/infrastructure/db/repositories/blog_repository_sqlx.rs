use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::blog_repository::{BlogRepository, SlugConflict};
use crate::domain::blogs::blog::{Blog, BlogCategory, BlogStatus};
use crate::infrastructure::db::PgPool;

const BLOG_COLUMNS: &str = "id, title, content, slug, created_at, updated_at, excerpt, \
     featured_image, reading_time, view_count, status, published_at, is_active, category";

pub struct SqlxBlogRepository {
    pub pool: PgPool,
}

impl SqlxBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_blog(r: PgRow) -> anyhow::Result<Blog> {
    let status: String = r.get("status");
    let status = BlogStatus::parse(&status)
        .ok_or_else(|| anyhow::anyhow!("unknown blog status `{status}`"))?;
    let category = match r.get::<Option<String>, _>("category") {
        Some(c) => Some(
            BlogCategory::parse(&c).ok_or_else(|| anyhow::anyhow!("unknown blog category `{c}`"))?,
        ),
        None => None,
    };
    Ok(Blog {
        id: r.get("id"),
        title: r.get("title"),
        content: r.get("content"),
        slug: r.get("slug"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
        excerpt: r.get("excerpt"),
        featured_image: r.get("featured_image"),
        reading_time: r.get("reading_time"),
        view_count: r.get("view_count"),
        status,
        published_at: r.get("published_at"),
        is_active: r.get("is_active"),
        category,
    })
}

/// Unique violations (SQLSTATE 23505) on `blogs` can only come from the slug index.
fn map_write_error(err: sqlx::Error, slug: &str) -> anyhow::Error {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some("23505") {
            return SlugConflict(slug.to_string()).into();
        }
    }
    err.into()
}

fn map_all(rows: Vec<PgRow>) -> anyhow::Result<Vec<Blog>> {
    rows.into_iter().map(map_blog).collect()
}

#[async_trait]
impl BlogRepository for SqlxBlogRepository {
    async fn list_active(&self) -> anyhow::Result<Vec<Blog>> {
        let rows = sqlx::query(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE is_active ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        map_all(rows)
    }

    async fn find_active_by_id(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let row = sqlx::query(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1 AND is_active"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(map_blog).transpose()
    }

    async fn find_active_by_slug(&self, slug: &str) -> anyhow::Result<Option<Blog>> {
        let row = sqlx::query(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE slug = $1 AND is_active"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        row.map(map_blog).transpose()
    }

    async fn slug_exists(&self, slug: &str) -> anyhow::Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blogs WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn insert(&self, blog: &Blog) -> anyhow::Result<Blog> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO blogs ({BLOG_COLUMNS})
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
               RETURNING {BLOG_COLUMNS}"#
        ))
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.slug)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .bind(&blog.excerpt)
        .bind(&blog.featured_image)
        .bind(blog.reading_time)
        .bind(blog.view_count)
        .bind(blog.status.as_str())
        .bind(blog.published_at)
        .bind(blog.is_active)
        .bind(blog.category.map(|c| c.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &blog.slug))?;
        map_blog(row)
    }

    async fn save(&self, blog: &Blog) -> anyhow::Result<Blog> {
        // view_count is owned by increment_views
        let row = sqlx::query(&format!(
            r#"UPDATE blogs SET title = $2, content = $3, slug = $4, updated_at = $5,
                   excerpt = $6, featured_image = $7, reading_time = $8, status = $9,
                   published_at = $10, is_active = $11, category = $12
               WHERE id = $1
               RETURNING {BLOG_COLUMNS}"#
        ))
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.slug)
        .bind(blog.updated_at)
        .bind(&blog.excerpt)
        .bind(&blog.featured_image)
        .bind(blog.reading_time)
        .bind(blog.status.as_str())
        .bind(blog.published_at)
        .bind(blog.is_active)
        .bind(blog.category.map(|c| c.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &blog.slug))?;
        match row {
            Some(r) => map_blog(r),
            None => anyhow::bail!("blog {} vanished during save", blog.id),
        }
    }

    async fn list_published(&self, category: Option<BlogCategory>) -> anyhow::Result<Vec<Blog>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {BLOG_COLUMNS} FROM blogs
               WHERE status = 'PUBLISHED' AND is_active
                 AND ($1::TEXT IS NULL OR category = $1)
               ORDER BY published_at DESC NULLS LAST"#
        ))
        .bind(category.map(|c| c.as_str()))
        .fetch_all(&self.pool)
        .await?;
        map_all(rows)
    }

    async fn find_published_by_slug(&self, slug: &str) -> anyhow::Result<Option<Blog>> {
        let row = sqlx::query(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE slug = $1 AND status = 'PUBLISHED' AND is_active"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        row.map(map_blog).transpose()
    }

    async fn find_published_by_id(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let row = sqlx::query(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1 AND status = 'PUBLISHED' AND is_active"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(map_blog).transpose()
    }

    async fn increment_views(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let row = sqlx::query(&format!(
            r#"UPDATE blogs SET view_count = view_count + 1
               WHERE id = $1 AND is_active
               RETURNING {BLOG_COLUMNS}"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(map_blog).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_write_errors_pass_through() {
        let err = map_write_error(sqlx::Error::RowNotFound, "post");
        assert!(err.downcast_ref::<SlugConflict>().is_none());
        assert!(err.downcast_ref::<sqlx::Error>().is_some());
    }
}
