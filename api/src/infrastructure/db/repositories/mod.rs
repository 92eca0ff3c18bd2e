pub mod blog_repository_sqlx;
pub mod certification_repository_sqlx;
pub mod education_repository_sqlx;
pub mod experience_repository_sqlx;
pub mod personal_info_repository_sqlx;
pub mod project_repository_sqlx;
pub mod skill_repository_sqlx;
