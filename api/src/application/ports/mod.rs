pub mod blog_repository;
pub mod certification_repository;
pub mod education_repository;
pub mod email_sender;
pub mod experience_repository;
pub mod personal_info_repository;
pub mod project_repository;
pub mod skill_repository;
