pub mod certifications;
pub mod educations;
pub mod experiences;
pub mod personal_info;
pub mod projects;
pub mod skills;

use crate::domain::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
