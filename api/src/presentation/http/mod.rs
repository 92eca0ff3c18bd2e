pub mod auth;
pub mod blogs;
pub mod certifications;
pub mod contact;
pub mod educations;
pub mod error;
pub mod experiences;
pub mod health;
pub mod portfolio;
pub mod projects;
pub mod response;
pub mod skills;

#[cfg(test)]
pub(crate) mod test_support;
