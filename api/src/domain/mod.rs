pub mod blogs;
pub mod contact;
pub mod dates;
pub mod portfolio;
pub mod validation;
