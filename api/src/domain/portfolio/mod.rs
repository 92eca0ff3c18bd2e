pub mod certification;
pub mod education;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod skill;
