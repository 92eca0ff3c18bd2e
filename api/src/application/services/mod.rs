pub mod mail;
pub mod rate_limit;
