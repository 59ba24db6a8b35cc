pub mod accounts;
pub mod login;
pub mod sessions;
pub mod token;
