// src/models.rs
pub mod check_status;

pub use check_status::CheckStatus;
