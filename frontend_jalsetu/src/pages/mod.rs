// frontend_jalsetu/src/pages/mod.rs

pub mod home;
pub mod not_found;
pub mod report;
