// frontend_jalsetu/src/api/mod.rs

pub mod report;
pub mod utils;
