// frontend_jalsetu/src/model/mod.rs

pub mod form;
pub mod language;
pub mod methods;
pub mod report;
pub mod roof;

pub use form::{FormDraft, FormField, ReportForm, ReportParams, ValidForm};
pub use report::ReportResult;
pub use roof::RoofType;
