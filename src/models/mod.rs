//! Data models module
//!
//! Defines the content payload and the report context exposed to templates.

pub mod payload;
pub mod report;

pub use payload::ContentPayload;
pub use report::ReportContext;
