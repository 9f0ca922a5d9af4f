//! healthlens-export
//!
//! PDF report generation: text measurement, paginated layout and PDF
//! serialization of a `ReportInput`.

pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod render;
pub mod styles;

pub use error::RenderError;
pub use render::ReportRenderer;
