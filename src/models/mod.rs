pub mod error;
pub mod report;

pub use error::{AnalysisError, Result};
pub use report::{AnalysisResult, Severity, Violation};
