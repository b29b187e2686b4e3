mod analysis_service;

pub use analysis_service::{AnalysisError, AnalysisService, PdfComparison};
