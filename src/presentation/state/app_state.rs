use std::sync::Arc;

use crate::application::ports::{DocumentAnalyzer, FileLoader, TextCompletionClient};
use crate::application::services::AnalysisService;

pub struct AppState<F, A, C>
where
    F: FileLoader,
    A: DocumentAnalyzer,
    C: TextCompletionClient,
{
    pub analysis_service: Arc<AnalysisService<F, A, C>>,
}

impl<F, A, C> Clone for AppState<F, A, C>
where
    F: FileLoader,
    A: DocumentAnalyzer,
    C: TextCompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
        }
    }
}
