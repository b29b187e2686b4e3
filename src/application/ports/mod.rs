mod document_analyzer;
mod file_loader;
mod staging_store;
mod text_completion;

pub use document_analyzer::{DocumentAnalyzer, DocumentAnalyzerError};
pub use file_loader::{ExtractedText, FileLoader, FileLoaderError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use text_completion::TextCompletionClient;
