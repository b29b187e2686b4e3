mod document;
mod storage_path;

pub use document::{Document, DocumentId};
pub use storage_path::StoragePath;
