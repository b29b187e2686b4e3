use axum::extract::Multipart;
use bytes::Bytes;

use crate::domain::Document;

pub(super) enum UploadError {
    /// The expected field was absent from the multipart body.
    Missing,
    Read(String),
}

/// Pulls the named file field out of a multipart body and materializes it as
/// a request-scoped [`Document`] plus its bytes. Fields with other names are
/// skipped.
pub(super) async fn read_file_field(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<(Document, Bytes), UploadError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => return Err(UploadError::Missing),
            Err(e) => return Err(UploadError::Read(format!("Failed to read multipart: {}", e))),
        };

        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => return Err(UploadError::Read(format!("Failed to read file: {}", e))),
        };

        tracing::debug!(
            filename = %filename,
            content_type = %content_type,
            bytes = data.len(),
            "File upload received"
        );

        let document = Document::new(filename, content_type, data.len() as u64);
        return Ok((document, data));
    }
}
