//! Binary content encoding.
//!
//! File content travels inside JSON bodies, so raw bytes are carried as
//! base64 text. Downloads are the mirror image: the caller picks an output
//! format and the service does the encoding; the client passes the chosen
//! format through as a query parameter and returns the body untouched.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

/// A file payload for upload via [`Files::update`](crate::Files::update).
///
/// Uploads are full-replace: supply every field the file has, not a partial
/// patch.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// MIME type of the content, e.g. `image/png`.
    pub content_type: String,

    /// File name as it should be held by the service.
    pub filename: String,

    /// Content size in bytes.
    pub size: u64,

    /// Raw file content.
    pub content: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload payload, deriving `size` from the content length.
    #[must_use]
    pub fn new(
        content_type: impl Into<String>,
        filename: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            filename: filename.into(),
            size: content.len() as u64,
            content,
        }
    }

    /// Encodes the payload into the JSON body the service expects, with the
    /// raw content carried as base64 text in the `content` field.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({
            "content_type": self.content_type,
            "filename": self.filename,
            "size": self.size,
            "content": STANDARD.encode(&self.content),
        })
    }
}

/// Output format for file and report downloads.
///
/// Pass-through instruction to the remote service: the response body is
/// returned as-is, already in the requested form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    /// Raw byte stream.
    Stream,
    /// Base64-encoded text.
    Base64,
}

impl DownloadFormat {
    /// Returns the query parameter value for this format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stream => "STREAM",
            Self::Base64 => "BASE64",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_body_fields() {
        let upload = FileUpload::new("image/png", "passport.png", vec![0x89, 0x50, 0x4e, 0x47]);
        let body = upload.to_body();

        assert_eq!(body["content_type"], "image/png");
        assert_eq!(body["filename"], "passport.png");
        assert_eq!(body["size"], 4);
        assert_eq!(body["content"], STANDARD.encode([0x89, 0x50, 0x4e, 0x47]));
    }

    #[test]
    fn test_upload_content_round_trips() {
        let bytes: Vec<u8> = (0..=255).collect();
        let upload = FileUpload::new("application/octet-stream", "blob.bin", bytes.clone());
        let body = upload.to_body();

        let encoded = body["content"].as_str().expect("content is a string");
        let decoded = STANDARD.decode(encoded).expect("content decodes");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_upload_size_derived_from_content() {
        let upload = FileUpload::new("text/plain", "empty.txt", Vec::new());
        assert_eq!(upload.size, 0);
        assert_eq!(upload.to_body()["content"], "");
    }

    #[test]
    fn test_download_format_as_str() {
        assert_eq!(DownloadFormat::Stream.as_str(), "STREAM");
        assert_eq!(DownloadFormat::Base64.as_str(), "BASE64");
        assert_eq!(DownloadFormat::Base64.to_string(), "BASE64");
    }
}
