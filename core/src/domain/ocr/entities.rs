use bytes::Bytes;

/// Photographed label as received from the caller.
#[derive(Debug, Clone)]
pub struct OcrImage {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}
