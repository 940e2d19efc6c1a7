use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub path: String,
    /// base64 data URI for the preview frame.
    pub preview: String,
}
