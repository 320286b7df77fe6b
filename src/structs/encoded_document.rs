#[derive(Debug, Clone, PartialEq)]
pub struct EncodedDocument {
    pub file_name: String,
    pub media_type: String,
    pub data: String,
}
