use reqwest::header::HeaderValue;

pub const JSON_ACCEPT_PRIORITY: &str = "application/json;q=1";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const SSZ_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Ssz,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => JSON_CONTENT_TYPE,
            ContentType::Ssz => SSZ_CONTENT_TYPE,
        }
    }
}

impl From<&str> for ContentType {
    fn from(content_type: &str) -> Self {
        if content_type.contains(SSZ_CONTENT_TYPE) {
            ContentType::Ssz
        } else {
            ContentType::Json
        }
    }
}

impl From<&HeaderValue> for ContentType {
    fn from(header_value: &HeaderValue) -> Self {
        header_value
            .to_str()
            .map(ContentType::from)
            .unwrap_or(ContentType::Json)
    }
}
