pub mod content_type;
pub mod id;
pub mod response;
