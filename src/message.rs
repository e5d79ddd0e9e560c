// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: String,
    pub response: String,
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
}

impl ChatResponse {
    pub fn success(response: impl Into<String>, image_path: Option<String>) -> Self {
        Self {
            status: "success".to_string(),
            response: response.into(),
            image_path,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
