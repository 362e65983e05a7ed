#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use beacon_query_api_types_common::content_type::ContentType;
use beacon_query_client::{ApiClient, ApiRequest, ApiResponse, Error};
use reqwest::StatusCode;
use serde_json::Value;

pub enum MockResponse {
    Found(ApiResponse),
    NotFound,
    Status(StatusCode, Option<String>),
    /// Never answers, used to exercise cancellation.
    Hang,
}

/// In-memory [`ApiClient`] that records every request and replays a canned response.
pub struct MockClient {
    response: MockResponse,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockClient {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_data(data: Value) -> Self {
        Self::new(MockResponse::Found(ApiResponse::json(
            serde_json::json!({ "data": data }).to_string(),
        )))
    }

    pub fn not_found() -> Self {
        Self::new(MockResponse::NotFound)
    }

    pub fn with_body(content_type: ContentType, body: &[u8]) -> Self {
        Self::new(MockResponse::Found(ApiResponse {
            content_type,
            body: body.to_vec(),
        }))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("poisoned lock").clone()
    }

    pub fn last_target(&self) -> String {
        self.requests()
            .last()
            .expect("no request was issued")
            .path_and_query()
    }
}

#[async_trait]
impl ApiClient for MockClient {
    async fn get(&self, request: ApiRequest) -> Result<Option<ApiResponse>, Error> {
        self.requests.lock().expect("poisoned lock").push(request);

        match &self.response {
            MockResponse::Found(response) => Ok(Some(response.clone())),
            MockResponse::NotFound => Ok(None),
            MockResponse::Status(status, message) => Err(Error::UnexpectedStatus {
                status: *status,
                message: message.clone(),
            }),
            MockResponse::Hang => std::future::pending().await,
        }
    }
}

pub fn hex_of(byte: &str, len: usize) -> String {
    format!("0x{}", byte.repeat(len))
}
