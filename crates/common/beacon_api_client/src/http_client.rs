use std::time::Duration;

use async_trait::async_trait;
use beacon_query_api_types_common::{
    content_type::{ContentType, JSON_ACCEPT_PRIORITY},
    response::ErrorMessage,
};
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue},
};
use tracing::{debug, trace};

use crate::{error::Error, query::Query};

/// A GET request against the beacon API, relative to the node's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Query,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
        }
    }

    pub fn with_query(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Request target as sent on the wire, e.g. `/eth/v1/beacon/states/head/validators?id=7`.
    pub fn path_and_query(&self) -> String {
        match self.query.to_query_string() {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    pub fn url(&self, base_url: &Url) -> Result<Url, Error> {
        let mut url = base_url.join(&self.path)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub content_type: ContentType,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: ContentType::Json,
            body: body.into(),
        }
    }
}

/// Transport used by the endpoint functions.
///
/// Implementations return `Ok(None)` when the node answers 404 and an error for every other
/// non-success status.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, request: ApiRequest) -> Result<Option<ApiResponse>, Error>;
}

#[derive(Debug, Clone)]
pub struct ClientWithBaseUrl {
    client: Client,
    base_url: Url,
}

impl ClientWithBaseUrl {
    pub fn new(url: Url, request_timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn from_components(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl ApiClient for ClientWithBaseUrl {
    async fn get(&self, request: ApiRequest) -> Result<Option<ApiResponse>, Error> {
        let url = request.url(&self.base_url)?;
        trace!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(JSON_ACCEPT_PRIORITY))
            .send()
            .await?;

        let status = response.status();
        debug!("GET {} returned {status}", request.path_and_query());

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorMessage>()
                .await
                .ok()
                .map(|error_message| error_message.message);
            return Err(Error::UnexpectedStatus { status, message });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(ContentType::from)
            .unwrap_or(ContentType::Json);

        Ok(Some(ApiResponse {
            content_type,
            body: response.bytes().await?.to_vec(),
        }))
    }
}
