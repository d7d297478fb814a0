use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

/// Body of the waitlist sign-up call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub email: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("failed to build contact request: {0}")]
    Build(String),
    #[error("contact request failed: {0}")]
    Network(String),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

/// Anything that can deliver a [`ContactRequest`]. Only success or failure
/// matters to the page; the response body is never read.
#[allow(async_fn_in_trait)]
pub trait ContactClient {
    async fn add_contact(&self, request: &ContactRequest) -> Result<(), ContactError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpContactClient {
    endpoint: String,
}

impl HttpContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactClient for HttpContactClient {
    async fn add_contact(&self, request: &ContactRequest) -> Result<(), ContactError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| ContactError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ContactError::Status(response.status()))
        }
    }
}
