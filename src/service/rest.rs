use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use super::error::ServiceError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};

/// Retries applied to reads returning a collection.
pub const COLLECTION_RETRIES: u32 = 3;
/// Retries applied to reads returning a single entity.
pub const ENTITY_RETRIES: u32 = 2;

/// One REST resource root, e.g. `http://localhost:4000/api`.
///
/// Reads go through [`RestClient::get`], which re-issues the request up to
/// `retries` more times with a fixed delay. Mutations are attempted once.
/// Every failure is normalized into [`ServiceError`] and logged under the
/// owning service's name.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    retry_delay: Duration,
    service: &'static str,
}

impl RestClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str, retry_delay: Duration) -> Self {
        RestClient {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_delay,
            service: "RestClient",
        }
    }

    pub fn named(&self, service: &'static str) -> Self {
        RestClient {
            service,
            ..self.clone()
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        retries: u32,
    ) -> Result<T, ServiceError> {
        let mut attempt = 0;
        loop {
            let result = self
                .execute(ApiRequest::new(Method::GET, self.url(path)))
                .await
                .and_then(|response| decode(&response));
            match result {
                Ok(value) => return Ok(value),
                Err(err) if attempt < retries => {
                    attempt += 1;
                    warn!(
                        "{}: GET {} failed ({}), retry {}/{}",
                        self.service, path, err, attempt, retries
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(err) => return Err(self.report(err)),
            }
        }
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ServiceError> {
        self.execute(ApiRequest::new(Method::DELETE, self.url(path)))
            .await
            .map(|_| ())
            .map_err(|err| self.report(err))
    }

    /// Single GET without retry or decoding; the caller inspects the status.
    pub async fn ping(&self, path: &str) -> Result<ApiResponse, ServiceError> {
        self.execute(ApiRequest::new(Method::GET, self.url(path)))
            .await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|err| self.report(ServiceError::Client(err.to_string())))?;
        self.execute(ApiRequest::new(method, self.url(path)).with_body(body))
            .await
            .and_then(|response| decode(&response))
            .map_err(|err| self.report(err))
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ServiceError> {
        let url = request.url.clone();
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|err| match err {
                TransportError::Unreachable(_) => ServiceError::Unreachable {
                    base_url: self.base_url.clone(),
                },
                TransportError::Request(msg) => ServiceError::Client(msg),
            })?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ServiceError::from_status(response.status, &url))
        }
    }

    fn report(&self, err: ServiceError) -> ServiceError {
        error!("{} Error: {}", self.service, err);
        err
    }
}

// An empty body decodes as JSON `null` so `()` and `Option<_>` responses work.
fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ServiceError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|err| ServiceError::Client(err.to_string()))
}
