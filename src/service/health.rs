use async_trait::async_trait;

use super::rest::RestClient;

/// Connectivity checks. Failures are answers here, never errors.
#[async_trait]
pub trait HealthApi: Sync + Send {
    async fn check_backend_health(&self) -> bool;
    async fn check_customers_endpoint(&self) -> bool;
}

pub struct HealthCheckService {
    rest: RestClient,
}

impl HealthCheckService {
    pub fn new(rest: &RestClient) -> Self {
        HealthCheckService {
            rest: rest.named("HealthCheckService"),
        }
    }
}

#[async_trait]
impl HealthApi for HealthCheckService {
    async fn check_backend_health(&self) -> bool {
        matches!(self.rest.ping("/health").await, Ok(response) if response.status == 200)
    }

    async fn check_customers_endpoint(&self) -> bool {
        self.rest
            .get::<serde_json::Value>("/customers", 0)
            .await
            .is_ok()
    }
}
