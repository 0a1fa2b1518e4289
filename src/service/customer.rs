use async_trait::async_trait;

use crate::domain::models::Customer;

use super::error::ServiceError;
use super::rest::{RestClient, COLLECTION_RETRIES, ENTITY_RETRIES};

#[async_trait]
pub trait CustomerApi: Sync + Send {
    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn get_customer(&self, id: i64) -> Result<Customer, ServiceError>;
    async fn add_customer(&self, customer: &Customer) -> Result<Customer, ServiceError>;
    async fn update_customer(&self, customer: &Customer) -> Result<Customer, ServiceError>;
    async fn delete_customer(&self, id: i64) -> Result<(), ServiceError>;
}

pub struct CustomerService {
    rest: RestClient,
}

impl CustomerService {
    pub fn new(rest: &RestClient) -> Self {
        CustomerService {
            rest: rest.named("CustomerService"),
        }
    }
}

#[async_trait]
impl CustomerApi for CustomerService {
    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.rest.get("/customers", COLLECTION_RETRIES).await
    }

    async fn get_customer(&self, id: i64) -> Result<Customer, ServiceError> {
        self.rest
            .get(&format!("/customers/{}", id), ENTITY_RETRIES)
            .await
    }

    async fn add_customer(&self, customer: &Customer) -> Result<Customer, ServiceError> {
        self.rest.post("/customers", customer).await
    }

    async fn update_customer(&self, customer: &Customer) -> Result<Customer, ServiceError> {
        self.rest.put("/customers", customer).await
    }

    async fn delete_customer(&self, id: i64) -> Result<(), ServiceError> {
        self.rest.delete(&format!("/customers/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::rest::tests::client_with;
    use crate::service::transport::{ApiResponse, MockHttpTransport};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_customers() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::GET && request.url == "http://backend/api/customers"
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::new(
                    200,
                    json!([{ "id": 1, "name": "Ada", "email": "ada@example.com" }]).to_string(),
                ))
            });

        let service = CustomerService::new(&client_with(transport));
        let customers = service.get_customers().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_update_customer_puts_collection() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::PUT
                    && request.url == "http://backend/api/customers"
                    && request.body.as_ref().map(|body| body["id"].clone()) == Some(json!(5))
            })
            .times(1)
            .returning(|request| Ok(ApiResponse::new(200, request.body.unwrap().to_string())));

        let service = CustomerService::new(&client_with(transport));
        let customer = Customer {
            id: 5,
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: None,
        };
        assert_eq!(service.update_customer(&customer).await.unwrap(), customer);
    }

    #[tokio::test]
    async fn test_delete_customer() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::DELETE && request.url == "http://backend/api/customers/5"
            })
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, "")));

        let service = CustomerService::new(&client_with(transport));
        service.delete_customer(5).await.unwrap();
    }
}
