use async_trait::async_trait;

use crate::domain::models::AccountOperation;
use crate::domain::requests::{OperationRequest, TransferRequest};

use super::error::ServiceError;
use super::rest::{RestClient, COLLECTION_RETRIES, ENTITY_RETRIES};

#[async_trait]
pub trait AccountOperationApi: Sync + Send {
    async fn get_operations_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountOperation>, ServiceError>;
    async fn get_operation(&self, id: i64) -> Result<AccountOperation, ServiceError>;
    async fn add_debit_operation(
        &self,
        request: &OperationRequest,
    ) -> Result<AccountOperation, ServiceError>;
    async fn add_credit_operation(
        &self,
        request: &OperationRequest,
    ) -> Result<AccountOperation, ServiceError>;
    /// The backend's transfer response has no fixed shape.
    async fn add_transfer_operation(
        &self,
        request: &TransferRequest,
    ) -> Result<serde_json::Value, ServiceError>;
}

pub struct AccountOperationService {
    rest: RestClient,
}

impl AccountOperationService {
    pub fn new(rest: &RestClient) -> Self {
        AccountOperationService {
            rest: rest.named("AccountOperationService"),
        }
    }
}

#[async_trait]
impl AccountOperationApi for AccountOperationService {
    async fn get_operations_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountOperation>, ServiceError> {
        self.rest
            .get(
                &format!("/accounts/{}/operations", account_id),
                COLLECTION_RETRIES,
            )
            .await
    }

    async fn get_operation(&self, id: i64) -> Result<AccountOperation, ServiceError> {
        self.rest
            .get(&format!("/operations/{}", id), ENTITY_RETRIES)
            .await
    }

    async fn add_debit_operation(
        &self,
        request: &OperationRequest,
    ) -> Result<AccountOperation, ServiceError> {
        self.rest.post("/accounts/debit", request).await
    }

    async fn add_credit_operation(
        &self,
        request: &OperationRequest,
    ) -> Result<AccountOperation, ServiceError> {
        self.rest.post("/accounts/credit", request).await
    }

    async fn add_transfer_operation(
        &self,
        request: &TransferRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        self.rest.post("/accounts/transfer", request).await
    }
}
