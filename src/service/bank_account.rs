use async_trait::async_trait;

use crate::domain::models::BankAccount;
use crate::domain::requests::{CreateCurrentAccountRequest, CreateSavingAccountRequest};

use super::error::ServiceError;
use super::rest::{RestClient, COLLECTION_RETRIES, ENTITY_RETRIES};

#[async_trait]
pub trait BankAccountApi: Sync + Send {
    async fn get_accounts(&self) -> Result<Vec<BankAccount>, ServiceError>;
    async fn get_account(&self, id: &str) -> Result<BankAccount, ServiceError>;
    async fn get_accounts_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<BankAccount>, ServiceError>;
    async fn add_account(&self, account: &BankAccount) -> Result<BankAccount, ServiceError>;
    async fn update_account(&self, account: &BankAccount) -> Result<BankAccount, ServiceError>;
    async fn delete_account(&self, id: &str) -> Result<(), ServiceError>;
    async fn create_current_account(
        &self,
        request: &CreateCurrentAccountRequest,
    ) -> Result<BankAccount, ServiceError>;
    async fn create_saving_account(
        &self,
        request: &CreateSavingAccountRequest,
    ) -> Result<BankAccount, ServiceError>;
}

pub struct BankAccountService {
    rest: RestClient,
}

impl BankAccountService {
    pub fn new(rest: &RestClient) -> Self {
        BankAccountService {
            rest: rest.named("BankAccountService"),
        }
    }
}

#[async_trait]
impl BankAccountApi for BankAccountService {
    async fn get_accounts(&self) -> Result<Vec<BankAccount>, ServiceError> {
        self.rest.get("/accounts", COLLECTION_RETRIES).await
    }

    async fn get_account(&self, id: &str) -> Result<BankAccount, ServiceError> {
        self.rest
            .get(&format!("/accounts/{}", id), ENTITY_RETRIES)
            .await
    }

    async fn get_accounts_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<BankAccount>, ServiceError> {
        self.rest
            .get(
                &format!("/accounts/customer/{}", customer_id),
                COLLECTION_RETRIES,
            )
            .await
    }

    async fn add_account(&self, account: &BankAccount) -> Result<BankAccount, ServiceError> {
        self.rest.post("/accounts", account).await
    }

    async fn update_account(&self, account: &BankAccount) -> Result<BankAccount, ServiceError> {
        self.rest.put("/accounts", account).await
    }

    async fn delete_account(&self, id: &str) -> Result<(), ServiceError> {
        self.rest.delete(&format!("/accounts/{}", id)).await
    }

    async fn create_current_account(
        &self,
        request: &CreateCurrentAccountRequest,
    ) -> Result<BankAccount, ServiceError> {
        self.rest.post("/accounts/current", request).await
    }

    async fn create_saving_account(
        &self,
        request: &CreateSavingAccountRequest,
    ) -> Result<BankAccount, ServiceError> {
        self.rest.post("/accounts/saving", request).await
    }
}
