use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::models::{AccountOperation, BankAccount, Customer};
use crate::domain::requests::{
    CreateCurrentAccountRequest, CreateSavingAccountRequest, OperationRequest, TransferRequest,
};
use crate::service::bank_account::BankAccountApi;
use crate::service::customer::CustomerApi;
use crate::service::error::ServiceError;
use crate::service::health::HealthApi;
use crate::service::operation::AccountOperationApi;

pub fn unreachable() -> ServiceError {
    ServiceError::Unreachable {
        base_url: "http://localhost:4000/api".to_string(),
    }
}

fn next<T: Clone>(queue: &Mutex<VecDeque<Result<T, ServiceError>>>, empty: T) -> Result<T, ServiceError> {
    queue.lock().unwrap().pop_front().unwrap_or(Ok(empty))
}

#[derive(Default)]
pub struct MockCustomerServices {
    list_responses: Mutex<VecDeque<Result<Vec<Customer>, ServiceError>>>,
    customer: Mutex<Option<Customer>>,
    save_response: Mutex<Option<Result<Customer, ServiceError>>>,
    delete_response: Mutex<Option<Result<(), ServiceError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockCustomerServices {
    /// Served by `get_customer`; without it the lookup is a 404.
    pub fn set_customer(&self, customer: Customer) {
        *self.customer.lock().unwrap() = Some(customer);
    }
    pub fn push_list_response(&self, response: Result<Vec<Customer>, ServiceError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }
    pub fn set_save_response(&self, response: Result<Customer, ServiceError>) {
        *self.save_response.lock().unwrap() = Some(response);
    }
    pub fn set_delete_response(&self, response: Result<(), ServiceError>) {
        *self.delete_response.lock().unwrap() = Some(response);
    }
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CustomerApi for MockCustomerServices {
    async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.record("get_customers".to_string());
        next(&self.list_responses, vec![])
    }

    async fn get_customer(&self, id: i64) -> Result<Customer, ServiceError> {
        self.record(format!("get_customer:{}", id));
        self.customer
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ServiceError::from_status(404, "/customers"))
    }

    async fn add_customer(&self, customer: &Customer) -> Result<Customer, ServiceError> {
        self.record(format!("add_customer:{}", customer.name));
        self.save_response.lock().unwrap().take().unwrap()
    }

    async fn update_customer(&self, customer: &Customer) -> Result<Customer, ServiceError> {
        self.record(format!("update_customer:{}", customer.id));
        self.save_response.lock().unwrap().take().unwrap()
    }

    async fn delete_customer(&self, id: i64) -> Result<(), ServiceError> {
        self.record(format!("delete_customer:{}", id));
        self.delete_response.lock().unwrap().take().unwrap_or(Ok(()))
    }
}

#[derive(Default)]
pub struct MockBankAccountServices {
    list_responses: Mutex<VecDeque<Result<Vec<BankAccount>, ServiceError>>>,
    account: Mutex<Option<BankAccount>>,
    save_response: Mutex<Option<Result<BankAccount, ServiceError>>>,
    delete_response: Mutex<Option<Result<(), ServiceError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockBankAccountServices {
    /// Served by `get_account`; without it the lookup takes the save response.
    pub fn set_account(&self, account: BankAccount) {
        *self.account.lock().unwrap() = Some(account);
    }
    pub fn push_list_response(&self, response: Result<Vec<BankAccount>, ServiceError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }
    pub fn set_save_response(&self, response: Result<BankAccount, ServiceError>) {
        *self.save_response.lock().unwrap() = Some(response);
    }
    pub fn set_delete_response(&self, response: Result<(), ServiceError>) {
        *self.delete_response.lock().unwrap() = Some(response);
    }
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
    fn saved(&self) -> Result<BankAccount, ServiceError> {
        self.save_response.lock().unwrap().take().unwrap()
    }
}

#[async_trait]
impl BankAccountApi for MockBankAccountServices {
    async fn get_accounts(&self) -> Result<Vec<BankAccount>, ServiceError> {
        self.record("get_accounts".to_string());
        next(&self.list_responses, vec![])
    }

    async fn get_account(&self, id: &str) -> Result<BankAccount, ServiceError> {
        self.record(format!("get_account:{}", id));
        match self.account.lock().unwrap().clone() {
            Some(account) => Ok(account),
            None => self.saved(),
        }
    }

    async fn get_accounts_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<BankAccount>, ServiceError> {
        self.record(format!("get_accounts_by_customer:{}", customer_id));
        next(&self.list_responses, vec![])
    }

    async fn add_account(&self, account: &BankAccount) -> Result<BankAccount, ServiceError> {
        self.record(format!("add_account:{}", account.balance));
        self.saved()
    }

    async fn update_account(&self, account: &BankAccount) -> Result<BankAccount, ServiceError> {
        self.record(format!("update_account:{}", account.id));
        self.saved()
    }

    async fn delete_account(&self, id: &str) -> Result<(), ServiceError> {
        self.record(format!("delete_account:{}", id));
        self.delete_response.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn create_current_account(
        &self,
        request: &CreateCurrentAccountRequest,
    ) -> Result<BankAccount, ServiceError> {
        self.record(format!(
            "create_current_account:{}:{}:{}",
            request.customer_id, request.initial_balance, request.overdraft
        ));
        self.saved()
    }

    async fn create_saving_account(
        &self,
        request: &CreateSavingAccountRequest,
    ) -> Result<BankAccount, ServiceError> {
        self.record(format!(
            "create_saving_account:{}:{}:{}",
            request.customer_id, request.initial_balance, request.interest_rate
        ));
        self.saved()
    }
}

#[derive(Default)]
pub struct MockOperationServices {
    list_responses: Mutex<VecDeque<Result<Vec<AccountOperation>, ServiceError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockOperationServices {
    pub fn push_list_response(&self, response: Result<Vec<AccountOperation>, ServiceError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AccountOperationApi for MockOperationServices {
    async fn get_operations_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountOperation>, ServiceError> {
        self.record(format!("get_operations_by_account:{}", account_id));
        next(&self.list_responses, vec![])
    }

    async fn get_operation(&self, id: i64) -> Result<AccountOperation, ServiceError> {
        self.record(format!("get_operation:{}", id));
        Err(unreachable())
    }

    async fn add_debit_operation(
        &self,
        request: &OperationRequest,
    ) -> Result<AccountOperation, ServiceError> {
        self.record(format!("add_debit_operation:{}", request.account_id));
        Err(unreachable())
    }

    async fn add_credit_operation(
        &self,
        request: &OperationRequest,
    ) -> Result<AccountOperation, ServiceError> {
        self.record(format!("add_credit_operation:{}", request.account_id));
        Err(unreachable())
    }

    async fn add_transfer_operation(
        &self,
        request: &TransferRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        self.record(format!("add_transfer_operation:{}", request.source_account_id));
        Err(unreachable())
    }
}

pub struct MockHealthServices {
    pub connected: bool,
}

#[async_trait]
impl HealthApi for MockHealthServices {
    async fn check_backend_health(&self) -> bool {
        self.connected
    }

    async fn check_customers_endpoint(&self) -> bool {
        self.connected
    }
}
