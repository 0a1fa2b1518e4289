use std::sync::Arc;

use crate::configs::settings::BackendSettings;

use bank_account::{BankAccountApi, BankAccountService};
use customer::{CustomerApi, CustomerService};
use health::{HealthApi, HealthCheckService};
use operation::{AccountOperationApi, AccountOperationService};
use rest::RestClient;
use transport::ReqwestTransport;

pub mod bank_account;
pub mod customer;
pub mod error;
pub mod health;
pub mod operation;
pub mod rest;
pub mod transport;

/// Every REST resource wrapper the console talks to, sharing one transport.
pub struct ConsoleServices {
    pub customers: Box<dyn CustomerApi>,
    pub accounts: Box<dyn BankAccountApi>,
    pub operations: Box<dyn AccountOperationApi>,
    pub health: Box<dyn HealthApi>,
}

impl ConsoleServices {
    pub fn new(settings: &BackendSettings) -> Self {
        let transport = Arc::new(ReqwestTransport::new(reqwest::Client::new()));
        let rest = RestClient::new(transport, &settings.base_url, settings.retry_delay());
        Self {
            customers: Box::new(CustomerService::new(&rest)),
            accounts: Box::new(BankAccountService::new(&rest)),
            operations: Box::new(AccountOperationService::new(&rest)),
            health: Box::new(HealthCheckService::new(&rest)),
        }
    }
}
