use rust_decimal::Decimal;
use tracing::error;

use crate::domain::models::{Customer, ACTIVE_STATUS};
use crate::service::bank_account::BankAccountApi;
use crate::service::customer::CustomerApi;
use crate::service::health::HealthApi;

const RECENT_CUSTOMERS: usize = 5;

#[derive(Debug, Default)]
pub struct Dashboard {
    pub total_customers: usize,
    pub total_accounts: usize,
    pub total_balance: Decimal,
    pub active_accounts: usize,
    pub recent_customers: Vec<Customer>,
    pub backend_connected: bool,
    pub is_checking_connection: bool,
}

impl Dashboard {
    pub async fn init(
        health: &dyn HealthApi,
        customers: &dyn CustomerApi,
        accounts: &dyn BankAccountApi,
    ) -> Self {
        let mut dashboard = Dashboard {
            is_checking_connection: true,
            ..Default::default()
        };
        dashboard.backend_connected = health.check_customers_endpoint().await;
        dashboard.is_checking_connection = false;
        if dashboard.backend_connected {
            dashboard.load(customers, accounts).await;
        }
        dashboard
    }

    // The two panels load independently; a failure in one leaves the other intact.
    async fn load(&mut self, customers: &dyn CustomerApi, accounts: &dyn BankAccountApi) {
        let (customers, accounts) = tokio::join!(customers.get_customers(), accounts.get_accounts());

        match customers {
            Ok(customers) => {
                self.total_customers = customers.len();
                self.recent_customers = customers
                    .iter()
                    .rev()
                    .take(RECENT_CUSTOMERS)
                    .cloned()
                    .collect();
            }
            Err(err) => error!("Error loading customers: {}", err),
        }

        match accounts {
            Ok(accounts) => {
                self.total_accounts = accounts.len();
                self.total_balance = accounts.iter().map(|account| account.balance).sum();
                self.active_accounts = accounts
                    .iter()
                    .filter(|account| account.status.as_deref() == Some(ACTIVE_STATUS))
                    .count();
            }
            Err(err) => error!("Error loading accounts: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mocks::{
        unreachable, MockBankAccountServices, MockCustomerServices, MockHealthServices,
    };
    use crate::domain::models::BankAccount;
    use rust_decimal_macros::dec;

    fn customer(id: i64) -> Customer {
        Customer {
            id,
            name: format!("Customer {}", id),
            email: format!("c{}@example.com", id),
            phone: None,
        }
    }

    fn account(balance: Decimal, status: &str) -> BankAccount {
        BankAccount {
            id: format!("acc-{}", balance),
            balance,
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_connected_dashboard() {
        let customers = MockCustomerServices::default();
        customers.push_list_response(Ok((1..=7).map(customer).collect()));
        let accounts = MockBankAccountServices::default();
        accounts.push_list_response(Ok(vec![
            account(dec!(100), "ACTIVE"),
            account(dec!(40.5), "active"),
            account(dec!(9.5), "SUSPENDED"),
        ]));

        let dashboard = Dashboard::init(
            &MockHealthServices { connected: true },
            &customers,
            &accounts,
        )
        .await;

        assert!(dashboard.backend_connected);
        assert!(!dashboard.is_checking_connection);
        assert_eq!(dashboard.total_customers, 7);
        let recent: Vec<i64> = dashboard.recent_customers.iter().map(|c| c.id).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
        assert_eq!(dashboard.total_accounts, 3);
        assert_eq!(dashboard.total_balance, dec!(150));
        assert_eq!(dashboard.active_accounts, 1);
    }

    #[tokio::test]
    async fn test_disconnected_dashboard_skips_loading() {
        let customers = MockCustomerServices::default();
        let accounts = MockBankAccountServices::default();

        let dashboard = Dashboard::init(
            &MockHealthServices { connected: false },
            &customers,
            &accounts,
        )
        .await;

        assert!(!dashboard.backend_connected);
        assert!(customers.calls().is_empty());
        assert!(accounts.calls().is_empty());
    }

    #[tokio::test]
    async fn test_partial_failure() {
        let customers = MockCustomerServices::default();
        customers.push_list_response(Err(unreachable()));
        let accounts = MockBankAccountServices::default();
        accounts.push_list_response(Ok(vec![account(dec!(10), "ACTIVE")]));

        let dashboard = Dashboard::init(
            &MockHealthServices { connected: true },
            &customers,
            &accounts,
        )
        .await;

        assert_eq!(dashboard.total_customers, 0);
        assert_eq!(dashboard.total_accounts, 1);
    }
}
