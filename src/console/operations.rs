use tracing::error;

use crate::common::money::Money;
use crate::domain::models::{AccountOperation, BankAccount, OperationType};
use crate::service::operation::AccountOperationApi;

use super::{list_view, ListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationsEvent {
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationRow {
    pub date: String,
    pub operation_type: OperationType,
    pub amount: String,
    pub description: String,
}

/// Modal listing one account's operations, newest first.
#[derive(Debug)]
pub struct OperationsViewer {
    pub account: BankAccount,
    pub operations: Vec<AccountOperation>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl OperationsViewer {
    pub async fn open(account: BankAccount, api: &dyn AccountOperationApi) -> Self {
        let mut viewer = OperationsViewer {
            account,
            operations: Vec::new(),
            is_loading: false,
            error_message: None,
        };
        viewer.load(api).await;
        viewer
    }

    /// Also serves as the retry action after a failed fetch.
    pub async fn load(&mut self, api: &dyn AccountOperationApi) {
        self.is_loading = true;
        self.error_message = None;
        match api.get_operations_by_account(&self.account.id).await {
            Ok(mut operations) => {
                operations.sort_by(|a, b| b.operation_date.cmp(&a.operation_date));
                self.operations = operations;
            }
            Err(err) => {
                error!("Error loading operations for {}: {}", self.account.id, err);
                self.error_message = Some(err.to_string());
            }
        }
        self.is_loading = false;
    }

    pub fn view(&self) -> ListView<'_, AccountOperation> {
        list_view(
            self.is_loading,
            self.error_message.as_deref(),
            &self.operations,
        )
    }

    pub fn balance(&self) -> String {
        Money::usd(self.account.balance).to_string()
    }

    pub fn rows(&self) -> Vec<OperationRow> {
        self.operations
            .iter()
            .map(|operation| {
                let sign = match operation.operation_type {
                    OperationType::Credit => "+",
                    OperationType::Debit => "-",
                };
                OperationRow {
                    date: operation
                        .operation_date
                        .format("%-m/%-d/%y, %-I:%M %p")
                        .to_string(),
                    operation_type: operation.operation_type,
                    amount: format!("{}{}", sign, Money::usd(operation.amount)),
                    description: operation.description.clone().unwrap_or_default(),
                }
            })
            .collect()
    }

    pub fn close(&self) -> OperationsEvent {
        OperationsEvent::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mocks::{unreachable, MockOperationServices};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn operation(id: i64, day: u32, operation_type: OperationType) -> AccountOperation {
        AccountOperation {
            id,
            amount: dec!(25),
            operation_date: Utc.with_ymd_and_hms(2024, 3, day, 14, 5, 0).unwrap(),
            operation_type,
            bank_account_id: "a1".to_string(),
            description: Some(format!("op {}", id)),
        }
    }

    fn account() -> BankAccount {
        BankAccount {
            id: "a1".to_string(),
            balance: dec!(1000),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_sorted_newest_first() {
        let services = MockOperationServices::default();
        services.push_list_response(Ok(vec![
            operation(1, 2, OperationType::Credit),
            operation(2, 9, OperationType::Debit),
            operation(3, 5, OperationType::Credit),
        ]));

        let viewer = OperationsViewer::open(account(), &services).await;
        let ids: Vec<i64> = viewer.operations.iter().map(|op| op.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(services.calls(), vec!["get_operations_by_account:a1"]);
        assert_eq!(viewer.balance(), "$1,000.00");
    }

    #[tokio::test]
    async fn test_rows_are_signed() {
        let services = MockOperationServices::default();
        services.push_list_response(Ok(vec![
            operation(1, 2, OperationType::Credit),
            operation(2, 1, OperationType::Debit),
        ]));

        let viewer = OperationsViewer::open(account(), &services).await;
        let rows = viewer.rows();
        assert_eq!(rows[0].amount, "+$25.00");
        assert_eq!(rows[0].date, "3/2/24, 2:05 PM");
        assert_eq!(rows[1].amount, "-$25.00");
        assert_eq!(rows[1].description, "op 2");
    }

    #[tokio::test]
    async fn test_retry_reissues_same_request() {
        let services = MockOperationServices::default();
        services.push_list_response(Err(unreachable()));
        services.push_list_response(Ok(vec![]));

        let mut viewer = OperationsViewer::open(account(), &services).await;
        assert!(matches!(viewer.view(), ListView::Failed(_)));

        viewer.load(&services).await;
        assert_eq!(viewer.view(), ListView::Empty);
        assert_eq!(
            services.calls(),
            vec!["get_operations_by_account:a1", "get_operations_by_account:a1"]
        );
        assert_eq!(viewer.close(), OperationsEvent::Closed);
    }
}
