use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    // Older backend builds embed the owner as `customerDTO`.
    #[serde(default, alias = "customerDTO", skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(flatten)]
    pub kind: AccountKind,
}

impl Default for BankAccount {
    fn default() -> Self {
        BankAccount {
            id: String::new(),
            balance: Decimal::ZERO,
            created_at: None,
            status: Some(ACTIVE_STATUS.to_string()),
            customer: None,
            kind: AccountKind::default(),
        }
    }
}

pub const ACTIVE_STATUS: &str = "ACTIVE";

impl BankAccount {
    pub fn customer_id(&self) -> Option<i64> {
        self.customer.as_ref().map(|customer| customer.id)
    }
}

/// Account subtype as discriminated by the backend's `type` field.
///
/// Unknown or missing discriminators map to `Standard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAccountKind", into = "RawAccountKind")]
pub enum AccountKind {
    Current { overdraft: Option<f64> },
    Saving { interest_rate: Option<f64> },
    Standard,
}

impl Default for AccountKind {
    fn default() -> Self {
        AccountKind::Current { overdraft: None }
    }
}

const CURRENT_ACCOUNT: &str = "CurrentAccount";
const SAVING_ACCOUNT: &str = "SavingAccount";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAccountKind {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overdraft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interest_rate: Option<f64>,
}

impl From<RawAccountKind> for AccountKind {
    fn from(raw: RawAccountKind) -> Self {
        match raw.kind.as_deref() {
            Some(CURRENT_ACCOUNT) => AccountKind::Current {
                overdraft: raw.overdraft,
            },
            Some(SAVING_ACCOUNT) => AccountKind::Saving {
                interest_rate: raw.interest_rate,
            },
            _ => AccountKind::Standard,
        }
    }
}

impl From<AccountKind> for RawAccountKind {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Current { overdraft } => RawAccountKind {
                kind: Some(CURRENT_ACCOUNT.to_string()),
                overdraft,
                interest_rate: None,
            },
            AccountKind::Saving { interest_rate } => RawAccountKind {
                kind: Some(SAVING_ACCOUNT.to_string()),
                overdraft: None,
                interest_rate,
            },
            AccountKind::Standard => RawAccountKind::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Debit,
    Credit,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Debit => "DEBIT",
            OperationType::Credit => "CREDIT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOperation {
    pub id: i64,
    pub amount: Decimal,
    #[serde(with = "timestamp")]
    pub operation_date: DateTime<Utc>,
    #[serde(alias = "type")]
    pub operation_type: OperationType,
    #[serde(default)]
    pub bank_account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// Superseded ledger-entry shape; no view consumes it.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub balance: Decimal,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_saving_account_from_backend() {
        let account: BankAccount = serde_json::from_value(json!({
            "id": "a1",
            "balance": 100,
            "type": "SavingAccount",
            "interestRate": 2.5,
            "status": "ACTIVE"
        }))
        .unwrap();

        assert_eq!(account.id, "a1");
        assert_eq!(account.balance, dec!(100));
        assert_eq!(account.status.as_deref(), Some("ACTIVE"));
        assert_eq!(
            account.kind,
            AccountKind::Saving {
                interest_rate: Some(2.5)
            }
        );
        assert!(account.customer.is_none());
    }

    #[test]
    fn test_current_account_with_customer_dto() {
        let account: BankAccount = serde_json::from_value(json!({
            "id": "b7",
            "balance": 12.75,
            "type": "CurrentAccount",
            "overdraft": 500.0,
            "customerDTO": { "id": 3, "name": "Ada Lovelace", "email": "ada@example.com" }
        }))
        .unwrap();

        assert_eq!(account.balance, dec!(12.75));
        assert_eq!(account.customer_id(), Some(3));
        assert_eq!(
            account.kind,
            AccountKind::Current {
                overdraft: Some(500.0)
            }
        );
        assert!(account.status.is_none());
    }

    #[test]
    fn test_unknown_account_type_is_standard() {
        let account: BankAccount =
            serde_json::from_value(json!({ "id": "c1", "balance": 0, "type": "Business" }))
                .unwrap();
        assert_eq!(account.kind, AccountKind::Standard);

        let account: BankAccount =
            serde_json::from_value(json!({ "id": "c2", "balance": 0 })).unwrap();
        assert_eq!(account.kind, AccountKind::Standard);
    }

    #[test]
    fn test_account_serializes_discriminator() {
        let account = BankAccount {
            id: "s1".to_string(),
            balance: dec!(10),
            kind: AccountKind::Saving {
                interest_rate: Some(3.0),
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], "SavingAccount");
        assert_eq!(value["interestRate"], 3.0);
        assert_eq!(value["balance"], 10.0);
        assert!(value.get("overdraft").is_none());
    }

    #[test]
    fn test_operation_from_backend() {
        let operation: AccountOperation = serde_json::from_value(json!({
            "id": 9,
            "amount": 250.5,
            "operationDate": "2024-03-01T10:15:00.000+00:00",
            "type": "CREDIT",
            "bankAccountId": "a1",
            "description": "Salary"
        }))
        .unwrap();

        assert_eq!(operation.operation_type, OperationType::Credit);
        assert_eq!(operation.amount, dec!(250.5));
        assert_eq!(
            operation.operation_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_operation_accepts_operation_type_field() {
        let operation: AccountOperation = serde_json::from_value(json!({
            "id": 1,
            "amount": 5,
            "operationDate": "2024-03-01T08:00:00",
            "operationType": "DEBIT"
        }))
        .unwrap();

        assert_eq!(operation.operation_type, OperationType::Debit);
        assert_eq!(operation.bank_account_id, "");
        assert!(operation.description.is_none());
    }

    #[test]
    fn test_operation_serializes_operation_type() {
        let operation: AccountOperation = serde_json::from_value(json!({
            "id": 3,
            "amount": 12,
            "operationDate": "2024-03-01T08:00:00Z",
            "type": "CREDIT",
            "bankAccountId": "a1"
        }))
        .unwrap();

        let value = serde_json::to_value(&operation).unwrap();
        assert_eq!(value["operationType"], "CREDIT");
        assert!(value.get("type").is_none());
        assert_eq!(value["bankAccountId"], "a1");
    }

    #[test]
    fn test_legacy_transaction_shape() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 9,
            "accountId": 2,
            "type": "TRANSFER",
            "amount": 40,
            "description": "rent",
            "date": 1709287200000i64,
            "balance": 960
        }))
        .unwrap();

        assert_eq!(transaction.transaction_type, TransactionType::Transfer);
        assert_eq!(transaction.balance, dec!(960));
        assert_eq!(OperationType::Credit.as_str(), "CREDIT");
    }
}
