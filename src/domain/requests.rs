use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurrentAccountRequest {
    pub initial_balance: Decimal,
    pub overdraft: f64,
    pub customer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavingAccountRequest {
    pub initial_balance: Decimal,
    pub interest_rate: f64,
    pub customer_id: i64,
}

/// Body shared by the debit and credit endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub account_id: String,
    pub amount: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub source_account_id: String,
    pub destination_account_id: String,
    pub amount: Decimal,
    pub description: String,
}
