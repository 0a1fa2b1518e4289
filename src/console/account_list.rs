use rust_decimal::Decimal;
use tracing::error;

use crate::common::money::Money;
use crate::domain::models::{AccountKind, BankAccount};
use crate::service::bank_account::BankAccountApi;

use super::{list_view, Alert, ListView};

const DEFAULT_SAVING_RATE: f64 = 5.5;
const DEFAULT_OVERDRAFT: f64 = 1000.0;
const ID_PREVIEW_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountListEvent {
    /// Carries the customer filter, if any, so the form can preselect it.
    AddAccount(Option<i64>),
    EditAccount(BankAccount),
    ViewOperations(BankAccount),
}

#[derive(Debug, Default)]
pub struct AccountList {
    pub customer_id: Option<i64>,
    pub accounts: Vec<BankAccount>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// One rendered account row.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub id_preview: String,
    pub icon: &'static str,
    pub type_label: &'static str,
    pub badge_class: &'static str,
    pub balance: String,
    pub status: String,
    pub customer_name: Option<String>,
    /// Interest rate for savings, overdraft limit for current accounts.
    pub attribute: String,
}

impl AccountList {
    pub async fn init(api: &dyn BankAccountApi, customer_id: Option<i64>) -> Self {
        let mut list = AccountList {
            customer_id,
            ..Default::default()
        };
        list.load(api).await;
        list
    }

    pub async fn load(&mut self, api: &dyn BankAccountApi) {
        self.is_loading = true;
        self.error_message = None;
        let result = match self.customer_id {
            Some(customer_id) => api.get_accounts_by_customer(customer_id).await,
            None => api.get_accounts().await,
        };
        match result {
            Ok(accounts) => self.accounts = accounts,
            Err(err) => {
                error!("Error loading accounts: {}", err);
                self.error_message = Some(err.to_string());
            }
        }
        self.is_loading = false;
    }

    pub fn view(&self) -> ListView<'_, BankAccount> {
        list_view(
            self.is_loading,
            self.error_message.as_deref(),
            &self.accounts,
        )
    }

    pub fn rows(&self) -> Vec<AccountRow> {
        self.accounts
            .iter()
            .map(|account| self.row(account))
            .collect()
    }

    fn row(&self, account: &BankAccount) -> AccountRow {
        let id_preview = if account.id.chars().count() > ID_PREVIEW_LEN {
            let head: String = account.id.chars().take(ID_PREVIEW_LEN).collect();
            format!("{}...", head)
        } else {
            account.id.clone()
        };
        // The owner is implied when the list is already filtered by customer.
        let customer_name = match self.customer_id {
            Some(_) => None,
            None => account.customer.as_ref().map(|c| c.name.clone()),
        };
        let attribute = match account.kind {
            AccountKind::Saving { .. } => format!("📈 {}%", saving_rate(account)),
            AccountKind::Current { .. } => {
                let limit = Decimal::try_from(current_overdraft(account)).unwrap_or_default();
                format!("{} overdraft", Money::usd(limit).format_whole())
            }
            AccountKind::Standard => String::new(),
        };

        AccountRow {
            id_preview,
            icon: type_icon(&account.kind),
            type_label: type_label(&account.kind),
            badge_class: badge_class(&account.kind),
            balance: Money::usd(account.balance).to_string(),
            status: status_badge(account),
            customer_name,
            attribute,
        }
    }

    pub async fn delete(
        &mut self,
        api: &dyn BankAccountApi,
        account_id: &str,
        confirmed: bool,
    ) -> Result<bool, Alert> {
        if !confirmed {
            return Ok(false);
        }
        api.delete_account(account_id)
            .await
            .map_err(|err| Alert::new("Error deleting account", &err))?;
        self.load(api).await;
        Ok(true)
    }

    pub fn on_add(&self) -> AccountListEvent {
        AccountListEvent::AddAccount(self.customer_id)
    }

    pub fn on_edit(&self, account: &BankAccount) -> AccountListEvent {
        AccountListEvent::EditAccount(account.clone())
    }

    pub fn on_view_operations(&self, account: &BankAccount) -> AccountListEvent {
        AccountListEvent::ViewOperations(account.clone())
    }

    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    pub fn active_count(&self) -> usize {
        self.accounts
            .iter()
            .filter(|account| {
                account
                    .status
                    .as_deref()
                    .is_some_and(|status| status.eq_ignore_ascii_case("active"))
            })
            .count()
    }
}

pub fn type_label(kind: &AccountKind) -> &'static str {
    match kind {
        AccountKind::Saving { .. } => "Saving",
        AccountKind::Current { .. } => "Current",
        AccountKind::Standard => "Standard",
    }
}

pub fn badge_class(kind: &AccountKind) -> &'static str {
    match kind {
        AccountKind::Saving { .. } => "saving",
        AccountKind::Current { .. } => "current",
        AccountKind::Standard => "standard",
    }
}

pub fn type_icon(kind: &AccountKind) -> &'static str {
    match kind {
        AccountKind::Saving { .. } => "🏦",
        AccountKind::Current { .. } => "💳",
        AccountKind::Standard => "🏛️",
    }
}

pub fn status_badge(account: &BankAccount) -> String {
    account
        .status
        .as_deref()
        .unwrap_or("CREATED")
        .to_uppercase()
}

pub fn saving_rate(account: &BankAccount) -> f64 {
    match account.kind {
        AccountKind::Saving {
            interest_rate: Some(rate),
        } if rate != 0.0 => rate,
        _ => DEFAULT_SAVING_RATE,
    }
}

pub fn current_overdraft(account: &BankAccount) -> f64 {
    match account.kind {
        AccountKind::Current {
            overdraft: Some(overdraft),
        } => overdraft,
        _ => DEFAULT_OVERDRAFT,
    }
}
