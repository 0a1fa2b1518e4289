//! Operator flows that run a page container end to end: open the form or
//! modal the way a click would, fill it, submit, then refresh the owning list.

use rust_decimal::Decimal;

use crate::domain::models::{AccountKind, BankAccount, Customer};
use crate::service::bank_account::BankAccountApi;
use crate::service::customer::CustomerApi;
use crate::service::operation::AccountOperationApi;

use super::account_form::AccountForm;
use super::account_list::AccountList;
use super::customer_form::CustomerForm;
use super::customer_list::CustomerList;
use super::operations::OperationsViewer;
use super::pages::{AccountsPage, CustomersPage};
use super::{Alert, FormEvent};

/// Customer fields to set; `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerDraft {
    fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(phone) = self.phone {
            customer.phone = Some(phone);
        }
    }
}

/// Account fields to set; `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct AccountDraft {
    /// `current`, `saving` or `standard`.
    pub kind: Option<String>,
    pub balance: Option<Decimal>,
    pub overdraft: Option<f64>,
    pub interest_rate: Option<f64>,
    pub status: Option<String>,
    pub customer_id: Option<i64>,
}

impl AccountDraft {
    fn apply(self, form: &mut AccountForm) -> Result<(), Alert> {
        let account = &mut form.account;
        if let Some(kind) = self.kind.as_deref() {
            account.kind = parse_kind(kind)?;
        }
        match &mut account.kind {
            AccountKind::Current { overdraft } => {
                if self.overdraft.is_some() {
                    *overdraft = self.overdraft;
                }
            }
            AccountKind::Saving { interest_rate } => {
                if self.interest_rate.is_some() {
                    *interest_rate = self.interest_rate;
                }
            }
            AccountKind::Standard => {}
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
        if let Some(status) = self.status {
            account.status = Some(status.to_uppercase());
        }
        if self.customer_id.is_some() {
            form.customer_id = self.customer_id;
        }
        Ok(())
    }
}

fn parse_kind(kind: &str) -> Result<AccountKind, Alert> {
    match kind.to_ascii_lowercase().as_str() {
        "current" => Ok(AccountKind::Current { overdraft: None }),
        "saving" | "savings" => Ok(AccountKind::Saving {
            interest_rate: None,
        }),
        "standard" => Ok(AccountKind::Standard),
        other => Err(Alert(format!(
            "Unknown account kind '{}', expected current, saving or standard",
            other
        ))),
    }
}

fn submitted<T>(event: Option<FormEvent<T>>, missing: &str) -> Result<T, Alert> {
    match event {
        Some(FormEvent::Submitted(saved)) => Ok(saved),
        Some(FormEvent::Cancelled) | None => Err(Alert(missing.to_string())),
    }
}

pub async fn add_customer(
    api: &dyn CustomerApi,
    list: &mut CustomerList,
    draft: CustomerDraft,
) -> Result<Customer, Alert> {
    let mut page = CustomersPage::default();
    page.on_customer_list(list.on_add());
    save_customer(api, &mut page, list, draft).await
}

pub async fn update_customer(
    api: &dyn CustomerApi,
    list: &mut CustomerList,
    customer_id: i64,
    draft: CustomerDraft,
) -> Result<Customer, Alert> {
    let customer = api
        .get_customer(customer_id)
        .await
        .map_err(|err| Alert::new("Error loading customer", &err))?;
    let mut page = CustomersPage::default();
    page.on_customer_list(list.on_edit(&customer));
    save_customer(api, &mut page, list, draft).await
}

async fn save_customer(
    api: &dyn CustomerApi,
    page: &mut CustomersPage,
    list: &mut CustomerList,
    draft: CustomerDraft,
) -> Result<Customer, Alert> {
    let mut form = CustomerForm::new(page.customer_to_edit.as_ref());
    draft.apply(&mut form.customer);
    let saved = submitted(form.submit(api).await?, "Name and email are required")?;
    if page.on_customer_form(FormEvent::Submitted(saved.clone())) {
        list.load(api).await;
    }
    Ok(saved)
}

/// Opens a new account, preselecting the list's customer filter as owner.
pub async fn open_account(
    accounts: &dyn BankAccountApi,
    customers: &dyn CustomerApi,
    list: &mut AccountList,
    draft: AccountDraft,
) -> Result<BankAccount, Alert> {
    let mut page = AccountsPage::default();
    page.on_account_list(list.on_add());
    save_account(accounts, customers, &mut page, list, draft).await
}

pub async fn update_account(
    accounts: &dyn BankAccountApi,
    customers: &dyn CustomerApi,
    list: &mut AccountList,
    account_id: &str,
    draft: AccountDraft,
) -> Result<BankAccount, Alert> {
    let account = accounts
        .get_account(account_id)
        .await
        .map_err(|err| Alert::new("Error loading account", &err))?;
    let mut page = AccountsPage::default();
    page.on_account_list(list.on_edit(&account));
    save_account(accounts, customers, &mut page, list, draft).await
}

async fn save_account(
    accounts: &dyn BankAccountApi,
    customers: &dyn CustomerApi,
    page: &mut AccountsPage,
    list: &mut AccountList,
    draft: AccountDraft,
) -> Result<BankAccount, Alert> {
    let state = &page.account_form;
    let mut form = AccountForm::new(state.account_to_edit.as_ref(), state.preselected_customer_id);
    form.load_customers(customers).await?;
    draft.apply(&mut form)?;
    let saved = submitted(form.submit(accounts).await?, "A customer is required")?;
    if page.on_account_form(FormEvent::Submitted(saved.clone())) {
        list.load(accounts).await;
    }
    Ok(saved)
}

/// Accounts panel opened from a customer row.
pub async fn customer_accounts(
    customers: &dyn CustomerApi,
    accounts: &dyn BankAccountApi,
    customer_id: i64,
) -> Result<(Customer, AccountList), Alert> {
    let customer = customers
        .get_customer(customer_id)
        .await
        .map_err(|err| Alert::new("Error loading customer", &err))?;
    let mut page = CustomersPage::default();
    page.on_customer_list(CustomerList::default().on_view_accounts(&customer));

    let filter = page.selected_customer.as_ref().map(|selected| selected.id);
    let list = AccountList::init(accounts, filter).await;
    page.close_customer_accounts();
    Ok((customer, list))
}

/// Operations modal opened from an account row.
pub async fn account_operations(
    accounts: &dyn BankAccountApi,
    operations: &dyn AccountOperationApi,
    account_id: &str,
) -> Result<OperationsViewer, Alert> {
    let account = accounts
        .get_account(account_id)
        .await
        .map_err(|err| Alert::new("Error loading account", &err))?;
    let mut page = AccountsPage::default();
    page.on_account_list(AccountList::default().on_view_operations(&account));

    let selected = page
        .selected_account_for_operations
        .clone()
        .unwrap_or(account);
    let viewer = OperationsViewer::open(selected, operations).await;
    page.on_operations(viewer.close());
    Ok(viewer)
}
