//! Page containers: which form or modal is open and what it is bound to.
//!
//! Handlers that consume a form event report whether the owning list must be
//! re-fetched.

use crate::domain::models::{BankAccount, Customer};

use super::account_list::AccountListEvent;
use super::customer_list::CustomerListEvent;
use super::operations::OperationsEvent;
use super::FormEvent;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AccountFormState {
    pub open: bool,
    pub account_to_edit: Option<BankAccount>,
    pub preselected_customer_id: Option<i64>,
}

impl AccountFormState {
    fn open_for_create(&mut self, customer_id: Option<i64>) {
        self.account_to_edit = None;
        self.preselected_customer_id = customer_id;
        self.open = true;
    }

    fn open_for_edit(&mut self, account: BankAccount) {
        self.account_to_edit = Some(account);
        self.preselected_customer_id = None;
        self.open = true;
    }

    fn close(&mut self) {
        *self = AccountFormState::default();
    }
}

fn close_account_form(
    form: &mut AccountFormState,
    event: FormEvent<BankAccount>,
) -> bool {
    form.close();
    matches!(event, FormEvent::Submitted(_))
}

#[derive(Debug, Default)]
pub struct CustomersPage {
    pub selected_customer: Option<Customer>,
    pub show_customer_form: bool,
    pub customer_to_edit: Option<Customer>,
    pub account_form: AccountFormState,
    pub selected_account_for_operations: Option<BankAccount>,
}

impl CustomersPage {
    pub fn on_customer_list(&mut self, event: CustomerListEvent) {
        match event {
            CustomerListEvent::AddCustomer => {
                self.customer_to_edit = None;
                self.show_customer_form = true;
            }
            CustomerListEvent::EditCustomer(customer) => {
                self.customer_to_edit = Some(customer);
                self.show_customer_form = true;
            }
            CustomerListEvent::ViewAccounts(customer) => {
                self.selected_customer = Some(customer);
            }
        }
    }

    pub fn close_customer_accounts(&mut self) {
        self.selected_customer = None;
    }

    pub fn on_customer_form(&mut self, event: FormEvent<Customer>) -> bool {
        self.show_customer_form = false;
        self.customer_to_edit = None;
        matches!(event, FormEvent::Submitted(_))
    }

    pub fn on_account_list(&mut self, event: AccountListEvent) {
        match event {
            AccountListEvent::AddAccount(customer_id) => {
                self.account_form.open_for_create(customer_id)
            }
            AccountListEvent::EditAccount(account) => self.account_form.open_for_edit(account),
            AccountListEvent::ViewOperations(account) => {
                self.selected_account_for_operations = Some(account)
            }
        }
    }

    pub fn on_account_form(&mut self, event: FormEvent<BankAccount>) -> bool {
        close_account_form(&mut self.account_form, event)
    }

    pub fn on_operations(&mut self, event: OperationsEvent) {
        match event {
            OperationsEvent::Closed => self.selected_account_for_operations = None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AccountsPage {
    pub account_form: AccountFormState,
    pub selected_account_for_operations: Option<BankAccount>,
}

impl AccountsPage {
    pub fn on_account_list(&mut self, event: AccountListEvent) {
        match event {
            AccountListEvent::AddAccount(customer_id) => {
                self.account_form.open_for_create(customer_id)
            }
            AccountListEvent::EditAccount(account) => self.account_form.open_for_edit(account),
            AccountListEvent::ViewOperations(account) => {
                self.selected_account_for_operations = Some(account)
            }
        }
    }

    pub fn on_account_form(&mut self, event: FormEvent<BankAccount>) -> bool {
        close_account_form(&mut self.account_form, event)
    }

    pub fn on_operations(&mut self, event: OperationsEvent) {
        match event {
            OperationsEvent::Closed => self.selected_account_for_operations = None,
        }
    }
}
