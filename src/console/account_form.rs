use tracing::error;

use crate::domain::models::{AccountKind, BankAccount, Customer};
use crate::domain::requests::{CreateCurrentAccountRequest, CreateSavingAccountRequest};
use crate::service::bank_account::BankAccountApi;
use crate::service::customer::CustomerApi;
use crate::service::error::ServiceError;

use super::{Alert, FormEvent, FormMode};

/// The request a validated form turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountSubmission {
    OpenCurrent(CreateCurrentAccountRequest),
    OpenSaving(CreateSavingAccountRequest),
    Open(BankAccount),
    Update(BankAccount),
}

#[derive(Debug)]
pub struct AccountForm {
    pub account: BankAccount,
    pub customer_id: Option<i64>,
    pub customers: Vec<Customer>,
    mode: FormMode,
    is_submitting: bool,
}

impl AccountForm {
    pub fn new(account_to_edit: Option<&BankAccount>, preselected_customer_id: Option<i64>) -> Self {
        match account_to_edit {
            Some(account) => AccountForm {
                account: account.clone(),
                customer_id: account.customer_id(),
                customers: Vec::new(),
                mode: FormMode::Edit,
                is_submitting: false,
            },
            None => AccountForm {
                account: BankAccount::default(),
                customer_id: preselected_customer_id,
                customers: Vec::new(),
                mode: FormMode::Create,
                is_submitting: false,
            },
        }
    }

    /// Fills the owner picker.
    pub async fn load_customers(&mut self, api: &dyn CustomerApi) -> Result<(), Alert> {
        match api.get_customers().await {
            Ok(customers) => {
                self.customers = customers;
                Ok(())
            }
            Err(err) => Err(Alert::new("Error loading customers", &err)),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_key_read_only(&self) -> bool {
        self.mode == FormMode::Edit
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_valid(&self) -> bool {
        self.customer_id.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting
    }

    pub fn begin_submit(&mut self) -> Option<AccountSubmission> {
        if !self.can_submit() {
            return None;
        }
        let customer_id = self.customer_id?;
        self.is_submitting = true;

        let submission = match self.mode {
            FormMode::Edit => {
                let mut account = self.account.clone();
                if account.customer_id() != Some(customer_id) {
                    account.customer = Some(self.owner(customer_id));
                }
                AccountSubmission::Update(account)
            }
            FormMode::Create => match self.account.kind {
                AccountKind::Current { overdraft } => {
                    AccountSubmission::OpenCurrent(CreateCurrentAccountRequest {
                        initial_balance: self.account.balance,
                        overdraft: overdraft.unwrap_or_default(),
                        customer_id,
                    })
                }
                AccountKind::Saving { interest_rate } => {
                    AccountSubmission::OpenSaving(CreateSavingAccountRequest {
                        initial_balance: self.account.balance,
                        interest_rate: interest_rate.unwrap_or_default(),
                        customer_id,
                    })
                }
                AccountKind::Standard => {
                    let mut account = self.account.clone();
                    account.customer = Some(self.owner(customer_id));
                    AccountSubmission::Open(account)
                }
            },
        };
        Some(submission)
    }

    pub fn finish_submit(
        &mut self,
        result: Result<BankAccount, ServiceError>,
    ) -> Result<FormEvent<BankAccount>, Alert> {
        self.is_submitting = false;
        result.map(FormEvent::Submitted).map_err(|err| {
            error!("Error saving account: {}", err);
            Alert::new("Error saving account", &err)
        })
    }

    pub async fn submit(
        &mut self,
        api: &dyn BankAccountApi,
    ) -> Result<Option<FormEvent<BankAccount>>, Alert> {
        let Some(submission) = self.begin_submit() else {
            return Ok(None);
        };
        let result = match &submission {
            AccountSubmission::OpenCurrent(request) => api.create_current_account(request).await,
            AccountSubmission::OpenSaving(request) => api.create_saving_account(request).await,
            AccountSubmission::Open(account) => api.add_account(account).await,
            AccountSubmission::Update(account) => api.update_account(account).await,
        };
        self.finish_submit(result).map(Some)
    }

    pub fn cancel(&self) -> FormEvent<BankAccount> {
        FormEvent::Cancelled
    }

    fn owner(&self, customer_id: i64) -> Customer {
        self.customers
            .iter()
            .find(|customer| customer.id == customer_id)
            .cloned()
            .unwrap_or_else(|| Customer {
                id: customer_id,
                ..Default::default()
            })
    }
}
