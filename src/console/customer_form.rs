use tracing::{error, info};

use crate::domain::models::Customer;
use crate::service::customer::CustomerApi;
use crate::service::error::ServiceError;

use super::{Alert, FormEvent, FormMode};

#[derive(Debug)]
pub struct CustomerForm {
    pub customer: Customer,
    mode: FormMode,
    is_submitting: bool,
}

impl CustomerForm {
    pub fn new(customer_to_edit: Option<&Customer>) -> Self {
        match customer_to_edit {
            Some(customer) => CustomerForm {
                customer: customer.clone(),
                mode: FormMode::Edit,
                is_submitting: false,
            },
            None => CustomerForm {
                customer: Customer::default(),
                mode: FormMode::Create,
                is_submitting: false,
            },
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The id cannot be changed once the customer exists.
    pub fn is_key_read_only(&self) -> bool {
        self.mode == FormMode::Edit
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_valid(&self) -> bool {
        !self.customer.name.trim().is_empty() && !self.customer.email.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting
    }

    /// Marks a submission in flight and hands out the payload to send.
    ///
    /// Returns `None` while a previous submission is pending or required
    /// fields are missing.
    pub fn begin_submit(&mut self) -> Option<Customer> {
        if !self.can_submit() {
            return None;
        }
        self.is_submitting = true;
        Some(self.customer.clone())
    }

    pub fn finish_submit(
        &mut self,
        result: Result<Customer, ServiceError>,
    ) -> Result<FormEvent<Customer>, Alert> {
        self.is_submitting = false;
        match result {
            Ok(saved) => {
                info!("Customer saved successfully: {}", saved.id);
                Ok(FormEvent::Submitted(saved))
            }
            Err(err) => {
                error!("Error saving customer: {}", err);
                Err(Alert::new("Error saving customer", &err))
            }
        }
    }

    /// Creates or updates depending on the mode. `Ok(None)` means nothing was sent.
    pub async fn submit(
        &mut self,
        api: &dyn CustomerApi,
    ) -> Result<Option<FormEvent<Customer>>, Alert> {
        let Some(customer) = self.begin_submit() else {
            return Ok(None);
        };
        let result = match self.mode {
            FormMode::Edit => api.update_customer(&customer).await,
            FormMode::Create => api.add_customer(&customer).await,
        };
        self.finish_submit(result).map(Some)
    }

    pub fn cancel(&self) -> FormEvent<Customer> {
        FormEvent::Cancelled
    }
}
