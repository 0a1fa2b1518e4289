use tracing::error;

use crate::domain::models::Customer;
use crate::service::customer::CustomerApi;

use super::{list_view, Alert, ListView};

#[derive(Debug, Clone, PartialEq)]
pub enum CustomerListEvent {
    AddCustomer,
    EditCustomer(Customer),
    ViewAccounts(Customer),
}

#[derive(Debug, Default)]
pub struct CustomerList {
    pub customers: Vec<Customer>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl CustomerList {
    pub async fn init(api: &dyn CustomerApi) -> Self {
        let mut list = CustomerList::default();
        list.load(api).await;
        list
    }

    pub async fn load(&mut self, api: &dyn CustomerApi) {
        self.is_loading = true;
        self.error_message = None;
        match api.get_customers().await {
            Ok(customers) => self.customers = customers,
            Err(err) => {
                error!("Error loading customers: {}", err);
                self.error_message = Some(err.to_string());
            }
        }
        self.is_loading = false;
    }

    pub fn view(&self) -> ListView<'_, Customer> {
        list_view(
            self.is_loading,
            self.error_message.as_deref(),
            &self.customers,
        )
    }

    /// Deletes after the operator confirmed, then re-fetches once.
    ///
    /// Returns whether a delete was issued.
    pub async fn delete(
        &mut self,
        api: &dyn CustomerApi,
        customer_id: i64,
        confirmed: bool,
    ) -> Result<bool, Alert> {
        if !confirmed {
            return Ok(false);
        }
        api.delete_customer(customer_id)
            .await
            .map_err(|err| Alert::new("Error deleting customer", &err))?;
        self.load(api).await;
        Ok(true)
    }

    pub fn on_add(&self) -> CustomerListEvent {
        CustomerListEvent::AddCustomer
    }

    pub fn on_edit(&self, customer: &Customer) -> CustomerListEvent {
        CustomerListEvent::EditCustomer(customer.clone())
    }

    pub fn on_view_accounts(&self, customer: &Customer) -> CustomerListEvent {
        CustomerListEvent::ViewAccounts(customer.clone())
    }

    pub fn active_count(&self) -> usize {
        self.customers.len()
    }

    /// Customers whose id is within five of the newest one.
    pub fn recent_count(&self) -> usize {
        match self.customers.iter().map(|c| c.id).max() {
            Some(max_id) => self.customers.iter().filter(|c| c.id > max_id - 5).count(),
            None => 0,
        }
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
