//! Headless view-models for the console screens.
//!
//! Each list, form and modal owns its transient state and talks to exactly one
//! service trait. User actions come back out as event values for the page
//! container to act on; no view-model navigates or touches another's state.

use std::fmt;

use crate::service::error::ServiceError;

pub mod account_form;
pub mod actions;
pub mod account_list;
pub mod customer_form;
pub mod customer_list;
pub mod dashboard;
pub mod operations;
pub mod pages;
pub mod render;
pub mod routes;

#[cfg(test)]
pub(crate) mod mocks;

/// A blocking message for the operator, e.g. "Error saving customer: ...".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert(pub String);

impl Alert {
    pub fn new(context: &str, err: &ServiceError) -> Self {
        Alert(format!("{}: {}", context, err))
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Alert {}

/// What a list currently shows.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [T]),
}

fn list_view<'a, T>(is_loading: bool, error: Option<&'a str>, items: &'a [T]) -> ListView<'a, T> {
    if is_loading {
        ListView::Loading
    } else if let Some(message) = error {
        ListView::Failed(message)
    } else if items.is_empty() {
        ListView::Empty
    } else {
        ListView::Rows(items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent<T> {
    Submitted(T),
    Cancelled,
}
