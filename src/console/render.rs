//! Plain-text rendering of the console screens for terminal use.

use crate::common::money::Money;

use super::account_list::AccountList;
use super::customer_list::{initials, CustomerList};
use super::dashboard::Dashboard;
use super::operations::OperationsViewer;
use super::ListView;

const EMPTY: &str = "-";

fn block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let status = if dashboard.is_checking_connection {
        "checking..."
    } else if dashboard.backend_connected {
        "connected"
    } else {
        "disconnected"
    };
    let mut lines = vec![format!("Backend:         {}", status)];
    if !dashboard.backend_connected {
        return block(lines);
    }

    lines.push(format!("Customers:       {}", dashboard.total_customers));
    lines.push(format!("Accounts:        {}", dashboard.total_accounts));
    lines.push(format!("Active accounts: {}", dashboard.active_accounts));
    lines.push(format!(
        "Total balance:   {}",
        Money::usd(dashboard.total_balance).format_whole()
    ));
    if !dashboard.recent_customers.is_empty() {
        lines.push("Recent customers:".to_string());
        lines.extend(
            dashboard
                .recent_customers
                .iter()
                .map(|customer| format!("  [{}] {} <{}>", customer.id, customer.name, customer.email)),
        );
    }
    block(lines)
}

pub fn customers(list: &CustomerList) -> String {
    let lines = match list.view() {
        ListView::Loading => vec!["Loading customers...".to_string()],
        ListView::Failed(message) => vec![format!("Failed to load customers: {}", message)],
        ListView::Empty => vec!["No customers found.".to_string()],
        ListView::Rows(customers) => {
            let mut lines: Vec<String> = customers
                .iter()
                .map(|customer| {
                    format!(
                        "{:>4}  {:<2}  {:<24}  {:<28}  {}",
                        customer.id,
                        initials(&customer.name),
                        customer.name,
                        customer.email,
                        customer.phone.as_deref().unwrap_or(EMPTY)
                    )
                })
                .collect();
            lines.push(format!(
                "{} customers, {} recent",
                list.active_count(),
                list.recent_count()
            ));
            lines
        }
    };
    block(lines)
}

pub fn accounts(list: &AccountList) -> String {
    let lines = match list.view() {
        ListView::Loading => vec!["Loading accounts...".to_string()],
        ListView::Failed(message) => vec![format!("Failed to load accounts: {}", message)],
        ListView::Empty => vec!["No accounts found.".to_string()],
        ListView::Rows(_) => {
            let mut lines: Vec<String> = list
                .rows()
                .into_iter()
                .map(|row| {
                    format!(
                        "{} {:<15}  {:<8}  {:>14}  {:<9}  {:<20}  {}",
                        row.icon,
                        row.id_preview,
                        row.type_label,
                        row.balance,
                        row.status,
                        row.customer_name.as_deref().unwrap_or(EMPTY),
                        row.attribute
                    )
                })
                .collect();
            lines.push(format!(
                "Total balance {}, {} active",
                Money::usd(list.total_balance()),
                list.active_count()
            ));
            lines
        }
    };
    block(lines)
}

pub fn operations(viewer: &OperationsViewer) -> String {
    let mut lines = vec![format!(
        "Account {} balance {}",
        viewer.account.id,
        viewer.balance()
    )];
    match viewer.view() {
        ListView::Loading => lines.push("Loading operations...".to_string()),
        ListView::Failed(message) => lines.push(format!("Failed to load operations: {}", message)),
        ListView::Empty => lines.push("No operations found.".to_string()),
        ListView::Rows(_) => lines.extend(viewer.rows().into_iter().map(|row| {
            format!(
                "{:<20}  {:<6}  {:>14}  {}",
                row.date,
                row.operation_type.as_str(),
                row.amount,
                row.description
            )
        })),
    }
    block(lines)
}
