use anyhow::{anyhow, bail};
use clap::Parser;
use clap_derive::Parser;
use configs::settings::Settings;
use console::account_list::AccountList;
use console::actions::{self, AccountDraft, CustomerDraft};
use console::customer_list::CustomerList;
use console::dashboard::Dashboard;
use console::render;
use domain::requests::{OperationRequest, TransferRequest};
use rust_decimal::Decimal;
use service::ConsoleServices;
use tracing::info;

mod common;
mod configs;
mod console;
mod domain;
mod proxy;
mod route;
mod server;
mod service;
mod shell;
mod state;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// server, dashboard, health, customers, customer, add-customer,
    /// update-customer, delete-customer, customer-accounts, accounts, account,
    /// open-account, update-account, delete-account, operations, operation,
    /// debit, credit or transfer
    #[arg(short, long)]
    mode: String,

    /// Customer ID for the customer modes, filter for `accounts`, or owner
    /// for `open-account` and `update-account`
    #[arg(short, long)]
    customer: Option<i64>,

    /// Account ID for the account modes, `operations`, `debit` and `credit`,
    /// or the source of a `transfer`
    #[arg(short, long)]
    account: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    /// current, saving or standard
    #[arg(long)]
    kind: Option<String>,

    #[arg(long)]
    balance: Option<Decimal>,

    #[arg(long)]
    overdraft: Option<f64>,

    #[arg(long)]
    interest_rate: Option<f64>,

    /// e.g. ACTIVE or SUSPENDED
    #[arg(long)]
    status: Option<String>,

    /// Confirms `delete-customer` and `delete-account`
    #[arg(short, long)]
    yes: bool,

    /// Destination account ID for `transfer`
    #[arg(long)]
    destination: Option<String>,

    #[arg(long)]
    amount: Option<Decimal>,

    #[arg(long, default_value = "")]
    description: String,

    /// Operation ID for `operation`
    #[arg(short, long)]
    operation: Option<i64>,
}

async fn run(args: Args, settings: Settings) -> anyhow::Result<()> {
    if args.mode == "server" {
        return server::serve(&settings).await;
    }

    let services = ConsoleServices::new(&settings.backend);
    match args.mode.as_str() {
        "dashboard" => {
            let dashboard = Dashboard::init(
                services.health.as_ref(),
                services.customers.as_ref(),
                services.accounts.as_ref(),
            )
            .await;
            print!("{}", render::dashboard(&dashboard));
        }
        "health" => {
            let healthy = services.health.check_backend_health().await;
            info!("Backend health: {}", if healthy { "UP" } else { "DOWN" });
        }
        "customers" => {
            let list = CustomerList::init(services.customers.as_ref()).await;
            print!("{}", render::customers(&list));
        }
        "customer" => {
            let id = args.customer.ok_or_else(|| anyhow!("--customer is required"))?;
            let customer = services.customers.get_customer(id).await?;
            println!("{}", serde_json::to_string_pretty(&customer)?);
        }
        "add-customer" | "update-customer" => {
            let draft = CustomerDraft {
                name: args.name,
                email: args.email,
                phone: args.phone,
            };
            let mut list = CustomerList::default();
            let saved = if args.mode == "update-customer" {
                let id = args.customer.ok_or_else(|| anyhow!("--customer is required"))?;
                actions::update_customer(services.customers.as_ref(), &mut list, id, draft).await?
            } else {
                actions::add_customer(services.customers.as_ref(), &mut list, draft).await?
            };
            println!("{}", serde_json::to_string_pretty(&saved)?);
            print!("{}", render::customers(&list));
        }
        "delete-customer" => {
            let id = args.customer.ok_or_else(|| anyhow!("--customer is required"))?;
            let mut list = CustomerList::default();
            if !list.delete(services.customers.as_ref(), id, args.yes).await? {
                bail!("refusing to delete customer {} without --yes", id);
            }
            print!("{}", render::customers(&list));
        }
        "accounts" => {
            let list = AccountList::init(services.accounts.as_ref(), args.customer).await;
            print!("{}", render::accounts(&list));
        }
        "account" => {
            let id = args.account.ok_or_else(|| anyhow!("--account is required"))?;
            let account = services.accounts.get_account(&id).await?;
            println!("{}", serde_json::to_string_pretty(&account)?);
        }
        "open-account" | "update-account" => {
            let draft = AccountDraft {
                kind: args.kind,
                balance: args.balance,
                overdraft: args.overdraft,
                interest_rate: args.interest_rate,
                status: args.status,
                customer_id: args.customer,
            };
            let accounts = services.accounts.as_ref();
            let customers = services.customers.as_ref();
            let mut list = AccountList::default();
            let saved = if args.mode == "update-account" {
                let id = args.account.ok_or_else(|| anyhow!("--account is required"))?;
                actions::update_account(accounts, customers, &mut list, &id, draft).await?
            } else {
                actions::open_account(accounts, customers, &mut list, draft).await?
            };
            println!("{}", serde_json::to_string_pretty(&saved)?);
            print!("{}", render::accounts(&list));
        }
        "delete-account" => {
            let id = args.account.ok_or_else(|| anyhow!("--account is required"))?;
            let mut list = AccountList::default();
            if !list.delete(services.accounts.as_ref(), &id, args.yes).await? {
                bail!("refusing to delete account {} without --yes", id);
            }
            print!("{}", render::accounts(&list));
        }
        "customer-accounts" => {
            let id = args.customer.ok_or_else(|| anyhow!("--customer is required"))?;
            let (customer, list) = actions::customer_accounts(
                services.customers.as_ref(),
                services.accounts.as_ref(),
                id,
            )
            .await?;
            println!("Accounts of {} <{}>", customer.name, customer.email);
            print!("{}", render::accounts(&list));
        }
        "operations" => {
            let id = args.account.ok_or_else(|| anyhow!("--account is required"))?;
            let viewer = actions::account_operations(
                services.accounts.as_ref(),
                services.operations.as_ref(),
                &id,
            )
            .await?;
            print!("{}", render::operations(&viewer));
        }
        "operation" => {
            let id = args
                .operation
                .ok_or_else(|| anyhow!("--operation is required"))?;
            let operation = services.operations.get_operation(id).await?;
            println!("{}", serde_json::to_string_pretty(&operation)?);
        }
        "debit" | "credit" => {
            let request = OperationRequest {
                account_id: args.account.ok_or_else(|| anyhow!("--account is required"))?,
                amount: positive_amount(args.amount)?,
                description: args.description,
            };
            let operation = if args.mode == "debit" {
                services.operations.add_debit_operation(&request).await?
            } else {
                services.operations.add_credit_operation(&request).await?
            };
            println!("{}", serde_json::to_string_pretty(&operation)?);
        }
        "transfer" => {
            let request = TransferRequest {
                source_account_id: args.account.ok_or_else(|| anyhow!("--account is required"))?,
                destination_account_id: args
                    .destination
                    .ok_or_else(|| anyhow!("--destination is required"))?,
                amount: positive_amount(args.amount)?,
                description: args.description,
            };
            let result = services.operations.add_transfer_operation(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        other => bail!("unknown mode: {}", other),
    }
    Ok(())
}

fn positive_amount(amount: Option<Decimal>) -> anyhow::Result<Decimal> {
    match amount {
        Some(amount) if amount > Decimal::ZERO => Ok(amount),
        Some(amount) => bail!("amount must be positive, got {}", amount),
        None => bail!("--amount is required"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = Settings::new()?;
    run(args, settings).await
}
