//! Talks to the REST API that stores the data shown by the admin panel.

mod client;
mod models;

pub use client::ApiClient;
pub use models::{AccessToken, Credentials, ListParams, Page};

/// The API collection of income and expense categories.
pub const CATEGORIES_PATH: &str = "/categories";
/// The API collection of projects.
pub const PROJECTS_PATH: &str = "/projects";
/// The API collection of transactions.
pub const TRANSACTIONS_PATH: &str = "/transactions";
/// The public exchange rates resource.
pub const EXCHANGE_RATES_PATH: &str = "/exchange-rates";
