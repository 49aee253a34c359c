//! Income and expense records booked against a project and a category.
//!
//! Transactions are added inline above the list and edited in a modal. The
//! category drop-down only offers categories of the selected type and is
//! reloaded by [get_category_options] whenever the type changes.

mod create;
mod delete;
mod domain;
mod edit;
mod form;
mod list;
mod options;

pub use create::create_transaction_endpoint;
pub use delete::delete_transaction_endpoint;
pub use domain::{
    Currency, Transaction, TransactionFormData, TransactionId, TransactionSortColumn,
};
pub use edit::update_transaction_endpoint;
pub use list::get_transactions_page;
pub use options::get_category_options;
