//! Income and expense categories.

mod create;
mod delete;
mod domain;
mod edit;
mod form;
mod list;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryFormData, CategoryId, CategorySortColumn, CategoryType};
pub use edit::update_category_endpoint;
pub use list::get_categories_page;
