//! Projects that transactions are booked against.

mod create;
mod delete;
mod domain;
mod edit;
mod form;
mod list;

pub use create::create_project_endpoint;
pub use delete::delete_project_endpoint;
pub use domain::{Project, ProjectFormData, ProjectId, ProjectSortColumn};
pub use edit::update_project_endpoint;
pub use list::get_projects_page;
