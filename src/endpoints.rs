//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/categories/{category_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/login";
/// The landing page for logged in users.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for listing categories.
pub const CATEGORIES_VIEW: &str = "/dashboard/categories";
/// The page for listing projects.
pub const PROJECTS_VIEW: &str = "/dashboard/projects";
/// The page for listing and adding income and expense transactions.
pub const TRANSACTIONS_VIEW: &str = "/dashboard/transactions";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/login";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/logout";
/// The route for the exchange rate card on the dashboard.
pub const EXCHANGE_RATES: &str = "/api/exchange-rates";
/// The route to create a category.
pub const CATEGORIES_API: &str = "/api/categories";
/// The route to update or delete a category.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The route to create a project.
pub const PROJECTS_API: &str = "/api/projects";
/// The route to update or delete a project.
pub const PROJECT: &str = "/api/projects/{project_id}";
/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route for the category options that match a transaction type.
pub const CATEGORY_OPTIONS: &str = "/api/transactions/category-options";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/projects/{project_id}', '{project_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
