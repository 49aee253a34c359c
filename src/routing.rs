//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{auth_guard, auth_guard_hx, get_log_in_page, get_log_out, post_log_in},
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_page,
        update_category_endpoint,
    },
    dashboard::get_dashboard_page,
    endpoints,
    exchange_rate::get_exchange_rates,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    project::{
        create_project_endpoint, delete_project_endpoint, get_projects_page,
        update_project_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_category_options,
        get_transactions_page, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page))
        .route(endpoints::PROJECTS_VIEW, get(get_projects_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // Requests made by htmx need the HX-Redirect header for auth redirects to work.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(endpoints::EXCHANGE_RATES, get(get_exchange_rates))
            .route(endpoints::CATEGORIES_API, post(create_category_endpoint))
            .route(
                endpoints::CATEGORY,
                put(update_category_endpoint).delete(delete_category_endpoint),
            )
            .route(endpoints::PROJECTS_API, post(create_project_endpoint))
            .route(
                endpoints::PROJECT,
                put(update_project_endpoint).delete(delete_project_endpoint),
            )
            .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
            .route(endpoints::CATEGORY_OPTIONS, get(get_category_options))
            .route(
                endpoints::TRANSACTION,
                put(update_transaction_endpoint).delete(delete_transaction_endpoint),
            )
            .layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
