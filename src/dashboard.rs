//! The landing page for logged in users.

use maud::{Markup, html};

use crate::{
    endpoints, exchange_rate::exchange_rate_placeholder, html::base, navigation::NavBar,
};

/// Display the dashboard with the greeting and the exchange rate card.
pub async fn get_dashboard_page() -> Markup {
    dashboard_view()
}

fn dashboard_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center gap-6 px-2 lg:px-6 py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            section class="w-full text-center"
            {
                h1 class="text-2xl font-bold" { "Dashboard" }
                p class="mt-2 text-gray-600 dark:text-gray-300" { "Giriş başarılı, hoş geldiniz!" }
            }

            (exchange_rate_placeholder(endpoints::EXCHANGE_RATES))
        }
    };

    base("Dashboard", &content)
}
