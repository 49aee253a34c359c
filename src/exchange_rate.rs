//! The exchange rate card shown on the dashboard.

use std::fmt;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::api::{ApiClient, EXCHANGE_RATES_PATH};

/// A rate the API sends either as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum RateValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateValue::Number(number) => write!(f, "{number}"),
            RateValue::Text(text) => f.write_str(text),
        }
    }
}

/// The buying and selling rate of one foreign currency in Turkish lira.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ExchangeRate {
    code: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(alias = "rate")]
    forex_buying: Option<RateValue>,
    #[serde(default)]
    forex_selling: Option<RateValue>,
}

/// The API either sends `rates` with names and both rates, or `saved_rates`
/// with a single `rate` per currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ExchangeRates {
    #[serde(default)]
    date: String,
    #[serde(default, alias = "saved_rates")]
    rates: Vec<ExchangeRate>,
    /// Set instead of the rates when the API could not reach the central bank.
    #[serde(default)]
    error: Option<String>,
}

fn currency_icon(code: &str) -> &'static str {
    match code {
        "USD" | "CAD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "CHF" => "₣",
        _ => "💰",
    }
}

fn rate_text(rate: Option<&RateValue>) -> String {
    rate.map_or_else(|| "-".to_owned(), RateValue::to_string)
}

const CARD_STYLE: &str = "w-full max-w-md p-4 sm:p-6 bg-white rounded-2xl shadow-lg \
    dark:bg-gray-800";

/// Get the exchange rate card for the dashboard.
pub async fn get_exchange_rates(State(api): State<ApiClient>) -> Response {
    let rates = api
        .get_public::<ExchangeRates>(EXCHANGE_RATES_PATH)
        .await
        .inspect_err(|error| tracing::error!("Could not fetch exchange rates: {error}"));

    match rates {
        Ok(rates) if rates.error.is_none() => exchange_rate_card(&rates).into_response(),
        Ok(rates) => {
            tracing::warn!("API could not provide exchange rates: {:?}", rates.error);
            exchange_rate_error_card().into_response()
        }
        Err(_) => exchange_rate_error_card().into_response(),
    }
}

fn exchange_rate_card(rates: &ExchangeRates) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class="flex justify-between items-center mb-4"
            {
                h2 class="text-lg sm:text-xl font-bold text-gray-800 dark:text-white" { "Döviz Kurları" }
                span data-rate-date="true" class="text-xs sm:text-sm text-gray-500" { (rates.date) }
            }

            ul class="divide-y divide-gray-100 dark:divide-gray-700"
            {
                @for rate in &rates.rates {
                    li class="flex items-center justify-between py-2 sm:py-3 px-1 sm:px-2"
                    {
                        div class="flex items-center gap-3"
                        {
                            span class="text-lg sm:text-2xl" { (currency_icon(&rate.code)) }

                            div
                            {
                                p class="font-medium text-gray-700 dark:text-gray-200" {
                                    (rate.name.as_deref().unwrap_or(&rate.code))
                                }
                                p class="text-xs text-gray-400" { (rate.code) }
                            }
                        }

                        div class="text-right text-xs sm:text-sm"
                        {
                            p {
                                span class="font-semibold text-green-600" { "Alış:" }
                                " " (rate_text(rate.forex_buying.as_ref()))
                            }
                            p {
                                span class="font-semibold text-red-500" { "Satış:" }
                                " " (rate_text(rate.forex_selling.as_ref()))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn exchange_rate_error_card() -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            p class="text-sm text-red-500" { "Kur verisi alınamadı" }
        }
    }
}

/// The placeholder that fetches the card once the dashboard has loaded.
pub(crate) fn exchange_rate_placeholder(endpoint: &str) -> Markup {
    html! {
        div hx-get=(endpoint) hx-trigger="load" hx-swap="outerHTML" class=(CARD_STYLE)
        {
            p class="text-sm" { "Yükleniyor..." }
        }
    }
}
