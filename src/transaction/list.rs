//! The page for adding and listing transactions.

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::{AccessToken, ApiClient, Page, TRANSACTIONS_PATH},
    dates::format_short_date,
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_amount, modal, open_modal_button,
    },
    listing::{
        LIST_CONTAINER_ID, ListOptions, ListQuery, empty_row, list_controls, list_footer,
        sort_header,
    },
    navigation::NavBar,
    pagination::PaginationConfig,
    transaction::{
        Transaction, TransactionSortColumn,
        form::{
            TransactionFormView, add_transaction_form, edit_transaction_form,
            edit_transaction_modal_id,
        },
        options::FormChoices,
    },
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    pub api: ApiClient,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the add transaction form and a page of transactions.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    Extension(token): Extension<AccessToken>,
    Query(query): Query<ListQuery>,
) -> Result<Response, Error> {
    let options = ListOptions::from_query(query, &state.pagination_config);
    let params = options.to_params();

    let (page, choices) = tokio::try_join!(
        state
            .api
            .list::<Transaction>(TRANSACTIONS_PATH, &token, &params),
        FormChoices::fetch(&state.api, &token),
    )
    .inspect_err(|error| tracing::error!("Could not fetch transactions: {error}"))?;

    Ok(transactions_view(&page, &choices, &options, &state.pagination_config).into_response())
}

/// Names the API could not resolve are shown as a dash.
fn name_or_dash(name: Option<&str>) -> &str {
    name.filter(|name| !name.is_empty()).unwrap_or("-")
}

fn transaction_row(transaction: &Transaction, choices: &FormChoices) -> Markup {
    let modal_id = edit_transaction_modal_id(transaction.id);
    let delete_endpoint = endpoints::format_endpoint(endpoints::TRANSACTION, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.id) }
            td class=(TABLE_CELL_STYLE) { (transaction.transaction_type.label()) }
            td class=(TABLE_CELL_STYLE) { (name_or_dash(transaction.project_name.as_deref())) }
            td class=(TABLE_CELL_STYLE) { (name_or_dash(transaction.category_name.as_deref())) }
            td class=(TABLE_CELL_STYLE) { (format_short_date(&transaction.date)) }
            td class={ (TABLE_CELL_STYLE) " text-right" } { (format_amount(transaction.amount)) }
            td class=(TABLE_CELL_STYLE) { (transaction.currency) }
            td class=(TABLE_CELL_STYLE) { (transaction.description.as_deref().unwrap_or_default()) }
            td class={ (TABLE_CELL_STYLE) " text-right" }
            {
                @match transaction.tl_total {
                    Some(tl_total) => { (format_amount(tl_total)) }
                    None => { "-" }
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    (open_modal_button(&modal_id, "Düzenle", BUTTON_EDIT_STYLE))

                    button
                        type="button"
                        hx-delete=(delete_endpoint)
                        hx-confirm="Bu kaydı silmek istediğinize emin misiniz?"
                        hx-swap="none"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Sil"
                    }
                }

                (modal(&modal_id, "Kayıt Düzenle", &edit_transaction_form(
                    transaction.id,
                    &TransactionFormView::from_transaction(transaction),
                    choices,
                )))
            }
        }
    }
}

fn transactions_view(
    page: &Page<Transaction>,
    choices: &FormChoices,
    options: &ListOptions<TransactionSortColumn>,
    config: &PaginationConfig,
) -> Markup {
    let route = endpoints::TRANSACTIONS_VIEW;
    let nav_bar = NavBar::new(route).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl pb-24 lg:pb-0"
            {
                h1 class="text-xl font-bold mb-4" { "Gelir / Gider Kayıtları" }

                (add_transaction_form(&TransactionFormView::default(), choices))

                (list_controls(
                    options,
                    route,
                    "Tip,Proje,Kategori,PB,Açıklama ara...",
                    &config.page_sizes,
                ))

                div id=(LIST_CONTAINER_ID)
                {
                    div class="relative overflow-x-auto shadow-md sm:rounded-lg"
                    {
                        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    (sort_header("ID", TransactionSortColumn::Id, options, route))
                                    (sort_header("Tip", TransactionSortColumn::Type, options, route))
                                    (sort_header("Proje", TransactionSortColumn::ProjectName, options, route))
                                    (sort_header("Kategori", TransactionSortColumn::CategoryName, options, route))
                                    (sort_header("Tarih", TransactionSortColumn::Date, options, route))
                                    (sort_header("Tutar", TransactionSortColumn::Amount, options, route))
                                    (sort_header("Para Birimi", TransactionSortColumn::Currency, options, route))
                                    th scope="col" class="px-6 py-3" { "Açıklama" }
                                    (sort_header("TL Toplam", TransactionSortColumn::TlTotal, options, route))
                                    th scope="col" class="px-6 py-3" { "İşlemler" }
                                }
                            }

                            tbody
                            {
                                @for transaction in &page.items {
                                    (transaction_row(transaction, choices))
                                }

                                @if page.items.is_empty() {
                                    (empty_row(10))
                                }
                            }
                        }
                    }

                    (list_footer(options, page.total, route, config.max_pages))
                }
            }
        }
    };

    base("Gelir / Gider", &content)
}
