//! The inline add form and the edit modal form for transactions.

use maud::{Markup, html};

use crate::{
    category::{CategoryId, CategoryType},
    endpoints,
    html::{
        BUTTON_NEW_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, form_error, loading_spinner,
        save_button,
    },
    project::ProjectId,
    transaction::{
        Currency, Transaction, TransactionFormData, TransactionId,
        options::{FormChoices, category_options, project_options},
    },
};

pub(crate) fn edit_transaction_modal_id(transaction_id: TransactionId) -> String {
    format!("edit-transaction-modal-{transaction_id}")
}

/// The values to show in a transaction form.
#[derive(Debug, Default)]
pub(crate) struct TransactionFormView<'a> {
    pub transaction_type: CategoryType,
    pub project_id: Option<ProjectId>,
    pub category_id: Option<CategoryId>,
    pub date: &'a str,
    pub amount: String,
    pub currency: Currency,
    pub description: &'a str,
    pub error_message: Option<&'a str>,
}

impl<'a> TransactionFormView<'a> {
    /// Fill the edit form with a transaction from the list.
    pub(crate) fn from_transaction(transaction: &'a Transaction) -> Self {
        Self {
            transaction_type: transaction.transaction_type,
            project_id: Some(transaction.project_id),
            category_id: Some(transaction.category_id),
            date: &transaction.date,
            amount: transaction.amount.to_string(),
            currency: transaction.currency.parse().unwrap_or_default(),
            description: transaction.description.as_deref().unwrap_or_default(),
            error_message: None,
        }
    }

    /// Show what was submitted again, so nothing has to be re-entered.
    pub(crate) fn from_form(form: &'a TransactionFormData, error_message: &'a str) -> Self {
        Self {
            transaction_type: form.transaction_type.parse().unwrap_or_default(),
            project_id: form.project_id.trim().parse().ok(),
            category_id: form.category_id.trim().parse().ok(),
            date: &form.date,
            amount: form.amount.clone(),
            currency: form.currency.parse().unwrap_or_default(),
            description: &form.description,
            error_message: Some(error_message),
        }
    }
}

/// The inputs shared by the add and edit forms.
///
/// `id_suffix` keeps element IDs unique when several forms are on one page.
fn transaction_fields(
    view: &TransactionFormView<'_>,
    choices: &FormChoices,
    id_suffix: &str,
) -> Markup {
    let type_id = format!("transaction-type-{id_suffix}");
    let project_id = format!("transaction-project-{id_suffix}");
    let category_id = format!("transaction-category-{id_suffix}");
    let date_id = format!("transaction-date-{id_suffix}");
    let amount_id = format!("transaction-amount-{id_suffix}");
    let currency_id = format!("transaction-currency-{id_suffix}");
    let description_id = format!("transaction-description-{id_suffix}");

    html! {
        div
        {
            label for=(type_id) class=(FORM_LABEL_STYLE) { "Tip" }

            select
                id=(type_id)
                name="type"
                hx-get=(endpoints::CATEGORY_OPTIONS)
                hx-trigger="change"
                hx-target={ "#" (category_id) }
                hx-swap="innerHTML"
                hx-target-error="#alert-container"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for transaction_type in CategoryType::ALL {
                    option
                        value=(transaction_type.as_str())
                        selected[transaction_type == view.transaction_type]
                    {
                        (transaction_type.label())
                    }
                }
            }
        }

        div
        {
            label for=(project_id) class=(FORM_LABEL_STYLE) { "Proje" }

            select id=(project_id) name="project_id" class=(FORM_TEXT_INPUT_STYLE)
            {
                (project_options(&choices.projects, view.project_id))
            }
        }

        div
        {
            label for=(category_id) class=(FORM_LABEL_STYLE) { "Kategori" }

            select id=(category_id) name="category_id" class=(FORM_TEXT_INPUT_STYLE)
            {
                (category_options(&choices.categories, view.transaction_type, view.category_id))
            }
        }

        div
        {
            label for=(date_id) class=(FORM_LABEL_STYLE) { "Tarih" }

            input
                id=(date_id)
                type="date"
                name="date"
                value=(view.date)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for=(amount_id) class=(FORM_LABEL_STYLE) { "Tutar" }

            input
                id=(amount_id)
                type="number"
                step="0.01"
                name="amount"
                placeholder="Tutar"
                value=(view.amount)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for=(currency_id) class=(FORM_LABEL_STYLE) { "Para Birimi" }

            select id=(currency_id) name="currency" class=(FORM_TEXT_INPUT_STYLE)
            {
                @for currency in Currency::ALL {
                    option value=(currency.code()) selected[currency == view.currency] {
                        (currency.label())
                    }
                }
            }
        }

        div
        {
            label for=(description_id) class=(FORM_LABEL_STYLE) { "Açıklama" }

            input
                id=(description_id)
                type="text"
                name="description"
                placeholder="Açıklama"
                value=(view.description)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// The form above the transaction list for adding a transaction.
pub(crate) fn add_transaction_form(
    view: &TransactionFormView<'_>,
    choices: &FormChoices,
) -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full p-4 mb-6 grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4 items-end
                bg-white rounded-lg shadow dark:bg-gray-800"
        {
            (transaction_fields(view, choices, "new"))

            button type="submit" class=(BUTTON_NEW_STYLE)
            {
                span class="hidden [.htmx-request_&]:inline" { (loading_spinner()) }
                "Ekle"
            }

            div class="sm:col-span-2 lg:col-span-4"
            {
                (form_error(view.error_message))
            }
        }
    }
}

pub(crate) fn edit_transaction_form(
    transaction_id: TransactionId,
    view: &TransactionFormView<'_>,
    choices: &FormChoices,
) -> Markup {
    let update_endpoint = endpoints::format_endpoint(endpoints::TRANSACTION, transaction_id);

    html! {
        form
            hx-put=(update_endpoint)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            (transaction_fields(view, choices, &transaction_id.to_string()))

            (form_error(view.error_message))

            (save_button())
        }
    }
}
