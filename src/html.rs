use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2 px-4 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

/// For the "+ Yeni ..." buttons next to page titles.
pub const BUTTON_NEW_STYLE: &str = "px-4 py-2 bg-blue-500 dark:bg-blue-600 \
    hover:bg-blue-600 hover:dark:bg-blue-700 text-white text-sm font-medium rounded";

pub const BUTTON_EDIT_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline bg-transparent \
    border-none cursor-pointer";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";
pub const FORM_ERROR_STYLE: &str = "text-red-500 text-base";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="tr"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Gelir Gider" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4" {}

                style
                {
                    r#"
                    dialog::backdrop {
                        background: rgb(0 0 0 / 0.5);
                    }
                    "#
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Anasayfaya Dön"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// The centered card that holds the log-in form.
pub fn log_in_card(form_title: &str, form: &Markup) -> Markup {
    html! {
        div class="flex flex-col items-center justify-center min-h-screen px-6 py-8 mx-auto"
        {
            p class="flex items-center mb-6 text-2xl font-semibold text-gray-900 dark:text-white"
            {
                "Gelir Gider Yönetimi"
            }

            div class="w-full bg-white rounded-lg shadow dark:border md:mt-0 sm:max-w-md xl:p-0 dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                    {
                        (form_title)
                    }

                    (form)
                }
            }
        }
    }
}

/// A password input with a button that toggles whether the password is shown.
pub fn password_input(password: &str) -> Markup {
    html! {
        div
        {
            label
                for="password"
                class=(FORM_LABEL_STYLE)
            {
                "Şifre"
            }

            div class="relative"
            {
                input
                    type="password"
                    name="password"
                    id="password"
                    placeholder="••••••••"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=(password);

                button
                    type="button"
                    id="password-toggle"
                    class="absolute inset-y-0 right-0 px-3 text-sm text-gray-600 dark:text-gray-300"
                    onclick="togglePasswordVisibility('password', this)"
                {
                    "Göster"
                }
            }
        }
    }
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// The submit button of a modal form, shows "Kaydediliyor..." while the
/// request is in flight.
pub fn save_button() -> Markup {
    html! {
        button
            type="submit"
            class=(BUTTON_PRIMARY_STYLE)
        {
            span class="hidden [.htmx-request_&]:inline" { (loading_spinner()) "Kaydediliyor..." }
            span class="[.htmx-request_&]:hidden" { "Kaydet" }
        }
    }
}

/// A modal dialog built on the native `<dialog>` element.
///
/// The dialog is opened with [open_modal_button] and closed by the cancel
/// button that [modal] renders beneath `body`. Forms inside `body` must not
/// submit to the dialog itself, htmx takes care of that.
pub fn modal(id: &str, title: &str, body: &Markup) -> Markup {
    html! {
        dialog
            id=(id)
            class="w-full max-w-md p-0 rounded-lg shadow-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            div class="p-6 space-y-4"
            {
                h2 class="text-xl font-bold" { (title) }

                (body)

                button
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    onclick="this.closest('dialog').close()"
                {
                    "İptal"
                }
            }
        }
    }
}

/// A button that opens the modal with the element ID `modal_id`.
pub fn open_modal_button(modal_id: &str, text: &str, style: &str) -> Markup {
    html! {
        button
            type="button"
            class=(style)
            onclick=(format!("document.getElementById('{modal_id}').showModal()"))
        {
            (text)
        }
    }
}

/// The paragraph that shows why a form submission failed.
pub fn form_error(error_message: Option<&str>) -> Markup {
    html! {
        @if let Some(error_message) = error_message
        {
            p class=(FORM_ERROR_STYLE) { (error_message) }
        }
    }
}

/// Formats `number` with thousands separators and two decimal places.
pub fn format_amount(number: f64) -> String {
    static FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    let mut formatted_string = match fmt {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        _ if number == 0.0 => "0.00".to_owned(),
        Some(fmt) => fmt.fmt_string(number.abs()),
        None => format!("{:.2}", number.abs()),
    };

    // numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3".
    match formatted_string.rfind('.') {
        Some(index) if formatted_string.len() - index == 2 => formatted_string.push('0'),
        Some(_) => {}
        None => formatted_string.push_str(".00"),
    }

    if number < 0.0 {
        format!("-{formatted_string}")
    } else {
        formatted_string
    }
}
