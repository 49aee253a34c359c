//! The form shown in the create and edit category modals.

use maud::{Markup, html};

use crate::{
    category::{CategoryId, CategoryType},
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, form_error, save_button},
};

pub(crate) const CREATE_CATEGORY_MODAL_ID: &str = "create-category-modal";

pub(crate) fn edit_category_modal_id(category_id: CategoryId) -> String {
    format!("edit-category-modal-{category_id}")
}

/// The values to show in the category form.
///
/// A form without a `category_id` creates a new category.
#[derive(Debug, Default)]
pub(crate) struct CategoryFormView<'a> {
    pub category_id: Option<CategoryId>,
    pub category_type: CategoryType,
    pub name: &'a str,
    pub error_message: Option<&'a str>,
}

pub(crate) fn category_form(view: CategoryFormView<'_>) -> Markup {
    let (create_endpoint, update_endpoint) = match view.category_id {
        Some(id) => (None, Some(endpoints::format_endpoint(endpoints::CATEGORY, id))),
        None => (Some(endpoints::CATEGORIES_API), None),
    };
    // Every row has its own edit modal, so input IDs need a suffix.
    let id_suffix = view
        .category_id
        .map_or_else(|| "new".to_owned(), |id| id.to_string());
    let type_id = format!("category-type-{id_suffix}");
    let name_id = format!("category-name-{id_suffix}");

    html! {
        form
            hx-post=[create_endpoint]
            hx-put=[update_endpoint]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label for=(type_id) class=(FORM_LABEL_STYLE) { "Tür" }

                select id=(type_id) name="type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category_type in CategoryType::ALL {
                        option
                            value=(category_type.as_str())
                            selected[category_type == view.category_type]
                        {
                            (category_type.label())
                        }
                    }
                }
            }

            div
            {
                label for=(name_id) class=(FORM_LABEL_STYLE) { "Kategori Adı" }

                input
                    id=(name_id)
                    type="text"
                    name="name"
                    placeholder="Kategori Adı"
                    value=(view.name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (form_error(view.error_message))

            (save_button())
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use crate::{
        category::CategoryType,
        endpoints,
        test_utils::{
            assert_form_input_with_value, assert_hx_endpoint, assert_select_options,
            must_get_form,
        },
    };

    use super::{CategoryFormView, category_form};

    #[test]
    fn new_category_form_posts() {
        let html = Html::parse_fragment(&category_form(CategoryFormView::default()).into_string());

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::CATEGORIES_API, "hx-post");
        assert_eq!(form.value().attr("hx-put"), None);
        assert_select_options(&form, "type", &["gelir", "gider"]);
        assert_form_input_with_value(&form, "name", "text", "");
    }

    #[test]
    fn edit_category_form_puts_with_values() {
        let html = Html::parse_fragment(
            &category_form(CategoryFormView {
                category_id: Some(3),
                category_type: CategoryType::Gider,
                name: "Kira",
                error_message: None,
            })
            .into_string(),
        );

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/categories/3", "hx-put");
        assert_form_input_with_value(&form, "name", "text", "Kira");
        let selected = html
            .select(&scraper::Selector::parse("option[selected]").unwrap())
            .next()
            .expect("No selected option");
        assert_eq!(selected.value().attr("value"), Some("gider"));
    }
}
