//! The page listing categories.

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::{AccessToken, ApiClient, CATEGORIES_PATH, Page},
    category::{
        Category, CategorySortColumn,
        form::{
            CREATE_CATEGORY_MODAL_ID, CategoryFormView, category_form, edit_category_modal_id,
        },
    },
    dates::format_short_date,
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, BUTTON_NEW_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, modal, open_modal_button,
    },
    listing::{
        LIST_CONTAINER_ID, ListOptions, ListQuery, empty_row, list_controls, list_footer,
        sort_header,
    },
    navigation::NavBar,
    pagination::PaginationConfig,
};

/// The state needed for the categories page.
#[derive(Debug, Clone)]
pub struct CategoriesPageState {
    pub api: ApiClient,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for CategoriesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the categories page with the page of categories picked by the query string.
pub async fn get_categories_page(
    State(state): State<CategoriesPageState>,
    Extension(token): Extension<AccessToken>,
    Query(query): Query<ListQuery>,
) -> Result<Response, Error> {
    let options = ListOptions::from_query(query, &state.pagination_config);
    let page = state
        .api
        .list::<Category>(CATEGORIES_PATH, &token, &options.to_params())
        .await
        .inspect_err(|error| tracing::error!("Could not fetch categories: {error}"))?;

    Ok(categories_view(&page, &options, &state.pagination_config).into_response())
}

fn category_row(category: &Category) -> Markup {
    let modal_id = edit_category_modal_id(category.id);
    let delete_endpoint = endpoints::format_endpoint(endpoints::CATEGORY, category.id);
    let created_at = category
        .created_at
        .as_deref()
        .map(format_short_date)
        .unwrap_or_default();

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (category.id) }
            td class=(TABLE_CELL_STYLE) { (category.category_type.label()) }
            td class=(TABLE_CELL_STYLE) { (category.name) }
            td class=(TABLE_CELL_STYLE) { (created_at) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    (open_modal_button(&modal_id, "Düzenle", BUTTON_EDIT_STYLE))

                    button
                        type="button"
                        hx-delete=(delete_endpoint)
                        hx-confirm="Bu kategoriyi silmek istediğinizden emin misiniz?"
                        hx-swap="none"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Sil"
                    }
                }

                (modal(&modal_id, "Kategori Düzenle", &category_form(CategoryFormView {
                    category_id: Some(category.id),
                    category_type: category.category_type,
                    name: &category.name,
                    error_message: None,
                })))
            }
        }
    }
}

fn categories_view(
    page: &Page<Category>,
    options: &ListOptions<CategorySortColumn>,
    config: &PaginationConfig,
) -> Markup {
    let route = endpoints::CATEGORIES_VIEW;
    let nav_bar = NavBar::new(route).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl pb-24 lg:pb-0"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h1 class="text-xl font-bold" { "Kategoriler" }

                    (open_modal_button(CREATE_CATEGORY_MODAL_ID, "+ Yeni Kategori", BUTTON_NEW_STYLE))
                }

                (list_controls(options, route, "Kategori ara...", &config.page_sizes))

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
                                    (sort_header("ID", CategorySortColumn::Id, options, route))
                                    (sort_header("Tür", CategorySortColumn::Type, options, route))
                                    (sort_header("Kategori Adı", CategorySortColumn::Name, options, route))
                                    (sort_header("Oluşturulma Tarihi", CategorySortColumn::CreatedAt, options, route))
                                    th scope="col" class="px-6 py-3" { "İşlemler" }
                                }
                            }

                            tbody
                            {
                                @for category in &page.items {
                                    (category_row(category))
                                }

                                @if page.items.is_empty() {
                                    (empty_row(5))
                                }
                            }
                        }
                    }

                    (list_footer(options, page.total, route, config.max_pages))
                }
            }
        }

        (modal(CREATE_CATEGORY_MODAL_ID, "Yeni Kategori Ekle", &category_form(CategoryFormView::default())))
    };

    base("Kategoriler", &content)
}
