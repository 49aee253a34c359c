//! The page listing projects.

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::{AccessToken, ApiClient, PROJECTS_PATH, Page},
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
    project::{
        Project, ProjectSortColumn,
        form::{CREATE_PROJECT_MODAL_ID, ProjectFormView, edit_project_modal_id, project_form},
    },
};

/// The state needed for the projects page.
#[derive(Debug, Clone)]
pub struct ProjectsPageState {
    pub api: ApiClient,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ProjectsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

pub async fn get_projects_page(
    State(state): State<ProjectsPageState>,
    Extension(token): Extension<AccessToken>,
    Query(query): Query<ListQuery>,
) -> Result<Response, Error> {
    let options = ListOptions::from_query(query, &state.pagination_config);
    let page = state
        .api
        .list::<Project>(PROJECTS_PATH, &token, &options.to_params())
        .await
        .inspect_err(|error| tracing::error!("Could not fetch projects: {error}"))?;

    Ok(projects_view(&page, &options, &state.pagination_config).into_response())
}

fn project_row(project: &Project) -> Markup {
    let modal_id = edit_project_modal_id(project.id);
    let delete_endpoint = endpoints::format_endpoint(endpoints::PROJECT, project.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (project.id) }
            td class=(TABLE_CELL_STYLE) { (project.name) }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(created_at) = &project.created_at {
                    (format_short_date(created_at))
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
                        hx-confirm="Bu projeyi silmek istediğinizden emin misiniz?"
                        hx-swap="none"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Sil"
                    }
                }

                (modal(&modal_id, "Proje Düzenle", &project_form(ProjectFormView {
                    project_id: Some(project.id),
                    name: &project.name,
                    error_message: None,
                })))
            }
        }
    }
}

fn projects_view(
    page: &Page<Project>,
    options: &ListOptions<ProjectSortColumn>,
    config: &PaginationConfig,
) -> Markup {
    let route = endpoints::PROJECTS_VIEW;
    let nav_bar = NavBar::new(route).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl pb-24 lg:pb-0"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h1 class="text-xl font-bold" { "Projeler" }

                    (open_modal_button(CREATE_PROJECT_MODAL_ID, "+ Yeni Proje", BUTTON_NEW_STYLE))
                }

                (list_controls(options, route, "Proje ara...", &config.page_sizes))

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
                                    (sort_header("ID", ProjectSortColumn::Id, options, route))
                                    (sort_header("Proje Adı", ProjectSortColumn::Name, options, route))
                                    (sort_header("Oluşturulma Tarihi", ProjectSortColumn::CreatedAt, options, route))
                                    th scope="col" class="px-6 py-3" { "İşlemler" }
                                }
                            }

                            tbody
                            {
                                @for project in &page.items {
                                    (project_row(project))
                                }

                                @if page.items.is_empty() {
                                    (empty_row(4))
                                }
                            }
                        }
                    }

                    (list_footer(options, page.total, route, config.max_pages))
                }
            }
        }

        (modal(CREATE_PROJECT_MODAL_ID, "Yeni Proje Ekle", &project_form(ProjectFormView::default())))
    };

    base("Projeler", &content)
}
