//! The projects and categories offered in the transaction forms.

use axum::{
    Extension,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    api::{AccessToken, ApiClient, CATEGORIES_PATH, ListParams, PROJECTS_PATH},
    category::{Category, CategoryId, CategoryType},
    project::{Project, ProjectId},
};

/// How many projects and categories to fetch for a drop-down.
const CHOICES_LIMIT: u64 = 1000;

/// Every project and category a transaction can be booked against.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormChoices {
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
}

impl FormChoices {
    pub(crate) async fn fetch(api: &ApiClient, token: &AccessToken) -> Result<Self, Error> {
        let params = ListParams::all(CHOICES_LIMIT);

        let (projects, categories) = tokio::try_join!(
            api.list::<Project>(PROJECTS_PATH, token, &params),
            api.list::<Category>(CATEGORIES_PATH, token, &params),
        )?;

        Ok(Self {
            projects: projects.items,
            categories: categories.items,
        })
    }
}

/// The categories that transactions of `transaction_type` can be booked under.
pub(crate) fn categories_of_type(
    categories: &[Category],
    transaction_type: CategoryType,
) -> impl Iterator<Item = &Category> {
    categories
        .iter()
        .filter(move |category| category.category_type == transaction_type)
}

pub(crate) fn project_options(projects: &[Project], selected: Option<ProjectId>) -> Markup {
    html! {
        option value="" { "Proje Seç" }

        @for project in projects {
            option value=(project.id) selected[Some(project.id) == selected] { (project.name) }
        }
    }
}

pub(crate) fn category_options(
    categories: &[Category],
    transaction_type: CategoryType,
    selected: Option<CategoryId>,
) -> Markup {
    html! {
        option value="" { "Kategori Seç" }

        @for category in categories_of_type(categories, transaction_type) {
            option value=(category.id) selected[Some(category.id) == selected] { (category.name) }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryOptionsQuery {
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
}

/// Get the category options for the transaction type picked in a form.
pub async fn get_category_options(
    State(api): State<ApiClient>,
    Extension(token): Extension<AccessToken>,
    Query(query): Query<CategoryOptionsQuery>,
) -> Response {
    let transaction_type = match query.transaction_type.as_deref() {
        Some(transaction_type) => match transaction_type.parse::<CategoryType>() {
            Ok(transaction_type) => transaction_type,
            Err(error) => return error.into_alert_response(),
        },
        None => CategoryType::default(),
    };

    match api
        .list::<Category>(CATEGORIES_PATH, &token, &ListParams::all(CHOICES_LIMIT))
        .await
    {
        Ok(page) => category_options(&page.items, transaction_type, None).into_response(),
        Err(error) => {
            tracing::error!("Could not fetch category options: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod category_options_tests {
    use axum::{
        Extension,
        extract::{Query, State},
        http::StatusCode,
    };
    use scraper::Selector;
    use serde_json::json;

    use crate::{
        category::{Category, CategoryType},
        test_utils::{FakeApi, parse_html_fragment, spawn_fake_api, test_token},
    };

    use super::{CategoryOptionsQuery, categories_of_type, get_category_options};

    fn category(id: i64, category_type: CategoryType, name: &str) -> Category {
        Category {
            id,
            category_type,
            name: name.to_owned(),
            created_at: None,
        }
    }

    #[test]
    fn keeps_categories_of_selected_type() {
        let categories = [
            category(1, CategoryType::Gelir, "Maaş"),
            category(2, CategoryType::Gider, "Kira"),
            category(3, CategoryType::Gider, "Fatura"),
        ];

        let names: Vec<&str> = categories_of_type(&categories, CategoryType::Gider)
            .map(|category| category.name.as_str())
            .collect();

        assert_eq!(names, ["Kira", "Fatura"]);
    }

    async fn fake_api_with_categories() -> FakeApi {
        let api = spawn_fake_api().await;
        api.set_page(
            "/categories",
            json!({
                "items": [
                    {"id": 1, "type": "gelir", "name": "Maaş"},
                    {"id": 2, "type": "gider", "name": "Kira"}
                ],
                "total": 2
            }),
        );
        api
    }

    #[tokio::test]
    async fn returns_options_for_requested_type() {
        let api = fake_api_with_categories().await;

        let response = get_category_options(
            State(api.client()),
            Extension(test_token()),
            Query(CategoryOptionsQuery {
                transaction_type: Some("gider".to_owned()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let options: Vec<(String, String)> = html
            .select(&Selector::parse("option").unwrap())
            .map(|option| {
                (
                    option.value().attr("value").unwrap_or_default().to_owned(),
                    option.text().collect(),
                )
            })
            .collect();
        assert_eq!(
            options,
            [
                ("".to_owned(), "Kategori Seç".to_owned()),
                ("2".to_owned(), "Kira".to_owned())
            ]
        );
        assert_eq!(api.last_request().query_value("limit"), Some("1000"));
    }

    #[tokio::test]
    async fn unknown_type_is_rejected() {
        let api = fake_api_with_categories().await;

        let response = get_category_options(
            State(api.client()),
            Extension(test_token()),
            Query(CategoryOptionsQuery {
                transaction_type: Some("transfer".to_owned()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(api.requests().is_empty());
    }
}
