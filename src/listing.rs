//! The search, sort and paging mechanics shared by the category, project and
//! transaction lists.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    api::ListParams,
    html::{FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE},
    pagination::{PaginationConfig, PaginationIndicator, create_pagination_indicators},
};

/// The ID of the element that htmx swaps when the search or page size changes.
pub const LIST_CONTAINER_ID: &str = "list-container";

/// The largest page number accepted from a query string.
const MAX_PAGE: u64 = u32::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn from_query_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The columns a list can be sorted by.
///
/// The API only sorts by the columns it knows, so anything else the client
/// asks for falls back to [SortColumn::default], the ID column.
pub trait SortColumn: Copy + PartialEq + Default {
    /// Parse the value of the `sort_by` query parameter.
    fn from_query_value(value: &str) -> Option<Self>;

    fn as_query_value(self) -> &'static str;
}

/// The raw query string of a list page.
///
/// Every field is kept as text so that a malformed value falls back to its
/// default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// The validated search, sort and paging options of a list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions<C> {
    pub search: String,
    pub page: u64,
    pub limit: u64,
    pub sort_by: C,
    pub sort_order: SortOrder,
}

impl<C: SortColumn> ListOptions<C> {
    pub fn from_query(query: ListQuery, config: &PaginationConfig) -> Self {
        let page = query
            .page
            .and_then(|page| page.trim().parse::<u64>().ok())
            .unwrap_or(config.default_page)
            .clamp(1, MAX_PAGE);
        let limit = query
            .limit
            .and_then(|limit| limit.trim().parse::<u64>().ok())
            .filter(|limit| config.page_sizes.contains(limit))
            .unwrap_or(config.default_page_size);
        let sort_by = query
            .sort_by
            .as_deref()
            .and_then(C::from_query_value)
            .unwrap_or_default();
        let sort_order = query
            .sort_order
            .as_deref()
            .map(SortOrder::from_query_value)
            .unwrap_or_default();

        Self {
            search: query.search.unwrap_or_default().trim().to_owned(),
            page,
            limit,
            sort_by,
            sort_order,
        }
    }

    /// The number of rows before the current page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn to_params(&self) -> ListParams {
        ListParams {
            search: self.search.clone(),
            skip: self.skip(),
            limit: self.limit,
            sort_by: self.sort_by.as_query_value().to_owned(),
            sort_order: self.sort_order.as_query_value().to_owned(),
        }
    }

    /// The options after clicking the header of `column`.
    ///
    /// Clicking the sorted column flips the order, clicking another column
    /// sorts by it in ascending order.
    pub fn sorted_by(&self, column: C) -> Self {
        let sort_order = if column == self.sort_by {
            self.sort_order.toggled()
        } else {
            SortOrder::Asc
        };

        Self {
            sort_by: column,
            sort_order,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn to_query_string(&self) -> String {
        let page = self.page.to_string();
        let limit = self.limit.to_string();

        serde_urlencoded::to_string([
            ("search", self.search.as_str()),
            ("page", page.as_str()),
            ("limit", limit.as_str()),
            ("sort_by", self.sort_by.as_query_value()),
            ("sort_order", self.sort_order.as_query_value()),
        ])
        .unwrap_or_default()
    }

    pub fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }

    fn sort_indicator(&self, column: C) -> &'static str {
        match (column == self.sort_by, self.sort_order) {
            (true, SortOrder::Asc) => "▲",
            (true, SortOrder::Desc) => "▼",
            (false, _) => "↕",
        }
    }
}

/// The range of rows shown on a page, counting from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl PageSummary {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let start = if total == 0 {
            0
        } else {
            page.saturating_sub(1).saturating_mul(limit).saturating_add(1)
        };

        Self {
            start,
            end: page.saturating_mul(limit).min(total),
            total,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Toplam {} kayıt içerisinden {} - {} arası gösteriliyor",
            self.total, self.start, self.end
        )
    }
}

/// The number of pages needed for `total` rows, at least one.
pub fn page_count(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1)).max(1)
}

const LIST_LINK_STYLE: &str = "text-blue-600 hover:underline dark:text-blue-500";
const PAGE_BUTTON_STYLE: &str = "block px-3 py-2 rounded-sm text-blue-600 hover:underline";
const DISABLED_PAGE_BUTTON_STYLE: &str = "block px-3 py-2 rounded-sm text-gray-400 dark:text-gray-500";

/// A link that swaps in the list at `href` and pushes it to the browser history.
fn list_link(href: &str, style: &str, content: &Markup) -> Markup {
    html! {
        a
            href=(href)
            hx-get=(href)
            hx-select={ "#" (LIST_CONTAINER_ID) }
            hx-target={ "#" (LIST_CONTAINER_ID) }
            hx-swap="outerHTML"
            hx-push-url="true"
            class=(style)
        {
            (content)
        }
    }
}

/// A table header cell that sorts the list by `column` when clicked.
pub fn sort_header<C: SortColumn>(
    title: &str,
    column: C,
    options: &ListOptions<C>,
    route: &str,
) -> Markup {
    let href = options.sorted_by(column).to_url(route);

    html! {
        th scope="col" class="px-6 py-3"
        {
            (list_link(&href, "inline-flex items-center gap-1", &html! {
                (title)
                span aria-hidden="true" { (options.sort_indicator(column)) }
            }))
        }
    }
}

/// The search box and page size select above a list.
///
/// Changing either fetches the first page of the list again. The current sort
/// is read from the inputs rendered by [list_footer], which are swapped
/// together with the list.
pub fn list_controls<C: SortColumn>(
    options: &ListOptions<C>,
    route: &str,
    search_placeholder: &str,
    page_sizes: &[u64],
) -> Markup {
    html! {
        form
            role="search"
            hx-get=(route)
            hx-trigger="input changed delay:300ms from:input[name=search], change from:select[name=limit], submit"
            hx-select={ "#" (LIST_CONTAINER_ID) }
            hx-target={ "#" (LIST_CONTAINER_ID) }
            hx-include=(LIST_STATE_SELECTOR)
            hx-swap="outerHTML"
            hx-push-url="true"
            class="flex flex-wrap items-center justify-between gap-4 w-full mb-4"
        {
            input
                type="search"
                name="search"
                placeholder=(search_placeholder)
                value=(options.search)
                class={ "max-w-xs " (FORM_TEXT_INPUT_STYLE) };

            label class="flex items-center gap-2 text-sm"
            {
                "Sayfa başına"

                select name="limit" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for &size in page_sizes {
                        option value=(size) selected[size == options.limit] { (size) }
                    }
                }
            }
        }
    }
}

const LIST_STATE_SELECTOR: &str = "[data-list-state]";

/// The row shown in place of data when a list is empty.
pub fn empty_row(column_count: usize) -> Markup {
    html! {
        tr
        {
            td colspan=(column_count) class={ (TABLE_CELL_STYLE) " text-center" }
            {
                "Kayıt bulunamadı"
            }
        }
    }
}

/// The summary text and page links below a list.
pub fn list_footer<C: SortColumn>(
    options: &ListOptions<C>,
    total: u64,
    route: &str,
    max_pages: u64,
) -> Markup {
    let summary = PageSummary::new(options.page, options.limit, total);
    let page_count = page_count(total, options.limit);
    let indicators = create_pagination_indicators(options.page, page_count, max_pages);
    let prev_href = (options.page > 1).then(|| options.with_page(options.page - 1).to_url(route));
    let next_href =
        (options.page < page_count).then(|| options.with_page(options.page + 1).to_url(route));

    html! {
        div class="flex flex-col lg:flex-row items-center justify-between gap-4 w-full mt-4"
        {
            input
                type="hidden"
                name="sort_by"
                value=(options.sort_by.as_query_value())
                data-list-state="true";
            input
                type="hidden"
                name="sort_order"
                value=(options.sort_order.as_query_value())
                data-list-state="true";

            p class="text-sm text-gray-600 dark:text-gray-400" data-list-summary="true"
            {
                (summary.text())
            }

            nav class="pagination"
            {
                ul class="pagination flex items-center gap-1"
                {
                    li
                    {
                        @if let Some(href) = prev_href {
                            (list_link(&href, PAGE_BUTTON_STYLE, &html! { "Önceki" }))
                        } @else {
                            span class=(DISABLED_PAGE_BUTTON_STYLE) aria-disabled="true" { "Önceki" }
                        }
                    }

                    @for indicator in indicators {
                        @match indicator {
                            PaginationIndicator::CurrPage(page) => {
                                li
                                {
                                    span
                                        aria-current="page"
                                        class="block px-3 py-2 rounded-sm font-bold text-black dark:text-white"
                                    { (page) }
                                }
                            }
                            PaginationIndicator::Page(page) => {
                                li
                                {
                                    (list_link(
                                        &options.with_page(page).to_url(route),
                                        LIST_LINK_STYLE,
                                        &html! { (page) },
                                    ))
                                }
                            }
                            PaginationIndicator::Ellipsis => {
                                li { span class="px-2" { "..." } }
                            }
                        }
                    }

                    li
                    {
                        @if let Some(href) = next_href {
                            (list_link(&href, PAGE_BUTTON_STYLE, &html! { "Sonraki" }))
                        } @else {
                            span class=(DISABLED_PAGE_BUTTON_STYLE) aria-disabled="true" { "Sonraki" }
                        }
                    }
                }
            }
        }
    }
}
