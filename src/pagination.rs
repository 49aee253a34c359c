//! Paging defaults and the page numbers shown below a list.

/// The config for pagination
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of rows to display per page when not specified in a request.
    pub default_page_size: u64,
    /// The page sizes a client may choose from.
    pub page_sizes: Vec<u64>,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
            page_sizes: vec![5, 10, 15, 20, 25],
            max_pages: 5,
        }
    }
}

/// One entry in the row of page numbers below a list.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page being shown.
    CurrPage(u64),
    /// Pages left out between the window and the first or last page.
    Ellipsis,
}

/// The first and last page of the window of up to `max_pages` pages around
/// `curr_page`.
fn page_window(curr_page: u64, page_count: u64, max_pages: u64) -> (u64, u64) {
    let max_pages = max_pages.max(1);

    if page_count <= max_pages {
        return (1, page_count);
    }

    let half = max_pages / 2;
    let first = curr_page
        .saturating_sub(half)
        .clamp(1, page_count - max_pages + 1);

    (first, first + max_pages - 1)
}

/// The page numbers to show for `curr_page` out of `page_count` pages.
///
/// At most `max_pages` consecutive pages are listed. The first and last page
/// are always reachable, with an ellipsis standing in for any skipped pages.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let (first, last) = page_window(curr_page, page_count, max_pages);
    let mut indicators = Vec::new();

    if first > 1 {
        indicators.push(PaginationIndicator::Page(1));
    }
    if first > 2 {
        indicators.push(PaginationIndicator::Ellipsis);
    }

    indicators.extend((first..=last).map(|page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    }));

    if last + 1 < page_count {
        indicators.push(PaginationIndicator::Ellipsis);
    }
    if last < page_count {
        indicators.push(PaginationIndicator::Page(page_count));
    }

    indicators
}

#[cfg(test)]
mod tests {
    use crate::pagination::{
        PaginationIndicator::{CurrPage, Ellipsis, Page},
        create_pagination_indicators,
    };

    #[test]
    fn lists_every_page_when_they_fit() {
        let got = create_pagination_indicators(1, 5, 5);

        assert_eq!(got, [CurrPage(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn first_page_skips_to_last() {
        let got = create_pagination_indicators(1, 10, 5);

        assert_eq!(
            got,
            [CurrPage(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_near_start_has_no_leading_ellipsis() {
        let got = create_pagination_indicators(3, 10, 5);

        assert_eq!(
            got,
            [Page(1), Page(2), CurrPage(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn adjacent_first_page_is_not_elided() {
        let got = create_pagination_indicators(4, 10, 5);

        assert_eq!(
            got,
            [Page(1), Page(2), Page(3), CurrPage(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn centres_window_on_current_page() {
        let got = create_pagination_indicators(5, 10, 5);

        assert_eq!(
            got,
            [Page(1), Ellipsis, Page(3), Page(4), CurrPage(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_near_end_has_no_trailing_ellipsis() {
        let got = create_pagination_indicators(8, 10, 5);

        assert_eq!(
            got,
            [Page(1), Ellipsis, Page(6), Page(7), CurrPage(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn last_page_skips_to_first() {
        let got = create_pagination_indicators(10, 10, 5);

        assert_eq!(
            got,
            [Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), CurrPage(10)]
        );
    }

    #[test]
    fn page_past_the_end_shows_last_window() {
        let got = create_pagination_indicators(u64::from(u32::MAX), 10, 5);

        assert_eq!(
            got,
            [Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
