//! Page arithmetic shared by list screens and the pagination controls.
//!
//! Pages are 1-based everywhere in this module.

use std::ops::{Range, RangeInclusive};

/// Maximum number of page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// Skeleton shape shown while data is loading
pub const SKELETON_COLUMNS: usize = 7;
pub const SKELETON_ROWS: usize = 10;

/// Number of pages, never less than 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Sliding window of at most [`PAGE_WINDOW`] pages centred on `current`,
/// clamped to `[1, total]`.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let width = PAGE_WINDOW.min(total);

    let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let mut end = start + width - 1;
    if end > total {
        end = total;
        start = end + 1 - width;
    }
    start..=end
}

/// `Some(page)` only if `page` is a valid target in `[1, total]`
pub fn clamp_page(page: usize, total: usize) -> Option<usize> {
    (1..=total.max(1)).contains(&page).then_some(page)
}

/// Page to report for a click on `requested`: `None` when it is out of
/// range or already the current page.
pub fn page_change(requested: usize, current: usize, total: usize) -> Option<usize> {
    clamp_page(requested, total).filter(|page| *page != current)
}

/// Previous-button target. From a page past the end this is the last page.
pub fn prev_target(current: usize, total: usize) -> Option<usize> {
    let total = total.max(1);
    if current > total {
        return Some(total);
    }
    clamp_page(current.saturating_sub(1), total)
}

/// Next-button target, `None` on or past the last page
pub fn next_target(current: usize, total: usize) -> Option<usize> {
    clamp_page(current.max(1).checked_add(1)?, total)
}

/// Index range of `page` inside a list of `len` items.
///
/// Saturates, so an absurd page taken from the URL yields an empty range.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// 1-based `(first, last)` item numbers shown on `page`; `(0, 0)` when the
/// page holds nothing.
pub fn range_info(page: usize, page_size: usize, total_items: usize) -> (usize, usize) {
    let bounds = page_bounds(page, page_size.max(1), total_items);
    if bounds.is_empty() {
        (0, 0)
    } else {
        (bounds.start + 1, bounds.end)
    }
}

/// Rows of `page`, empty when the page is past the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(page, page_size, items.len())]
}

/// What the table body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Skeleton,
    Empty,
    Rows,
}

/// The empty-state cell spans every declared column
pub fn empty_row_colspan(column_count: usize) -> usize {
    column_count.max(1)
}

pub fn body_mode(is_loading: bool, row_count: usize) -> BodyMode {
    if is_loading {
        BodyMode::Skeleton
    } else if row_count == 0 {
        BodyMode::Empty
    } else {
        BodyMode::Rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(47, 10), 5);
        assert_eq!(total_pages(50, 10), 5);
        assert_eq!(total_pages(51, 10), 6);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_last_page_slice() {
        let items: Vec<u32> = (0..47).collect();
        let last = page_slice(&items, 5, 10);
        assert_eq!(last.len(), 7);
        assert_eq!(last[0], 40);
        assert!(page_slice(&items, 6, 10).is_empty());
        assert_eq!(page_slice(&items, 1, 10).len(), 10);
    }

    #[test]
    fn test_page_window_centred() {
        assert_eq!(page_window(5, 10), 3..=7);
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(2, 10), 1..=5);
        assert_eq!(page_window(10, 10), 6..=10);
        assert_eq!(page_window(9, 10), 6..=10);
    }

    #[test]
    fn test_page_window_small_totals() {
        assert_eq!(page_window(1, 1), 1..=1);
        assert_eq!(page_window(3, 3), 1..=3);
        assert_eq!(page_window(0, 0), 1..=1);
        assert_eq!(page_window(99, 4), 1..=4);
    }

    #[test]
    fn test_clamp_page_rejects_out_of_range() {
        assert_eq!(clamp_page(0, 5), None);
        assert_eq!(clamp_page(6, 5), None);
        assert_eq!(clamp_page(5, 5), Some(5));
        assert_eq!(clamp_page(1, 0), Some(1));
    }

    #[test]
    fn test_huge_page_from_url_is_empty_not_a_panic() {
        let items: Vec<u32> = (0..47).collect();
        let page = crate::shared::filter::FilterState::from_search("?page=4611686018427387904", &[]).page;
        assert_eq!(page, 4611686018427387904);
        assert!(page_slice(&items, page, 10).is_empty());
        assert!(page_slice(&items, usize::MAX, usize::MAX).is_empty());
        assert_eq!(range_info(page, 10, 47), (0, 0));
    }

    #[test]
    fn test_range_info() {
        assert_eq!(range_info(1, 10, 47), (1, 10));
        assert_eq!(range_info(5, 10, 47), (41, 47));
        assert_eq!(range_info(6, 10, 47), (0, 0));
        assert_eq!(range_info(1, 10, 0), (0, 0));
    }

    #[test]
    fn test_prev_next_targets_stay_in_range() {
        assert_eq!(prev_target(1, 5), None);
        assert_eq!(prev_target(3, 5), Some(2));
        assert_eq!(next_target(3, 5), Some(4));
        assert_eq!(next_target(5, 5), None);
        assert_eq!(next_target(usize::MAX, 5), None);

        // Past the end: Previous jumps back to the last page
        assert_eq!(prev_target(9, 5), Some(5));
        assert_eq!(next_target(9, 5), None);

        for total in 1..=6 {
            for current in 0..=8 {
                for target in [prev_target(current, total), next_target(current, total)]
                    .into_iter()
                    .flatten()
                {
                    assert!((1..=total).contains(&target));
                }
            }
        }
    }

    #[test]
    fn test_page_change_never_reports_out_of_range_or_current() {
        assert_eq!(page_change(3, 1, 5), Some(3));
        assert_eq!(page_change(3, 3, 5), None);
        assert_eq!(page_change(0, 1, 5), None);
        assert_eq!(page_change(6, 5, 5), None);
        assert_eq!(page_change(5, 9, 5), Some(5));
    }

    #[test]
    fn test_empty_state_spans_all_columns() {
        assert_eq!(body_mode(false, 0), BodyMode::Empty);
        assert_eq!(empty_row_colspan(6), 6);
        assert_eq!(empty_row_colspan(0), 1);
    }

    #[test]
    fn test_body_mode() {
        assert_eq!(body_mode(false, 0), BodyMode::Empty);
        assert_eq!(body_mode(true, 0), BodyMode::Skeleton);
        assert_eq!(body_mode(true, 12), BodyMode::Skeleton);
        assert_eq!(body_mode(false, 3), BodyMode::Rows);
    }
}
