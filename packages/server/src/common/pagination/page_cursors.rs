//! "Jump to page" cursors for numbered pagers (`1 2 3 … 10`).
//!
//! Derived from the page window and the total count alone; no extra
//! upstream fetch is needed.

use juniper::GraphQLObject;
use serde::Serialize;

use super::cursor::Cursor;

/// Pages beyond this are never offered to a pager.
pub const PAGE_NUMBER_CAP: usize = 100;

/// Number of page links a pager shows at most, counting the current page.
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "A cursor pointing at the first item of a page")]
pub struct PageCursor {
    /// 1-based page number
    pub page: i32,
    /// Cursor of the page's first item
    pub cursor: String,
    /// Whether this is the page being viewed
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "Page cursors for rendering a numbered pager")]
pub struct PageCursors {
    /// Link to page 1, when `around` does not already reach it
    pub first: Option<PageCursor>,
    /// Link to the last page, when `around` does not already reach it
    pub last: Option<PageCursor>,
    /// Pages surrounding the current page
    pub around: Vec<PageCursor>,
    pub previous: Option<PageCursor>,
    pub next: Option<PageCursor>,
}

/// Number of pages needed for `total_count` items, capped at
/// [`PAGE_NUMBER_CAP`].
pub fn total_pages(total_count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total_count.div_ceil(size).min(PAGE_NUMBER_CAP)
}

fn page_cursor(page: usize, current: usize, size: usize) -> PageCursor {
    PageCursor {
        page: i32::try_from(page).unwrap_or(i32::MAX),
        cursor: Cursor::encode_offset((page - 1).saturating_mul(size)),
        is_current: page == current,
    }
}

fn page_range(start: usize, end: usize, current: usize, size: usize) -> Vec<PageCursor> {
    (start..=end)
        .map(|page| page_cursor(page, current, size))
        .collect()
}

/// Build pager cursors for `page` (1-based) of `size` items.
pub fn create_page_cursors(page: usize, size: usize, total_count: usize) -> PageCursors {
    let total_pages = total_pages(total_count, size);
    if total_pages == 0 {
        return PageCursors::default();
    }

    let current = page.max(1);
    let half = PAGE_WINDOW / 2;

    let mut cursors = if current > total_pages {
        PageCursors {
            first: Some(page_cursor(1, current, size)),
            last: Some(page_cursor(total_pages, current, size)),
            ..Default::default()
        }
    } else if total_pages <= PAGE_WINDOW {
        PageCursors {
            around: page_range(1, total_pages, current, size),
            ..Default::default()
        }
    } else if current <= half + 1 {
        PageCursors {
            around: page_range(1, PAGE_WINDOW - 1, current, size),
            last: Some(page_cursor(total_pages, current, size)),
            ..Default::default()
        }
    } else if current >= total_pages - half {
        PageCursors {
            first: Some(page_cursor(1, current, size)),
            around: page_range(total_pages - PAGE_WINDOW + 2, total_pages, current, size),
            ..Default::default()
        }
    } else {
        // Leave room for the first and last links
        let spread = (PAGE_WINDOW - 3) / 2;
        PageCursors {
            first: Some(page_cursor(1, current, size)),
            around: page_range(current - spread, current + spread, current, size),
            last: Some(page_cursor(total_pages, current, size)),
            ..Default::default()
        }
    };

    // Past the end, previous falls back to the last real page
    if current > 1 {
        let previous = (current - 1).min(total_pages);
        cursors.previous = Some(page_cursor(previous, current, size));
    }
    if current < total_pages {
        cursors.next = Some(page_cursor(current + 1, current, size));
    }

    cursors
}
