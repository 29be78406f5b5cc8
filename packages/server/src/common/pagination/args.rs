//! Connection argument translation.
//!
//! Relay addresses a list with `first`/`after` or `last`/`before`; Gravity
//! addresses it with `page`/`size`. Everything a resolver receives is turned
//! into one [`PageWindow`] before the upstream call is made.

use super::cursor::Cursor;
use super::error::PaginationError;

/// Page size used when a request names no size at all.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Largest page ever requested upstream.
pub const MAX_PAGE_SIZE: usize = 100;

/// Size bounds applied while translating arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl PagingLimits {
    pub fn new(default_size: usize, max_size: usize) -> Self {
        Self {
            default_size: default_size.min(max_size),
            max_size,
        }
    }

    fn clamp(&self, size: usize) -> usize {
        size.min(self.max_size)
    }
}

impl Default for PagingLimits {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

/// Direction of cursor pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaginationDirection {
    /// `first`/`after`
    Forward,
    /// `last`/`before`
    Backward,
}

/// Raw connection arguments as they arrive on a GraphQL field.
///
/// Use either `first`/`after` (forward), `last`/`before` (backward), or
/// `page`/`size`. Cursor arguments win over `page`/`size`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
    pub page: Option<i32>,
    pub size: Option<i32>,
}

/// Upstream addressing for one slice: `offset = (page - 1) * size` for
/// page-aligned requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub size: usize,
    pub offset: usize,
}

impl PageWindow {
    /// Window for a 1-based page number.
    pub fn from_page(page: usize, size: usize) -> Self {
        let page = page.max(1);
        PageWindow {
            page,
            size,
            offset: (page - 1).saturating_mul(size),
        }
    }

    /// Window starting at an arbitrary offset; `page` is the page containing it.
    pub fn from_offset(offset: usize, size: usize) -> Self {
        let page = if size == 0 { 1 } else { offset / size + 1 };
        PageWindow { page, size, offset }
    }

    /// A zero-sized first page, used to read only the total count.
    pub fn count_only() -> Self {
        PageWindow::from_page(1, 0)
    }
}

impl ConnectionArgs {
    /// Forward pagination args.
    pub fn forward(first: i32, after: Option<String>) -> Self {
        ConnectionArgs {
            first: Some(first),
            after,
            ..Default::default()
        }
    }

    /// Backward pagination args.
    pub fn backward(last: i32, before: Option<String>) -> Self {
        ConnectionArgs {
            last: Some(last),
            before,
            ..Default::default()
        }
    }

    /// Classic page-number args.
    pub fn paged(page: i32, size: i32) -> Self {
        ConnectionArgs {
            page: Some(page),
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn is_forward(&self) -> bool {
        self.first.is_some() || self.after.is_some()
    }

    pub fn is_backward(&self) -> bool {
        self.last.is_some() || self.before.is_some()
    }

    /// Cursor direction, or `None` for page/size addressing.
    pub(crate) fn direction(&self) -> Option<PaginationDirection> {
        if self.is_forward() {
            Some(PaginationDirection::Forward)
        } else if self.is_backward() {
            Some(PaginationDirection::Backward)
        } else {
            None
        }
    }

    /// Backward paging anchored at the end of the list: the offset can only
    /// be computed once the total count is known.
    pub fn needs_total_count(&self) -> bool {
        !self.is_forward() && self.is_backward() && self.before.is_none()
    }

    /// Number of items the caller asked for, when it asked.
    pub(crate) fn requested_count(&self) -> Option<usize> {
        self.first
            .or(self.last)
            .or(self.size)
            .map(|n| usize::try_from(n).unwrap_or(0))
    }

    /// Translate into an upstream window.
    ///
    /// Fails for `last` without `before`; use
    /// [`ConnectionArgs::translate_with_total`] once the total count is known.
    pub fn translate(&self, limits: &PagingLimits) -> Result<PageWindow, PaginationError> {
        self.resolve(limits, None)
    }

    /// Translate with a known total count, which anchors `last` without
    /// `before` at the end of the list.
    pub fn translate_with_total(
        &self,
        limits: &PagingLimits,
        total_count: usize,
    ) -> Result<PageWindow, PaginationError> {
        self.resolve(limits, Some(total_count))
    }

    fn resolve(
        &self,
        limits: &PagingLimits,
        total_count: Option<usize>,
    ) -> Result<PageWindow, PaginationError> {
        if self.is_forward() && self.is_backward() {
            return Err(PaginationError::InvalidArguments(
                "cannot paginate forwards and backwards at once; use either first/after or last/before"
                    .to_string(),
            ));
        }

        match self.direction() {
            Some(PaginationDirection::Forward) => {
                let size = match self.first {
                    Some(first) => non_negative("first", first)?,
                    None => limits.default_size,
                };
                let size = limits.clamp(size);
                let offset = match &self.after {
                    Some(after) => Cursor::decode(after)?.offset().saturating_add(1),
                    None => 0,
                };
                Ok(PageWindow::from_offset(offset, size))
            }
            Some(PaginationDirection::Backward) => {
                let last = match self.last {
                    Some(last) => non_negative("last", last)?,
                    None => limits.default_size,
                };
                let last = limits.clamp(last);
                let before = match (&self.before, total_count) {
                    (Some(before), _) => Cursor::decode(before)?.offset(),
                    (None, Some(total_count)) => total_count,
                    (None, None) => {
                        return Err(PaginationError::InvalidArguments(
                            "last without before requires the total count to be resolved first"
                                .to_string(),
                        ))
                    }
                };

                // Shorten the window instead of reaching below offset 0
                let (offset, size) = match before.checked_sub(last) {
                    Some(offset) => (offset, last),
                    None => (0, before),
                };
                Ok(PageWindow::from_offset(offset, size))
            }
            None => {
                let size = match self.size {
                    Some(size) => non_negative("size", size)?,
                    None => limits.default_size,
                };
                let size = limits.clamp(size);
                let page = self.page.unwrap_or(1).max(1) as usize;
                Ok(PageWindow::from_page(page, size))
            }
        }
    }
}

fn non_negative(name: &str, value: i32) -> Result<usize, PaginationError> {
    usize::try_from(value).map_err(|_| {
        PaginationError::InvalidArguments(format!("{} must be non-negative, got {}", name, value))
    })
}
