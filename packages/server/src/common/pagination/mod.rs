//! Relay-style cursor pagination over page/size upstream APIs.
//!
//! Gravity pages with `page`/`size` and reports the full result size in
//! `X-Total-Count`; GraphQL clients page with `first`/`after`/`last`/`before`.
//! Everything in this module is a pure function of its inputs.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In a connection resolver
//! let window = args.translate(&deps.paging)?;
//!
//! // Upstream fetch with that window
//! let page = gravity.artist_artworks(&id, window, sort).await?;
//!
//! // Build the payload
//! let payload = resolve_pagination(PaginationInput {
//!     args: &args,
//!     body: &page.body,
//!     total_count: page.total_count,
//!     window,
//! });
//! ```

mod args;
mod connection;
mod cursor;
mod error;
mod page_cursors;
mod resolver;

pub use args::{ConnectionArgs, PageWindow, PagingLimits, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use connection::{connection_from_slice, Connection, Edge, PageInfo};
pub use cursor::{cursor_to_offset, offset_to_cursor, Cursor};
pub use error::{coded_field_error, PaginationError};
pub use page_cursors::{
    create_page_cursors, total_pages, PageCursor, PageCursors, PAGE_NUMBER_CAP, PAGE_WINDOW,
};
pub use resolver::{resolve_pagination, ConnectionPayload, PaginationInput};
