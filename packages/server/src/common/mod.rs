// Common types and utilities shared across the application

pub mod pagination;

pub use pagination::{
    ConnectionArgs, ConnectionPayload, Cursor, PageCursors, PageInfo, PageWindow,
    PaginationError, PagingLimits,
};
