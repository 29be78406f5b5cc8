use serde::Serialize;

use super::args::{ConnectionArgs, PageWindow};
use super::connection::{connection_from_slice, Edge, PageInfo};
use super::page_cursors::{create_page_cursors, PageCursors};

/// Everything a connection field knows after its upstream fetch.
#[derive(Debug, Clone, Copy)]
pub struct PaginationInput<'a, T> {
    pub args: &'a ConnectionArgs,
    pub body: &'a [T],
    pub total_count: usize,
    pub window: PageWindow,
}

/// The connection shape every paginated field returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPayload<T> {
    pub total_count: usize,
    pub page_cursors: PageCursors,
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

/// Combine an upstream page into the full connection payload.
///
/// Pure: the same input always produces the same payload. A body shorter than
/// the window (the last page) needs no special handling by callers.
pub fn resolve_pagination<T: Clone>(input: PaginationInput<'_, T>) -> ConnectionPayload<T> {
    let PaginationInput {
        args,
        body,
        total_count,
        window,
    } = input;

    let body = &body[..body.len().min(window.size)];
    let connection = connection_from_slice(body, window.offset, total_count, args);

    ConnectionPayload {
        total_count,
        page_cursors: create_page_cursors(window.page, window.size, total_count),
        edges: connection.edges,
        page_info: connection.page_info,
    }
}
