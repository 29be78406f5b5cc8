//! Relay connections built from an upstream slice.
//!
//! Implements the GraphQL Cursor Connections Specification:
//! https://relay.dev/graphql/connections.htm

use juniper::GraphQLObject;
use serde::Serialize;

use super::args::ConnectionArgs;
use super::cursor::Cursor;

/// Page information for cursor-based pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "Information about pagination in a connection")]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// Cursor of the first edge in the page.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge in the page.
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Page info for a connection with no edges.
    pub fn empty() -> Self {
        PageInfo {
            has_next_page: false,
            has_previous_page: false,
            start_cursor: None,
            end_cursor: None,
        }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::empty()
    }
}

/// A node and the cursor of its absolute position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

/// Build a connection from one upstream slice.
///
/// `offset` is the absolute position of `slice[0]` and `total_count` the
/// size of the whole result set. Items past `total_count` or beyond the
/// requested count (`first`, `last` or `size`) are left out; `last` keeps the
/// tail of the slice. The slice itself is only read.
pub fn connection_from_slice<T: Clone>(
    slice: &[T],
    offset: usize,
    total_count: usize,
    args: &ConnectionArgs,
) -> Connection<T> {
    let mut start = offset.min(total_count);
    let mut end = offset.saturating_add(slice.len()).min(total_count);

    if let Some(count) = args.requested_count() {
        if args.last.is_some() && args.first.is_none() {
            start = start.max(end.saturating_sub(count));
        } else {
            end = end.min(start.saturating_add(count));
        }
    }

    let local = if start < end {
        &slice[start - offset..end - offset]
    } else {
        &slice[..0]
    };

    let edges: Vec<Edge<T>> = local
        .iter()
        .enumerate()
        .map(|(i, node)| Edge {
            cursor: Cursor::encode_offset(start + i),
            node: node.clone(),
        })
        .collect();

    let page_info = PageInfo {
        has_next_page: end < total_count,
        has_previous_page: start > 0,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Connection { edges, page_info }
}
