//! Per-node Relay connection types.

/// Define the GraphQL connection and edge types for one node type.
///
/// The connection is built from a [`ConnectionPayload`] whose nodes convert
/// into the GraphQL node type.
///
/// ```ignore
/// define_connection!(ArtworkConnection, ArtworkEdge, ArtworkData);
///
/// let connection = ArtworkConnection::from(payload);
/// ```
///
/// [`ConnectionPayload`]: crate::common::pagination::ConnectionPayload
#[macro_export]
macro_rules! define_connection {
    ($conn:ident, $edge:ident, $node:ident) => {
        /// Edge containing a node and its cursor (Relay spec)
        #[derive(Debug, Clone)]
        pub struct $edge {
            pub cursor: String,
            pub node: $node,
        }

        #[juniper::graphql_object(context = crate::server::graphql::GraphQLContext)]
        impl $edge {
            /// A cursor for use in pagination
            fn cursor(&self) -> &str {
                &self.cursor
            }

            /// The item at the end of the edge
            fn node(&self) -> &$node {
                &self.node
            }
        }

        /// Connection type for paginated lists (Relay spec)
        #[derive(Debug, Clone)]
        pub struct $conn {
            pub total_count: i32,
            pub page_cursors: crate::common::pagination::PageCursors,
            pub edges: Vec<$edge>,
            pub page_info: crate::common::pagination::PageInfo,
        }

        #[juniper::graphql_object(context = crate::server::graphql::GraphQLContext)]
        impl $conn {
            /// Total number of items in the full result set
            fn total_count(&self) -> i32 {
                self.total_count
            }

            /// Cursors for rendering a numbered pager
            fn page_cursors(&self) -> &crate::common::pagination::PageCursors {
                &self.page_cursors
            }

            /// A list of edges (node + cursor pairs)
            fn edges(&self) -> &[$edge] {
                &self.edges
            }

            /// Information about pagination
            fn page_info(&self) -> &crate::common::pagination::PageInfo {
                &self.page_info
            }

            /// Convenience: direct access to nodes (for simpler queries)
            fn nodes(&self) -> Vec<&$node> {
                self.edges.iter().map(|e| &e.node).collect()
            }
        }

        impl<T> From<crate::common::pagination::ConnectionPayload<T>> for $conn
        where
            $node: From<T>,
        {
            fn from(payload: crate::common::pagination::ConnectionPayload<T>) -> Self {
                Self {
                    total_count: i32::try_from(payload.total_count).unwrap_or(i32::MAX),
                    page_cursors: payload.page_cursors,
                    edges: payload
                        .edges
                        .into_iter()
                        .map(|e| $edge {
                            cursor: e.cursor,
                            node: $node::from(e.node),
                        })
                        .collect(),
                    page_info: payload.page_info,
                }
            }
        }
    };
}
