//! Fetch-then-resolve glue between connection fields and page loaders.

use anyhow::Result;
use tracing::debug;

use crate::common::pagination::{
    resolve_pagination, ConnectionArgs, ConnectionPayload, PageWindow, PaginationInput,
    PagingLimits,
};
use crate::kernel::PageLoader;

/// Translate `args`, load the addressed page and build the connection.
///
/// `last` without `before` counts from the end of the list, so the total is
/// read first with a zero-sized request.
pub async fn fetch_connection<T, L>(
    loader: &L,
    args: &ConnectionArgs,
    limits: &PagingLimits,
) -> Result<ConnectionPayload<T>>
where
    T: Clone + Send,
    L: PageLoader<T> + ?Sized,
{
    let window = if args.needs_total_count() {
        let probe = loader.load_page(PageWindow::count_only()).await?;
        debug!(
            total_count = probe.total_count,
            "Resolved total count for backward pagination"
        );
        args.translate_with_total(limits, probe.total_count)?
    } else {
        args.translate(limits)?
    };

    let page = loader.load_page(window).await?;
    debug!(
        page = window.page,
        size = window.size,
        offset = window.offset,
        returned = page.items.len(),
        total_count = page.total_count,
        "Loaded connection page"
    );

    Ok(resolve_pagination(PaginationInput {
        args,
        body: &page.items,
        total_count: page.total_count,
        window,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pagination::{Cursor, PaginationError};
    use crate::kernel::test_dependencies::StaticPageLoader;

    fn loader(n: usize) -> StaticPageLoader<usize> {
        StaticPageLoader::new((0..n).collect())
    }

    #[tokio::test]
    async fn test_forward_page() {
        let loader = loader(95);
        let args = ConnectionArgs::forward(10, Some(Cursor::encode_offset(19)));

        let payload = fetch_connection(&loader, &args, &PagingLimits::default())
            .await
            .unwrap();

        let nodes: Vec<usize> = payload.edges.iter().map(|e| e.node).collect();
        assert_eq!(nodes, (20..30).collect::<Vec<_>>());
        assert_eq!(payload.total_count, 95);
        assert_eq!(loader.windows(), vec![PageWindow::from_page(3, 10)]);
    }

    #[tokio::test]
    async fn test_last_without_before_counts_first() {
        let loader = loader(42);
        let args = ConnectionArgs::backward(5, None);

        let payload = fetch_connection(&loader, &args, &PagingLimits::default())
            .await
            .unwrap();

        let nodes: Vec<usize> = payload.edges.iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec![37, 38, 39, 40, 41]);
        assert!(!payload.page_info.has_next_page);
        assert!(payload.page_info.has_previous_page);

        let windows = loader.windows();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0], PageWindow::count_only());
        assert_eq!(windows[1].offset, 37);
    }

    #[tokio::test]
    async fn test_invalid_cursor_skips_upstream() {
        let loader = loader(10);
        let args = ConnectionArgs::forward(10, Some("nope".to_string()));

        let err = fetch_connection(&loader, &args, &PagingLimits::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PaginationError>(),
            Some(PaginationError::InvalidCursor { .. })
        ));
        assert!(loader.windows().is_empty());
    }

    #[test]
    fn test_past_the_end_is_empty() {
        let loader = loader(25);
        let args = ConnectionArgs::forward(10, Some(Cursor::encode_offset(59)));

        let payload = tokio_test::block_on(fetch_connection(
            &loader,
            &args,
            &PagingLimits::default(),
        ))
        .unwrap();

        assert!(payload.edges.is_empty());
        assert!(!payload.page_info.has_next_page);
        assert_eq!(payload.total_count, 25);
    }
}
