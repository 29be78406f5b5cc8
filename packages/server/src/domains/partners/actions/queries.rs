//! Partner query actions

use anyhow::Result;
use gravity_client::Partner;
use tracing::info;

use crate::common::pagination::{ConnectionArgs, ConnectionPayload};
use crate::domains::partners::data::PartnersSortType;
use crate::domains::partners::loader::PartnersLoader;
use crate::kernel::{fetch_connection, ServerDeps};

/// Get a page of partners (Relay connection)
pub async fn get_partners(
    args: &ConnectionArgs,
    sort: Option<PartnersSortType>,
    deps: &ServerDeps,
) -> Result<ConnectionPayload<Partner>> {
    info!(sort = ?sort, "Getting partners connection");

    let loader = PartnersLoader::new(deps.gravity.clone(), sort.map(PartnersSortType::as_gravity));
    fetch_connection(&loader, args, &deps.paging).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pagination::{PageWindow, PagingLimits};
    use crate::kernel::test_dependencies::partner_fixture;
    use crate::kernel::MockGravity;
    use std::sync::Arc;

    fn partners(n: usize) -> Vec<Partner> {
        (0..n)
            .map(|i| partner_fixture(&format!("gallery-{}", i), &format!("Gallery {}", i)))
            .collect()
    }

    #[tokio::test]
    async fn test_page_and_size_addressing() {
        let gravity = Arc::new(MockGravity::new().with_partners(partners(23)));
        let deps = ServerDeps::new(gravity.clone(), PagingLimits::default());
        let args = ConnectionArgs::paged(3, 10);

        let payload = get_partners(&args, None, &deps).await.unwrap();

        assert_eq!(payload.edges.len(), 3);
        assert_eq!(payload.edges[0].node.id, "gallery-20");
        assert!(payload.page_info.has_previous_page);
        assert!(!payload.page_info.has_next_page);
        assert_eq!(gravity.page_calls()[0].window, PageWindow::from_page(3, 10));
        assert!(gravity.page_calls()[0].sort.is_none());
    }

    #[tokio::test]
    async fn test_size_is_clamped_to_limits() {
        let gravity = Arc::new(MockGravity::new().with_partners(partners(30)));
        let deps = ServerDeps::new(gravity.clone(), PagingLimits::new(5, 10));
        let args = ConnectionArgs::forward(50, None);

        let payload = get_partners(&args, Some(PartnersSortType::CreatedAtDesc), &deps)
            .await
            .unwrap();

        assert_eq!(payload.edges.len(), 10);
        assert_eq!(gravity.page_calls()[0].window.size, 10);
        assert_eq!(gravity.page_calls()[0].sort.as_deref(), Some("-created_at"));
    }
}
