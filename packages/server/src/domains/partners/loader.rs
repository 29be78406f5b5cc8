use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use gravity_client::Partner;

use crate::common::pagination::PageWindow;
use crate::kernel::{BaseGravity, LoadedPage, PageLoader};

/// All active partners, in `sort` order
pub struct PartnersLoader {
    gravity: Arc<dyn BaseGravity>,
    sort: Option<&'static str>,
}

impl PartnersLoader {
    pub fn new(gravity: Arc<dyn BaseGravity>, sort: Option<&'static str>) -> Self {
        Self { gravity, sort }
    }
}

#[async_trait]
impl PageLoader<Partner> for PartnersLoader {
    async fn load_page(&self, window: PageWindow) -> Result<LoadedPage<Partner>> {
        self.gravity.partners(window, self.sort).await
    }
}
