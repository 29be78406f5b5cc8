//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod paging;
pub mod test_dependencies;
pub mod traits;

pub use deps::{GravityAdapter, ServerDeps};
pub use paging::fetch_connection;
pub use test_dependencies::MockGravity;
pub use traits::*;
